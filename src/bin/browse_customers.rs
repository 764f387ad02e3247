//! Interactive-style walkthrough of the customer list view against a live
//! database. Reads the search term and page number from the command line and
//! prints the resulting page the way the list screen would render it.

use std::env;

use config::Config;
use dotenvy::dotenv;

use invoice_admin::db::establish_connection_pool;
use invoice_admin::domain::customer::Customer;
use invoice_admin::listview::{ListView, PaginationMode, ViewState};
use invoice_admin::models::config::ServerConfig;
use invoice_admin::repository::DieselRepository;
use invoice_admin::repository::gateway::CustomerGateway;

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let settings = Config::builder()
        .add_source(config::File::with_name("config/default").required(false))
        .add_source(config::Environment::with_prefix("APP"))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {err}");
            std::process::exit(1);
        }
    };

    let server_config = match settings.try_deserialize::<ServerConfig>() {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(err) => {
            log::error!("Failed to establish database connection: {err}");
            std::process::exit(1);
        }
    };

    let repo = DieselRepository::new(pool);

    let mut args = env::args().skip(1);
    let search = args.next().unwrap_or_default();
    let page: usize = args.next().and_then(|p| p.parse().ok()).unwrap_or(1);

    let mut view = ListView::new(
        CustomerGateway::new(repo),
        Customer::list_view_config(PaginationMode::ClientPaginated),
    );
    view.mount();

    if view.state() == ViewState::Loading {
        log::error!("Customer list failed to load");
        std::process::exit(1);
    }

    // Search first: changing the term snaps the view back to page one, so
    // the requested page applies to the filtered collection.
    if !search.is_empty() {
        view.on_search_changed(search);
    }
    view.on_page_changed(page);

    let paginated = view.paginated();
    println!(
        "{} matching customer(s), page {}",
        view.filtered_len(),
        view.page()
    );
    for customer in &paginated.items {
        let deletable = if customer.has_invoices() { " " } else { "x" };
        println!(
            "[{deletable}] #{:<4} {} {} <{}> {} ({} invoice(s), {:.2} total)",
            customer.id,
            customer.first_name,
            customer.last_name,
            customer.email,
            customer.company,
            customer.invoices.len(),
            customer.total_amount,
        );
    }
    if !paginated.pages.is_empty() {
        let selector: Vec<String> = paginated
            .pages
            .iter()
            .map(|p| match p {
                Some(n) if *n == paginated.page => format!("[{n}]"),
                Some(n) => n.to_string(),
                None => "...".to_string(),
            })
            .collect();
        println!("pages: {}", selector.join(" "));
    }
}
