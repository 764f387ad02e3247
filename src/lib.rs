use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};

use crate::db::establish_connection_pool;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::customers::{
    create_customer, delete_customer, get_customer, list_customers, update_customer,
};
use crate::routes::invoices::{
    create_invoice, delete_invoice, get_invoice, increment_invoice, list_invoices, update_invoice,
};

pub mod db;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod listview;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod search;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let repo = DieselRepository::new(pool);

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(
                web::scope("/api/v1")
                    .service(list_customers)
                    .service(get_customer)
                    .service(create_customer)
                    .service(update_customer)
                    .service(delete_customer)
                    .service(list_invoices)
                    .service(get_invoice)
                    .service(create_invoice)
                    .service(update_invoice)
                    .service(delete_invoice)
                    .service(increment_invoice),
            )
            .app_data(web::Data::new(repo.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
