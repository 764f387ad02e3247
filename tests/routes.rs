use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde::Deserialize;
use serde_json::json;

use invoice_admin::domain::customer::Customer;
use invoice_admin::domain::invoice::Invoice;
use invoice_admin::repository::DieselRepository;
use invoice_admin::routes::customers::{
    create_customer, delete_customer, get_customer, list_customers, update_customer,
};
use invoice_admin::routes::invoices::{
    create_invoice, delete_invoice, get_invoice, increment_invoice, list_invoices, update_invoice,
};

mod common;

#[derive(Debug, Deserialize)]
struct Collection<T> {
    total: usize,
    items: Vec<T>,
}

macro_rules! test_app {
    ($repo:expr) => {
        test::init_service(
            App::new()
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
                .app_data(web::Data::new($repo)),
        )
        .await
    };
}

fn customer_payload(first: &str, last: &str, email: &str) -> serde_json::Value {
    json!({
        "first_name": first,
        "last_name": last,
        "email": email,
        "company": "Acme",
    })
}

fn invoice_payload(customer_id: i32, amount: f64, status: &str) -> serde_json::Value {
    json!({
        "customer_id": customer_id,
        "amount": amount,
        "status": status,
        "sent_at": "2026-01-15T10:00:00",
    })
}

#[actix_web::test]
async fn test_customer_crud_over_http() {
    let test_db = common::TestDb::new("test_routes_customer_crud.db");
    let app = test_app!(DieselRepository::new(test_db.pool()));

    // Create.
    let req = test::TestRequest::post()
        .uri("/api/v1/customers")
        .set_json(customer_payload("Jean", "Dupont", "jean@acme.fr"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Customer = test::read_body_json(resp).await;
    assert_eq!(created.first_name, "Jean");

    // Read back.
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/customers/{}", created.id))
        .to_request();
    let fetched: Customer = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched.email, "jean@acme.fr");

    // Update.
    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/customers/{}", created.id))
        .set_json(customer_payload("Jeanne", "Dupont", "jeanne@acme.fr"))
        .to_request();
    let updated: Customer = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated.first_name, "Jeanne");

    // Delete.
    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/customers/{}", created.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/customers/{}", created.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_customer_list_search_and_pagination() {
    let test_db = common::TestDb::new("test_routes_customer_list.db");
    let app = test_app!(DieselRepository::new(test_db.pool()));

    for i in 1..=12 {
        let last = if i <= 9 { "Dupont" } else { "Martin" };
        let req = test::TestRequest::post()
            .uri("/api/v1/customers")
            .set_json(customer_payload(
                &format!("First{i}"),
                last,
                &format!("c{i}@acme.fr"),
            ))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    // Without pagination the whole collection comes back.
    let req = test::TestRequest::get().uri("/api/v1/customers").to_request();
    let all: Collection<Customer> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(all.total, 12);
    assert_eq!(all.items.len(), 12);

    // Paginated: total still reports the full collection.
    let req = test::TestRequest::get()
        .uri("/api/v1/customers?pagination=true&count=10&page=2")
        .to_request();
    let page2: Collection<Customer> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(page2.total, 12);
    assert_eq!(page2.items.len(), 2);

    // Search narrows the total.
    let req = test::TestRequest::get()
        .uri("/api/v1/customers?search=martin")
        .to_request();
    let found: Collection<Customer> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(found.total, 3);
}

#[actix_web::test]
async fn test_invalid_customer_form_is_a_bad_request() {
    let test_db = common::TestDb::new("test_routes_customer_invalid.db");
    let app = test_app!(DieselRepository::new(test_db.pool()));

    let req = test::TestRequest::post()
        .uri("/api/v1/customers")
        .set_json(customer_payload("Jean", "Dupont", "not-an-email"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_deleting_customer_with_invoices_conflicts() {
    let test_db = common::TestDb::new("test_routes_customer_conflict.db");
    let app = test_app!(DieselRepository::new(test_db.pool()));

    let req = test::TestRequest::post()
        .uri("/api/v1/customers")
        .set_json(customer_payload("Jean", "Dupont", "jean@acme.fr"))
        .to_request();
    let customer: Customer = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/invoices")
        .set_json(invoice_payload(customer.id, 4500.0, "SENT"))
        .to_request();
    let invoice: Invoice = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/customers/{}", customer.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // Once the invoice is gone the customer can be deleted.
    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/invoices/{}", invoice.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/customers/{}", customer.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[actix_web::test]
async fn test_invoice_lifecycle_and_increment() {
    let test_db = common::TestDb::new("test_routes_invoice_lifecycle.db");
    let app = test_app!(DieselRepository::new(test_db.pool()));

    let req = test::TestRequest::post()
        .uri("/api/v1/customers")
        .set_json(customer_payload("Jean", "Dupont", "jean@acme.fr"))
        .to_request();
    let customer: Customer = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/invoices")
        .set_json(invoice_payload(customer.id, 4500.0, "SENT"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let invoice: Invoice = test::read_body_json(resp).await;
    assert_eq!(invoice.chrono, 1);
    assert_eq!(invoice.customer.id, customer.id);

    // Unknown status string is rejected before reaching the database.
    let req = test::TestRequest::post()
        .uri("/api/v1/invoices")
        .set_json(invoice_payload(customer.id, 100.0, "DRAFT"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Update flips the status.
    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/invoices/{}", invoice.id))
        .set_json(invoice_payload(customer.id, 4500.0, "PAID"))
        .to_request();
    let updated: Invoice = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated.status.to_string(), "PAID");

    // Increment bumps the sequence number.
    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/invoices/{}/increment", invoice.id))
        .to_request();
    let bumped: Invoice = test::call_and_read_body_json(&app, req).await;
    assert_eq!(bumped.chrono, 2);

    let req = test::TestRequest::post()
        .uri("/api/v1/invoices/99999/increment")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_invoice_list_filters_by_amount_prefix() {
    let test_db = common::TestDb::new("test_routes_invoice_search.db");
    let app = test_app!(DieselRepository::new(test_db.pool()));

    let req = test::TestRequest::post()
        .uri("/api/v1/customers")
        .set_json(customer_payload("Jean", "Dupont", "jean@acme.fr"))
        .to_request();
    let customer: Customer = test::call_and_read_body_json(&app, req).await;

    for amount in [4500.0, 1450.0, 45.0] {
        let req = test::TestRequest::post()
            .uri("/api/v1/invoices")
            .set_json(invoice_payload(customer.id, amount, "SENT"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    // Amounts match by prefix: 4500 and 45 start with "45", 1450 does not.
    let req = test::TestRequest::get()
        .uri("/api/v1/invoices?search=45")
        .to_request();
    let found: Collection<Invoice> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(found.total, 2);

    // Customer names are searchable on invoices too.
    let req = test::TestRequest::get()
        .uri("/api/v1/invoices?search=dupont")
        .to_request();
    let found: Collection<Invoice> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(found.total, 3);
}
