use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::api::CollectionQuery;
use crate::forms::invoices::InvoiceForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::invoices as invoice_service;

#[get("/invoices")]
pub async fn list_invoices(
    params: web::Query<CollectionQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match invoice_service::list_invoices(repo.get_ref(), params.into_inner()) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => error_response(err),
    }
}

#[get("/invoices/{id}")]
pub async fn get_invoice(path: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    match invoice_service::get_invoice(repo.get_ref(), path.into_inner()) {
        Ok(invoice) => HttpResponse::Ok().json(invoice),
        Err(err) => error_response(err),
    }
}

#[post("/invoices")]
pub async fn create_invoice(
    web::Json(form): web::Json<InvoiceForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match invoice_service::create_invoice(repo.get_ref(), form) {
        Ok(invoice) => HttpResponse::Created().json(invoice),
        Err(err) => error_response(err),
    }
}

#[put("/invoices/{id}")]
pub async fn update_invoice(
    path: web::Path<i32>,
    web::Json(form): web::Json<InvoiceForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match invoice_service::update_invoice(repo.get_ref(), path.into_inner(), form) {
        Ok(invoice) => HttpResponse::Ok().json(invoice),
        Err(err) => error_response(err),
    }
}

#[delete("/invoices/{id}")]
pub async fn delete_invoice(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match invoice_service::delete_invoice(repo.get_ref(), path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}

#[post("/invoices/{id}/increment")]
pub async fn increment_invoice(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match invoice_service::increment_chrono(repo.get_ref(), path.into_inner()) {
        Ok(invoice) => HttpResponse::Ok().json(invoice),
        Err(err) => error_response(err),
    }
}
