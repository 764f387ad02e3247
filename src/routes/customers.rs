use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::api::CollectionQuery;
use crate::forms::customers::CustomerForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::customers as customer_service;

#[get("/customers")]
pub async fn list_customers(
    params: web::Query<CollectionQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match customer_service::list_customers(repo.get_ref(), params.into_inner()) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => error_response(err),
    }
}

#[get("/customers/{id}")]
pub async fn get_customer(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match customer_service::get_customer(repo.get_ref(), path.into_inner()) {
        Ok(customer) => HttpResponse::Ok().json(customer),
        Err(err) => error_response(err),
    }
}

#[post("/customers")]
pub async fn create_customer(
    web::Json(form): web::Json<CustomerForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match customer_service::create_customer(repo.get_ref(), form) {
        Ok(customer) => HttpResponse::Created().json(customer),
        Err(err) => error_response(err),
    }
}

#[put("/customers/{id}")]
pub async fn update_customer(
    path: web::Path<i32>,
    web::Json(form): web::Json<CustomerForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match customer_service::update_customer(repo.get_ref(), path.into_inner(), form) {
        Ok(customer) => HttpResponse::Ok().json(customer),
        Err(err) => error_response(err),
    }
}

#[delete("/customers/{id}")]
pub async fn delete_customer(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match customer_service::delete_customer(repo.get_ref(), path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}
