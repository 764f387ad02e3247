use validator::Validate;

use crate::domain::customer::Customer;
use crate::dto::api::{CollectionQuery, CollectionResponse};
use crate::forms::customers::CustomerForm;
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::repository::{CustomerListQuery, CustomerReader, CustomerWriter};
use crate::services::{ServiceError, ServiceResult};

/// Lists customers, filtered and paginated by the repository. This is the
/// server-paginated variant: only the requested page leaves the database,
/// and the response carries the total count for the page selector.
pub fn list_customers<R>(
    repo: &R,
    params: CollectionQuery,
) -> ServiceResult<CollectionResponse<Customer>>
where
    R: CustomerReader + ?Sized,
{
    let mut query = CustomerListQuery::new();

    let search = params
        .search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    if let Some(term) = search {
        query = query.search(term);
    }

    if params.pagination.unwrap_or(false) {
        let page = params.page.unwrap_or(1);
        let per_page = params.count.unwrap_or(DEFAULT_ITEMS_PER_PAGE);
        query = query.paginate(page, per_page);
    }

    let (total, items) = repo.list_customers(query).map_err(|err| {
        log::error!("Failed to list customers: {err}");
        ServiceError::from(err)
    })?;

    Ok(CollectionResponse { total, items })
}

pub fn get_customer<R>(repo: &R, customer_id: i32) -> ServiceResult<Customer>
where
    R: CustomerReader + ?Sized,
{
    repo.get_customer_by_id(customer_id)?
        .ok_or(ServiceError::NotFound)
}

/// Validates the form and persists a new customer record.
pub fn create_customer<R>(repo: &R, form: CustomerForm) -> ServiceResult<Customer>
where
    R: CustomerWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate customer form: {err}");
        return Err(ServiceError::Form(err.to_string()));
    }

    repo.create_customer(&form.to_new_customer()).map_err(|err| {
        log::error!("Failed to create customer: {err}");
        ServiceError::from(err)
    })
}

pub fn update_customer<R>(repo: &R, customer_id: i32, form: CustomerForm) -> ServiceResult<Customer>
where
    R: CustomerWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate customer form: {err}");
        return Err(ServiceError::Form(err.to_string()));
    }

    repo.update_customer(customer_id, &form.to_update_customer())
        .map_err(|err| {
            log::error!("Failed to update customer {customer_id}: {err}");
            ServiceError::from(err)
        })
}

/// Deletes a customer. Customers that still have invoices are rejected,
/// mirroring the disabled delete action in the list view.
pub fn delete_customer<R>(repo: &R, customer_id: i32) -> ServiceResult<()>
where
    R: CustomerReader + CustomerWriter + ?Sized,
{
    let customer = repo
        .get_customer_by_id(customer_id)?
        .ok_or(ServiceError::NotFound)?;

    if customer.has_invoices() {
        return Err(ServiceError::Conflict(
            "customer still has invoices".to_string(),
        ));
    }

    repo.delete_customer(customer_id).map_err(|err| {
        log::error!("Failed to delete customer {customer_id}: {err}");
        ServiceError::from(err)
    })
}
