//! Repository-backed gateways for the list-view controller.
//!
//! These adapt the Diesel repository to the [`EntityGateway`] seam so a
//! [`crate::listview::ListView`] can be driven in-process, the same shape a
//! remote HTTP gateway would have.

use crate::domain::customer::Customer;
use crate::domain::invoice::Invoice;
use crate::listview::{EntityGateway, GatewayError, GatewayResult};
use crate::repository::errors::RepositoryError;
use crate::repository::{
    CustomerListQuery, CustomerReader, CustomerWriter, DieselRepository, InvoiceListQuery,
    InvoiceReader, InvoiceWriter,
};

fn to_gateway_error(err: RepositoryError) -> GatewayError {
    match err {
        RepositoryError::ValidationError(msg) => GatewayError::Validation(msg),
        other => GatewayError::Network(other.to_string()),
    }
}

pub struct CustomerGateway {
    repo: DieselRepository,
}

impl CustomerGateway {
    pub fn new(repo: DieselRepository) -> Self {
        Self { repo }
    }
}

impl EntityGateway<Customer> for CustomerGateway {
    fn find_all(&self) -> GatewayResult<Vec<Customer>> {
        self.repo
            .list_customers(CustomerListQuery::new())
            .map(|(_, items)| items)
            .map_err(to_gateway_error)
    }

    fn find_page(&self, page: usize, per_page: usize) -> GatewayResult<(usize, Vec<Customer>)> {
        self.repo
            .list_customers(CustomerListQuery::new().paginate(page, per_page))
            .map_err(to_gateway_error)
    }

    fn delete(&self, id: i32) -> GatewayResult<()> {
        self.repo.delete_customer(id).map_err(to_gateway_error)
    }
}

pub struct InvoiceGateway {
    repo: DieselRepository,
}

impl InvoiceGateway {
    pub fn new(repo: DieselRepository) -> Self {
        Self { repo }
    }
}

impl EntityGateway<Invoice> for InvoiceGateway {
    fn find_all(&self) -> GatewayResult<Vec<Invoice>> {
        self.repo
            .list_invoices(InvoiceListQuery::new())
            .map(|(_, items)| items)
            .map_err(to_gateway_error)
    }

    fn find_page(&self, page: usize, per_page: usize) -> GatewayResult<(usize, Vec<Invoice>)> {
        self.repo
            .list_invoices(InvoiceListQuery::new().paginate(page, per_page))
            .map_err(to_gateway_error)
    }

    fn delete(&self, id: i32) -> GatewayResult<()> {
        self.repo.delete_invoice(id).map_err(to_gateway_error)
    }
}
