use crate::db::DbPool;
use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::domain::invoice::{Invoice, NewInvoice, UpdateInvoice};
use crate::repository::errors::RepositoryResult;

pub mod customer;
pub mod errors;
pub mod gateway;
pub mod invoice;
#[cfg(feature = "test-mocks")]
pub mod mock;

#[derive(Debug, Clone)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// Filters and pagination for the customer list.
#[derive(Debug, Clone, Default)]
pub struct CustomerListQuery {
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl CustomerListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Filters and pagination for the invoice list.
#[derive(Debug, Clone, Default)]
pub struct InvoiceListQuery {
    pub customer_id: Option<i32>,
    pub pagination: Option<Pagination>,
}

impl InvoiceListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn customer(mut self, customer_id: i32) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait CustomerReader {
    fn get_customer_by_id(&self, id: i32) -> RepositoryResult<Option<Customer>>;
    /// Returns the total count matching the filters plus the requested page.
    fn list_customers(&self, query: CustomerListQuery) -> RepositoryResult<(usize, Vec<Customer>)>;
}

pub trait CustomerWriter {
    fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
    fn update_customer(&self, customer_id: i32, updates: &UpdateCustomer)
    -> RepositoryResult<Customer>;
    fn delete_customer(&self, customer_id: i32) -> RepositoryResult<()>;
}

pub trait InvoiceReader {
    fn get_invoice_by_id(&self, id: i32) -> RepositoryResult<Option<Invoice>>;
    /// Returns the total count matching the filters plus the requested page.
    fn list_invoices(&self, query: InvoiceListQuery) -> RepositoryResult<(usize, Vec<Invoice>)>;
}

pub trait InvoiceWriter {
    fn create_invoice(&self, new_invoice: &NewInvoice) -> RepositoryResult<Invoice>;
    fn update_invoice(&self, invoice_id: i32, updates: &UpdateInvoice)
    -> RepositoryResult<Invoice>;
    fn delete_invoice(&self, invoice_id: i32) -> RepositoryResult<()>;
    /// Bumps the invoice's chrono by one and returns the updated invoice.
    fn increment_chrono(&self, invoice_id: i32) -> RepositoryResult<Invoice>;
}

/// Diesel-backed implementation of the repository traits.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn pool(&self) -> &DbPool {
        &self.pool
    }
}
