//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::domain::invoice::{Invoice, NewInvoice, UpdateInvoice};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    CustomerListQuery, CustomerReader, CustomerWriter, InvoiceListQuery, InvoiceReader,
    InvoiceWriter,
};

mock! {
    pub Repository {}

    impl CustomerReader for Repository {
        fn get_customer_by_id(&self, id: i32) -> RepositoryResult<Option<Customer>>;
        fn list_customers(
            &self,
            query: CustomerListQuery,
        ) -> RepositoryResult<(usize, Vec<Customer>)>;
    }

    impl CustomerWriter for Repository {
        fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
        fn update_customer(
            &self,
            customer_id: i32,
            updates: &UpdateCustomer,
        ) -> RepositoryResult<Customer>;
        fn delete_customer(&self, customer_id: i32) -> RepositoryResult<()>;
    }

    impl InvoiceReader for Repository {
        fn get_invoice_by_id(&self, id: i32) -> RepositoryResult<Option<Invoice>>;
        fn list_invoices(&self, query: InvoiceListQuery) -> RepositoryResult<(usize, Vec<Invoice>)>;
    }

    impl InvoiceWriter for Repository {
        fn create_invoice(&self, new_invoice: &NewInvoice) -> RepositoryResult<Invoice>;
        fn update_invoice(
            &self,
            invoice_id: i32,
            updates: &UpdateInvoice,
        ) -> RepositoryResult<Invoice>;
        fn delete_invoice(&self, invoice_id: i32) -> RepositoryResult<()>;
        fn increment_chrono(&self, invoice_id: i32) -> RepositoryResult<Invoice>;
    }
}
