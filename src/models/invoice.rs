use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::invoice::{
    CustomerRef, Invoice as DomainInvoice, InvoiceStatus, NewInvoice as DomainNewInvoice,
    UpdateInvoice as DomainUpdateInvoice,
};
use crate::models::customer::Customer;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(belongs_to(Customer, foreign_key = customer_id))]
#[diesel(table_name = crate::schema::invoices)]
/// Diesel model for [`crate::domain::invoice::Invoice`].
pub struct Invoice {
    pub id: i32,
    pub customer_id: i32,
    pub amount: f64,
    pub status: String,
    pub sent_at: NaiveDateTime,
    pub chrono: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::invoices)]
/// Insertable form of [`Invoice`]. The chrono is assigned by the repository.
pub struct NewInvoice {
    pub customer_id: i32,
    pub amount: f64,
    pub status: String,
    pub sent_at: NaiveDateTime,
    pub chrono: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::invoices)]
/// Data used when updating an [`Invoice`] record.
pub struct UpdateInvoice {
    pub amount: f64,
    pub status: String,
    pub sent_at: NaiveDateTime,
}

impl Invoice {
    /// Joins the row with its customer into the domain entity. An unknown
    /// status string in the database falls back to the default rather than
    /// failing the whole list.
    pub fn into_domain(self, customer: &Customer) -> DomainInvoice {
        DomainInvoice {
            id: self.id,
            chrono: self.chrono,
            customer: CustomerRef {
                id: customer.id,
                first_name: customer.first_name.clone(),
                last_name: customer.last_name.clone(),
            },
            amount: self.amount,
            status: self.status.parse::<InvoiceStatus>().unwrap_or_default(),
            sent_at: self.sent_at,
        }
    }
}

impl NewInvoice {
    pub fn from_domain(invoice: &DomainNewInvoice, chrono: i32) -> Self {
        Self {
            customer_id: invoice.customer_id,
            amount: invoice.amount,
            status: invoice.status.to_string(),
            sent_at: invoice.sent_at,
            chrono,
        }
    }
}

impl From<&DomainUpdateInvoice> for UpdateInvoice {
    fn from(invoice: &DomainUpdateInvoice) -> Self {
        Self {
            amount: invoice.amount,
            status: invoice.status.to_string(),
            sent_at: invoice.sent_at,
        }
    }
}
