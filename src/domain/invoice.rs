use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::listview::{ListViewConfig, PaginationMode};
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::search::SearchField;

/// Billing state of an invoice. Serialized upper-case on the wire.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum InvoiceStatus {
    Paid,
    #[default]
    Sent,
    Cancelled,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown invoice status: {0}")]
pub struct ParseInvoiceStatusError(String);

impl InvoiceStatus {
    /// Human-readable label, also one of the searchable invoice fields.
    pub fn label(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Sent => "Sent",
            InvoiceStatus::Cancelled => "Cancelled",
        }
    }
}

impl Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvoiceStatus::Paid => write!(f, "PAID"),
            InvoiceStatus::Sent => write!(f, "SENT"),
            InvoiceStatus::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

impl FromStr for InvoiceStatus {
    type Err = ParseInvoiceStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PAID" => Ok(InvoiceStatus::Paid),
            "SENT" => Ok(InvoiceStatus::Sent),
            "CANCELLED" => Ok(InvoiceStatus::Cancelled),
            _ => Err(ParseInvoiceStatusError(s.to_string())),
        }
    }
}

/// The slice of customer data an invoice row displays and searches on.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct CustomerRef {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Invoice {
    pub id: i32,
    /// Sequence number, unique and increasing across invoices.
    pub chrono: i32,
    pub customer: CustomerRef,
    pub amount: f64,
    pub status: InvoiceStatus,
    pub sent_at: NaiveDateTime,
}

impl Invoice {
    /// Fields the free-text search matches against. The amount matches by
    /// prefix, not substring: "45" finds 4500 but not 1450.
    pub fn search_fields() -> Vec<SearchField<Invoice>> {
        vec![
            SearchField::substring(|i: &Invoice| i.customer.first_name.clone()),
            SearchField::substring(|i: &Invoice| i.customer.last_name.clone()),
            SearchField::prefix(|i: &Invoice| i.amount.to_string()),
            SearchField::substring(|i: &Invoice| i.status.label().to_string()),
        ]
    }

    /// List-view wiring for the invoice list. Invoices have no delete guard.
    pub fn list_view_config(mode: PaginationMode) -> ListViewConfig<Invoice> {
        ListViewConfig {
            per_page: DEFAULT_ITEMS_PER_PAGE,
            mode,
            search_fields: Self::search_fields(),
            entity_id: |i| i.id,
            can_delete: |_| true,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewInvoice {
    pub customer_id: i32,
    pub amount: f64,
    pub status: InvoiceStatus,
    pub sent_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateInvoice {
    pub amount: f64,
    pub status: InvoiceStatus,
    pub sent_at: NaiveDateTime,
}
