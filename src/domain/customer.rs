use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::listview::{ListViewConfig, PaginationMode};
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::search::SearchField;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Customer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    /// Ids of the invoices billed to this customer.
    pub invoices: Vec<i32>,
    /// Sum of this customer's invoice amounts.
    pub total_amount: f64,
}

impl Customer {
    pub fn has_invoices(&self) -> bool {
        !self.invoices.is_empty()
    }

    /// Fields the free-text search matches against, all substring.
    pub fn search_fields() -> Vec<SearchField<Customer>> {
        vec![
            SearchField::substring(|c: &Customer| c.first_name.clone()),
            SearchField::substring(|c: &Customer| c.last_name.clone()),
            SearchField::substring(|c: &Customer| c.email.clone()),
            SearchField::substring(|c: &Customer| c.company.clone()),
        ]
    }

    /// List-view wiring for the customer list. Customers with invoices
    /// cannot be deleted from the list.
    pub fn list_view_config(mode: PaginationMode) -> ListViewConfig<Customer> {
        ListViewConfig {
            per_page: DEFAULT_ITEMS_PER_PAGE,
            mode,
            search_fields: Self::search_fields(),
            entity_id: |c| c.id,
            can_delete: |c| !c.has_invoices(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
}

impl NewCustomer {
    #[must_use]
    pub fn new(first_name: String, last_name: String, email: String, company: String) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            email: email.to_lowercase().trim().to_string(),
            company: company.trim().to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateCustomer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
}

impl UpdateCustomer {
    #[must_use]
    pub fn new(first_name: String, last_name: String, email: String, company: String) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            email: email.to_lowercase().trim().to_string(),
            company: company.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::matches;

    fn customer(first: &str, last: &str, email: &str, company: &str) -> Customer {
        Customer {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            company: company.to_string(),
            ..Customer::default()
        }
    }

    #[test]
    fn search_covers_names_email_and_company() {
        let c = customer("Jean", "Dupont", "jean@acme.fr", "Acme");
        let fields = Customer::search_fields();
        assert!(matches(&c, "jean", &fields));
        assert!(matches(&c, "DUPONT", &fields));
        assert!(matches(&c, "acme.fr", &fields));
        assert!(matches(&c, "Acme", &fields));
        assert!(!matches(&c, "nothing", &fields));
    }

    #[test]
    fn new_customer_normalizes_email() {
        let new = NewCustomer::new(
            " Jean ".into(),
            "Dupont".into(),
            " Jean@Acme.FR ".into(),
            "Acme".into(),
        );
        assert_eq!(new.first_name, "Jean");
        assert_eq!(new.email, "jean@acme.fr");
    }

    #[test]
    fn delete_guard_follows_invoices() {
        let mut c = customer("a", "b", "c", "d");
        assert!((Customer::list_view_config(PaginationMode::ClientPaginated).can_delete)(&c));
        c.invoices = vec![1, 2];
        assert!(!(Customer::list_view_config(PaginationMode::ClientPaginated).can_delete)(&c));
    }
}
