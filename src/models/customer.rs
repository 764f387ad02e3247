use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::customer::{
    Customer as DomainCustomer, NewCustomer as DomainNewCustomer,
    UpdateCustomer as DomainUpdateCustomer,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::customers)]
/// Diesel model for [`crate::domain::customer::Customer`].
pub struct Customer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::customers)]
/// Insertable form of [`Customer`].
pub struct NewCustomer<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub company: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::customers)]
/// Data used when updating a [`Customer`] record.
pub struct UpdateCustomer<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub company: &'a str,
}

impl Customer {
    /// Combines the row with its invoice aggregates into the domain entity.
    pub fn into_domain(self, invoices: Vec<i32>, total_amount: f64) -> DomainCustomer {
        DomainCustomer {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            company: self.company,
            created_at: self.created_at,
            updated_at: self.updated_at,
            invoices,
            total_amount,
        }
    }
}

impl<'a> From<&'a DomainNewCustomer> for NewCustomer<'a> {
    fn from(customer: &'a DomainNewCustomer) -> Self {
        Self {
            first_name: &customer.first_name,
            last_name: &customer.last_name,
            email: &customer.email,
            company: &customer.company,
        }
    }
}

impl<'a> From<&'a DomainUpdateCustomer> for UpdateCustomer<'a> {
    fn from(customer: &'a DomainUpdateCustomer) -> Self {
        Self {
            first_name: &customer.first_name,
            last_name: &customer.last_name,
            email: &customer.email,
            company: &customer.company,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn from_domain_new_borrows_fields() {
        let domain = DomainNewCustomer::new(
            "Jean".into(),
            "Dupont".into(),
            "jean@acme.fr".into(),
            "Acme".into(),
        );
        let new: NewCustomer = (&domain).into();
        assert_eq!(new.first_name, domain.first_name);
        assert_eq!(new.email, domain.email);
    }

    #[test]
    fn into_domain_attaches_aggregates() {
        let now: NaiveDateTime = Utc::now().naive_utc();
        let row = Customer {
            id: 7,
            first_name: "Jean".into(),
            last_name: "Dupont".into(),
            email: "jean@acme.fr".into(),
            company: "Acme".into(),
            created_at: now,
            updated_at: now,
        };
        let domain = row.into_domain(vec![1, 2], 900.0);
        assert_eq!(domain.id, 7);
        assert_eq!(domain.invoices, vec![1, 2]);
        assert_eq!(domain.total_amount, 900.0);
        assert!(domain.has_invoices());
    }
}
