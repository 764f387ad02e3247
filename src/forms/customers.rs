use serde::Deserialize;
use validator::Validate;

use crate::domain::customer::{NewCustomer, UpdateCustomer};

/// Payload accepted when creating or updating a customer.
#[derive(Debug, Deserialize, Validate)]
pub struct CustomerForm {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    pub company: String,
}

impl CustomerForm {
    pub fn to_new_customer(self) -> NewCustomer {
        NewCustomer::new(self.first_name, self.last_name, self.email, self.company)
    }

    pub fn to_update_customer(self) -> UpdateCustomer {
        UpdateCustomer::new(self.first_name, self.last_name, self.email, self.company)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: &str) -> CustomerForm {
        CustomerForm {
            first_name: "Jean".into(),
            last_name: "Dupont".into(),
            email: email.into(),
            company: "Acme".into(),
        }
    }

    #[test]
    fn valid_form_passes() {
        assert!(form("jean@acme.fr").validate().is_ok());
    }

    #[test]
    fn invalid_email_is_rejected() {
        assert!(form("not-an-email").validate().is_err());
    }

    #[test]
    fn empty_first_name_is_rejected() {
        let mut f = form("jean@acme.fr");
        f.first_name = String::new();
        assert!(f.validate().is_err());
    }
}
