use chrono::NaiveDateTime;
use serde::Deserialize;
use validator::Validate;

use crate::domain::invoice::{NewInvoice, ParseInvoiceStatusError, UpdateInvoice};

/// Payload accepted when creating or updating an invoice. The status comes
/// in as a string and is parsed into the enum when converting to the domain.
#[derive(Debug, Deserialize, Validate)]
pub struct InvoiceForm {
    pub customer_id: i32,
    #[validate(range(min = 0.01))]
    pub amount: f64,
    pub status: String,
    pub sent_at: NaiveDateTime,
}

impl InvoiceForm {
    pub fn to_new_invoice(self) -> Result<NewInvoice, ParseInvoiceStatusError> {
        Ok(NewInvoice {
            customer_id: self.customer_id,
            amount: self.amount,
            status: self.status.parse()?,
            sent_at: self.sent_at,
        })
    }

    pub fn to_update_invoice(self) -> Result<UpdateInvoice, ParseInvoiceStatusError> {
        Ok(UpdateInvoice {
            amount: self.amount,
            status: self.status.parse()?,
            sent_at: self.sent_at,
        })
    }
}
