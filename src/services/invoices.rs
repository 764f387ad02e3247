use validator::Validate;

use crate::domain::invoice::Invoice;
use crate::dto::api::{CollectionQuery, CollectionResponse};
use crate::forms::invoices::InvoiceForm;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, get_page};
use crate::repository::{InvoiceListQuery, InvoiceReader, InvoiceWriter};
use crate::search::matches;
use crate::services::{ServiceError, ServiceResult};

/// Lists invoices. This is the client-paginated variant of the list
/// machinery: the whole collection is loaded and then narrowed by the search
/// filter (which is where the amount prefix rule lives) and sliced by the
/// paginator. `total` counts the filtered collection, not the page.
pub fn list_invoices<R>(
    repo: &R,
    params: CollectionQuery,
) -> ServiceResult<CollectionResponse<Invoice>>
where
    R: InvoiceReader + ?Sized,
{
    let (_, invoices) = repo.list_invoices(InvoiceListQuery::new()).map_err(|err| {
        log::error!("Failed to list invoices: {err}");
        ServiceError::from(err)
    })?;

    let search = params
        .search
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    let fields = Invoice::search_fields();
    let filtered: Vec<Invoice> = invoices
        .into_iter()
        .filter(|invoice| matches(invoice, &search, &fields))
        .collect();
    let total = filtered.len();

    let items = if params.pagination.unwrap_or(false) {
        let page = params.page.unwrap_or(1);
        let per_page = params.count.unwrap_or(DEFAULT_ITEMS_PER_PAGE);
        get_page(&filtered, page, per_page).to_vec()
    } else {
        filtered
    };

    Ok(CollectionResponse { total, items })
}

pub fn get_invoice<R>(repo: &R, invoice_id: i32) -> ServiceResult<Invoice>
where
    R: InvoiceReader + ?Sized,
{
    repo.get_invoice_by_id(invoice_id)?
        .ok_or(ServiceError::NotFound)
}

/// Validates the form and persists a new invoice. The repository assigns
/// the next chrono; an unknown customer surfaces as a conflict through the
/// foreign key constraint.
pub fn create_invoice<R>(repo: &R, form: InvoiceForm) -> ServiceResult<Invoice>
where
    R: InvoiceWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate invoice form: {err}");
        return Err(ServiceError::Form(err.to_string()));
    }

    let new_invoice = form
        .to_new_invoice()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_invoice(&new_invoice).map_err(|err| {
        log::error!("Failed to create invoice: {err}");
        ServiceError::from(err)
    })
}

pub fn update_invoice<R>(repo: &R, invoice_id: i32, form: InvoiceForm) -> ServiceResult<Invoice>
where
    R: InvoiceWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate invoice form: {err}");
        return Err(ServiceError::Form(err.to_string()));
    }

    let updates = form
        .to_update_invoice()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_invoice(invoice_id, &updates).map_err(|err| {
        log::error!("Failed to update invoice {invoice_id}: {err}");
        ServiceError::from(err)
    })
}

pub fn delete_invoice<R>(repo: &R, invoice_id: i32) -> ServiceResult<()>
where
    R: InvoiceWriter + ?Sized,
{
    repo.delete_invoice(invoice_id).map_err(|err| {
        log::error!("Failed to delete invoice {invoice_id}: {err}");
        ServiceError::from(err)
    })
}

/// Bumps the invoice's sequence number and returns the updated invoice.
pub fn increment_chrono<R>(repo: &R, invoice_id: i32) -> ServiceResult<Invoice>
where
    R: InvoiceWriter + ?Sized,
{
    repo.increment_chrono(invoice_id).map_err(|err| {
        log::error!("Failed to increment chrono of invoice {invoice_id}: {err}");
        ServiceError::from(err)
    })
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;
    use crate::domain::invoice::{CustomerRef, InvoiceStatus};
    use crate::repository::mock::MockRepository;

    fn invoice(id: i32, last_name: &str, amount: f64) -> Invoice {
        Invoice {
            id,
            chrono: id,
            customer: CustomerRef {
                id: 1,
                first_name: "Jean".into(),
                last_name: last_name.into(),
            },
            amount,
            status: InvoiceStatus::Sent,
            sent_at: NaiveDateTime::default(),
        }
    }

    fn repo_with_invoices(invoices: Vec<Invoice>) -> MockRepository {
        let mut repo = MockRepository::new();
        repo.expect_list_invoices()
            .returning(move |_| Ok((invoices.len(), invoices.clone())));
        repo
    }

    #[test]
    fn list_filters_then_paginates() {
        let mut invoices: Vec<Invoice> = (1..=22).map(|i| invoice(i, "Dupont", 100.0)).collect();
        invoices.extend((23..=25).map(|i| invoice(i, "Martin", 100.0)));
        let repo = repo_with_invoices(invoices);

        let params = CollectionQuery {
            search: Some("dupont".into()),
            pagination: Some(true),
            count: Some(10),
            page: Some(3),
        };
        let response = list_invoices(&repo, params).unwrap();

        // 22 matches, third page of 10 holds the last 2.
        assert_eq!(response.total, 22);
        assert_eq!(response.items.len(), 2);
    }

    #[test]
    fn list_amount_search_uses_the_prefix_rule() {
        let repo = repo_with_invoices(vec![
            invoice(1, "Dupont", 4500.0),
            invoice(2, "Martin", 1450.0),
        ]);

        let params = CollectionQuery {
            search: Some("45".into()),
            ..CollectionQuery::default()
        };
        let response = list_invoices(&repo, params).unwrap();

        // 4500 starts with "45"; 1450 merely contains it.
        assert_eq!(response.total, 1);
        assert_eq!(response.items[0].id, 1);
    }

    #[test]
    fn list_without_pagination_returns_everything() {
        let repo = repo_with_invoices((1..=25).map(|i| invoice(i, "Dupont", 100.0)).collect());
        let response = list_invoices(&repo, CollectionQuery::default()).unwrap();
        assert_eq!(response.total, 25);
        assert_eq!(response.items.len(), 25);
    }

    #[test]
    fn create_with_unknown_status_is_a_form_error() {
        let repo = MockRepository::new();
        let form = InvoiceForm {
            customer_id: 1,
            amount: 100.0,
            status: "DRAFT".into(),
            sent_at: NaiveDateTime::default(),
        };
        assert!(matches!(
            create_invoice(&repo, form),
            Err(ServiceError::Form(_))
        ));
    }

    #[test]
    fn increment_propagates_the_updated_invoice() {
        let mut repo = MockRepository::new();
        repo.expect_increment_chrono().returning(|id| {
            let mut updated = invoice(id, "Dupont", 100.0);
            updated.chrono = 8;
            Ok(updated)
        });

        let updated = increment_chrono(&repo, 3).unwrap();
        assert_eq!(updated.chrono, 8);
    }
}
