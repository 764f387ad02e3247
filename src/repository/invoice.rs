use diesel::prelude::*;

use crate::db::get_connection;
use crate::domain::invoice::{Invoice, NewInvoice, UpdateInvoice};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, InvoiceListQuery, InvoiceReader, InvoiceWriter};

impl InvoiceReader for DieselRepository {
    fn get_invoice_by_id(&self, id: i32) -> RepositoryResult<Option<Invoice>> {
        use crate::models::customer::Customer as DbCustomer;
        use crate::models::invoice::Invoice as DbInvoice;
        use crate::schema::{customers, invoices};

        let mut conn = get_connection(self.pool())?;
        let row = invoices::table
            .inner_join(customers::table)
            .filter(invoices::id.eq(id))
            .first::<(DbInvoice, DbCustomer)>(&mut conn)
            .optional()?;

        Ok(row.map(|(invoice, customer)| invoice.into_domain(&customer)))
    }

    fn list_invoices(&self, query: InvoiceListQuery) -> RepositoryResult<(usize, Vec<Invoice>)> {
        use crate::models::customer::Customer as DbCustomer;
        use crate::models::invoice::Invoice as DbInvoice;
        use crate::schema::{customers, invoices};

        let mut conn = get_connection(self.pool())?;

        let total: i64 = match query.customer_id {
            Some(customer_id) => invoices::table
                .filter(invoices::customer_id.eq(customer_id))
                .count()
                .get_result(&mut conn)?,
            None => invoices::table.count().get_result(&mut conn)?,
        };

        let mut stmt = invoices::table
            .inner_join(customers::table)
            .order(invoices::chrono.asc())
            .into_boxed();
        if let Some(customer_id) = query.customer_id {
            stmt = stmt.filter(invoices::customer_id.eq(customer_id));
        }
        if let Some(pagination) = &query.pagination {
            let page = pagination.page.max(1) as i64;
            let per_page = pagination.per_page as i64;
            stmt = stmt.limit(per_page).offset((page - 1) * per_page);
        }
        let rows = stmt.load::<(DbInvoice, DbCustomer)>(&mut conn)?;

        let invoices = rows
            .into_iter()
            .map(|(invoice, customer)| invoice.into_domain(&customer))
            .collect();

        Ok((total as usize, invoices))
    }
}

impl InvoiceWriter for DieselRepository {
    fn create_invoice(&self, new_invoice: &NewInvoice) -> RepositoryResult<Invoice> {
        use crate::models::invoice::{Invoice as DbInvoice, NewInvoice as DbNewInvoice};
        use crate::schema::invoices;

        let mut conn = get_connection(self.pool())?;

        // The sequence number continues from the highest one issued so far.
        let last_chrono: Option<i32> = invoices::table
            .select(diesel::dsl::max(invoices::chrono))
            .first(&mut conn)?;
        let insertable = DbNewInvoice::from_domain(new_invoice, last_chrono.unwrap_or(0) + 1);

        let row = diesel::insert_into(invoices::table)
            .values(&insertable)
            .get_result::<DbInvoice>(&mut conn)?;

        drop(conn);
        self.get_invoice_by_id(row.id)?
            .ok_or(RepositoryError::NotFound)
    }

    fn update_invoice(
        &self,
        invoice_id: i32,
        updates: &UpdateInvoice,
    ) -> RepositoryResult<Invoice> {
        use crate::models::invoice::UpdateInvoice as DbUpdateInvoice;
        use crate::schema::invoices;

        let mut conn = get_connection(self.pool())?;
        let db_updates: DbUpdateInvoice = updates.into();

        let affected = diesel::update(invoices::table.find(invoice_id))
            .set(&db_updates)
            .execute(&mut conn)?;
        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }

        drop(conn);
        self.get_invoice_by_id(invoice_id)?
            .ok_or(RepositoryError::NotFound)
    }

    fn delete_invoice(&self, invoice_id: i32) -> RepositoryResult<()> {
        use crate::schema::invoices;

        let mut conn = get_connection(self.pool())?;
        let affected = diesel::delete(invoices::table.find(invoice_id)).execute(&mut conn)?;
        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    fn increment_chrono(&self, invoice_id: i32) -> RepositoryResult<Invoice> {
        use crate::schema::invoices;

        let mut conn = get_connection(self.pool())?;

        // Read then write, mirroring the increment endpoint's semantics. Two
        // concurrent increments can read the same value and lose one update.
        let current: i32 = invoices::table
            .find(invoice_id)
            .select(invoices::chrono)
            .first(&mut conn)?;

        diesel::update(invoices::table.find(invoice_id))
            .set(invoices::chrono.eq(current + 1))
            .execute(&mut conn)?;

        drop(conn);
        self.get_invoice_by_id(invoice_id)?
            .ok_or(RepositoryError::NotFound)
    }
}
