use std::collections::HashMap;

use diesel::prelude::*;

use crate::db::{DbConnection, get_connection};
use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CustomerListQuery, CustomerReader, CustomerWriter, DieselRepository};

/// Loads invoice ids and amounts for the given customers, keyed by customer
/// id, so domain customers can carry their invoice refs and total amount.
fn invoice_aggregates(
    conn: &mut DbConnection,
    customer_ids: &[i32],
) -> RepositoryResult<HashMap<i32, (Vec<i32>, f64)>> {
    use crate::schema::invoices;

    if customer_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = invoices::table
        .filter(invoices::customer_id.eq_any(customer_ids))
        .select((invoices::customer_id, invoices::id, invoices::amount))
        .load::<(i32, i32, f64)>(conn)?;

    let mut aggregates: HashMap<i32, (Vec<i32>, f64)> = HashMap::new();
    for (customer_id, invoice_id, amount) in rows {
        let entry = aggregates.entry(customer_id).or_default();
        entry.0.push(invoice_id);
        entry.1 += amount;
    }
    Ok(aggregates)
}

impl CustomerReader for DieselRepository {
    fn get_customer_by_id(&self, id: i32) -> RepositoryResult<Option<Customer>> {
        use crate::models::customer::Customer as DbCustomer;
        use crate::schema::customers;

        let mut conn = get_connection(self.pool())?;
        let row = customers::table
            .find(id)
            .first::<DbCustomer>(&mut conn)
            .optional()?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut aggregates = invoice_aggregates(&mut conn, &[row.id])?;
        let (invoices, total_amount) = aggregates.remove(&row.id).unwrap_or_default();
        Ok(Some(row.into_domain(invoices, total_amount)))
    }

    fn list_customers(&self, query: CustomerListQuery) -> RepositoryResult<(usize, Vec<Customer>)> {
        use crate::models::customer::Customer as DbCustomer;
        use crate::schema::customers;

        let mut conn = get_connection(self.pool())?;

        let total: i64 = match &query.search {
            Some(term) => {
                let pattern = format!("%{term}%");
                customers::table
                    .filter(
                        customers::first_name
                            .like(pattern.clone())
                            .or(customers::last_name.like(pattern.clone()))
                            .or(customers::email.like(pattern.clone()))
                            .or(customers::company.like(pattern)),
                    )
                    .count()
                    .get_result(&mut conn)?
            }
            None => customers::table.count().get_result(&mut conn)?,
        };

        let mut stmt = customers::table.order(customers::id.asc()).into_boxed();
        if let Some(term) = &query.search {
            let pattern = format!("%{term}%");
            stmt = stmt.filter(
                customers::first_name
                    .like(pattern.clone())
                    .or(customers::last_name.like(pattern.clone()))
                    .or(customers::email.like(pattern.clone()))
                    .or(customers::company.like(pattern)),
            );
        }
        if let Some(pagination) = &query.pagination {
            let page = pagination.page.max(1) as i64;
            let per_page = pagination.per_page as i64;
            stmt = stmt.limit(per_page).offset((page - 1) * per_page);
        }
        let rows = stmt.load::<DbCustomer>(&mut conn)?;

        let ids: Vec<i32> = rows.iter().map(|row| row.id).collect();
        let mut aggregates = invoice_aggregates(&mut conn, &ids)?;

        let customers = rows
            .into_iter()
            .map(|row| {
                let (invoices, total_amount) = aggregates.remove(&row.id).unwrap_or_default();
                row.into_domain(invoices, total_amount)
            })
            .collect();

        Ok((total as usize, customers))
    }
}

impl CustomerWriter for DieselRepository {
    fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer> {
        use crate::models::customer::{Customer as DbCustomer, NewCustomer as DbNewCustomer};
        use crate::schema::customers;

        let mut conn = get_connection(self.pool())?;
        let insertable: DbNewCustomer = new_customer.into();

        let row = diesel::insert_into(customers::table)
            .values(&insertable)
            .get_result::<DbCustomer>(&mut conn)?;

        Ok(row.into_domain(Vec::new(), 0.0))
    }

    fn update_customer(
        &self,
        customer_id: i32,
        updates: &UpdateCustomer,
    ) -> RepositoryResult<Customer> {
        use crate::models::customer::{Customer as DbCustomer, UpdateCustomer as DbUpdateCustomer};
        use crate::schema::customers;

        let mut conn = get_connection(self.pool())?;
        let db_updates: DbUpdateCustomer = updates.into();

        let row = diesel::update(customers::table.find(customer_id))
            .set(&db_updates)
            .get_result::<DbCustomer>(&mut conn)?;

        let mut aggregates = invoice_aggregates(&mut conn, &[row.id])?;
        let (invoices, total_amount) = aggregates.remove(&row.id).unwrap_or_default();
        Ok(row.into_domain(invoices, total_amount))
    }

    fn delete_customer(&self, customer_id: i32) -> RepositoryResult<()> {
        use crate::schema::customers;

        let mut conn = get_connection(self.pool())?;
        let affected = diesel::delete(customers::table.find(customer_id)).execute(&mut conn)?;
        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
