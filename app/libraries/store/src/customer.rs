use crate::{CUSTOMER_CONFLICT_MESSAGE, Store};
use app_error::{AppError, is_unique_violation};
use app_schema::customer::Customer;
use tracing::*;

impl Store {
    /// Fails with a 400 when the id is already taken; rows are never updated.
    pub async fn insert_customer(&self, customer: &Customer) -> Result<(), AppError> {
        self.insert_customer_row(customer)
            .await
            .map_err(|e| AppError::from_sqlx_conflict(e, CUSTOMER_CONFLICT_MESSAGE))?;
        debug!("INSERT customer: {}", &customer.id);
        Ok(())
    }

    /// Like [`Store::insert_customer`], but a taken id yields `Ok(false)`.
    /// The unique key decides, so concurrent writers cannot both win.
    pub async fn insert_customer_if_absent(&self, customer: &Customer) -> Result<bool, AppError> {
        match self.insert_customer_row(customer).await {
            Ok(()) => {
                debug!("INSERT customer: {}", &customer.id);
                Ok(true)
            }
            Err(e) if is_unique_violation(&e) => {
                debug!("Customer {} already present", &customer.id);
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn insert_customer_row(&self, customer: &Customer) -> Result<(), sqlx::Error> {
        sqlx::query(Customer::insert_query())
            .bind(&customer.id)
            .bind(&customer.name)
            .bind(customer.age)
            .bind(customer.credit_score)
            .bind(customer.balance)
            .bind(customer.num_products)
            .bind(customer.has_insurance)
            .bind(customer.tenure)
            .bind(customer.is_active)
            .bind(customer.last_transaction)
            .bind(&customer.location)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn get_customer(&self, id: &str) -> Result<Option<Customer>, AppError> {
        let query = format!("{} WHERE id = ?", Customer::select_base());
        let res = sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(res)
    }

    pub async fn list_customers(&self) -> Result<Vec<Customer>, AppError> {
        let query = format!("{} ORDER BY id", Customer::select_base());
        let res = sqlx::query_as::<_, Customer>(&query)
            .fetch_all(&self.pool)
            .await?;
        debug!("SELECT customers: {} rows", res.len());
        Ok(res)
    }
}
