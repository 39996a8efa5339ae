use crate::{EMAIL_CONFLICT_MESSAGE, Store};
use app_error::AppError;
use app_schema::auth::users::User;
use chrono::Utc;
use tracing::*;
use uuid::Uuid;

impl Store {
    /// Stores an already-hashed password. A second registration with the
    /// same email fails with a 400.
    pub async fn insert_user(&self, email: &str, password_hash: &str) -> Result<User, AppError> {
        let user = User {
            id: Uuid::new_v4().to_string(),
            email: email.to_owned(),
            password_hash: password_hash.to_owned(),
            created_at: Utc::now(),
        };
        sqlx::query(User::insert_query())
            .bind(&user.id)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::from_sqlx_conflict(e, EMAIL_CONFLICT_MESSAGE))?;
        debug!("INSERT user: {}", &user.email);
        Ok(user)
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let query = format!("{} WHERE email = ?", User::select_query());
        let res = sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(res)
    }
}
