use chrono::{DateTime, Utc};

/// Login identity. Never serialized: the hash must not leave the service.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    #[inline]
    pub fn select_query() -> &'static str {
        include_str!("../../../../SQL/auth/users/select_base.sql")
    }

    #[inline]
    pub fn insert_query() -> &'static str {
        include_str!("../../../../SQL/auth/users/insert.sql")
    }

    #[inline]
    pub fn create_table() -> &'static str {
        include_str!("../../../../SQL/init/users.sql")
    }
}
