pub mod auth;
pub mod customer;
pub mod index;
pub mod metrics;
