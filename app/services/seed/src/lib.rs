pub mod sample;

use crate::sample::sample_customers;
use app_churn::{ChurnMetrics, calculate_metrics};
use app_dto::customer::ScoredCustomer;
use app_error::AppError;
use app_store::Store;
use chrono::Utc;
use tracing::*;

pub const DEFAULT_SAMPLE_SIZE: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedReport {
    pub inserted: usize,
    pub skipped: usize,
    pub metrics: ChurnMetrics,
}

/// Inserts `count` sample customers and reports metrics over the whole
/// table. Ids already present are skipped, so reseeding is harmless.
pub async fn seed_store(store: &Store, count: usize) -> Result<SeedReport, AppError> {
    let today = Utc::now().date_naive();
    let customers = sample_customers(&mut rand::thread_rng(), count, today);
    let mut inserted = 0;
    let mut skipped = 0;
    for customer in &customers {
        if store.insert_customer_if_absent(customer).await? {
            inserted += 1;
        } else {
            skipped += 1;
        }
    }
    let scored: Vec<ScoredCustomer> = store
        .list_customers()
        .await?
        .into_iter()
        .map(ScoredCustomer::from)
        .collect();
    info!("Seeded {} customers ({} skipped)", inserted, skipped);
    Ok(SeedReport {
        inserted,
        skipped,
        metrics: calculate_metrics(&scored),
    })
}

/// Parses the optional sample size argument.
pub fn parse_count(arg: Option<String>) -> Result<usize, AppError> {
    match arg {
        None => Ok(DEFAULT_SAMPLE_SIZE),
        Some(raw) => raw
            .trim()
            .parse::<usize>()
            .map_err(|_| AppError::bad_request(format!("Invalid sample size: {raw}"))),
    }
}
