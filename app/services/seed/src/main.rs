use app_config::AppConfig;
use app_log::init_tracing;
use app_store::Store;
use churn_seed::{parse_count, seed_store};
use dotenv::dotenv;
use std::env;

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    // Usage: churn_seed [COUNT]
    let count = parse_count(env::args().nth(1))?;
    let config = AppConfig::load()?;
    init_tracing(config.log_level);
    let store = Store::connect(&config.database_url, config.db_connection).await?;
    store.migrate().await?;
    let report = seed_store(&store, count).await?;
    store.close().await;
    eprintln!(
        "Inserted {} customers, skipped {} existing",
        report.inserted, report.skipped
    );
    println!("{}", serde_json::to_string_pretty(&report.metrics)?);
    Ok(())
}
