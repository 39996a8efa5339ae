use churn_api::api_service;

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    api_service().await?;
    Ok(())
}
