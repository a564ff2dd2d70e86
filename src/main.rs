use anyhow::Result;
use weather_service::{ServiceConfig, logging, web};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServiceConfig::default();
    config.validate()?;
    logging::init(&config.logging)?;

    web::run(config).await
}
