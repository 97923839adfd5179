use bakery_api::{Config, start};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match Config::from_env() {
        Ok(config) => start(config).await,
        Err(err) => Err(err.into()),
    };

    if let Err(err) = result {
        tracing::error!("{err:#}");
        std::process::exit(1);
    }
}
