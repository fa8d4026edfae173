use std::time::Duration;

use tracing_subscriber::EnvFilter;

use uploadprobe::config::app_config::{build_client, load_config};
use uploadprobe::probe::ApiClient;
use uploadprobe::runner::Suite;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = load_config();
    tracing::info!(
        base_url = %config.suite.base_url,
        timeout_seconds = config.suite.timeout_seconds,
        "configuration loaded"
    );

    let client = build_client(Duration::from_secs(config.suite.timeout_seconds))
        .expect("Failed to create HTTP client");

    let api = ApiClient::new(client, &config.suite.base_url);
    let mut suite = Suite::new(api);

    // The exit code stays 0 either way; the printed summary is the verdict.
    if suite.run().await {
        println!("🎉 All probes passed!");
    } else {
        println!("⚠️  Some probes failed");
    }
}
