use std::env;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use super::model::SuiteConfig;

pub struct AppConfig {
    pub suite: SuiteConfig,
}

/// Load the suite configuration from an optional YAML file and environment
/// variables. The file named by `CONFIG_FILE` (default `config.yml`) is read
/// when present; `BASE_URL` and `PROBE_TIMEOUT_SECONDS` override its values.
/// A missing file is not an error, the built-in defaults apply.
pub fn load_config() -> AppConfig {
    let config_file_location =
        env::var("CONFIG_FILE").unwrap_or_else(|_| "config.yml".to_string());

    let mut suite = match std::fs::read_to_string(&config_file_location) {
        Ok(config_str) => serde_yaml::from_str(&config_str).expect("Invalid YAML"),
        Err(_) => {
            tracing::debug!(file = %config_file_location, "no config file, using defaults");
            SuiteConfig::default()
        }
    };

    if let Ok(base_url) = env::var("BASE_URL") {
        suite.base_url = base_url;
    }
    if let Ok(timeout) = env::var("PROBE_TIMEOUT_SECONDS") {
        suite.timeout_seconds = timeout
            .parse()
            .expect("PROBE_TIMEOUT_SECONDS must be an integer");
    }

    if let Err(err) = Url::parse(&suite.base_url) {
        // Not fatal here: reqwest reports the same problem per request and
        // each probe downgrades it to a failed result.
        tracing::warn!(%err, base_url = %suite.base_url, "base URL does not parse");
    }

    AppConfig { suite }
}

/// Build the HTTP client shared by every probe: one fixed timeout, one user
/// agent, no retries.
pub fn build_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("uploadprobe/", env!("CARGO_PKG_VERSION")))
        .build()
}
