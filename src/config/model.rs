use serde::Deserialize;

/// Base URL used when neither a config file nor a `BASE_URL` override is set.
pub const DEFAULT_BASE_URL: &str = "https://upload-master-1.preview.emergentagent.com";

/// Probe suite configuration.
/// Every field has a default, so the binary runs without any config file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    /// The root address of the remote service under test.
    /// Probes target `<base_url>/api`.
    pub base_url: String,

    /// Per-request timeout in seconds. One attempt per probe, no retries.
    pub timeout_seconds: u64,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: 30,
        }
    }
}
