use serde::{Deserialize, Serialize};

/// Upstream resolver configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Hostname or literal IP of the upstream DNS server. Queries always
    /// go to port 53.
    #[serde(default)]
    pub server: String,

    /// Receive deadline per resolved candidate address, in seconds.
    /// The total forward bound is `timeout_secs * candidates`.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            server: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    5
}
