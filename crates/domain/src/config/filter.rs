use serde::{Deserialize, Serialize};

/// Blocklist configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FilterConfig {
    /// Path to the filter file (one pattern per line).
    #[serde(default)]
    pub path: String,

    /// Hard cap on retained patterns. Loading fails outright when the file
    /// holds more entries; the cap is never applied by silent truncation.
    #[serde(default = "default_max_patterns")]
    pub max_patterns: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            path: String::new(),
            max_patterns: default_max_patterns(),
        }
    }
}

fn default_max_patterns() -> usize {
    1024
}
