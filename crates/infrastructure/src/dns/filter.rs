//! Filter set loading and membership checks.
//!
//! Patterns are loaded once at startup and never mutated, so a single
//! `Arc<FilterSet>` is shared by every request task without locking.
//! Lookup is a linear scan in load order with first-match-wins semantics;
//! this is O(patterns) per query, which is the documented scaling limit at
//! the default 1024-entry capacity.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::info;
use vigil_dns_application::FilterEnginePort;
use vigil_dns_domain::{normalize_domain, FilterLoadError, FilterPattern};

/// The immutable set of blocking patterns.
pub struct FilterSet {
    patterns: Vec<FilterPattern>,
}

impl FilterSet {
    /// Load patterns from a newline-delimited file.
    ///
    /// Blank lines and `#` comments are skipped; retained entries are
    /// lower-cased. The load is rejected outright when more than
    /// `max_patterns` entries are retained; the cap is a hard capacity
    /// bound, never applied by silent truncation.
    pub fn load(path: impl AsRef<Path>, max_patterns: usize) -> Result<Self, FilterLoadError> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let file = File::open(path).map_err(|e| FilterLoadError::Io {
            path: path_str.clone(),
            reason: e.to_string(),
        })?;

        let mut patterns = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| FilterLoadError::Io {
                path: path_str.clone(),
                reason: e.to_string(),
            })?;

            if let Some(pattern) = FilterPattern::parse(&line) {
                if patterns.len() >= max_patterns {
                    return Err(FilterLoadError::CapacityExceeded {
                        path: path_str,
                        limit: max_patterns,
                    });
                }
                patterns.push(pattern);
            }
        }

        info!(path = %path_str, patterns = patterns.len(), "filter file loaded");

        Ok(Self { patterns })
    }

    /// Build a set from already-parsed patterns. Used by tests.
    pub fn from_patterns(patterns: Vec<FilterPattern>) -> Self {
        Self { patterns }
    }
}

impl FilterEnginePort for FilterSet {
    fn is_blocked(&self, domain: &str) -> bool {
        let normalized = normalize_domain(domain);
        self.patterns.iter().any(|p| p.matches(&normalized))
    }

    fn pattern_count(&self) -> usize {
        self.patterns.len()
    }
}
