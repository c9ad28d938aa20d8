/// One blocking rule from the filter file.
///
/// Patterns are stored lower-cased; `is_blocked` hands them an
/// already-normalized domain, so matching here is a plain byte comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterPattern {
    /// Matches the domain itself and any subdomain on a label boundary.
    Exact(String),
    /// `*`-prefixed rule. The stored string is everything after the `*`
    /// (for `*.example.com` that is `.example.com`) and matches as a raw
    /// byte suffix. This is NOT label-aware: `*.example.com` fails to match
    /// bare `example.com` only because the suffix carries the leading dot.
    WildcardSuffix(String),
}

impl FilterPattern {
    /// Parse one filter-file line. Returns `None` for blank lines and
    /// `#` comments; everything else is retained verbatim, lower-cased.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let lowered = line.to_ascii_lowercase();
        match lowered.strip_prefix('*') {
            Some(suffix) => Some(Self::WildcardSuffix(suffix.to_string())),
            None => Some(Self::Exact(lowered)),
        }
    }

    /// Check a normalized (lower-cased, no trailing dot) domain against
    /// this pattern.
    pub fn matches(&self, domain: &str) -> bool {
        match self {
            Self::WildcardSuffix(suffix) => domain.ends_with(suffix.as_str()),
            Self::Exact(pattern) => {
                if domain == pattern {
                    return true;
                }
                // Subdomain match: domain ends with ".pattern".
                domain.len() > pattern.len() + 1
                    && domain.ends_with(pattern.as_str())
                    && domain.as_bytes()[domain.len() - pattern.len() - 1] == b'.'
            }
        }
    }
}

/// Normalize a query domain for matching: strip one trailing dot, lower-case.
pub fn normalize_domain(domain: &str) -> String {
    let stripped = domain.strip_suffix('.').unwrap_or(domain);
    stripped.to_ascii_lowercase()
}
