/// Membership queries against the immutable pattern set loaded at startup.
///
/// Implementations are read-only after construction, so a single instance is
/// shared across all request tasks without locking.
pub trait FilterEnginePort: Send + Sync {
    /// True when `domain` matches any blocking pattern.
    fn is_blocked(&self, domain: &str) -> bool;

    /// Number of loaded patterns.
    fn pattern_count(&self) -> usize;
}
