use std::sync::Arc;
use tracing::info;
use vigil_dns_application::FilterEnginePort;
use vigil_dns_domain::{Config, FilterLoadError};
use vigil_dns_infrastructure::dns::FilterSet;

pub fn load_filter(config: &Config) -> Result<Arc<FilterSet>, FilterLoadError> {
    let set = FilterSet::load(&config.filter.path, config.filter.max_patterns)?;

    info!(
        patterns = set.pattern_count(),
        capacity = config.filter.max_patterns,
        "Filter engine ready"
    );

    Ok(Arc::new(set))
}
