use async_trait::async_trait;
use vigil_dns_domain::ForwardError;

/// Relays a raw query to the upstream resolver and returns the raw reply
/// with its transaction ID rewritten to match the query.
#[async_trait]
pub trait UpstreamForwarderPort: Send + Sync {
    async fn forward(&self, query: &[u8]) -> Result<Vec<u8>, ForwardError>;
}
