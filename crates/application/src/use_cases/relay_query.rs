use crate::ports::{FilterEnginePort, UpstreamForwarderPort};
use std::sync::Arc;
use tracing::{debug, info, warn};
use vigil_dns_domain::ForwardError;

/// Outcome of classifying and (possibly) forwarding one decoded query.
#[derive(Debug)]
pub enum RelayDecision {
    /// The domain matched a filter pattern; answer with NXDOMAIN.
    Blocked,
    /// The upstream answered; relay these bytes verbatim (TXID already
    /// rewritten by the forwarder).
    Forwarded(Vec<u8>),
    /// Every upstream candidate failed; answer with SERVFAIL.
    UpstreamFailed(ForwardError),
}

/// Decides what happens to a permitted-or-blocked query: filter check first,
/// then a single forward attempt (which internally retries across resolved
/// upstream addresses). No state is kept across calls.
pub struct RelayQueryUseCase {
    filter: Arc<dyn FilterEnginePort>,
    forwarder: Arc<dyn UpstreamForwarderPort>,
}

impl RelayQueryUseCase {
    pub fn new(filter: Arc<dyn FilterEnginePort>, forwarder: Arc<dyn UpstreamForwarderPort>) -> Self {
        Self { filter, forwarder }
    }

    /// `domain` is the decoded question name; `raw_query` is the original
    /// datagram, forwarded untouched so the upstream sees exactly what the
    /// client sent.
    pub async fn execute(&self, domain: &str, raw_query: &[u8]) -> RelayDecision {
        if self.filter.is_blocked(domain) {
            info!(domain = %domain, "domain blocked");
            return RelayDecision::Blocked;
        }

        match self.forwarder.forward(raw_query).await {
            Ok(reply) => {
                debug!(domain = %domain, bytes = reply.len(), "upstream reply relayed");
                RelayDecision::Forwarded(reply)
            }
            Err(e) => {
                warn!(domain = %domain, error = %e, "upstream forward failed");
                RelayDecision::UpstreamFailed(e)
            }
        }
    }
}
