//! UDP forwarding to the configured upstream resolver.

use async_trait::async_trait;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{lookup_host, UdpSocket};
use tracing::{debug, warn};
use vigil_dns_application::UpstreamForwarderPort;
use vigil_dns_domain::ForwardError;

use super::codec::MAX_PACKET_SIZE;

const DNS_PORT: u16 = 53;

/// Forwards one raw query per call over a fresh UDP socket.
///
/// The upstream host is re-resolved on every forward; each resolved IPv4
/// candidate is tried in turn until one completes a send + receive within
/// the per-candidate timeout. The reply's transaction ID is overwritten with
/// the query's before it is returned; the reply is otherwise trusted to
/// correspond to the single query that was just sent.
pub struct UdpForwarder {
    upstream: String,
    port: u16,
    timeout: Duration,
}

impl UdpForwarder {
    pub fn new(upstream: impl Into<String>, timeout: Duration) -> Self {
        Self::with_port(upstream, DNS_PORT, timeout)
    }

    /// Target a non-standard upstream port.
    pub fn with_port(upstream: impl Into<String>, port: u16, timeout: Duration) -> Self {
        Self {
            upstream: upstream.into(),
            port,
            timeout,
        }
    }

    async fn attempt(&self, addr: SocketAddr, query: &[u8]) -> Result<Vec<u8>, ForwardError> {
        // Fresh socket per attempt, closed on every exit path by drop.
        let socket = UdpSocket::bind(("0.0.0.0", 0))
            .await
            .map_err(|e| ForwardError::SendFailed(addr, e.to_string()))?;

        let sent = socket
            .send_to(query, addr)
            .await
            .map_err(|e| ForwardError::SendFailed(addr, e.to_string()))?;
        if sent != query.len() {
            return Err(ForwardError::SendFailed(
                addr,
                format!("partial send: {sent} of {} bytes", query.len()),
            ));
        }

        let mut buf = vec![0u8; MAX_PACKET_SIZE];
        let (len, from_addr) = tokio::time::timeout(self.timeout, socket.recv_from(&mut buf))
            .await
            .map_err(|_| ForwardError::Timeout(addr))?
            .map_err(|e| ForwardError::ReceiveFailed(addr, e.to_string()))?;

        if from_addr.ip() != addr.ip() {
            warn!(
                expected = %addr,
                received_from = %from_addr,
                "UDP reply from unexpected source"
            );
        }

        buf.truncate(len);

        // Rewrite the transaction ID to match the query we sent.
        if buf.len() >= 2 && query.len() >= 2 {
            buf[0] = query[0];
            buf[1] = query[1];
        }

        Ok(buf)
    }
}

#[async_trait]
impl UpstreamForwarderPort for UdpForwarder {
    async fn forward(&self, query: &[u8]) -> Result<Vec<u8>, ForwardError> {
        let candidates: Vec<SocketAddr> =
            lookup_host((self.upstream.as_str(), self.port))
                .await
                .map_err(|e| {
                    ForwardError::ResolveFailed(self.upstream.clone(), e.to_string())
                })?
                .filter(SocketAddr::is_ipv4)
                .collect();

        if candidates.is_empty() {
            return Err(ForwardError::ResolveFailed(
                self.upstream.clone(),
                "no IPv4 addresses".to_string(),
            ));
        }

        let mut last_error = None;
        for addr in candidates {
            match self.attempt(addr, query).await {
                Ok(reply) => {
                    debug!(upstream = %addr, bytes = reply.len(), "upstream replied");
                    return Ok(reply);
                }
                Err(e) => {
                    debug!(upstream = %addr, error = %e, "upstream candidate failed");
                    last_error = Some(e);
                }
            }
        }

        // candidates is non-empty, so at least one error was recorded.
        Err(last_error.unwrap_or_else(|| {
            ForwardError::ResolveFailed(self.upstream.clone(), "no candidates tried".to_string())
        }))
    }
}
