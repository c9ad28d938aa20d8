//! UDP relay server: the per-datagram state machine and the receive loop.

use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::{debug, info, warn};
use vigil_dns_application::{RelayDecision, RelayQueryUseCase};
use vigil_dns_domain::ResponseCode;

use super::codec::{build_error_response, parse_question, MAX_PACKET_SIZE};

/// Per-datagram handling: decode, classify, block or forward, respond.
///
/// Holds no mutable state; every datagram is handled independently.
pub struct RelayHandler {
    use_case: Arc<RelayQueryUseCase>,
}

impl RelayHandler {
    pub fn new(use_case: Arc<RelayQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// Returns the bytes to send back, or `None` when the datagram is
    /// dropped without a response (malformed queries are never answered,
    /// to avoid amplifying garbage traffic).
    pub async fn handle_datagram(&self, query: &[u8]) -> Option<Vec<u8>> {
        let question = match parse_question(query) {
            Ok(q) => q,
            Err(e) => {
                debug!(error = %e, bytes = query.len(), "dropping malformed query");
                return None;
            }
        };

        if !question.is_address_query() {
            debug!(domain = %question.name, qtype = question.qtype, "unsupported query type");
            return self.error_response(query, ResponseCode::NotImp);
        }

        match self.use_case.execute(&question.name, query).await {
            RelayDecision::Blocked => self.error_response(query, ResponseCode::NxDomain),
            RelayDecision::Forwarded(reply) => Some(reply),
            RelayDecision::UpstreamFailed(_) => self.error_response(query, ResponseCode::ServFail),
        }
    }

    fn error_response(&self, query: &[u8], rcode: ResponseCode) -> Option<Vec<u8>> {
        match build_error_response(query, rcode) {
            Ok(response) => Some(response),
            Err(e) => {
                debug!(error = %e, "could not build error response, dropping");
                None
            }
        }
    }
}

/// Receive loop over a bound UDP socket.
///
/// Each datagram is copied into its own buffer and handled in a spawned
/// task, so one slow upstream cannot stall other clients. The filter set
/// behind the use case is the only shared state and is read-only.
pub struct RelayServer {
    socket: Arc<UdpSocket>,
    handler: Arc<RelayHandler>,
}

impl RelayServer {
    pub fn new(socket: UdpSocket, handler: Arc<RelayHandler>) -> Self {
        Self {
            socket: Arc::new(socket),
            handler,
        }
    }

    /// The address the server is actually bound to (useful with port 0).
    pub fn local_addr(&self) -> std::io::Result<std::net::SocketAddr> {
        self.socket.local_addr()
    }

    /// Serve forever. Receive errors are logged and the loop continues.
    pub async fn run(&self) {
        info!(addr = ?self.socket.local_addr().ok(), "DNS relay listening");

        let mut buf = [0u8; MAX_PACKET_SIZE];
        loop {
            let (len, peer) = match self.socket.recv_from(&mut buf).await {
                Ok(received) => received,
                Err(e) => {
                    warn!(error = %e, "recv_from failed");
                    continue;
                }
            };

            let query = buf[..len].to_vec();
            let handler = self.handler.clone();
            let socket = self.socket.clone();

            tokio::spawn(async move {
                if let Some(response) = handler.handle_datagram(&query).await {
                    if let Err(e) = socket.send_to(&response, peer).await {
                        warn!(client = %peer, error = %e, "failed to send response");
                    }
                }
            });
        }
    }
}
