#![allow(dead_code)]
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// Scripted behavior of the mock upstream resolver.
#[derive(Clone, Copy)]
pub enum UpstreamBehavior {
    /// Answer every query with a minimal NOERROR response whose TXID is
    /// deliberately scrambled, so tests can observe the relay's rewrite.
    AnswerWithScrambledTxid,
    /// Receive but never reply.
    Silent,
}

pub struct MockUpstream {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockUpstream {
    pub async fn start(behavior: UpstreamBehavior) -> std::io::Result<Self> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if let UpstreamBehavior::AnswerWithScrambledTxid = behavior {
                                let response = Self::build_response(&buf[..len]);
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Host string for the forwarder; pair it with `addr().port()`.
    pub fn host(&self) -> String {
        self.addr.ip().to_string()
    }

    fn build_response(query: &[u8]) -> Vec<u8> {
        if query.len() < 12 {
            return vec![];
        }

        let mut response = Vec::with_capacity(512);

        // Scrambled TXID: the relay must rewrite this.
        response.push(query[0] ^ 0xFF);
        response.push(query[1] ^ 0xFF);

        response.push(0x81); // QR=1, RD
        response.push(0x80); // RA, RCODE=0

        response.extend_from_slice(&query[4..6]); // QDCOUNT
        response.extend_from_slice(&[0x00, 0x01]); // ANCOUNT
        response.extend_from_slice(&[0x00, 0x00]);
        response.extend_from_slice(&[0x00, 0x00]);

        if query.len() > 12 {
            response.extend_from_slice(&query[12..]);
        }

        // One A record pointing at 127.0.0.1.
        response.extend_from_slice(&[
            0xC0, 0x0C, // name pointer to the question
            0x00, 0x01, // TYPE A
            0x00, 0x01, // CLASS IN
            0x00, 0x00, 0x00, 0x3C, // TTL 60
            0x00, 0x04, // RDLENGTH
            127, 0, 0, 1,
        ]);

        response
    }
}

impl Drop for MockUpstream {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
