pub mod codec;
pub mod filter;
pub mod forwarder;
pub mod server;

pub use codec::{build_error_response, parse_question, DNS_HEADER_LEN, MAX_PACKET_SIZE};
pub use filter::FilterSet;
pub use forwarder::UdpForwarder;
pub use server::{RelayHandler, RelayServer};
