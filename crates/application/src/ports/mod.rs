mod filter_engine;
mod upstream_forwarder;

pub use filter_engine::FilterEnginePort;
pub use upstream_forwarder::UpstreamForwarderPort;
