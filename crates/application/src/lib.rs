//! Vigil DNS Application Layer
pub mod ports;
pub mod use_cases;

pub use ports::{FilterEnginePort, UpstreamForwarderPort};
pub use use_cases::{RelayDecision, RelayQueryUseCase};
