//! Vigil DNS Domain Layer
pub mod config;
pub mod errors;
pub mod filter_pattern;
pub mod question;
pub mod response_code;

pub use config::{CliOverrides, Config};
pub use errors::{DecodeError, FilterLoadError, ForwardError};
pub use filter_pattern::{normalize_domain, FilterPattern};
pub use question::{Question, QCLASS_IN, QTYPE_A};
pub use response_code::ResponseCode;
