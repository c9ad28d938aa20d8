use thiserror::Error;

/// Failures while decoding a raw DNS query or bounding its question section.
///
/// A decode failure means the datagram is dropped without a response, so
/// malformed or fuzzed traffic is never amplified.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("query too short: {0} bytes")]
    TooShort(usize),

    #[error("label extends past the end of the buffer")]
    TruncatedName,

    #[error("compression pointers are not supported")]
    CompressionPointer,

    #[error("reconstructed name exceeds 255 bytes")]
    NameTooLong,

    #[error("question name is empty")]
    EmptyName,

    #[error("question name is not valid UTF-8")]
    InvalidName,

    #[error("question section extends past the end of the buffer")]
    TruncatedQuestion,

    #[error("unsupported query class: {0}")]
    UnsupportedClass(u16),

    #[error("response would exceed the 512-byte UDP limit")]
    Overflow,
}

/// Failures while relaying a query to the upstream resolver.
///
/// Each variant names the specific step that failed; when every resolved
/// candidate address fails, the last error is the one reported.
#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("failed to resolve upstream {0}: {1}")]
    ResolveFailed(String, String),

    #[error("failed to send query to {0}: {1}")]
    SendFailed(std::net::SocketAddr, String),

    #[error("timed out waiting for a reply from {0}")]
    Timeout(std::net::SocketAddr),

    #[error("failed to receive reply from {0}: {1}")]
    ReceiveFailed(std::net::SocketAddr, String),
}

/// Failures while loading the filter file at startup. Fatal: the process
/// does not begin serving on any of these.
#[derive(Debug, Error)]
pub enum FilterLoadError {
    #[error("failed to read filter file {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("filter file {path} exceeds the capacity of {limit} patterns")]
    CapacityExceeded { path: String, limit: usize },
}
