//! Error and result type for IRI components and resolution.

use thiserror::Error;

/// Type alias for `Result` with default error `IriError`.
///
/// Can be used like `std::result::Result` as well.
pub type Result<T, E = IriError> = std::result::Result<T, E>;

/// This error is raised when a component of an [`IriValue`](crate::IriValue)
/// is rejected, or when a relative reference can not be resolved.
///
/// A rejected component is left absent; the rest of the value is unaffected.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum IriError {
    /// The scheme does not match `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
    #[error("Invalid scheme {0:?}")]
    InvalidScheme(String),
    /// The port contains something else than digits, or does not fit in 16 bits
    #[error("Invalid port {0:?}")]
    InvalidPort(String),
    /// The host is a bracketed literal which is not a valid IPv6 address
    #[error("Invalid IPv6 literal {0:?}")]
    InvalidHost(String),
    /// The base IRI given to [`IriValue::absolutize`](crate::IriValue::absolutize) has no scheme
    #[error("Can not resolve against relative base {0:?}")]
    RelativeBase(String),
}
