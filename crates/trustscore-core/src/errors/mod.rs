mod trust_error;

pub use trust_error::TrustError;

/// Convenience alias used across the workspace.
pub type TrustResult<T> = Result<T, TrustError>;
