//! Error types for registration.

use thiserror::Error;

/// Errors surfaced by [`Dispatcher::try_register`](crate::Dispatcher::try_register).
///
/// The permissive [`register`](crate::Dispatcher::register) entry point
/// swallows these, keeping the best-effort contract where a malformed
/// registration is silently ignored.
#[derive(Error, Debug)]
pub enum RegisterError {
    /// The pattern string was empty.
    #[error("pattern must be a non-empty string")]
    EmptyPattern,

    /// A wildcard pattern failed to compile into a matcher.
    #[error("invalid wildcard pattern: {0}")]
    Wildcard(#[from] regex::Error),
}
