//! Error types for the routing core.

use thiserror::Error;

/// Errors surfaced by routing operations.
///
/// Both variants are caller-correctable. The consuming layer translates
/// them into its own status codes; nothing here is retried or logged away
/// internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// Malformed input: out-of-range coordinates, negative distances,
    /// progress indexes outside the route.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The referenced courier has no active route.
    #[error("not found: {0}")]
    NotFound(String),
}
