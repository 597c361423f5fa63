//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the navigation model.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug)]
pub enum DomainError {
    /// The selected path does not resolve in the decision tree, or is not
    /// reachable from the currently rendered choice lists. Either way the
    /// model and the view have drifted apart, which is fatal to the
    /// interaction (nothing is partially rendered).
    #[error("path does not resolve in the decision tree: {path}")]
    InvalidPath { path: String },

    #[error("malformed tree node {label:?}: {message}")]
    MalformedNode { label: String, message: String },
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, DomainError>;
