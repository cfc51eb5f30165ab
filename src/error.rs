//! Error types for selector construction and JSON helpers.
//!
//! This module defines the error type returned when a selector part is
//! appended out of order or a unique part is repeated, and the passthrough
//! variant for JSON helper failures.

use thiserror::Error;

/// Errors that can occur while building a selector or running the JSON
/// helpers.
///
/// # Examples
///
/// ```rust
/// use cssbuild::{element, CssBuildError};
///
/// // A tag can only open a selector once.
/// let result = element("div").element("span");
/// assert!(matches!(result, Err(CssBuildError::DuplicatePart)));
/// ```
#[derive(Error, Debug)]
pub enum CssBuildError {
    /// A part limited to one occurrence (element, id, pseudo-element) was
    /// supplied a second time for the same fragment.
    #[error("Element, id and pseudo-element should not occur more then one time inside the selector")]
    DuplicatePart,

    /// A part was appended after a part that belongs later in the canonical
    /// sequence.
    #[error("Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element")]
    OutOfOrder,

    /// A value could not be serialized to or deserialized from JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, CssBuildError>;
