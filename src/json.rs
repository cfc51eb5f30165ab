//! Generic JSON encode/decode helpers.
//!
//! Thin wrappers over `serde_json` so callers round-trip values through the
//! crate's own error type instead of handling `serde_json::Error` directly.
//!
//! ## Example
//!
//! ```rust
//! use cssbuild::json::{from_json, to_json};
//! use cssbuild::types::Rect;
//!
//! let rect = Rect::new(10.0, 20.0);
//! let text = to_json(&rect).unwrap();
//! let back: Rect = from_json(&text).unwrap();
//! assert_eq!(back, rect);
//! ```

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;

/// Serializes `value` to a JSON string.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Reconstructs a value of type `T` from a JSON string.
pub fn from_json<T: DeserializeOwned>(source: &str) -> Result<T> {
    Ok(serde_json::from_str(source)?)
}
