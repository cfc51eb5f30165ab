//! # cssbuild - Validated CSS Selector Builder
//!
//! A fluent builder for CSS selector strings that enforces the selector
//! grammar as the string is assembled. This crate provides:
//!
//! - **Building**: Start a fragment with any part kind and chain further
//!   parts onto it; each call validates before it appends
//! - **Combining**: Join two fragments with a combinator glyph into a
//!   compound selector with [`combine`]
//! - **Helpers**: A [`Rect`](types::Rect) geometry type and generic JSON
//!   round-trip functions in [`json`]
//!
//! ## Quick Start
//!
//! ```rust
//! use cssbuild::{combine, element, id};
//!
//! let selector = element("div")
//!     .id("main")
//!     .unwrap()
//!     .class("container")
//!     .unwrap()
//!     .stringify();
//! assert_eq!(selector, "div#main.container");
//!
//! let left = element("p").pseudo_class("hover").unwrap();
//! let right = id("footer");
//! assert_eq!(combine(left, "~", right).stringify(), "p:hover ~ #footer");
//! ```
//!
//! ## Grammar Rules
//!
//! Parts must follow the canonical order:
//!
//! - Element (tag): `div` — at most once, first
//! - ID: `#main` — at most once
//! - Classes: `.primary.active` — repeatable
//! - Attributes: `[href$=".png"]` — repeatable
//! - Pseudo-classes: `:hover:focus` — repeatable
//! - Pseudo-element: `::before` — at most once, last
//!
//! An out-of-sequence part fails with [`CssBuildError::OutOfOrder`]; a
//! repeated unique part fails with [`CssBuildError::DuplicatePart`]. Both
//! consume the builder, so a violating chain cannot be resumed.
//!
//! Part values are inserted verbatim: no escaping or CSS syntax validation
//! is applied, and the combinator argument of [`combine`] accepts any
//! string (conventionally a space, `+`, `~`, or `>`).
//!
//! ## Ownership Model
//!
//! A [`SelectorBuilder`] moves through its chain: every mutator takes the
//! builder by value and returns it in a `Result`, and
//! [`stringify`](SelectorBuilder::stringify) consumes it. Fragments are
//! therefore single-use by construction, and [`combine`] is a pure function
//! over two consumed operands.
//!
//! ## Modules
//!
//! - [`builder`]: the fragment builder, facade functions, and `combine`
//! - [`types`]: the `Rect` geometry helper
//! - [`json`]: generic JSON encode/decode helpers
//! - [`error`]: the crate error type

pub mod builder;
pub mod error;
pub mod json;
pub mod types;

pub use builder::{
    SelectorBuilder, attr, class, combine, element, id, pseudo_class, pseudo_element,
};
pub use error::{CssBuildError, Result};
pub use json::{from_json, to_json};
pub use types::Rect;
