//! Selector construction: the fragment builder, its stage machinery, and the
//! facade entry points.
//!
//! This module provides:
//!
//! - [`SelectorBuilder`]: a move-based fluent builder for one selector
//!   fragment
//! - [`combine`]: joins two fragments with a combinator into a new fragment
//! - Facade functions [`element`], [`id`], [`class`], [`attr`],
//!   [`pseudo_class`], [`pseudo_element`]: each starts a fresh fragment with
//!   its first part already written
//!
//! ## Submodules
//!
//! - [`stage`]: the canonical part sequence and seen-part flags
//! - [`selector`]: the builder itself and `combine`
//!
//! ## Example
//!
//! ```rust
//! use cssbuild::builder::{element, id};
//!
//! let selector = element("div").id("main").unwrap().stringify();
//! assert_eq!(selector, "div#main");
//!
//! let selector = id("main").class("container").unwrap().stringify();
//! assert_eq!(selector, "#main.container");
//! ```

pub mod selector;
pub mod stage;

pub use crate::builder::selector::{SelectorBuilder, combine};
pub use crate::builder::stage::{SeenParts, Stage};

/// Starts a fragment with a type (tag) token, e.g. `div`.
pub fn element(value: &str) -> SelectorBuilder {
    SelectorBuilder::seed(Stage::Element, value)
}

/// Starts a fragment with an id token, written as `#value`.
pub fn id(value: &str) -> SelectorBuilder {
    SelectorBuilder::seed(Stage::Id, value)
}

/// Starts a fragment with a class token, written as `.value`.
pub fn class(value: &str) -> SelectorBuilder {
    SelectorBuilder::seed(Stage::Class, value)
}

/// Starts a fragment with an attribute token, written as `[value]`.
pub fn attr(value: &str) -> SelectorBuilder {
    SelectorBuilder::seed(Stage::Attribute, value)
}

/// Starts a fragment with a pseudo-class token, written as `:value`.
pub fn pseudo_class(value: &str) -> SelectorBuilder {
    SelectorBuilder::seed(Stage::PseudoClass, value)
}

/// Starts a fragment with a pseudo-element token, written as `::value`.
pub fn pseudo_element(value: &str) -> SelectorBuilder {
    SelectorBuilder::seed(Stage::PseudoElement, value)
}
