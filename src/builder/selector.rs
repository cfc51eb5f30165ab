//! The selector fragment builder and the pure `combine` operation.

use std::fmt;

use log::trace;

use crate::builder::stage::{SeenParts, Stage};
use crate::error::{CssBuildError, Result};

/// A CSS selector fragment under construction.
///
/// Every mutator takes the builder by value and hands it back inside a
/// `Result`, so a fragment is a single-owner value: there is no way to alias
/// a half-built selector, and a validation failure consumes it.
///
/// The canonical part order is element → id → class → attribute →
/// pseudo-class → pseudo-element. Class, attribute, and pseudo-class may
/// repeat; the other three may appear at most once. Violations yield
/// [`CssBuildError::OutOfOrder`] or [`CssBuildError::DuplicatePart`].
///
/// # Examples
///
/// ```rust
/// use cssbuild::element;
///
/// let selector = element("a")
///     .attr(r#"href$=".png""#)
///     .unwrap()
///     .pseudo_class("focus")
///     .unwrap()
///     .stringify();
///
/// assert_eq!(selector, r#"a[href$=".png"]:focus"#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SelectorBuilder {
    buffer: String,
    stage: Option<Stage>,
    seen: SeenParts,
}

impl SelectorBuilder {
    /// Creates an empty fragment. Any part kind may open an empty fragment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a fragment with its first part, skipping the checks an empty
    /// buffer cannot fail.
    pub(crate) fn seed(stage: Stage, value: &str) -> Self {
        let mut builder = Self::new();
        builder.write_part(stage, value);
        builder
    }

    /// Appends a type (tag) token, e.g. `div`. At most once, and only as
    /// the very first part.
    pub fn element(self, value: &str) -> Result<Self> {
        self.push(Stage::Element, value)
    }

    /// Appends an id token as `#value`. At most once.
    pub fn id(self, value: &str) -> Result<Self> {
        self.push(Stage::Id, value)
    }

    /// Appends a class token as `.value`. Repeatable.
    pub fn class(self, value: &str) -> Result<Self> {
        self.push(Stage::Class, value)
    }

    /// Appends an attribute token as `[value]`. Repeatable. The value is
    /// inserted verbatim, so it may carry an operator such as `href$=".png"`.
    pub fn attr(self, value: &str) -> Result<Self> {
        self.push(Stage::Attribute, value)
    }

    /// Appends a pseudo-class token as `:value`. Repeatable.
    pub fn pseudo_class(self, value: &str) -> Result<Self> {
        self.push(Stage::PseudoClass, value)
    }

    /// Appends a pseudo-element token as `::value`. At most once.
    pub fn pseudo_element(self, value: &str) -> Result<Self> {
        self.push(Stage::PseudoElement, value)
    }

    /// Consumes the fragment and returns the selector string built so far.
    pub fn stringify(self) -> String {
        self.buffer
    }

    /// Validates `stage` against the fragment written so far, then appends.
    ///
    /// Cardinality is checked before ordering, so writing the same unique
    /// part twice reports [`CssBuildError::DuplicatePart`] even when the
    /// repeat is also out of sequence.
    fn push(mut self, stage: Stage, value: &str) -> Result<Self> {
        if let Some(flag) = stage.unique_flag() {
            if self.seen.contains(flag) {
                return Err(CssBuildError::DuplicatePart);
            }
        }
        if let Some(current) = self.stage {
            if current > stage {
                return Err(CssBuildError::OutOfOrder);
            }
        }
        self.write_part(stage, value);
        Ok(self)
    }

    /// Unchecked append: decorates `value` into the buffer and advances the
    /// stage and seen-flags.
    fn write_part(&mut self, stage: Stage, value: &str) {
        trace!("appending {stage:?} part {value:?}");
        stage.decorate_into(&mut self.buffer, value);
        self.stage = Some(stage);
        if let Some(flag) = stage.unique_flag() {
            self.seen |= flag;
        }
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.buffer)
    }
}

/// Joins two fragments with a combinator into a new, independent fragment.
///
/// The result is `"<left> <combinator> <right>"`. The combinator is inserted
/// verbatim between single spaces; the conventional glyphs are `+`, `~`, `>`,
/// and the descendant space, but no validation is applied. Both operands are
/// consumed.
///
/// The returned fragment is terminal: it sits at the pseudo-element stage
/// with the pseudo-element flag set, so appending further parts to it fails.
/// Combined fragments can still be combined again.
///
/// # Examples
///
/// ```rust
/// use cssbuild::{combine, element};
///
/// let left = element("div").id("main").unwrap();
/// let right = element("table").id("data").unwrap();
/// let selector = combine(left, "+", right);
///
/// assert_eq!(selector.stringify(), "div#main + table#data");
/// ```
pub fn combine(left: SelectorBuilder, combinator: &str, right: SelectorBuilder) -> SelectorBuilder {
    trace!("combining {left} and {right} with {combinator:?}");
    let buffer = format!("{} {} {}", left.stringify(), combinator, right.stringify());
    SelectorBuilder {
        buffer,
        stage: Some(Stage::PseudoElement),
        seen: SeenParts::PSEUDO_ELEMENT,
    }
}
