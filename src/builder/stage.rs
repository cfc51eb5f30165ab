//! The ordered stages of a selector fragment and the seen-part flags.
//!
//! A fragment is written in one forward pass over six stages:
//! element → id → class → attribute → pseudo-class → pseudo-element.
//! Class, attribute, and pseudo-class may repeat within their stage; the
//! other three may appear at most once.

use bitflags::bitflags;

/// One stage of the canonical selector part sequence.
///
/// The derive order of the variants is the canonical order, so `Ord` gives
/// the sequence check directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    /// Type (tag) selector, e.g. `div`.
    Element,
    /// ID selector, e.g. `#main`.
    Id,
    /// Class selector, e.g. `.container`.
    Class,
    /// Attribute selector, e.g. `[href$=".png"]`.
    Attribute,
    /// Pseudo-class selector, e.g. `:focus`.
    PseudoClass,
    /// Pseudo-element selector, e.g. `::before`.
    PseudoElement,
}

impl Stage {
    /// Whether this part kind may appear more than once in a fragment.
    pub fn repeatable(self) -> bool {
        matches!(self, Self::Class | Self::Attribute | Self::PseudoClass)
    }

    /// The seen-flag for an at-most-once kind, or `None` for repeatable
    /// kinds.
    pub(crate) fn unique_flag(self) -> Option<SeenParts> {
        match self {
            Self::Element => Some(SeenParts::ELEMENT),
            Self::Id => Some(SeenParts::ID),
            Self::PseudoElement => Some(SeenParts::PSEUDO_ELEMENT),
            Self::Class | Self::Attribute | Self::PseudoClass => None,
        }
    }

    /// Appends `value` to `buffer` with this stage's decoration.
    pub(crate) fn decorate_into(self, buffer: &mut String, value: &str) {
        match self {
            Self::Element => buffer.push_str(value),
            Self::Id => {
                buffer.push('#');
                buffer.push_str(value);
            }
            Self::Class => {
                buffer.push('.');
                buffer.push_str(value);
            }
            Self::Attribute => {
                buffer.push('[');
                buffer.push_str(value);
                buffer.push(']');
            }
            Self::PseudoClass => {
                buffer.push(':');
                buffer.push_str(value);
            }
            Self::PseudoElement => {
                buffer.push_str("::");
                buffer.push_str(value);
            }
        }
    }
}

bitflags! {
    /// Bitflags recording which at-most-once parts a fragment already holds.
    ///
    /// Only element, id, and pseudo-element are tracked; the repeatable
    /// kinds never set a flag.
    ///
    /// # Example
    ///
    /// ```
    /// use cssbuild::builder::SeenParts;
    ///
    /// let mut seen = SeenParts::empty();
    /// seen |= SeenParts::ELEMENT;
    /// seen |= SeenParts::ID;
    ///
    /// assert!(seen.contains(SeenParts::ID));
    /// assert!(!seen.contains(SeenParts::PSEUDO_ELEMENT));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SeenParts: u8 {
        /// A type (tag) token has been written
        const ELEMENT        = 0b0000_0001;
        /// An id token has been written
        const ID             = 0b0000_0010;
        /// A pseudo-element token has been written
        const PSEUDO_ELEMENT = 0b0000_0100;
    }
}
