//! Integration tests for selector grammar violations.
//!
//! Covers both error kinds:
//! - `DuplicatePart`: element, id, or pseudo-element written twice
//! - `OutOfOrder`: a part written after a later-stage part

use cssbuild::{CssBuildError, attr, class, element, id, pseudo_class, pseudo_element};

// ============================================================================
// CARDINALITY VIOLATIONS
// ============================================================================

#[test]
fn test_element_twice_is_duplicate() {
    let result = element("table").element("div");
    assert!(matches!(result, Err(CssBuildError::DuplicatePart)));
}

#[test]
fn test_id_twice_is_duplicate() {
    let result = id("main").id("footer");
    assert!(matches!(result, Err(CssBuildError::DuplicatePart)));
}

#[test]
fn test_pseudo_element_twice_is_duplicate() {
    let result = pseudo_element("after").pseudo_element("before");
    assert!(matches!(result, Err(CssBuildError::DuplicatePart)));
}

#[test]
fn test_duplicate_wins_over_order() {
    // A repeated unique part is reported as a duplicate even though the
    // repeat is also out of sequence.
    let result = element("div").class("a").unwrap().element("span");
    assert!(matches!(result, Err(CssBuildError::DuplicatePart)));

    let result = id("main").pseudo_class("hover").unwrap().id("other");
    assert!(matches!(result, Err(CssBuildError::DuplicatePart)));
}

#[test]
fn test_duplicate_message() {
    let err = element("div").element("span").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Element, id and pseudo-element should not occur more then one time inside the selector"
    );
}

// ============================================================================
// ORDER VIOLATIONS
// ============================================================================

#[test]
fn test_element_after_any_part_is_out_of_order() {
    let result = id("main").element("div");
    assert!(matches!(result, Err(CssBuildError::OutOfOrder)));

    let result = class("container").element("div");
    assert!(matches!(result, Err(CssBuildError::OutOfOrder)));

    let result = pseudo_element("after").element("div");
    assert!(matches!(result, Err(CssBuildError::OutOfOrder)));
}

#[test]
fn test_id_after_class_is_out_of_order() {
    let result = class("container").id("main");
    assert!(matches!(result, Err(CssBuildError::OutOfOrder)));
}

#[test]
fn test_id_after_attr_is_out_of_order() {
    let result = attr("href").id("main");
    assert!(matches!(result, Err(CssBuildError::OutOfOrder)));
}

#[test]
fn test_id_after_pseudo_class_is_out_of_order() {
    let result = element("a").pseudo_class("hover").unwrap().id("main");
    assert!(matches!(result, Err(CssBuildError::OutOfOrder)));
}

#[test]
fn test_id_after_pseudo_element_is_out_of_order() {
    let result = pseudo_element("before").id("main");
    assert!(matches!(result, Err(CssBuildError::OutOfOrder)));
}

#[test]
fn test_class_after_attr_is_out_of_order() {
    let result = element("div").attr("draggable").unwrap().class("late");
    assert!(matches!(result, Err(CssBuildError::OutOfOrder)));
}

#[test]
fn test_class_after_pseudo_class_is_out_of_order() {
    let result = pseudo_class("hover").class("late");
    assert!(matches!(result, Err(CssBuildError::OutOfOrder)));
}

#[test]
fn test_attr_after_pseudo_class_is_out_of_order() {
    let result = pseudo_class("hover").attr("href");
    assert!(matches!(result, Err(CssBuildError::OutOfOrder)));
}

#[test]
fn test_pseudo_class_after_pseudo_element_is_out_of_order() {
    let result = pseudo_element("selection").pseudo_class("hover");
    assert!(matches!(result, Err(CssBuildError::OutOfOrder)));
}

#[test]
fn test_order_message() {
    let err = class("container").id("main").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element"
    );
}

// ============================================================================
// FAILED CHAINS ARE CONSUMED
// ============================================================================

#[test]
fn test_violation_consumes_the_builder() {
    // A failing call moves the builder into the error path; the caller only
    // ever sees the error, never a half-written fragment.
    let result = element("div").id("a").unwrap().id("b");
    assert!(result.is_err());
}
