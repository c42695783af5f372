//! Tests for PII masks

use super::*;

#[test]
fn test_phone_mask_keeps_edges() {
    let masked = Mask::phone().apply("9876543210", REDACTION_MARKER);
    assert_eq!(masked, "98XXXXXX10");
}

#[test]
fn test_aadhar_mask_reveals_nothing() {
    let masked = Mask::aadhar().apply("123412341234", REDACTION_MARKER);
    assert_eq!(masked, "XXXX XXXX XXXX");
    assert!(!masked.chars().any(|c| c.is_ascii_digit()));
}

#[test]
fn test_marker_mask_uses_given_marker() {
    assert_eq!(Mask::Marker.apply("A1234567", REDACTION_MARKER), "[REDACTED_PII]");
    assert_eq!(Mask::Marker.apply("A1234567", "<hidden>"), "<hidden>");
}

#[test]
fn test_partial_mask_counts_characters() {
    let mask = Mask::Partial {
        keep_start: 2,
        keep_end: 2,
        fill: "**".to_string(),
    };

    assert_eq!(mask.apply("१२३४५६", REDACTION_MARKER), "१२**५६");
}

#[test]
fn test_partial_mask_short_value_overlaps() {
    let mask = Mask::phone();

    // Shorter than the kept edges: head and tail overlap, nothing panics
    assert_eq!(mask.apply("123", REDACTION_MARKER), "12XXXXXX23");
    assert_eq!(mask.apply("", REDACTION_MARKER), "XXXXXX");
}

#[test]
fn test_mask_serialization() {
    let masks = vec![Mask::phone(), Mask::aadhar(), Mask::Marker];

    for mask in masks {
        let json = serde_json::to_string(&mask).unwrap();
        let deserialized: Mask = serde_json::from_str(&json).unwrap();
        assert_eq!(mask, deserialized);
    }
}
