//! PII masking

use serde::{Deserialize, Serialize};

/// Opaque replacement written over fully redacted fields
pub const REDACTION_MARKER: &str = "[REDACTED_PII]";

/// How a detected field value is replaced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mask {
    /// Keep the first `keep_start` and last `keep_end` characters and put
    /// `fill` between them
    Partial {
        keep_start: usize,
        keep_end: usize,
        fill: String,
    },

    /// Replace with a fixed literal
    Literal(String),

    /// Replace with the classifier's redaction marker
    Marker,
}

impl Mask {
    /// Phone mask: `98XXXXXX10`
    ///
    /// Unlike the other masks this keeps part of the original value, so its
    /// output is not a fixed marker and is not guaranteed to be idempotent.
    pub fn phone() -> Self {
        Mask::Partial {
            keep_start: 2,
            keep_end: 2,
            fill: "XXXXXX".to_string(),
        }
    }

    /// Aadhar mask, no digits revealed
    pub fn aadhar() -> Self {
        Mask::Literal("XXXX XXXX XXXX".to_string())
    }

    /// Produce the masked replacement for `value`
    pub fn apply(&self, value: &str, marker: &str) -> String {
        match self {
            Mask::Partial {
                keep_start,
                keep_end,
                fill,
            } => {
                let head: String = value.chars().take(*keep_start).collect();
                let count = value.chars().count();
                let tail: String = value.chars().skip(count.saturating_sub(*keep_end)).collect();
                format!("{}{}{}", head, fill, tail)
            }
            Mask::Literal(literal) => literal.clone(),
            Mask::Marker => marker.to_string(),
        }
    }
}

#[cfg(test)]
mod tests;
