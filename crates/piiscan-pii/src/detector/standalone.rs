//! Pattern rules for fields that are PII on their own

use crate::detector::PiiType;
use crate::record::{FieldValue, Record};
use crate::redactor::Mask;
use regex::Regex;

/// A field whose full value is matched against a pattern
#[derive(Debug, Clone)]
pub struct StandaloneRule {
    field: &'static str,
    pii_type: PiiType,
    pattern: Regex,
    mask: Mask,
}

impl StandaloneRule {
    /// Create a rule; `pattern` must be anchored to match the whole value
    pub fn new(
        field: &'static str,
        pii_type: PiiType,
        pattern: &str,
        mask: Mask,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            field,
            pii_type,
            pattern: Regex::new(pattern)?,
            mask,
        })
    }

    /// The built-in rule table
    pub fn standard_rules() -> Result<Vec<Self>, regex::Error> {
        Ok(vec![
            Self::new("phone", PiiType::Phone, r"^\d{10}$", Mask::phone())?,
            Self::new("aadhar", PiiType::Aadhar, r"^\d{12}$", Mask::aadhar())?,
            Self::new("passport", PiiType::Passport, r"^[A-Z]\d{7}$", Mask::Marker)?,
            // local@provider.suffix, suffix of 2-6 letters
            Self::new(
                "upi_id",
                PiiType::UpiId,
                r"^[a-zA-Z0-9._]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,6}$",
                Mask::Marker,
            )?,
        ])
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn pii_type(&self) -> PiiType {
        self.pii_type
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    /// The field's value if it is a string the pattern accepts
    pub fn matching_value<'r>(&self, record: &'r Record) -> Option<&'r str> {
        FieldValue::lookup(record, self.field)
            .as_text()
            .filter(|text| self.pattern.is_match(text))
    }
}
