//! piiscan PII classification and redaction
//!
//! This crate decides, per record, whether it contains PII and produces a
//! redacted copy:
//! - Standalone rules: phone, Aadhar, passport and UPI handle patterns
//! - Combinatorial rule: name, email, address and network identifiers that
//!   only identify a person once enough of them appear together
//! - Non-reversible masking of every detected field

pub mod classifier;
pub mod detector;
pub mod error;
pub mod record;
pub mod redactor;

pub use classifier::{
    Classification, ClassifierConfig, DEFAULT_COMBINATION_THRESHOLD, RecordClassifier,
};
pub use detector::{
    CombinationRule, Finding, PiiCategory, PiiType, QualifyingGroup, Qualifier, StandaloneRule,
};
pub use error::{Error, Result};
pub use record::{FieldValue, Record};
pub use redactor::{Mask, REDACTION_MARKER};
