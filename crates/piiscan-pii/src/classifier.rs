//! Record classification and redaction

use crate::detector::{CombinationRule, Finding, PiiCategory, StandaloneRule};
use crate::error::{Error, Result};
use crate::record::Record;
use crate::redactor::REDACTION_MARKER;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Number of co-occurring qualifying fields that makes a record PII
pub const DEFAULT_COMBINATION_THRESHOLD: usize = 2;

/// Configuration for a record classifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Qualifying fields needed before the combinatorial rule fires
    #[serde(default = "default_combination_threshold")]
    pub combination_threshold: usize,

    /// Replacement written over fully redacted fields
    #[serde(default = "default_redaction_marker")]
    pub redaction_marker: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            combination_threshold: default_combination_threshold(),
            redaction_marker: default_redaction_marker(),
        }
    }
}

impl ClassifierConfig {
    pub fn validate(&self) -> Result<()> {
        if self.combination_threshold == 0 {
            return Err(Error::InvalidConfig(
                "combination_threshold must be at least 1".to_string(),
            ));
        }

        if self.redaction_marker.is_empty() {
            return Err(Error::InvalidConfig(
                "redaction_marker must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

fn default_combination_threshold() -> usize {
    DEFAULT_COMBINATION_THRESHOLD
}

fn default_redaction_marker() -> String {
    REDACTION_MARKER.to_string()
}

/// Outcome of classifying one record
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// Whether any standalone rule matched or the combination threshold was reached
    pub is_pii: bool,

    /// Copy of the input with every detected field masked
    pub redacted: Record,

    /// Masked fields, standalone findings first
    pub findings: Vec<Finding>,
}

/// Classifies records and produces redacted copies
///
/// Holds only compiled rules, so one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct RecordClassifier {
    config: ClassifierConfig,
    standalone: Vec<StandaloneRule>,
    combination: CombinationRule,
}

impl RecordClassifier {
    /// Create a classifier with the built-in rule tables
    pub fn new(config: ClassifierConfig) -> Result<Self> {
        config.validate()?;

        let standalone = StandaloneRule::standard_rules()?;
        let combination = CombinationRule::standard(config.combination_threshold);

        Ok(Self {
            config,
            standalone,
            combination,
        })
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify `record` and return a redacted copy; `record` itself is never modified
    ///
    /// Missing fields and values of the wrong type simply do not match.
    pub fn classify_and_redact(&self, record: &Record) -> Classification {
        let marker = self.config.redaction_marker.as_str();
        let mut redacted = record.clone();
        let mut findings = Vec::new();

        for rule in &self.standalone {
            if let Some(text) = rule.matching_value(record) {
                let masked = rule.mask().apply(text, marker);
                replace_value(&mut redacted, rule.field(), masked);
                findings.push(Finding {
                    field: rule.field().to_string(),
                    pii_type: rule.pii_type(),
                    category: PiiCategory::Standalone,
                });
            }
        }

        if let Some(fields) = self.combination.evaluate(record) {
            for (field, pii_type) in fields {
                replace_value(&mut redacted, field, marker.to_string());
                findings.push(Finding {
                    field: field.to_string(),
                    pii_type,
                    category: PiiCategory::Combinatorial,
                });
            }
        }

        Classification {
            is_pii: !findings.is_empty(),
            redacted,
            findings,
        }
    }
}

/// Overwrite an existing field in place; never adds keys
fn replace_value(record: &mut Record, field: &str, masked: String) {
    if let Some(slot) = record.get_mut(field) {
        *slot = Value::String(masked);
    }
}
