//! Fields that only identify a person in combination

use crate::detector::PiiType;
use crate::record::{FieldValue, Record};

/// Weak predicate a field must satisfy to count toward the combination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Qualifier {
    /// Two or more whitespace separated words
    MultiWord,

    /// Contains an `@` anywhere
    ContainsAt,

    /// Any string
    AnyText,
}

impl Qualifier {
    pub fn accepts(&self, text: &str) -> bool {
        match self {
            Qualifier::MultiWord => text.split_whitespace().nth(1).is_some(),
            Qualifier::ContainsAt => text.contains('@'),
            Qualifier::AnyText => true,
        }
    }
}

/// Fields that qualify together under one predicate
///
/// The group is admitted when any member holds a string the qualifier
/// accepts. Once admitted, every member present in the record qualifies,
/// whatever its value type.
#[derive(Debug, Clone)]
pub struct QualifyingGroup {
    members: Vec<(&'static str, PiiType)>,
    qualifier: Qualifier,
}

impl QualifyingGroup {
    pub fn single(field: &'static str, pii_type: PiiType, qualifier: Qualifier) -> Self {
        Self {
            members: vec![(field, pii_type)],
            qualifier,
        }
    }

    pub fn shared(members: Vec<(&'static str, PiiType)>, qualifier: Qualifier) -> Self {
        Self { members, qualifier }
    }

    pub fn members(&self) -> &[(&'static str, PiiType)] {
        &self.members
    }

    /// Members of this group that qualify in `record`
    pub fn qualifying(&self, record: &Record) -> Vec<(&'static str, PiiType)> {
        let admitted = self.members.iter().any(|(field, _)| {
            FieldValue::lookup(record, field)
                .as_text()
                .is_some_and(|text| self.qualifier.accepts(text))
        });

        if !admitted {
            return Vec::new();
        }

        self.members
            .iter()
            .filter(|(field, _)| FieldValue::lookup(record, field).is_present())
            .copied()
            .collect()
    }
}

/// Flags a record once enough qualifying fields co-occur
#[derive(Debug, Clone)]
pub struct CombinationRule {
    groups: Vec<QualifyingGroup>,
    threshold: usize,
}

impl CombinationRule {
    pub fn new(groups: Vec<QualifyingGroup>, threshold: usize) -> Self {
        Self { groups, threshold }
    }

    /// Name, email, address and the network identifier pair
    pub fn standard(threshold: usize) -> Self {
        Self::new(
            vec![
                QualifyingGroup::single("name", PiiType::Name, Qualifier::MultiWord),
                QualifyingGroup::single("email", PiiType::Email, Qualifier::ContainsAt),
                QualifyingGroup::single("address", PiiType::Address, Qualifier::AnyText),
                QualifyingGroup::shared(
                    vec![
                        ("ip_address", PiiType::IpAddress),
                        ("device_id", PiiType::DeviceId),
                    ],
                    Qualifier::AnyText,
                ),
            ],
            threshold,
        )
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Every qualifying field in `record`, regardless of the threshold
    pub fn qualifying_fields(&self, record: &Record) -> Vec<(&'static str, PiiType)> {
        self.groups
            .iter()
            .flat_map(|group| group.qualifying(record))
            .collect()
    }

    /// Qualifying fields if there are at least `threshold` of them
    pub fn evaluate(&self, record: &Record) -> Option<Vec<(&'static str, PiiType)>> {
        let fields = self.qualifying_fields(record);
        (fields.len() >= self.threshold).then_some(fields)
    }
}
