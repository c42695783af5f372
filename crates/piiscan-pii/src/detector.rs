//! PII detectors

mod combination;
mod standalone;

pub use combination::{CombinationRule, QualifyingGroup, Qualifier};
pub use standalone::StandaloneRule;

use serde::{Deserialize, Serialize};

/// Types of PII that can be detected in a record field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PiiType {
    /// Ten digit mobile number
    Phone,

    /// Twelve digit national ID
    Aadhar,

    /// Passport number
    Passport,

    /// UPI payment handle
    UpiId,

    /// Full name (two or more words)
    Name,

    /// Email address
    Email,

    /// Postal address
    Address,

    /// IP address
    IpAddress,

    /// Device identifier
    DeviceId,
}

impl PiiType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PiiType::Phone => "phone",
            PiiType::Aadhar => "aadhar",
            PiiType::Passport => "passport",
            PiiType::UpiId => "upi_id",
            PiiType::Name => "name",
            PiiType::Email => "email",
            PiiType::Address => "address",
            PiiType::IpAddress => "ip_address",
            PiiType::DeviceId => "device_id",
        }
    }
}

impl std::fmt::Display for PiiType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a field was treated as PII
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PiiCategory {
    /// The value identifies a person on its own
    Standalone,

    /// The value identifies a person together with other fields in the record
    Combinatorial,
}

/// A field that was detected and masked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Name of the masked field
    pub field: String,

    /// Type of PII detected
    pub pii_type: PiiType,

    /// Rule family that fired
    pub category: PiiCategory,
}
