use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inspection settings shared by every inspector opened from the same configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectionConfig {
    /// Documents expiring on or before this date are rejected.
    pub expiry_cutoff: NaiveDate,
}

impl InspectionConfig {
    pub fn default_expiry_cutoff() -> NaiveDate {
        NaiveDate::from_ymd_opt(1982, 11, 22).expect("1982-11-22 is a valid calendar date")
    }
}

impl Default for InspectionConfig {
    fn default() -> Self {
        Self {
            expiry_cutoff: Self::default_expiry_cutoff(),
        }
    }
}
