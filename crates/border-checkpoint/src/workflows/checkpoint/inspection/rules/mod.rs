mod citizens;
mod criminals;
mod documents;
mod vaccination;

pub use citizens::{Allowance, CitizenPolicy};
pub use criminals::WantedList;
pub use documents::{DocumentRequirements, Requirement, Subject};
pub use vaccination::{VaccinationPolicy, VaccineRequirement};

use serde::{Deserialize, Serialize};

use super::entrant::EntrantDocuments;
use super::error::ParseError;

/// One of the four bulletin-driven tables consulted during an inspection.
pub trait RuleTable {
    fn name(&self) -> &'static str;

    /// Apply a single bulletin line. Lines outside the table's grammar are ignored.
    fn apply(&mut self, bulletin: &str) -> Result<(), ParseError>;

    fn accept(&self, entrant: &EntrantDocuments) -> Acceptance;

    fn is_empty(&self) -> bool;
}

/// Answer of a rule table for one entrant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Acceptance {
    Accepted,
    Rejected(DenialReason),
}

impl Acceptance {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Acceptance::Accepted)
    }
}

/// Why a rule table turned an entrant away.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DenialReason {
    MissingDocument(String),
    MissingVaccinationCertificate,
    BannedNation,
    WantedCriminal,
}

impl DenialReason {
    pub fn summary(&self) -> String {
        match self {
            DenialReason::MissingDocument(document) => format!("missing required {document}"),
            DenialReason::MissingVaccinationCertificate => {
                "missing required certificate of vaccination".to_string()
            }
            DenialReason::BannedNation => "citizen of banned nation".to_string(),
            DenialReason::WantedCriminal => "Entrant is a wanted criminal".to_string(),
        }
    }
}

/// Byte offset of `needle` in `haystack`, ignoring ASCII case.
pub(crate) fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .to_ascii_lowercase()
        .find(&needle.to_ascii_lowercase())
}

pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    find_ignore_case(haystack, needle).is_some()
}
