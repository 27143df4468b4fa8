//! Rule tables fed by bulletins and the ordered inspection pipeline that turns an entrant's
//! documents into a verdict.
//!
//! Bulletins are routed line by line to one of four tables (document requirements,
//! vaccinations, citizen allowances, wanted criminals). An inspection parses the submitted
//! documents, checks the wanted list, cross-validates the documents, and then consults the
//! remaining tables in a fixed order.

mod config;
pub mod documents;
pub mod entrant;
mod error;
mod inspector;
pub(crate) mod lists;
pub mod rules;

#[cfg(test)]
mod tests;

/// The nation operating the checkpoint.
pub const HOME_NATION: &str = "Arstotzka";

pub use config::InspectionConfig;
pub use documents::{DocumentKind, FieldValue, ParsedDocument};
pub use entrant::{EntrantDocuments, ValidationIssue};
pub use error::ParseError;
pub use inspector::{route_bulletin, BulletinTarget, Inspector, RuleSnapshot, Verdict};
pub use lists::parse_list;
pub use rules::{
    Acceptance, Allowance, CitizenPolicy, DenialReason, DocumentRequirements, Requirement,
    RuleTable, Subject, VaccinationPolicy, VaccineRequirement, WantedList,
};
