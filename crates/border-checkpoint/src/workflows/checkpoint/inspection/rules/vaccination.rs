use std::collections::BTreeMap;

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use tracing::debug;

use super::{find_ignore_case, Acceptance, DenialReason, RuleTable};
use crate::workflows::checkpoint::inspection::documents::DocumentKind;
use crate::workflows::checkpoint::inspection::entrant::EntrantDocuments;
use crate::workflows::checkpoint::inspection::error::ParseError;
use crate::workflows::checkpoint::inspection::lists::parse_list;

const LIFT_KEYWORD: &str = "no longer require";
const CITIZENS_KEYWORD: &str = "citizens of";
const REQUIRE_KEYWORD: &str = "require";
const VACCINATION_KEYWORD: &str = "vaccination";

/// State of one vaccine. A lifted requirement serializes as an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VaccineRequirement {
    Required(Vec<String>),
    Lifted,
}

impl VaccineRequirement {
    pub fn nations(&self) -> &[String] {
        match self {
            VaccineRequirement::Required(nations) => nations,
            VaccineRequirement::Lifted => &[],
        }
    }
}

impl Serialize for VaccineRequirement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let nations = self.nations();
        let mut seq = serializer.serialize_seq(Some(nations.len()))?;
        for nation in nations {
            seq.serialize_element(nation)?;
        }
        seq.end()
    }
}

/// Vaccines required per nation. A vaccine absent from the table was never mentioned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VaccinationPolicy {
    vaccines: BTreeMap<String, VaccineRequirement>,
}

impl VaccinationPolicy {
    /// `None` lifts the requirement. New nations extend an active requirement (duplicates
    /// kept); a vaccine that is new or lifted starts over from the given list.
    pub fn update(&mut self, vaccine: &str, nations: Option<Vec<String>>) {
        let Some(nations) = nations else {
            self.vaccines
                .insert(vaccine.to_string(), VaccineRequirement::Lifted);
            return;
        };

        if let Some(VaccineRequirement::Required(current)) = self.vaccines.get_mut(vaccine) {
            current.extend(nations);
            return;
        }

        self.vaccines
            .insert(vaccine.to_string(), VaccineRequirement::Required(nations));
    }

    pub fn requirement(&self, vaccine: &str) -> Option<&VaccineRequirement> {
        self.vaccines.get(vaccine)
    }

    /// Nations currently required to carry `vaccine`; empty once lifted.
    pub fn nations_for(&self, vaccine: &str) -> Option<&[String]> {
        self.requirement(vaccine).map(VaccineRequirement::nations)
    }

    pub fn is_required(&self, vaccine: &str, nation: &str) -> bool {
        self.nations_for(vaccine)
            .is_some_and(|nations| nations.iter().any(|required| required == nation))
    }
}

impl RuleTable for VaccinationPolicy {
    fn name(&self) -> &'static str {
        "vaccination policy"
    }

    fn apply(&mut self, bulletin: &str) -> Result<(), ParseError> {
        if let Some(vaccine) = lifted_vaccine(bulletin) {
            self.update(vaccine, None);
            return Ok(());
        }

        match required_vaccine(bulletin) {
            Some((nations, vaccine)) => self.update(vaccine, Some(parse_list(nations))),
            None => debug!(bulletin, "vaccination bulletin has no nation list; ignoring"),
        }
        Ok(())
    }

    fn accept(&self, entrant: &EntrantDocuments) -> Acceptance {
        let nation = entrant.nation();
        let required = self
            .vaccines
            .values()
            .any(|requirement| requirement.nations().iter().any(|n| n == nation));

        if required && !entrant.has_document(DocumentKind::CertificateOfVaccination) {
            Acceptance::Rejected(DenialReason::MissingVaccinationCertificate)
        } else {
            Acceptance::Accepted
        }
    }

    fn is_empty(&self) -> bool {
        self.vaccines.is_empty()
    }
}

/// `"... no longer require <vaccine> vaccination"`
fn lifted_vaccine(bulletin: &str) -> Option<&str> {
    let start = find_ignore_case(bulletin, LIFT_KEYWORD)? + LIFT_KEYWORD.len();
    vaccine_before_keyword(bulletin, start)
}

/// `"Citizens of <nations> require <vaccine> vaccination"`
fn required_vaccine(bulletin: &str) -> Option<(&str, &str)> {
    let nations_start = find_ignore_case(bulletin, CITIZENS_KEYWORD)? + CITIZENS_KEYWORD.len();
    let require_at = nations_start + find_ignore_case(&bulletin[nations_start..], REQUIRE_KEYWORD)?;
    let nations = bulletin[nations_start..require_at].trim();
    let vaccine = vaccine_before_keyword(bulletin, require_at + REQUIRE_KEYWORD.len())?;

    Some((nations, vaccine))
}

fn vaccine_before_keyword(bulletin: &str, start: usize) -> Option<&str> {
    let end = start + find_ignore_case(&bulletin[start..], VACCINATION_KEYWORD)?;
    let vaccine = bulletin[start..end].trim();
    (!vaccine.is_empty()).then_some(vaccine)
}
