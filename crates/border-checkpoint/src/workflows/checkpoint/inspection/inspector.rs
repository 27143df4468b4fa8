use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use super::config::InspectionConfig;
use super::entrant::{EntrantDocuments, ValidationIssue};
use super::error::ParseError;
use super::rules::{
    contains_ignore_case, Acceptance, CitizenPolicy, DocumentRequirements, RuleTable,
    VaccinationPolicy, WantedList,
};
use super::HOME_NATION;

/// Final answer handed to the entrant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Detainment(String),
    EntryDenied(String),
    Glory,
    CauseNoTrouble,
}

impl Verdict {
    /// Whether the entrant may cross.
    pub fn is_cleared(&self) -> bool {
        matches!(self, Verdict::Glory | Verdict::CauseNoTrouble)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Detainment(reason) => write!(f, "Detainment: {reason}."),
            Verdict::EntryDenied(reason) => write!(f, "Entry denied: {reason}."),
            Verdict::Glory => write!(f, "Glory to {HOME_NATION}."),
            Verdict::CauseNoTrouble => write!(f, "Cause no trouble."),
        }
    }
}

/// Table a bulletin line is delivered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BulletinTarget {
    Vaccinations,
    Criminals,
    Citizens,
    Documents,
}

/// Keyword sniffing, first match wins: `vaccination`, `wanted`, then `citizens` (document
/// table when the line also says `require`); everything else states a document requirement.
pub fn route_bulletin(bulletin: &str) -> BulletinTarget {
    if contains_ignore_case(bulletin, "vaccination") {
        BulletinTarget::Vaccinations
    } else if contains_ignore_case(bulletin, "wanted") {
        BulletinTarget::Criminals
    } else if contains_ignore_case(bulletin, "citizens") {
        if contains_ignore_case(bulletin, "require") {
            BulletinTarget::Documents
        } else {
            BulletinTarget::Citizens
        }
    } else {
        BulletinTarget::Documents
    }
}

/// Serializable view of all four rule tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSnapshot {
    pub documents: DocumentRequirements,
    pub vaccinations: VaccinationPolicy,
    pub citizens: CitizenPolicy,
    pub criminals: WantedList,
}

/// One booth's inspector. Owns its rule tables exclusively; bulletins mutate them and every
/// later inspection reads them.
#[derive(Debug, Clone, Default)]
pub struct Inspector {
    config: InspectionConfig,
    documents: DocumentRequirements,
    vaccinations: VaccinationPolicy,
    citizens: CitizenPolicy,
    criminals: WantedList,
    bulletins: Vec<String>,
}

impl Inspector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: InspectionConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Route each line of a bulletin batch to its table, in order.
    ///
    /// Blank lines are skipped. The first malformed line aborts the batch; lines before it
    /// stay applied.
    pub fn receive_bulletin(&mut self, bulletins: &str) -> Result<(), ParseError> {
        for line in bulletins.lines().filter(|line| !line.trim().is_empty()) {
            self.bulletins.push(line.to_string());
            let table = self.table_mut(route_bulletin(line));
            debug!(table = table.name(), bulletin = line, "routing bulletin");
            table.apply(line)?;
        }
        Ok(())
    }

    /// Parse and inspect a `document kind -> raw text` listing.
    pub fn inspect<I, K, V>(&self, documents: I) -> Result<Verdict, ParseError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut entrant = EntrantDocuments::from_raw(documents)?;
        Ok(self.inspect_entrant(&mut entrant))
    }

    pub fn inspect_entrant(&self, entrant: &mut EntrantDocuments) -> Verdict {
        let verdict = self.decide(entrant);
        info!(entrant = %entrant.name(), %verdict, "inspection complete");
        verdict
    }

    fn decide(&self, entrant: &mut EntrantDocuments) -> Verdict {
        if let Acceptance::Rejected(reason) = self.criminals.accept(entrant) {
            debug!(table = self.criminals.name(), "entrant detained");
            return Verdict::Detainment(reason.summary());
        }

        let issues = entrant.validate(self.config.expiry_cutoff);
        if let Some(first) = issues.first() {
            let reason = first.to_string();
            return if issues.iter().any(ValidationIssue::is_mismatch) {
                Verdict::Detainment(reason)
            } else {
                Verdict::EntryDenied(reason)
            };
        }

        let screening: [&dyn RuleTable; 3] = [&self.documents, &self.vaccinations, &self.citizens];
        for table in screening {
            if let Acceptance::Rejected(reason) = table.accept(entrant) {
                debug!(table = table.name(), "entry denied");
                return Verdict::EntryDenied(reason.summary());
            }
        }

        if entrant.nation() == HOME_NATION {
            Verdict::Glory
        } else {
            Verdict::CauseNoTrouble
        }
    }

    fn table_mut(&mut self, target: BulletinTarget) -> &mut dyn RuleTable {
        match target {
            BulletinTarget::Vaccinations => &mut self.vaccinations,
            BulletinTarget::Criminals => &mut self.criminals,
            BulletinTarget::Citizens => &mut self.citizens,
            BulletinTarget::Documents => &mut self.documents,
        }
    }

    pub fn config(&self) -> &InspectionConfig {
        &self.config
    }

    /// Every bulletin line received so far.
    pub fn bulletins(&self) -> &[String] {
        &self.bulletins
    }

    pub fn documents(&self) -> &DocumentRequirements {
        &self.documents
    }

    pub fn vaccinations(&self) -> &VaccinationPolicy {
        &self.vaccinations
    }

    pub fn citizens(&self) -> &CitizenPolicy {
        &self.citizens
    }

    pub fn criminals(&self) -> &WantedList {
        &self.criminals
    }

    /// True until a bulletin has changed any table.
    pub fn is_empty(&self) -> bool {
        let tables: [&dyn RuleTable; 4] = [
            &self.documents,
            &self.vaccinations,
            &self.citizens,
            &self.criminals,
        ];
        tables.iter().all(|table| table.is_empty())
    }

    pub fn snapshot(&self) -> RuleSnapshot {
        RuleSnapshot {
            documents: self.documents.clone(),
            vaccinations: self.vaccinations.clone(),
            citizens: self.citizens.clone(),
            criminals: self.criminals.clone(),
        }
    }
}
