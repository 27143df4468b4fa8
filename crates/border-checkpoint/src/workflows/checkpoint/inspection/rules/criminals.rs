use serde::Serialize;
use tracing::debug;

use super::{find_ignore_case, Acceptance, DenialReason, RuleTable};
use crate::workflows::checkpoint::inspection::entrant::EntrantDocuments;
use crate::workflows::checkpoint::inspection::error::ParseError;

const WANTED_PREFIX: &str = "wanted by the state:";

/// Append-only list of wanted full names, matched exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WantedList {
    names: Vec<String>,
}

impl WantedList {
    pub fn add(&mut self, name: impl Into<String>) {
        self.names.push(name.into());
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_wanted(&self, name: &str) -> bool {
        self.names.iter().any(|wanted| wanted == name)
    }
}

impl RuleTable for WantedList {
    fn name(&self) -> &'static str {
        "wanted list"
    }

    fn apply(&mut self, bulletin: &str) -> Result<(), ParseError> {
        let name = find_ignore_case(bulletin, WANTED_PREFIX)
            .map(|index| bulletin[index + WANTED_PREFIX.len()..].trim())
            .filter(|name| !name.is_empty());

        match name {
            Some(name) => self.add(name),
            None => debug!(bulletin, "wanted bulletin names nobody; ignoring"),
        }
        Ok(())
    }

    fn accept(&self, entrant: &EntrantDocuments) -> Acceptance {
        if self.is_wanted(&entrant.name()) {
            Acceptance::Rejected(DenialReason::WantedCriminal)
        } else {
            Acceptance::Accepted
        }
    }

    fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
