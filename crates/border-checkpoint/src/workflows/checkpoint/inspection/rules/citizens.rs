use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{find_ignore_case, Acceptance, DenialReason, RuleTable};
use crate::workflows::checkpoint::inspection::entrant::EntrantDocuments;
use crate::workflows::checkpoint::inspection::error::ParseError;
use crate::workflows::checkpoint::inspection::lists::parse_list;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Allowance {
    Allow,
    Deny,
}

/// Entry allowance per nation. Nations never mentioned are refused.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CitizenPolicy {
    nations: BTreeMap<String, Allowance>,
}

impl CitizenPolicy {
    pub fn update<I, S>(&mut self, nations: I, allowance: Allowance)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for nation in nations {
            self.nations.insert(nation.into(), allowance);
        }
    }

    pub fn allowance(&self, nation: &str) -> Option<Allowance> {
        self.nations.get(nation).copied()
    }
}

impl RuleTable for CitizenPolicy {
    fn name(&self) -> &'static str {
        "citizen policy"
    }

    fn apply(&mut self, bulletin: &str) -> Result<(), ParseError> {
        let directive = [
            ("allow citizens of", Allowance::Allow),
            ("deny citizens of", Allowance::Deny),
        ]
        .into_iter()
        .filter_map(|(keyword, allowance)| {
            find_ignore_case(bulletin, keyword).map(|index| (index, keyword, allowance))
        })
        .min_by_key(|(index, _, _)| *index);

        let Some((index, keyword, allowance)) = directive else {
            debug!(bulletin, "not an allow/deny bulletin; ignoring");
            return Ok(());
        };

        // Entries are not sanitized: an empty list records the empty nation.
        let nations = bulletin[index + keyword.len()..].trim();
        self.update(parse_list(nations), allowance);
        Ok(())
    }

    fn accept(&self, entrant: &EntrantDocuments) -> Acceptance {
        match self.allowance(entrant.nation()) {
            Some(Allowance::Allow) => Acceptance::Accepted,
            _ => Acceptance::Rejected(DenialReason::BannedNation),
        }
    }

    fn is_empty(&self) -> bool {
        self.nations.is_empty()
    }
}
