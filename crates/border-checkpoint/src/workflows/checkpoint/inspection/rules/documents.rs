use serde::Serialize;

use super::{contains_ignore_case, find_ignore_case, Acceptance, DenialReason, RuleTable};
use crate::workflows::checkpoint::inspection::documents::DocumentKind;
use crate::workflows::checkpoint::inspection::entrant::EntrantDocuments;
use crate::workflows::checkpoint::inspection::error::ParseError;
use crate::workflows::checkpoint::inspection::lists::parse_list;
use crate::workflows::checkpoint::inspection::HOME_NATION;

const REQUIRE_KEYWORD: &str = "require";
const CITIZENS_KEYWORD: &str = "citizens of";
/// Nations are only read after the capitalized form.
const CITIZENS_LITERAL: &str = "Citizens of";
const FOREIGNERS_KEYWORD: &str = "foreigners";
/// The only free-form subject that is matched against entrants.
const ENTRANTS: &str = "entrants";

/// Papers that stand in for a missing access permit.
const ACCESS_PERMIT_SUBSTITUTES: [DocumentKind; 2] = [
    DocumentKind::DiplomaticAuthorization,
    DocumentKind::GrantOfAsylum,
];

/// Who a document requirement applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "subject_type", rename_all = "snake_case")]
pub enum Subject {
    Citizens { countries: Vec<String> },
    Foreigners,
    Others { name: String },
}

impl Subject {
    /// Parse the text to the left of `require`. `Foreigners` wins over `Citizens of`, which
    /// must be capitalized and followed by at least one nation; anything else is kept as a lower-cased group name such as `entrants` or `workers`.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        if contains_ignore_case(text, FOREIGNERS_KEYWORD) {
            return Ok(Subject::Foreigners);
        }

        if let Some(index) = find_ignore_case(text, CITIZENS_KEYWORD) {
            let invalid = || ParseError::InvalidSubject {
                subject: text.trim().to_string(),
            };
            if !text[index..].starts_with(CITIZENS_LITERAL) {
                return Err(invalid());
            }
            let countries = text[index + CITIZENS_LITERAL.len()..].trim();
            if countries.is_empty() {
                return Err(invalid());
            }
            return Ok(Subject::Citizens {
                countries: parse_list(countries),
            });
        }

        Ok(Subject::Others {
            name: text.trim().to_lowercase(),
        })
    }

    /// Groups other than `entrants` (e.g. `workers`) are stored but never match.
    pub fn applies_to(&self, entrant: &EntrantDocuments) -> bool {
        match self {
            Subject::Others { name } => name == ENTRANTS,
            Subject::Foreigners => entrant.nation() != HOME_NATION,
            Subject::Citizens { countries } => {
                let nation = entrant.nation();
                countries.iter().any(|country| country == nation)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Requirement {
    pub subject: Subject,
    pub document: String,
}

impl Requirement {
    /// Parse `"<subject> require <document>"`. The split is on the literal, lower-case
    /// `require`, and the document name keeps its spaces (`"access permit"`).
    pub fn parse(bulletin: &str) -> Result<Self, ParseError> {
        let missing = || ParseError::MissingRequirement {
            bulletin: bulletin.to_string(),
        };

        let (subject, rest) = bulletin.split_once(REQUIRE_KEYWORD).ok_or_else(missing)?;
        let document = rest.split(REQUIRE_KEYWORD).next().unwrap_or(rest).trim();
        if document.is_empty() {
            return Err(missing());
        }

        Ok(Self {
            subject: Subject::parse(subject)?,
            document: document.to_string(),
        })
    }
}

/// Ordered document requirements; the first unmet one decides the denial.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DocumentRequirements {
    requirements: Vec<Requirement>,
}

impl DocumentRequirements {
    pub fn add(&mut self, requirement: Requirement) {
        self.requirements.push(requirement);
    }

    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }
}

impl RuleTable for DocumentRequirements {
    fn name(&self) -> &'static str {
        "document requirements"
    }

    fn apply(&mut self, bulletin: &str) -> Result<(), ParseError> {
        self.add(Requirement::parse(bulletin)?);
        Ok(())
    }

    fn accept(&self, entrant: &EntrantDocuments) -> Acceptance {
        let held = entrant.document_labels();
        let holds = |label: &str| held.iter().any(|document| *document == label);

        for Requirement { subject, document } in &self.requirements {
            if !subject.applies_to(entrant) || holds(document.as_str()) {
                continue;
            }
            if document == DocumentKind::AccessPermit.label()
                && ACCESS_PERMIT_SUBSTITUTES
                    .iter()
                    .any(|substitute| holds(substitute.label()))
            {
                continue;
            }
            return Acceptance::Rejected(DenialReason::MissingDocument(document.clone()));
        }

        Acceptance::Accepted
    }

    fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }
}
