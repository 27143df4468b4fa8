use std::fmt;

use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::documents::{DocumentKind, ParsedDocument};
use super::error::ParseError;
use super::lists::parse_list;
use super::HOME_NATION;

const EXPIRY_FIELD: &str = "exp";

/// Per-entrant problem found while cross-checking documents. Collected, never raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum ValidationIssue {
    Mismatch { field: String },
    Expired { kind: DocumentKind },
    InvalidDiplomaticAuthorization,
}

impl ValidationIssue {
    /// Mismatched papers are grounds for detainment rather than a plain denial.
    pub fn is_mismatch(&self) -> bool {
        matches!(self, ValidationIssue::Mismatch { .. })
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::Mismatch { field } => {
                write!(f, "{} mismatch", humanize_field(field))
            }
            ValidationIssue::Expired { kind } => write!(f, "{} expired", kind.label()),
            ValidationIssue::InvalidDiplomaticAuthorization => write!(
                f,
                "invalid {}",
                DocumentKind::DiplomaticAuthorization.label()
            ),
        }
    }
}

fn humanize_field(field: &str) -> String {
    match field {
        "id#" => "ID number".to_string(),
        "nation" => "nationality".to_string(),
        other => other.replace('_', " "),
    }
}

/// Documents presented by one entrant, in the order they were handed over.
#[derive(Debug, Clone, Default)]
pub struct EntrantDocuments {
    documents: Vec<(DocumentKind, ParsedDocument)>,
    issues: Vec<ValidationIssue>,
}

impl EntrantDocuments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `document kind -> raw text` listing, failing on the first unknown kind.
    pub fn from_raw<I, K, V>(raw: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut entrant = Self::new();
        for (kind, text) in raw {
            entrant.add(kind.as_ref(), text.as_ref())?;
        }
        Ok(entrant)
    }

    pub fn add(&mut self, kind: &str, text: &str) -> Result<&mut Self, ParseError> {
        let kind = kind.parse::<DocumentKind>()?;
        self.insert(kind, ParsedDocument::parse(text));
        Ok(self)
    }

    /// Handing over the same kind twice replaces the first copy but keeps its position.
    pub fn insert(&mut self, kind: DocumentKind, document: ParsedDocument) {
        match self.documents.iter_mut().find(|(held, _)| *held == kind) {
            Some((_, slot)) => *slot = document,
            None => self.documents.push((kind, document)),
        }
    }

    pub fn document(&self, kind: DocumentKind) -> Option<&ParsedDocument> {
        self.documents
            .iter()
            .find(|(held, _)| *held == kind)
            .map(|(_, document)| document)
    }

    pub fn has_document(&self, kind: DocumentKind) -> bool {
        self.document(kind).is_some()
    }

    pub fn document_kinds(&self) -> Vec<DocumentKind> {
        self.documents.iter().map(|(kind, _)| *kind).collect()
    }

    /// Held document kinds in human wording (`"ID card"`, `"access permit"`).
    pub fn document_labels(&self) -> Vec<&'static str> {
        self.documents.iter().map(|(kind, _)| kind.label()).collect()
    }

    /// Display name derived from the passport's `Last, First` name field.
    pub fn name(&self) -> String {
        self.document(DocumentKind::Passport)
            .and_then(|passport| passport.text("name"))
            .and_then(|name| name.split_once(", "))
            .map(|(last, first)| format!("{first} {last}"))
            .unwrap_or_default()
    }

    /// Nationality according to the passport, empty when no passport was presented.
    pub fn nation(&self) -> &str {
        self.document(DocumentKind::Passport)
            .and_then(|passport| passport.text("nation"))
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Cross-check the documents and record every issue found.
    ///
    /// For each document, in order: field mismatches against every later document
    /// (expiry dates may differ), then its own expiry against `expiry_cutoff`, then the
    /// access list of a diplomatic authorization.
    pub fn validate(&mut self, expiry_cutoff: NaiveDate) -> &[ValidationIssue] {
        let mut issues = Vec::new();

        for (index, (kind, document)) in self.documents.iter().enumerate() {
            for (_, later) in &self.documents[index + 1..] {
                for (field, value) in document.fields() {
                    if field == EXPIRY_FIELD {
                        continue;
                    }
                    if later.get(field).is_some_and(|other| other != value) {
                        issues.push(ValidationIssue::Mismatch {
                            field: field.to_string(),
                        });
                    }
                }
            }

            if document
                .date(EXPIRY_FIELD)
                .is_some_and(|expiry| expiry <= expiry_cutoff)
            {
                issues.push(ValidationIssue::Expired { kind: *kind });
            }

            if *kind == DocumentKind::DiplomaticAuthorization && !grants_home_access(document) {
                issues.push(ValidationIssue::InvalidDiplomaticAuthorization);
            }
        }

        self.issues = issues;
        &self.issues
    }
}

/// An authorization without an access list is not checked.
fn grants_home_access(document: &ParsedDocument) -> bool {
    match document.text("access") {
        Some(access) if !access.is_empty() => {
            parse_list(access).iter().any(|nation| nation == HOME_NATION)
        }
        _ => true,
    }
}

impl Serialize for EntrantDocuments {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.documents.len()))?;
        for (kind, document) in &self.documents {
            map.serialize_entry(kind.key(), document)?;
        }
        map.end()
    }
}
