use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use super::error::ParseError;

/// Fields coerced into calendar dates when a document is parsed.
const DATE_FIELDS: [&str; 2] = ["dob", "exp"];
const DATE_FORMATS: [&str; 2] = ["%Y.%m.%d", "%Y-%m-%d"];

/// Closed set of papers an entrant may present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    #[serde(rename = "passport")]
    Passport,
    #[serde(rename = "certificate_of_vaccination")]
    CertificateOfVaccination,
    #[serde(rename = "ID_card")]
    IdCard,
    #[serde(rename = "access_permit")]
    AccessPermit,
    #[serde(rename = "work_pass")]
    WorkPass,
    #[serde(rename = "grant_of_asylum")]
    GrantOfAsylum,
    #[serde(rename = "diplomatic_authorization")]
    DiplomaticAuthorization,
}

impl DocumentKind {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Passport,
            Self::CertificateOfVaccination,
            Self::IdCard,
            Self::AccessPermit,
            Self::WorkPass,
            Self::GrantOfAsylum,
            Self::DiplomaticAuthorization,
        ]
    }

    /// Identifier used when documents are submitted.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Passport => "passport",
            Self::CertificateOfVaccination => "certificate_of_vaccination",
            Self::IdCard => "ID_card",
            Self::AccessPermit => "access_permit",
            Self::WorkPass => "work_pass",
            Self::GrantOfAsylum => "grant_of_asylum",
            Self::DiplomaticAuthorization => "diplomatic_authorization",
        }
    }

    /// Human wording, as bulletins and verdicts spell it.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Passport => "passport",
            Self::CertificateOfVaccination => "certificate of vaccination",
            Self::IdCard => "ID card",
            Self::AccessPermit => "access permit",
            Self::WorkPass => "work pass",
            Self::GrantOfAsylum => "grant of asylum",
            Self::DiplomaticAuthorization => "diplomatic authorization",
        }
    }
}

impl FromStr for DocumentKind {
    type Err = ParseError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|kind| kind.key() == key)
            .ok_or_else(|| ParseError::UnknownDocumentKind(key.to_string()))
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single document field. Only `dob` and `exp` become dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Date(NaiveDate),
    Text(String),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(value),
            FieldValue::Date(_) => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(date) => Some(*date),
            FieldValue::Text(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Date(date) => write!(f, "{}", date.format("%Y.%m.%d")),
            FieldValue::Text(value) => f.write_str(value),
        }
    }
}

/// Field map of one document, keyed by lower-cased field name in the order fields appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDocument {
    fields: Vec<(String, FieldValue)>,
}

impl ParsedDocument {
    /// Parse `KEY: value` lines. Lines without a colon produce an empty value; blank lines
    /// are skipped. A repeated key overwrites the earlier value in place.
    pub fn parse(text: &str) -> Self {
        let mut document = Self::default();

        for line in text.lines().filter(|line| !line.trim().is_empty()) {
            let (key, value) = match line.split_once(':') {
                Some((key, value)) => (key, value.trim()),
                None => (line, ""),
            };
            let key = key.trim().to_lowercase();
            let value = if DATE_FIELDS.contains(&key.as_str()) {
                parse_date(value)
                    .map(FieldValue::Date)
                    .unwrap_or_else(|| FieldValue::Text(value.to_string()))
            } else {
                FieldValue::Text(value.to_string())
            };
            document.insert(key, value);
        }

        document
    }

    pub fn insert(&mut self, key: impl Into<String>, value: FieldValue) {
        let key = key.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FieldValue::as_text)
    }

    pub fn date(&self, key: &str) -> Option<NaiveDate> {
        self.get(key).and_then(FieldValue::as_date)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for ParsedDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}
