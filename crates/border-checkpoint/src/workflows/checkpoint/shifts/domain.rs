use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::workflows::checkpoint::inspection::{Inspector, Verdict};

/// Identifier wrapper for opened shifts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShiftId(pub String);

impl fmt::Display for ShiftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Repository record: a shift and the inspector working its booth.
#[derive(Debug, Clone)]
pub struct ShiftRecord {
    pub id: ShiftId,
    pub inspector: Inspector,
}

impl ShiftRecord {
    pub fn view(&self) -> ShiftView {
        ShiftView {
            shift_id: self.id.clone(),
            bulletin_count: self.inspector.bulletins().len(),
        }
    }
}

/// Externally visible shift state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShiftView {
    pub shift_id: ShiftId,
    pub bulletin_count: usize,
}

/// Body of a bulletin post. May carry several newline-separated lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulletinRequest {
    pub bulletin: String,
}

/// Documents handed over by one entrant, as `document kind -> raw text` in the order the
/// JSON object lists them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentBundle(pub Vec<(String, String)>);

impl DocumentBundle {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(kind, text)| (kind.as_str(), text.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for DocumentBundle
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(kind, text)| (kind.into(), text.into()))
                .collect(),
        )
    }
}

impl Serialize for DocumentBundle {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for DocumentBundle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DocumentBundleVisitor)
    }
}

struct DocumentBundleVisitor;

impl<'de> Visitor<'de> for DocumentBundleVisitor {
    type Value = DocumentBundle;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object mapping document kinds to document text")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut documents = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((kind, text)) = access.next_entry::<String, String>()? {
            documents.push((kind, text));
        }
        Ok(DocumentBundle(documents))
    }
}

/// Verdict rendered for an HTTP caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectionView {
    pub shift_id: ShiftId,
    pub verdict: String,
    pub cleared: bool,
}

impl InspectionView {
    pub fn new(shift_id: ShiftId, verdict: &Verdict) -> Self {
        Self {
            shift_id,
            verdict: verdict.to_string(),
            cleared: verdict.is_cleared(),
        }
    }
}
