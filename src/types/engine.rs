//! Engine identifiers and the engine listing record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Engine/model identifier over an open string domain.
///
/// The catalog variants name the engines the backend documents today; the
/// `Other` arm keeps the type open, since the backend introduces new
/// identifiers over time and unknown ones must round-trip losslessly
/// through decode and re-encode. Construction from a string never fails.
///
/// Equality, ordering and hashing are defined purely over the rendered
/// string, so `EngineId::from("ada")` and `EngineId::Ada` are the same
/// value and an `Other` arm can never alias a catalog member.
#[derive(Debug, Clone)]
pub enum EngineId {
    Ada,
    Babbage,
    Curie,
    Davinci,
    CurieInstructBeta,
    DavinciInstructBeta,
    ContentFilterAlpha,
    Other(String),
}

impl EngineId {
    /// Canonical catalog members, in ascending tier order.
    pub const CATALOG: [EngineId; 7] = [
        EngineId::Ada,
        EngineId::Babbage,
        EngineId::Curie,
        EngineId::Davinci,
        EngineId::CurieInstructBeta,
        EngineId::DavinciInstructBeta,
        EngineId::ContentFilterAlpha,
    ];

    /// Canonical wire rendering of this identifier.
    pub fn as_str(&self) -> &str {
        match self {
            EngineId::Ada => "ada",
            EngineId::Babbage => "babbage",
            EngineId::Curie => "curie",
            EngineId::Davinci => "davinci",
            EngineId::CurieInstructBeta => "curie-instruct-beta",
            EngineId::DavinciInstructBeta => "davinci-instruct-beta",
            EngineId::ContentFilterAlpha => "content-filter-alpha",
            EngineId::Other(id) => id,
        }
    }

    /// Whether this identifier names a catalog member.
    pub fn is_catalog(&self) -> bool {
        !matches!(self, EngineId::Other(_))
    }
}

impl From<&str> for EngineId {
    fn from(id: &str) -> Self {
        match id {
            "ada" => EngineId::Ada,
            "babbage" => EngineId::Babbage,
            "curie" => EngineId::Curie,
            "davinci" => EngineId::Davinci,
            "curie-instruct-beta" => EngineId::CurieInstructBeta,
            "davinci-instruct-beta" => EngineId::DavinciInstructBeta,
            "content-filter-alpha" => EngineId::ContentFilterAlpha,
            other => EngineId::Other(other.to_string()),
        }
    }
}

impl From<String> for EngineId {
    fn from(id: String) -> Self {
        match id.as_str() {
            "ada" => EngineId::Ada,
            "babbage" => EngineId::Babbage,
            "curie" => EngineId::Curie,
            "davinci" => EngineId::Davinci,
            "curie-instruct-beta" => EngineId::CurieInstructBeta,
            "davinci-instruct-beta" => EngineId::DavinciInstructBeta,
            "content-filter-alpha" => EngineId::ContentFilterAlpha,
            _ => EngineId::Other(id),
        }
    }
}

impl fmt::Display for EngineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq for EngineId {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for EngineId {}

impl PartialOrd for EngineId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EngineId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl Hash for EngineId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

// On the wire an engine identifier is a bare string, never an object.
impl Serialize for EngineId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EngineId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        Ok(EngineId::from(id))
    }
}

/// One entry of the engine listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Engine {
    pub id: EngineId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready: Option<bool>,
    /// Unix epoch seconds, when the backend reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
}

impl Engine {
    /// Creation time derived from the stored epoch field.
    ///
    /// Recomputed on every call; never stored separately.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created.and_then(|secs| DateTime::from_timestamp(secs, 0))
    }
}
