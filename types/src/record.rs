//! Voter registration record.
//!
//! Clients still call this a "vote", but each entry is a per-voter identity
//! record keyed by `ID`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::TypesError;

/// A voter registration entry as stored in world state.
///
/// Field declaration order is the serialization order. It must stay
/// alphabetical so every endorsing peer produces identical bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoterRecord {
    #[serde(rename = "Candidate")]
    pub candidate: String,

    /// National identity number.
    #[serde(rename = "CPR")]
    pub cpr: String,

    /// Primary key; also the world-state key.
    #[serde(rename = "ID")]
    pub id: String,

    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "PoliticalParty")]
    pub political_party: String,
}

impl VoterRecord {
    pub fn new(
        id: impl Into<String>,
        candidate: impl Into<String>,
        cpr: impl Into<String>,
        name: impl Into<String>,
        political_party: impl Into<String>,
    ) -> Self {
        Self {
            candidate: candidate.into(),
            cpr: cpr.into(),
            id: id.into(),
            name: name.into(),
            political_party: political_party.into(),
        }
    }

    /// Encode as the canonical JSON bytes written to world state.
    pub fn to_bytes(&self) -> Result<Vec<u8>, TypesError> {
        serde_json::to_vec(self).map_err(|e| TypesError::Serialization(e.to_string()))
    }

    /// Decode a world-state value.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TypesError> {
        serde_json::from_slice(bytes).map_err(|e| TypesError::Deserialization(e.to_string()))
    }
}

impl fmt::Display for VoterRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.id, self.name, self.political_party)
    }
}
