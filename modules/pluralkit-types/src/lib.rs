//! Shared types for the PluralKit registry API responses consumed by the bot.
//!
//! Only the fields the bot reads are typed; everything else a member record
//! carries is kept as opaque JSON so it survives a round trip untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =====================================================
// Domain Types
// =====================================================

/// A registered system, as returned by `GET /a/{account}` and `GET /s/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct System {
    pub id: String,
}

/// One member of a system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Member {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            extra: Map::new(),
        }
    }
}

/// Body of `GET /s/{id}/fronters`; the registry lists the current fronter first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fronters {
    #[serde(default)]
    pub members: Vec<Member>,
}
