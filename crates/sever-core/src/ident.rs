//! Identifier normalization.
//!
//! Neo4j exposes two identifier representations: legacy numeric ids
//! (`id(n)`) and string element ids (`elementId(n)`, shaped like
//! `"4:0afe3c21-…:17"`). Mixing the two in set operations silently breaks
//! membership tests, so every identifier entering or leaving this crate
//! passes through one normalization into an integer key.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Result};

/// Parse either a plain integer or the trailing integer of an element id.
fn parse_key(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(n) = raw.parse::<i64>() {
        return Some(n);
    }
    raw.rsplit(':').next().and_then(|tail| tail.parse().ok())
}

/// Normalized integer key identifying a database node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeRef(pub i64);

impl NodeRef {
    /// Normalize a raw identifier string into a node key.
    ///
    /// Accepts a plain integer (`"42"`) or an element id
    /// (`"4:0afe3c21-…:42"`); both normalize to the same key.
    pub fn normalize(raw: &str) -> Result<Self> {
        parse_key(raw)
            .map(Self)
            .ok_or_else(|| Error::query(format!("unrecognized node identifier '{raw}'")))
    }

    /// The underlying integer key.
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl From<i64> for NodeRef {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Normalized integer key identifying a relationship.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelRef(pub i64);

impl RelRef {
    /// Normalize a raw identifier string into a relationship key.
    pub fn normalize(raw: &str) -> Result<Self> {
        parse_key(raw)
            .map(Self)
            .ok_or_else(|| Error::query(format!("unrecognized relationship identifier '{raw}'")))
    }

    /// The underlying integer key.
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl From<i64> for RelRef {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for RelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
