//! Cypher condition building.
//!
//! Pure, deterministic string construction for the filter fragments that
//! go into the path-expansion call and the projection query. No I/O.
//!
//! Labels and relationship types are interpolated into query text (Cypher
//! has no parameter form for them), so [`validate_identifiers`] must be
//! called on caller-supplied names before any fragment reaches the server.

use crate::{Error, Result};

/// Check that a caller-supplied label or relationship type is a plain
/// Cypher identifier: `[A-Za-z_][A-Za-z0-9_]*`.
pub fn validate_identifier(kind: &str, name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(Error::query(format!("invalid {kind} '{name}'")))
    }
}

/// Validate a whole list of labels or relationship types.
pub fn validate_identifiers(kind: &str, names: &[String]) -> Result<()> {
    for name in names {
        validate_identifier(kind, name)?;
    }
    Ok(())
}

/// Predicate true for any node carrying at least one of `labels`.
///
/// `label_condition("a", ["Person", "Org"])` yields `"a:Person OR a:Org"`.
/// An empty label set yields the always-true predicate `"true"`.
pub fn label_condition(var: &str, labels: &[String]) -> String {
    if labels.is_empty() {
        return "true".to_string();
    }
    labels
        .iter()
        .map(|label| format!("{var}:{label}"))
        .collect::<Vec<_>>()
        .join(" OR ")
}

/// Predicate true for any relationship of one of `types`.
///
/// An empty type set yields the always-true predicate `"true"`.
pub fn rel_type_condition(var: &str, types: &[String]) -> String {
    if types.is_empty() {
        return "true".to_string();
    }
    types
        .iter()
        .map(|t| format!("type({var}) = '{t}'"))
        .collect::<Vec<_>>()
        .join(" OR ")
}

/// Pipe-joined pattern for APOC relationship and label filters.
///
/// `pipe_pattern(["KNOWS", "WORKS_AT"])` yields `"KNOWS|WORKS_AT"`; an
/// empty set yields `""`, which APOC treats as "any".
pub fn pipe_pattern(items: &[String]) -> String {
    items.join("|")
}
