//! Edge-disjoint path collection.
//!
//! Path discovery is delegated to APOC's `path.expandConfig` running in
//! `RELATIONSHIP_GLOBAL` uniqueness mode, which guarantees that no two
//! returned paths share a relationship. This crate only issues the call
//! and collects the union of edges appearing in any returned path.

use std::collections::HashSet;

use neo4rs::query;
use serde::{Deserialize, Serialize};

use crate::client::GraphClient;
use crate::cypher;
use crate::ident::{NodeRef, RelRef};
use crate::{Error, Result};

/// A relationship appearing in a discovered path.
///
/// Produced only as output; immutable once constructed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipRecord {
    /// Normalized relationship key.
    pub id: RelRef,
    /// Normalized source node key.
    pub source: NodeRef,
    /// Normalized target node key.
    pub target: NodeRef,
    /// Relationship type name.
    #[serde(rename = "type")]
    pub rel_type: String,
}

/// The set of relationships appearing in any edge-disjoint path between
/// start and end.
///
/// Deduplicated by relationship key; iteration preserves the order in
/// which edges were first discovered. Built once per invocation and
/// read-only afterward.
#[derive(Clone, Debug, Default)]
pub struct PathEdgeSet {
    edges: Vec<RelationshipRecord>,
    seen: HashSet<RelRef>,
}

impl PathEdgeSet {
    /// Insert an edge, keeping the first occurrence of each key.
    fn insert(&mut self, record: RelationshipRecord) {
        if self.seen.insert(record.id) {
            self.edges.push(record);
        }
    }

    /// Whether any path edge was collected.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of distinct path edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Edges in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &RelationshipRecord> {
        self.edges.iter()
    }

    /// Whether the given relationship was collected.
    pub fn contains(&self, id: RelRef) -> bool {
        self.seen.contains(&id)
    }

    /// Relationship keys in the form the projection query excludes.
    pub fn excluded_ids(&self) -> Vec<i64> {
        self.edges.iter().map(|e| e.id.as_i64()).collect()
    }
}

impl FromIterator<RelationshipRecord> for PathEdgeSet {
    fn from_iter<I: IntoIterator<Item = RelationshipRecord>>(iter: I) -> Self {
        let mut set = Self::default();
        for record in iter {
            set.insert(record);
        }
        set
    }
}

const EXPAND_QUERY: &str = "\
MATCH (start) WHERE id(start) = $start_id
MATCH (end) WHERE id(end) = $end_id
CALL apoc.path.expandConfig(start, {
    relationshipFilter: $rel_filter,
    labelFilter: $label_filter,
    uniqueness: 'RELATIONSHIP_GLOBAL',
    maxLevel: $max_length,
    terminatorNodes: [end]
})
YIELD path
UNWIND relationships(path) AS rel
RETURN id(rel) AS rel_id,
       id(startNode(rel)) AS source_id,
       id(endNode(rel)) AS target_id,
       type(rel) AS rel_type";

/// Collect the union of edges across all edge-disjoint paths from `start`
/// to `end`, each no longer than `max_length`.
///
/// Empty `rel_types` or `labels` mean "any". `start == end` yields an
/// empty set without touching the server (no cut is meaningful), as does
/// a disconnected pair.
///
/// # Errors
///
/// [`Error::Query`] for `max_length < 1`, invalid type/label names, or a
/// rejected expansion request.
pub async fn collect_paths(
    client: &GraphClient,
    start: NodeRef,
    end: NodeRef,
    rel_types: &[String],
    labels: &[String],
    max_length: i64,
) -> Result<PathEdgeSet> {
    if max_length < 1 {
        return Err(Error::query(format!(
            "max path length must be at least 1, got {max_length}"
        )));
    }
    cypher::validate_identifiers("relationship type", rel_types)?;
    cypher::validate_identifiers("label", labels)?;

    if start == end {
        tracing::debug!(%start, "start equals end, no paths to collect");
        return Ok(PathEdgeSet::default());
    }

    tracing::info!(%start, %end, max_length, "finding edge-disjoint paths");

    let q = query(EXPAND_QUERY)
        .param("start_id", start.as_i64())
        .param("end_id", end.as_i64())
        .param("rel_filter", cypher::pipe_pattern(rel_types))
        .param("label_filter", cypher::pipe_pattern(labels))
        .param("max_length", max_length);

    let rows = client.execute(q).await?;
    let mut edges = PathEdgeSet::default();
    for row in rows {
        let rel_id: i64 = row
            .get("rel_id")
            .map_err(|e| Error::query(format!("malformed expansion row: {e}")))?;
        let source_id: i64 = row
            .get("source_id")
            .map_err(|e| Error::query(format!("malformed expansion row: {e}")))?;
        let target_id: i64 = row
            .get("target_id")
            .map_err(|e| Error::query(format!("malformed expansion row: {e}")))?;
        let rel_type: String = row
            .get("rel_type")
            .map_err(|e| Error::query(format!("malformed expansion row: {e}")))?;

        edges.insert(RelationshipRecord {
            id: RelRef::from(rel_id),
            source: NodeRef::from(source_id),
            target: NodeRef::from(target_id),
            rel_type,
        });
    }

    tracing::info!(count = edges.len(), "collected unique path relationships");
    Ok(edges)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn record(id: i64, source: i64, target: i64) -> RelationshipRecord {
        RelationshipRecord {
            id: RelRef::from(id),
            source: NodeRef::from(source),
            target: NodeRef::from(target),
            rel_type: "T".to_string(),
        }
    }

    #[test]
    fn test_edge_set_dedups_by_id_keeping_first() {
        let set: PathEdgeSet = vec![record(1, 10, 11), record(2, 11, 12), record(1, 99, 99)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
        let first = set.iter().next().unwrap();
        assert_eq!(first.source, NodeRef(10));
    }

    #[test]
    fn test_edge_set_preserves_discovery_order() {
        let set: PathEdgeSet = vec![record(3, 0, 1), record(1, 1, 2), record(2, 2, 3)]
            .into_iter()
            .collect();
        let ids: Vec<i64> = set.iter().map(|e| e.id.as_i64()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_excluded_ids_match_collected_edges() {
        let set: PathEdgeSet = vec![record(5, 0, 1), record(7, 1, 2)].into_iter().collect();
        assert_eq!(set.excluded_ids(), vec![5, 7]);
        assert!(set.contains(RelRef(5)));
        assert!(!set.contains(RelRef(6)));
    }

    #[test]
    fn test_record_serializes_with_type_field() {
        let json = serde_json::to_value(record(1, 2, 3)).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["source"], 2);
        assert_eq!(json["target"], 3);
        assert_eq!(json["type"], "T");
    }
}
