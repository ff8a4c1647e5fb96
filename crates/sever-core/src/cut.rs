//! Cut classification.
//!
//! After the path edges are removed and the residual graph is labeled,
//! a path edge belongs to the min-cut exactly when it crosses out of the
//! start node's component: one endpoint shares the start component, the
//! other does not.

use crate::labeler::ComponentLabels;
use crate::paths::{PathEdgeSet, RelationshipRecord};
use crate::ident::NodeRef;
use crate::Result;

/// Classify the collected path edges against the component labeling.
///
/// Returns the cut edges in the discovery order of `path_edges`.
/// Duplicates cannot occur since the edge set is already deduplicated.
///
/// An empty `path_edges` yields an empty cut without consulting the
/// labels at all. If start and end share a component after path removal,
/// the residual graph still connects them and no cut is reported.
///
/// # Errors
///
/// [`crate::Error::NotFound`] if the start node, end node, or any edge
/// endpoint is absent from the labeling (filtered out of the
/// projection). Nodes left isolated by path removal are projected and
/// labeled, so they never trip this.
pub fn classify_cut(
    path_edges: &PathEdgeSet,
    labels: &ComponentLabels,
    start: NodeRef,
    end: NodeRef,
) -> Result<Vec<RelationshipRecord>> {
    if path_edges.is_empty() {
        return Ok(Vec::new());
    }

    let start_component = labels.component_of(start)?;
    let end_component = labels.component_of(end)?;

    if start_component == end_component {
        tracing::warn!(
            %start, %end, component = start_component,
            "start and end share a component after path removal, no cut"
        );
        return Ok(Vec::new());
    }

    let mut cut = Vec::new();
    for edge in path_edges.iter() {
        let source_side = labels.component_of(edge.source)? == start_component;
        let target_side = labels.component_of(edge.target)? == start_component;
        if source_side != target_side {
            cut.push(edge.clone());
        }
    }

    tracing::info!(edges = cut.len(), "identified min-cut relationships");
    Ok(cut)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ident::RelRef;
    use crate::Error;

    fn edge(id: i64, source: i64, target: i64) -> RelationshipRecord {
        RelationshipRecord {
            id: RelRef::from(id),
            source: NodeRef::from(source),
            target: NodeRef::from(target),
            rel_type: "T".to_string(),
        }
    }

    fn edge_set(edges: Vec<RelationshipRecord>) -> PathEdgeSet {
        edges.into_iter().collect()
    }

    #[test]
    fn test_empty_edge_set_yields_empty_cut_without_labels() {
        // Labels are empty too; classify must not consult them.
        let cut = classify_cut(
            &PathEdgeSet::default(),
            &ComponentLabels::default(),
            NodeRef(1),
            NodeRef(2),
        )
        .unwrap();
        assert!(cut.is_empty());
    }

    #[test]
    fn test_same_component_means_no_cut() {
        let edges = edge_set(vec![edge(1, 10, 11)]);
        let labels =
            ComponentLabels::from_pairs([(NodeRef(10), 0), (NodeRef(11), 0), (NodeRef(12), 0)]);
        let cut = classify_cut(&edges, &labels, NodeRef(10), NodeRef(12)).unwrap();
        assert!(cut.is_empty());
    }

    #[test]
    fn test_missing_start_is_not_found() {
        let edges = edge_set(vec![edge(1, 10, 11)]);
        let labels = ComponentLabels::from_pairs([(NodeRef(11), 1)]);
        let err = classify_cut(&edges, &labels, NodeRef(10), NodeRef(11)).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_missing_endpoint_is_not_found() {
        // Start and end are labeled, but an edge endpoint fell out of the
        // projection (all its relationships were path edges).
        let edges = edge_set(vec![edge(1, 10, 50)]);
        let labels = ComponentLabels::from_pairs([(NodeRef(10), 0), (NodeRef(11), 1)]);
        let err = classify_cut(&edges, &labels, NodeRef(10), NodeRef(11)).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    // Diamond graph A(1)-B(2), B-D(4), A-C(3), C-D: both disjoint paths
    // are removed, leaving {A} and {B,C,D} as residual components when
    // B-C edges survive. Exactly the two edges incident to A cross.
    #[test]
    fn test_diamond_graph_two_edge_cut() {
        let edges = edge_set(vec![
            edge(101, 1, 2), // A-B
            edge(102, 2, 4), // B-D
            edge(103, 1, 3), // A-C
            edge(104, 3, 4), // C-D
        ]);
        let labels = ComponentLabels::from_pairs([
            (NodeRef(1), 0),
            (NodeRef(2), 5),
            (NodeRef(3), 5),
            (NodeRef(4), 5),
        ]);

        let cut = classify_cut(&edges, &labels, NodeRef(1), NodeRef(4)).unwrap();
        let ids: Vec<i64> = cut.iter().map(|e| e.id.as_i64()).collect();
        assert_eq!(ids, vec![101, 103]);
    }

    #[test]
    fn test_cut_respects_discovery_order() {
        let edges = edge_set(vec![
            edge(104, 3, 4),
            edge(101, 1, 2),
            edge(103, 1, 3),
            edge(102, 2, 4),
        ]);
        let labels = ComponentLabels::from_pairs([
            (NodeRef(1), 0),
            (NodeRef(2), 5),
            (NodeRef(3), 5),
            (NodeRef(4), 5),
        ]);

        let cut = classify_cut(&edges, &labels, NodeRef(1), NodeRef(4)).unwrap();
        let ids: Vec<i64> = cut.iter().map(|e| e.id.as_i64()).collect();
        // 101 and 103 cross; order follows the edge set, not id order.
        assert_eq!(ids, vec![101, 103]);
    }

    #[test]
    fn test_cut_never_invents_edges_and_never_stays_inside_one_component() {
        let edges = edge_set(vec![
            edge(1, 10, 20),
            edge(2, 20, 30),
            edge(3, 10, 40),
            edge(4, 40, 30),
        ]);
        let labels = ComponentLabels::from_pairs([
            (NodeRef(10), 0),
            (NodeRef(20), 1),
            (NodeRef(30), 1),
            (NodeRef(40), 0),
        ]);

        let cut = classify_cut(&edges, &labels, NodeRef(10), NodeRef(30)).unwrap();
        for e in &cut {
            assert!(edges.contains(e.id), "classifier invented an edge");
            assert_ne!(
                labels.component_of(e.source).unwrap(),
                labels.component_of(e.target).unwrap(),
                "cut edge has both endpoints in one component"
            );
        }
        let ids: Vec<i64> = cut.iter().map(|e| e.id.as_i64()).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    // Single path A-B-C-D: the one disjoint path consumes every edge,
    // leaving all four nodes isolated, each in its own component. Only
    // A-B has an endpoint in the start node's component, so the cut is
    // exactly that one edge.
    #[test]
    fn test_fully_consumed_chain_yields_one_edge_cut() {
        let edges = edge_set(vec![edge(1, 1, 2), edge(2, 2, 3), edge(3, 3, 4)]);
        let labels = ComponentLabels::from_pairs([
            (NodeRef(1), 0),
            (NodeRef(2), 1),
            (NodeRef(3), 2),
            (NodeRef(4), 3),
        ]);

        let cut = classify_cut(&edges, &labels, NodeRef(1), NodeRef(4)).unwrap();
        let ids: Vec<i64> = cut.iter().map(|e| e.id.as_i64()).collect();
        assert_eq!(ids, vec![1]);
    }

    // Diamond where both disjoint paths are consumed and no edges
    // survive at all: every node isolated, every component distinct.
    // The two edges incident to A cross out of A's component; the two
    // incident to D do not touch it.
    #[test]
    fn test_fully_consumed_diamond_yields_two_edge_cut() {
        let edges = edge_set(vec![
            edge(101, 1, 2), // A-B
            edge(102, 2, 4), // B-D
            edge(103, 1, 3), // A-C
            edge(104, 3, 4), // C-D
        ]);
        let labels = ComponentLabels::from_pairs([
            (NodeRef(1), 0),
            (NodeRef(2), 1),
            (NodeRef(3), 2),
            (NodeRef(4), 3),
        ]);

        let cut = classify_cut(&edges, &labels, NodeRef(1), NodeRef(4)).unwrap();
        let ids: Vec<i64> = cut.iter().map(|e| e.id.as_i64()).collect();
        assert_eq!(ids, vec![101, 103]);
    }
}
