//! Component labeler abstraction.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::ident::NodeRef;
use crate::{Error, Result};

/// Abstraction over the external component-labeling computation.
///
/// The real implementation calls GDS WCC; tests inject a deterministic
/// fake so cut classification can be verified without a server.
#[async_trait]
pub trait ComponentLabeler: Send + Sync {
    /// Assign a component label to every node in the named projection.
    async fn label_components(&self, projection: &str) -> Result<ComponentLabels>;
}

/// Lookup from node to component label.
///
/// Labels are opaque values with meaning only within the projection's
/// validity window; once the projection is dropped they are stale.
#[derive(Clone, Debug, Default)]
pub struct ComponentLabels {
    labels: HashMap<NodeRef, i64>,
}

impl ComponentLabels {
    /// Build a lookup from (node, label) pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (NodeRef, i64)>) -> Self {
        Self {
            labels: pairs.into_iter().collect(),
        }
    }

    /// Record a node's component label.
    pub fn insert(&mut self, node: NodeRef, component: i64) {
        self.labels.insert(node, component);
    }

    /// The component label assigned to `node`.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if the node is absent from the projection
    /// (isolated, or excluded by the node filter).
    pub fn component_of(&self, node: NodeRef) -> Result<i64> {
        self.labels
            .get(&node)
            .copied()
            .ok_or_else(|| Error::not_found(format!("node {node} not in component mapping")))
    }

    /// Number of labeled nodes.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether any node was labeled.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of distinct components.
    pub fn component_count(&self) -> usize {
        let mut seen: Vec<i64> = self.labels.values().copied().collect();
        seen.sort_unstable();
        seen.dedup();
        seen.len()
    }
}
