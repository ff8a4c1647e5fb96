//! Top-level min-cut orchestration.
//!
//! The whole computation is a fixed sequence of request/response
//! exchanges: collect edge-disjoint paths, project the residual graph
//! with those edges excluded, label its components, classify the path
//! edges against the labels, tear the projection down. Each step's
//! completion gates the next; nothing here is concurrent, and no failure
//! is retried.

use std::sync::Arc;

use crate::client::GraphClient;
use crate::config::ConnectConfig;
use crate::cut::classify_cut;
use crate::cypher;
use crate::ident::NodeRef;
use crate::labeler::{ComponentLabeler, GdsLabeler};
use crate::paths::{collect_paths, RelationshipRecord};
use crate::projection::{unique_projection_name, with_projection};
use crate::{Error, Result};

/// A min-cut request: which nodes to separate and what part of the graph
/// to consider.
#[derive(Clone, Debug)]
pub struct MinCutRequest {
    /// Raw start node identifier (numeric or element form).
    pub start: String,
    /// Raw end node identifier (numeric or element form).
    pub end: String,
    /// Relationship types to traverse; empty means any.
    pub relationship_types: Vec<String>,
    /// Node labels to consider; empty means any.
    pub node_labels: Vec<String>,
    /// Maximum path length for the disjoint-path search.
    pub max_path_length: i64,
}

impl MinCutRequest {
    /// Create a request with default settings (any type, any label,
    /// maximum path length 10).
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            relationship_types: Vec::new(),
            node_labels: Vec::new(),
            max_path_length: 10,
        }
    }

    /// Restrict traversal to the given relationship types.
    pub fn with_relationship_types(
        mut self,
        types: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.relationship_types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict traversal to nodes carrying at least one of the labels.
    pub fn with_node_labels(mut self, labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.node_labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Set the maximum path length.
    pub fn with_max_path_length(mut self, max_path_length: i64) -> Self {
        self.max_path_length = max_path_length;
        self
    }

    /// Check the request before any server round trip.
    pub fn validate(&self) -> Result<()> {
        if self.max_path_length < 1 {
            return Err(Error::query(format!(
                "max path length must be at least 1, got {}",
                self.max_path_length
            )));
        }
        cypher::validate_identifiers("relationship type", &self.relationship_types)?;
        cypher::validate_identifiers("label", &self.node_labels)?;
        NodeRef::normalize(&self.start)?;
        NodeRef::normalize(&self.end)?;
        Ok(())
    }
}

/// Stateful min-cut finder for callers managing the connection lifecycle
/// themselves.
pub struct MinCutFinder {
    config: ConnectConfig,
    client: Option<GraphClient>,
    labeler: Option<Arc<dyn ComponentLabeler>>,
    projection_name: Option<String>,
}

impl MinCutFinder {
    /// Create a finder; no connection is made until [`connect`] or the
    /// first [`find_min_cut`] call.
    ///
    /// [`connect`]: MinCutFinder::connect
    /// [`find_min_cut`]: MinCutFinder::find_min_cut
    pub fn new(config: ConnectConfig) -> Self {
        Self {
            config,
            client: None,
            labeler: None,
            projection_name: None,
        }
    }

    /// Inject a component labeler, replacing the default GDS one.
    pub fn with_labeler(mut self, labeler: Arc<dyn ComponentLabeler>) -> Self {
        self.labeler = Some(labeler);
        self
    }

    /// Use a fixed projection name instead of a per-invocation unique
    /// one. Callers taking this option must serialize their invocations;
    /// concurrent use of one name is a shared-resource conflict.
    pub fn with_projection_name(mut self, name: impl Into<String>) -> Self {
        self.projection_name = Some(name.into());
        self
    }

    /// Establish the connection and verify that APOC and GDS are
    /// installed.
    pub async fn connect(&mut self) -> Result<()> {
        let client = GraphClient::connect(&self.config).await?;
        client.verify_plugins().await?;
        if self.labeler.is_none() {
            self.labeler = Some(Arc::new(GdsLabeler::new(client.clone())));
        }
        self.client = Some(client);
        Ok(())
    }

    /// Find the minimum cut between the request's start and end nodes.
    ///
    /// Connects first if [`connect`](MinCutFinder::connect) has not been
    /// called. Returns the cut edges in path-discovery order; an empty
    /// result means start equals end, no path exists, or the residual
    /// graph still connects the two nodes.
    pub async fn find_min_cut(
        &mut self,
        request: &MinCutRequest,
    ) -> Result<Vec<RelationshipRecord>> {
        if self.client.is_none() {
            self.connect().await?;
        }
        // Both are set after connect; stay in Result land regardless.
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| Error::connectivity("finder is not connected"))?;
        let labeler = self
            .labeler
            .as_ref()
            .ok_or_else(|| Error::connectivity("finder has no component labeler"))?;

        run(client, labeler.as_ref(), request, self.projection_name.as_deref()).await
    }

    /// Drop the connection. The Bolt driver closes its pool when the
    /// last handle goes away.
    pub fn close(&mut self) {
        if self.client.take().is_some() {
            tracing::info!("Neo4j connection closed");
        }
        self.labeler = None;
    }
}

/// One-shot convenience: connect, compute the min-cut, close.
pub async fn find_min_cut(
    request: &MinCutRequest,
    config: &ConnectConfig,
) -> Result<Vec<RelationshipRecord>> {
    let mut finder = MinCutFinder::new(config.clone());
    finder.connect().await?;
    let result = finder.find_min_cut(request).await;
    finder.close();
    result
}

/// The orchestration sequence proper.
async fn run(
    client: &GraphClient,
    labeler: &dyn ComponentLabeler,
    request: &MinCutRequest,
    fixed_name: Option<&str>,
) -> Result<Vec<RelationshipRecord>> {
    request.validate()?;

    let start = client.resolve_node(&request.start).await?;
    let end = client.resolve_node(&request.end).await?;

    if start == end {
        tracing::debug!(%start, "start equals end, empty cut");
        return Ok(Vec::new());
    }

    let path_edges = collect_paths(
        client,
        start,
        end,
        &request.relationship_types,
        &request.node_labels,
        request.max_path_length,
    )
    .await?;

    if path_edges.is_empty() {
        tracing::warn!(%start, %end, "no paths found between start and end nodes");
        return Ok(Vec::new());
    }

    let name = fixed_name
        .map(str::to_string)
        .unwrap_or_else(unique_projection_name);
    let excluded = path_edges.excluded_ids();

    let label_name = name.clone();
    with_projection(
        client,
        &name,
        &excluded,
        &request.relationship_types,
        &request.node_labels,
        |_info| async move {
            let labels = labeler.label_components(&label_name).await?;
            classify_cut(&path_edges, &labels, start, end)
        },
    )
    .await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request = MinCutRequest::new("1", "2");
        assert_eq!(request.max_path_length, 10);
        assert!(request.relationship_types.is_empty());
        assert!(request.node_labels.is_empty());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_request_builder() {
        let request = MinCutRequest::new("1", "2")
            .with_relationship_types(["KNOWS"])
            .with_node_labels(["Person", "Org"])
            .with_max_path_length(5);
        assert_eq!(request.relationship_types, vec!["KNOWS"]);
        assert_eq!(request.node_labels, vec!["Person", "Org"]);
        assert_eq!(request.max_path_length, 5);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_request_rejects_bad_max_length() {
        let request = MinCutRequest::new("1", "2").with_max_path_length(0);
        let err = request.validate().unwrap_err();
        assert!(matches!(err, Error::Query(_)));
    }

    #[test]
    fn test_request_rejects_bad_identifiers() {
        let request = MinCutRequest::new("1", "2").with_relationship_types(["BAD TYPE"]);
        assert!(request.validate().is_err());

        let request = MinCutRequest::new("1", "2").with_node_labels(["Label' OR true"]);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_request_rejects_unparseable_node_ids() {
        let request = MinCutRequest::new("not-an-id", "2");
        assert!(matches!(request.validate(), Err(Error::Query(_))));
    }

    #[test]
    fn test_request_accepts_element_ids() {
        let request = MinCutRequest::new("4:0afe3c21-9f63-41bc-a719-d4ceb5a4b2d5:17", "42");
        assert!(request.validate().is_ok());
    }
}
