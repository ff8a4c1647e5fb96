//! GDS-backed component labeler.

use async_trait::async_trait;
use neo4rs::query;

use super::provider::{ComponentLabeler, ComponentLabels};
use crate::client::GraphClient;
use crate::ident::NodeRef;
use crate::{Error, Result};

/// Component labeler invoking the Weakly Connected Components algorithm
/// from the GDS library over a named projection.
#[derive(Clone)]
pub struct GdsLabeler {
    client: GraphClient,
}

impl GdsLabeler {
    /// Create a labeler sharing the given client's connection pool.
    pub fn new(client: GraphClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ComponentLabeler for GdsLabeler {
    async fn label_components(&self, projection: &str) -> Result<ComponentLabels> {
        tracing::info!(projection, "running WCC");

        let rows = self
            .client
            .execute(
                query(
                    "CALL gds.wcc.stream($graph_name)\n\
                     YIELD nodeId, componentId\n\
                     RETURN nodeId AS node_id, componentId AS component_id",
                )
                .param("graph_name", projection),
            )
            .await?;

        let mut labels = ComponentLabels::default();
        for row in rows {
            let node_id: i64 = row
                .get("node_id")
                .map_err(|e| Error::query(format!("malformed WCC row: {e}")))?;
            let component_id: i64 = row
                .get("component_id")
                .map_err(|e| Error::query(format!("malformed WCC row: {e}")))?;
            labels.insert(NodeRef::from(node_id), component_id);
        }

        tracing::info!(
            nodes = labels.len(),
            components = labels.component_count(),
            "WCC labeling complete"
        );
        Ok(labels)
    }
}
