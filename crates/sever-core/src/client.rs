//! Bolt client wrapper.
//!
//! [`GraphClient`] owns the `neo4rs` driver handle and provides the small
//! query surface the rest of the crate needs: connect-and-probe, plugin
//! verification, row-draining execution, and node resolution. The driver
//! handle is cheap to clone (it shares the underlying connection pool).

use neo4rs::{query, Graph, Query, Row};

use crate::config::ConnectConfig;
use crate::ident::NodeRef;
use crate::{Error, Result};

/// Wrapper around the Neo4j Bolt driver.
#[derive(Clone)]
pub struct GraphClient {
    graph: Graph,
}

impl GraphClient {
    /// Establish a connection and verify it with a probe query.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Connectivity`] if the server is unreachable or
    /// authentication fails.
    pub async fn connect(config: &ConnectConfig) -> Result<Self> {
        let graph = Graph::new(&config.uri, &config.user, &config.password)
            .await
            .map_err(|e| {
                Error::connectivity(format!("failed to connect to {}: {e}", config.uri))
            })?;

        let client = Self { graph };
        client.probe().await?;
        tracing::info!(uri = %config.uri, "connected to Neo4j");
        Ok(client)
    }

    /// Round-trip a trivial query to confirm the link is live.
    async fn probe(&self) -> Result<()> {
        let rows = self
            .execute(query("RETURN 1 AS probe"))
            .await
            .map_err(|e| Error::connectivity(format!("connection probe failed: {e}")))?;
        let row = rows
            .first()
            .ok_or_else(|| Error::connectivity("connection probe returned no rows"))?;
        let probe: i64 = row
            .get("probe")
            .map_err(|e| Error::connectivity(format!("connection probe malformed: {e}")))?;
        if probe != 1 {
            return Err(Error::connectivity("connection probe returned wrong value"));
        }
        Ok(())
    }

    /// Verify that the APOC and GDS plugins are installed on the server.
    ///
    /// Both are hard requirements: path expansion comes from APOC,
    /// projection and component labeling from GDS.
    pub async fn verify_plugins(&self) -> Result<()> {
        self.graph
            .run(query("CALL apoc.help('path')"))
            .await
            .map_err(|e| Error::connectivity(format!("APOC plugin is not available: {e}")))?;
        tracing::debug!("APOC plugin is available");

        self.graph
            .run(query("CALL gds.list()"))
            .await
            .map_err(|e| Error::connectivity(format!("GDS plugin is not available: {e}")))?;
        tracing::debug!("GDS plugin is available");

        Ok(())
    }

    /// Execute a query and drain the full row stream.
    pub async fn execute(&self, q: Query) -> Result<Vec<Row>> {
        let mut result = self
            .graph
            .execute(q)
            .await
            .map_err(|e| Error::query(e.to_string()))?;
        let mut rows = Vec::new();
        while let Some(row) = result
            .next()
            .await
            .map_err(|e| Error::query(e.to_string()))?
        {
            rows.push(row);
        }
        Ok(rows)
    }

    /// Execute a query, discarding any rows.
    pub async fn run(&self, q: Query) -> Result<()> {
        self.graph
            .run(q)
            .await
            .map_err(|e| Error::query(e.to_string()))
    }

    /// Resolve a raw identifier (numeric or element form) to a node that
    /// exists in the database.
    ///
    /// # Errors
    ///
    /// [`Error::Query`] if the identifier does not normalize;
    /// [`Error::NotFound`] if no node carries the normalized key.
    pub async fn resolve_node(&self, raw: &str) -> Result<NodeRef> {
        let node = NodeRef::normalize(raw)?;
        let rows = self
            .execute(
                query("MATCH (n) WHERE id(n) = $node_id RETURN id(n) AS id")
                    .param("node_id", node.as_i64()),
            )
            .await?;
        if rows.is_empty() {
            return Err(Error::not_found(format!("node '{raw}' not in database")));
        }
        Ok(node)
    }
}
