//! GDS projection lifecycle.
//!
//! A projection is a named, server-side subgraph view with a strict
//! lifecycle: drop any stale view of the same name, create, run the
//! component labeling, drop. The drop on exit is unconditional — a leaked
//! projection silently consumes server memory across invocations — so the
//! whole window is wrapped in [`with_projection`], which tears the view
//! down on every exit path.

use std::future::Future;

use neo4rs::query;

use crate::client::GraphClient;
use crate::cypher;
use crate::{Error, Result};

/// Counts reported by the server for a freshly created projection.
#[derive(Clone, Copy, Debug)]
pub struct ProjectionInfo {
    /// Nodes in the projected view.
    pub node_count: i64,
    /// Relationships in the projected view.
    pub rel_count: i64,
}

/// Generate a per-invocation projection name.
///
/// Unique names avoid cross-invocation collisions entirely; concurrent
/// callers never contend on a shared view.
pub fn unique_projection_name() -> String {
    format!("mincut-{}", uuid::Uuid::new_v4().simple())
}

/// Drop the named projection if it exists.
///
/// Idempotent: absence of a stale projection is not an error (the server
/// is called with `failIfMissing = false`). A failed drop surfaces as
/// [`Error::ProjectionConflict`].
pub async fn drop_projection(client: &GraphClient, name: &str) -> Result<()> {
    tracing::debug!(projection = name, "dropping GDS projection");
    client
        .run(query("CALL gds.graph.drop($graph_name, false)").param("graph_name", name))
        .await
        .map_err(|e| Error::projection_conflict(name, e.to_string()))
}

/// Create an undirected projection over nodes matching the label
/// condition and all relationships of the allowed types among them,
/// excluding the relationships in `excluded_ids`.
///
/// Every node matching the label condition enters the projection, even
/// when exclusion leaves it with no surviving relationship: the node
/// pattern matches unconditionally and relationships join in via
/// `OPTIONAL MATCH` (the projection aggregation accepts a NULL target
/// and projects the source as an isolated node). Isolated nodes must be
/// present so the component labeling can assign them each their own
/// component.
pub async fn create_projection(
    client: &GraphClient,
    name: &str,
    excluded_ids: &[i64],
    rel_types: &[String],
    labels: &[String],
) -> Result<ProjectionInfo> {
    cypher::validate_identifiers("relationship type", rel_types)?;
    cypher::validate_identifiers("label", labels)?;

    let source_cond = cypher::label_condition("a", labels);
    let target_cond = cypher::label_condition("b", labels);
    let type_cond = cypher::rel_type_condition("r", rel_types);

    let text = format!(
        "MATCH (a)\n\
         WHERE ({source_cond})\n\
         OPTIONAL MATCH (a)-[r]->(b)\n\
         WHERE ({target_cond}) AND ({type_cond})\n\
           AND NOT id(r) IN $excluded_ids\n\
         WITH gds.graph.project($graph_name, a, b, {{}},\n\
             {{undirectedRelationshipTypes: ['*']}}) AS g\n\
         RETURN g.nodeCount AS node_count, g.relationshipCount AS rel_count"
    );

    let rows = client
        .execute(
            query(&text)
                .param("graph_name", name)
                .param("excluded_ids", excluded_ids.to_vec()),
        )
        .await?;
    let row = rows
        .first()
        .ok_or_else(|| Error::query(format!("projection '{name}' creation returned no rows")))?;

    let info = ProjectionInfo {
        node_count: row
            .get("node_count")
            .map_err(|e| Error::query(format!("malformed projection row: {e}")))?,
        rel_count: row
            .get("rel_count")
            .map_err(|e| Error::query(format!("malformed projection row: {e}")))?,
    };
    tracing::info!(
        projection = name,
        nodes = info.node_count,
        rels = info.rel_count,
        "created GDS projection"
    );
    Ok(info)
}

/// Run `body` inside the lifetime window of a freshly created projection.
///
/// Any stale projection of the same name is removed first. Whatever
/// `body` does — normal return, empty result, or error — the projection
/// is dropped before this function returns. If teardown itself fails
/// after a successful body, the teardown error is surfaced; after a
/// failed body the original error wins and the teardown failure is only
/// logged.
pub async fn with_projection<T, Fut, F>(
    client: &GraphClient,
    name: &str,
    excluded_ids: &[i64],
    rel_types: &[String],
    labels: &[String],
    body: F,
) -> Result<T>
where
    F: FnOnce(ProjectionInfo) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    drop_projection(client, name).await?;
    let info = create_projection(client, name, excluded_ids, rel_types, labels).await?;

    let result = body(info).await;

    match drop_projection(client, name).await {
        Ok(()) => result,
        Err(teardown) => match result {
            Ok(_) => Err(teardown),
            Err(original) => {
                tracing::warn!(
                    projection = name,
                    error = %teardown,
                    "projection teardown failed while unwinding"
                );
                Err(original)
            }
        },
    }
}
