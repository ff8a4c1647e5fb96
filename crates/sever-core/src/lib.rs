//! sever-core — min-cut orchestration over Neo4j.
//!
//! Computes the minimum cut between two nodes of an undirected graph by
//! delegating the hard parts to the database's plugins: APOC
//! `path.expandConfig` finds edge-disjoint paths, a GDS Cypher projection
//! materializes the graph with those path edges removed, and GDS WCC
//! labels the residual components. A path edge belongs to the cut when
//! its endpoints land in different components, one of them the start
//! node's.
//!
//! # Modules
//!
//! - [`error`]: Error taxonomy and Result alias
//! - [`config`]: Connection parameters
//! - [`ident`]: Identifier normalization
//! - [`cypher`]: Pure condition-fragment building
//! - [`client`]: Bolt client wrapper
//! - [`paths`]: Edge-disjoint path collection
//! - [`projection`]: GDS projection lifecycle with guaranteed teardown
//! - [`labeler`]: Component labeler seam (GDS and mock)
//! - [`cut`]: Cut classification
//! - [`finder`]: Top-level orchestration
//!
//! # Example
//!
//! ```no_run
//! use sever_core::{find_min_cut, ConnectConfig, MinCutRequest};
//!
//! # async fn demo() -> sever_core::Result<()> {
//! let request = MinCutRequest::new("17", "42")
//!     .with_relationship_types(["ROUTE"])
//!     .with_node_labels(["Station"])
//!     .with_max_path_length(10);
//!
//! let cut = find_min_cut(&request, &ConnectConfig::from_env()).await?;
//! for edge in &cut {
//!     println!("{} -[{}:{}]-> {}", edge.source, edge.id, edge.rel_type, edge.target);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod cut;
pub mod cypher;
pub mod error;
pub mod finder;
pub mod ident;
pub mod labeler;
pub mod paths;
pub mod projection;

// Re-export key types at crate root for convenience
pub use client::GraphClient;
pub use config::ConnectConfig;
pub use cut::classify_cut;
pub use error::{Error, Result};
pub use finder::{find_min_cut, MinCutFinder, MinCutRequest};
pub use ident::{NodeRef, RelRef};
pub use labeler::{ComponentLabeler, ComponentLabels, GdsLabeler, MockLabeler};
pub use paths::{PathEdgeSet, RelationshipRecord};
pub use projection::{unique_projection_name, with_projection};
