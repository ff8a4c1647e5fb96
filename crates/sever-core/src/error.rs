//! Error types for sever operations.
//!
//! This module provides the common `Error` type and `Result<T>` alias used
//! across the crate. Uses `thiserror` for derive macros.
//!
//! The taxonomy is deliberately small: every failure is fatal for the
//! current invocation and propagates to the caller without retries. The
//! single exception to plain propagation is projection teardown, which is
//! guaranteed by [`crate::projection::with_projection`] on every exit path.

use thiserror::Error;

/// Errors that can occur during a min-cut invocation.
#[derive(Error, Debug)]
pub enum Error {
    /// Cannot reach or authenticate against the database, or a required
    /// server plugin (APOC, GDS) is missing.
    #[error("Connectivity error: {0}")]
    Connectivity(String),

    /// Malformed request or a query rejected by the server: bad
    /// relationship type, bad label, invalid max path length.
    #[error("Query error: {0}")]
    Query(String),

    /// A stale projection with the target name exists and could not be
    /// removed, or teardown of a fresh projection failed.
    #[error("Projection conflict on '{name}': {message}")]
    ProjectionConflict {
        /// Name of the projection involved in the conflict.
        name: String,
        /// Underlying server message.
        message: String,
    },

    /// Start or end node absent from the database, or a node absent from
    /// the projection post-creation (isolated or filtered out).
    #[error("Not found: {0}")]
    NotFound(String),
}

impl Error {
    /// Create a connectivity error.
    pub fn connectivity(msg: impl Into<String>) -> Self {
        Self::Connectivity(msg.into())
    }

    /// Create a query error.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    /// Create a projection conflict error.
    pub fn projection_conflict(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ProjectionConflict {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a not found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

/// Result type alias using sever's Error type.
pub type Result<T> = std::result::Result<T, Error>;
