//! Rendering of cut results.

use anyhow::Result;
use sever_core::RelationshipRecord;

use crate::cli::OutputFormat;

/// Render the cut edges in the requested format.
pub fn format_cut(cut: &[RelationshipRecord], format: OutputFormat) -> Result<String> {
    if cut.is_empty() {
        return Ok(
            "No min-cut found. The nodes might be disconnected or in the same component."
                .to_string(),
        );
    }

    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(cut)?,
        OutputFormat::Table => {
            let mut lines = vec![
                "| ID | Source | Target | Type |".to_string(),
                "|----|--------|--------|------|".to_string(),
            ];
            for edge in cut {
                lines.push(format!(
                    "| {} | {} | {} | {} |",
                    edge.id, edge.source, edge.target, edge.rel_type
                ));
            }
            lines.join("\n")
        }
        OutputFormat::Text => {
            let mut lines = vec![format!(
                "Found {} relationships in the min-cut:",
                cut.len()
            )];
            for (i, edge) in cut.iter().enumerate() {
                lines.push(format!(
                    "  {}. ID: {}, From: {}, To: {}, Type: {}",
                    i + 1,
                    edge.id,
                    edge.source,
                    edge.target,
                    edge.rel_type
                ));
            }
            lines.join("\n")
        }
    };
    Ok(rendered)
}
