use crate::types::{AdjacencyEntry, TraversalReport, TraversalResult};
use anyhow::Result;

/// Trait for report formatters
pub trait ReportFormatter {
    fn format(&self, report: &TraversalReport) -> Result<String>;
}

/// Plain text formatter using the console layout:
///
/// ```text
/// Graph:
/// Vertex 0 -> 1 2
/// Breadth First Search (BFS): 0 1 2
/// ```
pub struct TextFormatter;

impl TextFormatter {
    /// Render the `Graph:` section, one line per vertex
    pub fn format_adjacency(&self, adjacency: &[AdjacencyEntry]) -> String {
        let mut out = String::from("Graph:\n");
        for entry in adjacency {
            out.push_str(&format!("Vertex {} ->", entry.vertex));
            for neighbor in &entry.neighbors {
                out.push_str(&format!(" {}", neighbor));
            }
            out.push('\n');
        }
        out
    }

    /// Render one line per traversal
    pub fn format_traversals(&self, traversals: &[TraversalResult]) -> String {
        let mut out = String::new();
        for traversal in traversals {
            let order: Vec<String> = traversal.order.iter().map(ToString::to_string).collect();
            out.push_str(&format!(
                "{}: {}\n",
                traversal.algorithm.display_name(),
                order.join(" ")
            ));
        }
        out
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &TraversalReport) -> Result<String> {
        let mut out = self.format_adjacency(&report.adjacency);
        out.push_str(&self.format_traversals(&report.traversals));
        Ok(out)
    }
}

/// JSON formatter
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &TraversalReport) -> Result<String> {
        let mut out = serde_json::to_string_pretty(report)?;
        out.push('\n');
        Ok(out)
    }
}
