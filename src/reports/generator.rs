use crate::error::GraphError;
use crate::graph::{Graph, GraphTraversal};
use crate::reports::formatters::{JsonFormatter, ReportFormatter, TextFormatter};
use crate::types::{AdjacencyEntry, Algorithm, OutputFormat, TraversalReport, TraversalResult};
use anyhow::Result;

/// Builds traversal reports and renders them in the requested format
pub struct ReportGenerator;

impl ReportGenerator {
    /// Snapshot of every vertex's neighbor list
    pub fn adjacency(graph: &Graph) -> Vec<AdjacencyEntry> {
        graph
            .describe()
            .map(|(vertex, neighbors)| AdjacencyEntry {
                vertex,
                neighbors: neighbors.to_vec(),
            })
            .collect()
    }

    /// Run each algorithm from `start` in the given order
    pub fn traversals(
        graph: &Graph,
        start: usize,
        algorithms: &[Algorithm],
    ) -> Result<Vec<TraversalResult>, GraphError> {
        algorithms
            .iter()
            .map(|&algorithm| {
                GraphTraversal::run(graph, start, algorithm)
                    .map(|order| TraversalResult { algorithm, order })
            })
            .collect()
    }

    pub fn build(
        graph: &Graph,
        start: usize,
        algorithms: &[Algorithm],
    ) -> Result<TraversalReport, GraphError> {
        Ok(TraversalReport {
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            start_vertex: start,
            adjacency: Self::adjacency(graph),
            traversals: Self::traversals(graph, start, algorithms)?,
        })
    }

    /// Generate report in the specified format
    pub fn generate(report: &TraversalReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => TextFormatter.format(report),
            OutputFormat::Json => JsonFormatter.format(report),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_graph() -> Graph {
        let mut graph = Graph::new(5).unwrap();
        for (src, dest) in [(0, 1), (0, 2), (1, 3), (1, 4), (2, 4), (3, 4)] {
            graph.add_edge(src, dest).unwrap();
        }
        graph
    }

    #[test]
    fn test_build_report() {
        let graph = create_test_graph();
        let report = ReportGenerator::build(&graph, 0, &[Algorithm::Bfs, Algorithm::Dfs]).unwrap();

        assert_eq!(report.vertex_count, 5);
        assert_eq!(report.edge_count, 6);
        assert_eq!(report.adjacency[1].neighbors, vec![0, 3, 4]);
        assert_eq!(report.order_for(Algorithm::Bfs), Some(&[0, 1, 2, 3, 4][..]));
        assert_eq!(report.order_for(Algorithm::Dfs), Some(&[0, 2, 4, 3, 1][..]));
    }

    #[test]
    fn test_build_keeps_algorithm_order() {
        let graph = create_test_graph();
        let report = ReportGenerator::build(&graph, 2, &[Algorithm::Dfs]).unwrap();

        assert_eq!(report.traversals.len(), 1);
        assert_eq!(report.traversals[0].algorithm, Algorithm::Dfs);
        assert_eq!(report.order_for(Algorithm::Bfs), None);
    }

    #[test]
    fn test_build_rejects_invalid_start() {
        let graph = create_test_graph();
        assert!(ReportGenerator::build(&graph, 5, &[Algorithm::Bfs]).is_err());
    }

    #[test]
    fn test_generate_text() {
        let graph = create_test_graph();
        let report = ReportGenerator::build(&graph, 0, &[Algorithm::Bfs, Algorithm::Dfs]).unwrap();
        let text = ReportGenerator::generate(&report, OutputFormat::Text).unwrap();

        assert!(text.starts_with("Graph:\nVertex 0 -> 1 2\n"));
        assert!(text.contains("Vertex 4 -> 1 2 3\n"));
        assert!(text.ends_with(
            "Breadth First Search (BFS): 0 1 2 3 4\nDepth First Search (DFS): 0 2 4 3 1\n"
        ));
    }
}
