use crate::error::GraphError;
use tracing::trace;

/// Undirected graph stored as per-vertex neighbor lists.
///
/// Neighbor lists keep edge-insertion order. Self-loops and parallel edges
/// are stored verbatim; traversals filter the repeats through their visited set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<usize>>,
    edge_count: usize,
}

impl Graph {
    /// Create a graph with `vertex_count` vertices and no edges
    pub fn new(vertex_count: usize) -> Result<Self, GraphError> {
        if vertex_count == 0 {
            return Err(GraphError::InvalidSize(0));
        }

        let mut adjacency = Vec::new();
        adjacency
            .try_reserve_exact(vertex_count)
            .map_err(|_| GraphError::TooLarge(vertex_count))?;
        adjacency.resize_with(vertex_count, Vec::new);

        Ok(Self {
            adjacency,
            edge_count: 0,
        })
    }

    /// Create a graph from a signed vertex count as read from user input
    pub fn with_vertex_count(requested: i64) -> Result<Self, GraphError> {
        let vertex_count = usize::try_from(requested)
            .ok()
            .filter(|&count| count > 0)
            .ok_or(GraphError::InvalidSize(requested))?;
        Self::new(vertex_count)
    }

    /// Get the number of vertices in the graph
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Get the number of edges inserted so far
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Validate a raw (possibly negative) vertex index
    pub fn check_vertex(&self, raw: i64) -> Result<usize, GraphError> {
        usize::try_from(raw)
            .ok()
            .filter(|&vertex| vertex < self.vertex_count())
            .ok_or(GraphError::OutOfRange {
                vertex: raw,
                vertex_count: self.vertex_count(),
            })
    }

    fn ensure_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::out_of_range(vertex, self.vertex_count()))
        }
    }

    /// Add an undirected edge between two vertices
    pub fn add_edge(&mut self, src: usize, dest: usize) -> Result<(), GraphError> {
        // Both ends are checked before either list is touched.
        self.ensure_vertex(src)?;
        self.ensure_vertex(dest)?;

        self.adjacency[src].push(dest);
        self.adjacency[dest].push(src);
        self.edge_count += 1;

        trace!("Added edge {} <-> {}", src, dest);
        Ok(())
    }

    /// Get the neighbors of a vertex in insertion order
    pub fn neighbors(&self, vertex: usize) -> Result<&[usize], GraphError> {
        self.ensure_vertex(vertex)?;
        Ok(&self.adjacency[vertex])
    }

    /// Get the number of neighbor entries of a vertex (a self-loop counts twice)
    pub fn degree(&self, vertex: usize) -> Result<usize, GraphError> {
        self.neighbors(vertex).map(<[usize]>::len)
    }

    /// Every vertex with its neighbor list, in vertex order
    pub fn describe(&self) -> impl Iterator<Item = (usize, &[usize])> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .map(|(vertex, neighbors)| (vertex, neighbors.as_slice()))
    }

    /// Unchecked neighbor access for traversals that already hold a valid vertex
    pub(crate) fn adjacent(&self, vertex: usize) -> &[usize] {
        &self.adjacency[vertex]
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
    fn test_new_rejects_empty_graph() {
        assert_eq!(Graph::new(0), Err(GraphError::InvalidSize(0)));
        assert_eq!(Graph::with_vertex_count(-3), Err(GraphError::InvalidSize(-3)));
        assert_eq!(Graph::with_vertex_count(0), Err(GraphError::InvalidSize(0)));
        assert_eq!(Graph::with_vertex_count(4).unwrap().vertex_count(), 4);
    }

    #[test]
    fn test_unallocatable_size_is_an_error() {
        let huge = usize::MAX / 8;
        assert_eq!(Graph::new(huge), Err(GraphError::TooLarge(huge)));
        assert_eq!(
            Graph::with_vertex_count(i64::MAX),
            Err(GraphError::TooLarge(i64::MAX as usize))
        );
    }

    #[test]
    fn test_add_edge_is_undirected() {
        let graph = create_test_graph();

        assert_eq!(graph.neighbors(0).unwrap(), &[1, 2]);
        assert_eq!(graph.neighbors(1).unwrap(), &[0, 3, 4]);
        assert_eq!(graph.neighbors(2).unwrap(), &[0, 4]);
        assert_eq!(graph.neighbors(3).unwrap(), &[1, 4]);
        assert_eq!(graph.neighbors(4).unwrap(), &[1, 2, 3]);
        assert_eq!(graph.edge_count(), 6);
    }

    #[test]
    fn test_self_loops_and_duplicates_are_kept() {
        let mut graph = Graph::new(2).unwrap();
        graph.add_edge(0, 0).unwrap();
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(1, 0).unwrap();

        assert_eq!(graph.neighbors(0).unwrap(), &[0, 0, 1, 1]);
        assert_eq!(graph.neighbors(1).unwrap(), &[0, 0]);
        assert_eq!(graph.degree(0).unwrap(), 4);
    }

    #[test]
    fn test_out_of_range_leaves_graph_unchanged() {
        let mut graph = create_test_graph();
        let before = graph.clone();

        assert_eq!(
            graph.add_edge(0, 5),
            Err(GraphError::OutOfRange { vertex: 5, vertex_count: 5 })
        );
        assert_eq!(graph, before);
        assert!(graph.neighbors(9).is_err());
        assert!(graph.degree(5).is_err());
    }

    #[test]
    fn test_check_vertex() {
        let graph = create_test_graph();

        assert_eq!(graph.check_vertex(4), Ok(4));
        assert_eq!(
            graph.check_vertex(-1),
            Err(GraphError::OutOfRange { vertex: -1, vertex_count: 5 })
        );
        assert!(graph.check_vertex(5).is_err());
    }

    #[test]
    fn test_describe() {
        let graph = create_test_graph();
        let described: Vec<_> = graph.describe().collect();

        assert_eq!(described.len(), 5);
        assert_eq!(described[0], (0, &[1, 2][..]));
        assert_eq!(described[4], (4, &[1, 2, 3][..]));
    }
}
