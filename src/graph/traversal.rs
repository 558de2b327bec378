use crate::error::GraphError;
use crate::graph::adjacency::Graph;
use crate::types::Algorithm;
use std::collections::VecDeque;
use tracing::debug;

/// Pending vertices of a traversal; the pop discipline picks the algorithm
pub trait Frontier: Default {
    fn push(&mut self, vertex: usize);
    fn pop(&mut self) -> Option<usize>;
}

/// FIFO frontier for breadth-first search
impl Frontier for VecDeque<usize> {
    fn push(&mut self, vertex: usize) {
        self.push_back(vertex);
    }

    fn pop(&mut self) -> Option<usize> {
        self.pop_front()
    }
}

/// LIFO frontier for depth-first search
impl Frontier for Vec<usize> {
    fn push(&mut self, vertex: usize) {
        Vec::push(self, vertex);
    }

    fn pop(&mut self) -> Option<usize> {
        Vec::pop(self)
    }
}

/// Lazy traversal over a graph, yielding vertices in visitation order.
///
/// Vertices are marked visited when they enter the frontier, so a vertex
/// waiting in the frontier is never added a second time.
#[derive(Debug, Clone)]
pub struct Walk<'g, F> {
    graph: &'g Graph,
    visited: Vec<bool>,
    frontier: F,
}

/// Breadth-first walk
pub type Bfs<'g> = Walk<'g, VecDeque<usize>>;

/// Depth-first walk with push-time marking
pub type Dfs<'g> = Walk<'g, Vec<usize>>;

impl<'g, F: Frontier> Walk<'g, F> {
    pub fn new(graph: &'g Graph, start: usize) -> Result<Self, GraphError> {
        if start >= graph.vertex_count() {
            return Err(GraphError::out_of_range(start, graph.vertex_count()));
        }

        let mut visited = vec![false; graph.vertex_count()];
        let mut frontier = F::default();

        visited[start] = true;
        frontier.push(start);

        Ok(Self { graph, visited, frontier })
    }
}

impl<F: Frontier> Iterator for Walk<'_, F> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.frontier.pop()?;

        for &neighbor in self.graph.adjacent(current) {
            if !self.visited[neighbor] {
                self.visited[neighbor] = true;
                self.frontier.push(neighbor);
            }
        }

        Some(current)
    }
}

/// Graph traversal entry points returning the full visitation order
pub struct GraphTraversal;

impl GraphTraversal {
    /// Breadth-first visitation order from `start`
    pub fn bfs(graph: &Graph, start: usize) -> Result<Vec<usize>, GraphError> {
        let order: Vec<usize> = Bfs::new(graph, start)?.collect();
        debug!("BFS from vertex {} visited {} vertices", start, order.len());
        Ok(order)
    }

    /// Depth-first visitation order from `start`
    pub fn dfs(graph: &Graph, start: usize) -> Result<Vec<usize>, GraphError> {
        let order: Vec<usize> = Dfs::new(graph, start)?.collect();
        debug!("DFS from vertex {} visited {} vertices", start, order.len());
        Ok(order)
    }

    pub fn run(graph: &Graph, start: usize, algorithm: Algorithm) -> Result<Vec<usize>, GraphError> {
        match algorithm {
            Algorithm::Bfs => Self::bfs(graph, start),
            Algorithm::Dfs => Self::dfs(graph, start),
        }
    }
}
