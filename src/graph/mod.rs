pub mod adjacency;
pub mod traversal;

pub use adjacency::Graph;
pub use traversal::{Bfs, Dfs, Frontier, GraphTraversal, Walk};
