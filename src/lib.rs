pub mod config;
pub mod error;
pub mod graph;
pub mod input;
pub mod reports;
pub mod session;
pub mod types;

pub use error::GraphError;
pub use graph::{Graph, GraphTraversal};
