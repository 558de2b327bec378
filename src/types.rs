use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Traversal algorithm, selectable from configuration and the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bfs,
    Dfs,
}

impl Algorithm {
    /// Human readable label used in text reports
    pub fn display_name(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "Breadth First Search (BFS)",
            Algorithm::Dfs => "Depth First Search (DFS)",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Bfs => f.write_str("bfs"),
            Algorithm::Dfs => f.write_str("dfs"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            other => Err(format!("unknown traversal algorithm '{}'", other)),
        }
    }
}

/// Rendering of a traversal report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

/// When to print the interactive input prompts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptMode {
    /// Prompt only when standard input is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl FromStr for PromptMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(PromptMode::Auto),
            "always" => Ok(PromptMode::Always),
            "never" => Ok(PromptMode::Never),
            other => Err(format!("unknown prompt mode '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyEntry {
    pub vertex: usize,
    pub neighbors: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalResult {
    pub algorithm: Algorithm,
    pub order: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalReport {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub start_vertex: usize,
    pub adjacency: Vec<AdjacencyEntry>,
    pub traversals: Vec<TraversalResult>,
}

impl TraversalReport {
    /// Get the visitation order produced by a given algorithm, if it was run
    pub fn order_for(&self, algorithm: Algorithm) -> Option<&[usize]> {
        self.traversals
            .iter()
            .find(|result| result.algorithm == algorithm)
            .map(|result| result.order.as_slice())
    }
}
