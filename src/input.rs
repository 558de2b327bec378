use crate::error::GraphError;
use crate::graph::Graph;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, info};
use whiteread::Reader;

const VERTEX_COUNT_PROMPT: &str = "Enter the number of vertices in the graph: ";
const EDGE_COUNT_PROMPT: &str = "Enter the number of edges in the graph: ";
const EDGES_PROMPT: &str = "Enter the edges (source destination):\n";
const START_VERTEX_PROMPT: &str = "Enter the starting vertex for BFS and DFS: ";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {what}: {source}")]
    Read {
        what: &'static str,
        #[source]
        source: whiteread::reader::Error,
    },

    #[error("invalid edge count {0}: the edge count must not be negative")]
    NegativeEdgeCount(i64),

    #[error("invalid edge #{index} ({src}, {dest}): {source}")]
    Edge {
        index: usize,
        src: i64,
        dest: i64,
        #[source]
        source: GraphError,
    },

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("failed to write prompt: {0}")]
    Io(#[from] io::Error),
}

/// Reads a graph description as whitespace-separated integers.
///
/// The layout is: vertex count, edge count, `src dest` pairs, start vertex.
/// Line breaks carry no meaning. Prompts go to `prompt`, which is
/// `io::Sink` when reading non-interactively.
pub struct GraphInput<B: BufRead, W: Write> {
    reader: Reader<B>,
    prompt: W,
}

impl<B: BufRead> GraphInput<B, io::Sink> {
    pub fn without_prompts(buf: B) -> Self {
        Self::new(buf, io::sink())
    }
}

impl<B: BufRead, W: Write> GraphInput<B, W> {
    pub fn new(buf: B, prompt: W) -> Self {
        Self {
            reader: Reader::new(buf),
            prompt,
        }
    }

    fn prompt(&mut self, text: &str) -> Result<(), InputError> {
        self.prompt.write_all(text.as_bytes())?;
        self.prompt.flush()?;
        Ok(())
    }

    fn read_integer(&mut self, what: &'static str) -> Result<i64, InputError> {
        self.reader
            .parse::<i64>()
            .map_err(|source| InputError::Read { what, source })
    }

    /// Read the vertex count, the edge count and every edge
    pub fn read_graph(&mut self) -> Result<Graph, InputError> {
        self.prompt(VERTEX_COUNT_PROMPT)?;
        let vertex_count = self.read_integer("vertex count")?;
        let mut graph = Graph::with_vertex_count(vertex_count)?;

        self.prompt(EDGE_COUNT_PROMPT)?;
        let edge_count = self.read_integer("edge count")?;
        let edge_count =
            usize::try_from(edge_count).map_err(|_| InputError::NegativeEdgeCount(edge_count))?;

        self.prompt(EDGES_PROMPT)?;
        for index in 0..edge_count {
            let src = self.read_integer("edge source")?;
            let dest = self.read_integer("edge destination")?;

            let edge_error = |source| InputError::Edge { index, src, dest, source };
            let src_vertex = graph.check_vertex(src).map_err(edge_error)?;
            let dest_vertex = graph.check_vertex(dest).map_err(edge_error)?;
            graph.add_edge(src_vertex, dest_vertex).map_err(edge_error)?;
        }

        info!(
            "Read graph with {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Read the start vertex and validate it against `graph`
    pub fn read_start_vertex(&mut self, graph: &Graph) -> Result<usize, InputError> {
        self.prompt(START_VERTEX_PROMPT)?;
        let raw = self.read_integer("starting vertex")?;
        let start = graph.check_vertex(raw)?;

        debug!("Starting vertex: {}", start);
        Ok(start)
    }
}
