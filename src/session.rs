use crate::config::Config;
use crate::input::GraphInput;
use crate::reports::{ReportGenerator, TextFormatter};
use crate::types::{OutputFormat, TraversalReport};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{info, instrument};

/// Drives one read-describe-traverse run from input to rendered output
pub struct TraversalSession<'a> {
    config: &'a Config,
}

impl<'a> TraversalSession<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Read a graph and start vertex from `input` and write the report to `out`.
    ///
    /// In text format the adjacency section is written as soon as the graph
    /// is read, before the start vertex is requested.
    #[instrument(skip_all)]
    pub fn run<B, W, O>(&self, input: &mut GraphInput<B, W>, out: &mut O) -> Result<TraversalReport>
    where
        B: BufRead,
        W: Write,
        O: Write,
    {
        let graph = input.read_graph().context("Failed to read graph")?;
        let format = self.config.output.format;

        if format == OutputFormat::Text && self.config.output.show_adjacency {
            let adjacency = ReportGenerator::adjacency(&graph);
            out.write_all(TextFormatter.format_adjacency(&adjacency).as_bytes())?;
            out.flush()?;
        }

        let start = input
            .read_start_vertex(&graph)
            .context("Failed to read starting vertex")?;

        let report = ReportGenerator::build(&graph, start, &self.config.traversal.algorithms)?;
        info!(
            "Traversed {} algorithm(s) from vertex {}",
            report.traversals.len(),
            start
        );

        match format {
            OutputFormat::Text => {
                out.write_all(TextFormatter.format_traversals(&report.traversals).as_bytes())?;
            }
            OutputFormat::Json => {
                out.write_all(ReportGenerator::generate(&report, format)?.as_bytes())?;
            }
        }
        out.flush()?;

        Ok(report)
    }
}
