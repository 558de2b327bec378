use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use graph_traversal::{
    config::{Config, DEFAULT_CONFIG_TEMPLATE},
    input::GraphInput,
    session::TraversalSession,
    types::{Algorithm, OutputFormat, PromptMode},
};
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "graph-traversal")]
#[command(about = "Build an undirected graph and print its breadth-first and depth-first traversals")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level
    #[arg(short, long, default_value = "warn", global = true)]
    log_level: String,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read a graph and a starting vertex, then print the traversals
    Run {
        /// Read input from this file instead of standard input
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format (text, json)
        #[arg(short, long)]
        output: Option<OutputFormat>,

        /// Traversal to run; repeat to run several in order (bfs, dfs)
        #[arg(short, long = "algorithm")]
        algorithms: Vec<Algorithm>,

        /// When to print input prompts (auto, always, never)
        #[arg(long)]
        prompts: Option<PromptMode>,
    },

    /// Initialize configuration file
    Init {
        /// Configuration file path
        #[arg(short = 'f', long, default_value = "graph-traversal.yml")]
        config_file: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level)?;

    match cli.command {
        Commands::Run {
            input,
            output,
            algorithms,
            prompts,
        } => {
            let mut config = Config::load(cli.config.as_deref())?;

            // Command line flags take precedence over file and environment.
            if let Some(format) = output {
                config.output.format = format;
            }
            if !algorithms.is_empty() {
                config.traversal.algorithms = algorithms;
            }
            if let Some(prompts) = prompts {
                config.input.prompts = prompts;
            }

            run_traversal(input, &config)?;
        }

        Commands::Init { config_file, force } => {
            init_config(config_file, force)?;
        }
    }

    Ok(())
}

/// Initialize tracing with the specified log level
fn init_tracing(log_level: &str) -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(log_level))
        .context("Failed to create env filter")?;

    // Logs go to stderr; stdout carries prompts and traversal output.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_level(true),
        )
        .with(env_filter)
        .init();

    Ok(())
}

/// Read the graph from a file or stdin and print the traversal report
fn run_traversal(input_path: Option<PathBuf>, config: &Config) -> Result<()> {
    let interactive = input_path.is_none() && io::stdin().is_terminal();
    let show_prompts = match config.input.prompts {
        PromptMode::Auto => interactive,
        PromptMode::Always => true,
        PromptMode::Never => false,
    };
    debug!("Interactive: {}, prompts: {}", interactive, show_prompts);

    let reader: Box<dyn BufRead> = match &input_path {
        Some(path) => {
            info!("Reading graph from: {:?}", path);
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file: {:?}", path))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let prompt: Box<dyn Write> = if show_prompts {
        Box::new(io::stdout())
    } else {
        Box::new(io::sink())
    };

    let mut input = GraphInput::new(reader, prompt);
    let mut out = io::stdout();
    TraversalSession::new(config).run(&mut input, &mut out)?;

    Ok(())
}

/// Write the default configuration file
fn init_config(config_file: PathBuf, force: bool) -> Result<()> {
    info!("Initializing configuration file: {:?}", config_file);

    if config_file.exists() && !force {
        anyhow::bail!(
            "Configuration file already exists: {:?} (use --force to overwrite)",
            config_file
        );
    }

    std::fs::write(&config_file, DEFAULT_CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to write configuration file: {:?}", config_file))?;

    println!("Configuration file created: {:?}", config_file);
    println!("Edit this file to customize traversal and output settings.");

    Ok(())
}
