//! `jsonparse` CLI — convert JSON documents and inspect the vector-vs-list
//! decisions from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Convert JSON (stdin → stdout) into the tagged JSON report
//! echo '{"a":[1,null,3]}' | jsonparse convert
//!
//! # Convert from file to file, pretty-printed
//! jsonparse convert -i data.json -o data.report.json --pretty
//!
//! # Structural summary of the converted value
//! jsonparse describe -i data.json
//!
//! # One line per array: path, length, decision
//! jsonparse analyze -i data.json
//! ```
//!
//! Logging goes to stderr and follows `RUST_LOG` (default `warn`);
//! `-v` switches to `debug`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jsonparse_core::{ConvertOptions, OutputValue};
use std::io::{self, Read};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "jsonparse",
    version,
    about = "Convert JSON into typed vectors, lists and mappings"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging on stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert JSON and write the tagged JSON report
    Convert {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Pretty-print the report
        #[arg(long)]
        pretty: bool,
        /// Maximum nesting depth to convert
        #[arg(long)]
        max_depth: Option<usize>,
    },
    /// Print a structural summary of the converted value
    Describe {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Maximum nesting depth to convert
        #[arg(long)]
        max_depth: Option<usize>,
    },
    /// Show the vector-vs-list decision for every array in the document
    Analyze {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Emit the decisions as a JSON array instead of text lines
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Convert {
            input,
            output,
            pretty,
            max_depth,
        } => {
            let json = read_input(input.as_deref())?;
            let value = convert(&json, max_depth)?;
            let report = if pretty {
                serde_json::to_string_pretty(&value)?
            } else {
                serde_json::to_string(&value)?
            };
            write_output(output.as_deref(), &report)?;
        }
        Commands::Describe { input, max_depth } => {
            let json = read_input(input.as_deref())?;
            let value = convert(&json, max_depth)?;
            println!("{}", jsonparse_core::describe(&value));
        }
        Commands::Analyze { input, json } => {
            let text = read_input(input.as_deref())?;
            let root = jsonparse_core::parse(&text).context("Failed to parse JSON")?;
            let report = jsonparse_core::survey(&root);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for row in &report {
                    println!("{}\t{}\t{}", row.path, row.len, row.decision);
                }
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn convert(json: &str, max_depth: Option<usize>) -> Result<OutputValue> {
    let mut options = ConvertOptions::default();
    if let Some(depth) = max_depth {
        options = options.with_max_depth(depth);
    }
    debug!(max_depth = options.max_depth, "converting input");
    jsonparse_core::from_json_with_options(json, &options).context("Failed to convert JSON")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
