//! `jsonck` CLI — validate JSON documents from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Validate stdin
//! echo '{"name":"Alice","age":30}' | jsonck check
//!
//! # Validate a file
//! jsonck check -i data.json
//!
//! # Count values by kind and report nesting depth
//! jsonck stats -i data.json
//!
//! # Tighten or relax the parser
//! jsonck --max-depth 16 check -i data.json
//! jsonck --config parser.json check -i data.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use json_core::{ParseOptions, Value, MAX_SUPPORTED_DEPTH};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jsonck", version, about = "Strict JSON validator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with parser options (`max_depth`, `allow_control_characters`)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Maximum nesting depth of objects and arrays
    #[arg(
        long,
        global = true,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new()
            .range(0..=MAX_SUPPORTED_DEPTH as u64)
    )]
    max_depth: Option<usize>,

    /// Accept raw control characters inside strings
    #[arg(long, global = true)]
    allow_control_chars: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse the input and report whether it is valid JSON
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Parse the input and print value counts and nesting depth
    Stats {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let options = build_options(&cli)?;

    match &cli.command {
        Commands::Check { input } => {
            let value = parse_input(input.as_deref(), &options)?;
            println!("ok: {}", value.kind());
        }
        Commands::Stats { input } => {
            let value = parse_input(input.as_deref(), &options)?;
            let stats = Stats::collect(&value);
            println!("nulls:     {}", stats.nulls);
            println!("booleans:  {}", stats.booleans);
            println!("numbers:   {}", stats.numbers);
            println!("strings:   {}", stats.strings);
            println!("arrays:    {}", stats.arrays);
            println!("objects:   {}", stats.objects);
            println!("total:     {}", stats.total());
            println!("max depth: {}", stats.max_depth);
        }
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

/// Merge `--config` with flag overrides. Flags win over the file.
fn build_options(cli: &Cli) -> Result<ParseOptions> {
    let mut options = match cli.config.as_deref() {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path))?;
            let options: ParseOptions = serde_json::from_str(&raw)
                .with_context(|| format!("Invalid parser config in {}", path))?;
            if options.max_depth > MAX_SUPPORTED_DEPTH {
                anyhow::bail!(
                    "max_depth {} in {} exceeds the supported maximum of {}",
                    options.max_depth,
                    path,
                    MAX_SUPPORTED_DEPTH
                );
            }
            options
        }
        None => ParseOptions::default(),
    };

    if let Some(depth) = cli.max_depth {
        options = options.with_max_depth(depth);
    }
    if cli.allow_control_chars {
        options = options.with_control_characters(true);
    }
    tracing::debug!(?options, "parser options");
    Ok(options)
}

fn parse_input(path: Option<&str>, options: &ParseOptions) -> Result<Value> {
    let text = read_input(path)?;
    let source = path.unwrap_or("<stdin>");
    json_core::parse_with(&text, options).with_context(|| format!("Invalid JSON in {}", source))
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

/// Per-kind value counts for a parsed document.
#[derive(Debug, Default, PartialEq)]
struct Stats {
    nulls: usize,
    booleans: usize,
    numbers: usize,
    strings: usize,
    arrays: usize,
    objects: usize,
    max_depth: usize,
}

impl Stats {
    fn collect(value: &Value) -> Self {
        let mut stats = Stats::default();
        stats.visit(value, 0);
        stats
    }

    fn visit(&mut self, value: &Value, depth: usize) {
        match value {
            Value::Null => self.nulls += 1,
            Value::Bool(_) => self.booleans += 1,
            Value::Number(_) => self.numbers += 1,
            Value::String(_) => self.strings += 1,
            Value::Array(items) => {
                self.arrays += 1;
                self.max_depth = self.max_depth.max(depth + 1);
                for item in items {
                    self.visit(item, depth + 1);
                }
            }
            Value::Object(map) => {
                self.objects += 1;
                self.max_depth = self.max_depth.max(depth + 1);
                for item in map.values() {
                    self.visit(item, depth + 1);
                }
            }
        }
    }

    fn total(&self) -> usize {
        self.nulls + self.booleans + self.numbers + self.strings + self.arrays + self.objects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_count_every_kind() {
        let value = json_core::parse(r#"{"a": [1, "x", null, true], "b": {}}"#).unwrap();
        let stats = Stats::collect(&value);
        assert_eq!(
            stats,
            Stats {
                nulls: 1,
                booleans: 1,
                numbers: 1,
                strings: 1,
                arrays: 1,
                objects: 2,
                max_depth: 2,
            }
        );
        assert_eq!(stats.total(), 7);
    }

    #[test]
    fn scalar_document_has_zero_depth() {
        let stats = Stats::collect(&Value::Number(1.0));
        assert_eq!(stats.max_depth, 0);
        assert_eq!(stats.total(), 1);
    }
}
