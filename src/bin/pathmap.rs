//! pathmap - dot-path queries and deep merges on JSON/YAML documents
//!
//! Reads a document from a file or stdin, applies one operation and writes
//! the result to stdout or a file.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path as FsPath, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use pathmap::{value, Array, MergeStrategy, Value};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "PATHMAP_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Guesses the format from a file extension.
    fn from_path(path: &FsPath) -> Option<Format> {
        match path.extension()?.to_str()? {
            "json" => Some(Format::Json),
            "yaml" | "yml" => Some(Format::Yaml),
            _ => None,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "pathmap", version, about = "Dot-path queries and deep merges on JSON/YAML documents")]
struct Cli {
    /// Input document. Reads stdin when omitted.
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// Output location. Use '-' for stdout.
    #[arg(short, long, global = true, default_value = "-")]
    output: String,

    /// Document format. Inferred from the file extension when omitted.
    #[arg(short, long, global = true, value_enum, env = "PATHMAP_FORMAT")]
    format: Option<Format>,

    /// Indent JSON output.
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the value at PATH.
    Get {
        path: String,
        /// Value printed when PATH is absent (JSON, or a plain string).
        #[arg(long, default_value = "null")]
        default: String,
    },
    /// Print whether a value exists at PATH.
    Has { path: String },
    /// Set PATH to VALUE (JSON, or a plain string).
    Set { path: String, value: String },
    /// Remove one or more paths.
    Remove {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Append VALUE to the list at PATH.
    Add { path: String, value: String },
    /// Renumber integer keys from zero.
    Reset {
        #[arg(long)]
        deep: bool,
    },
    /// Flatten the document to dot-path keys.
    Dot {
        #[arg(long, default_value = "")]
        prefix: String,
    },
    /// Rebuild a nested document from dot-path keys.
    Undot,
    /// Deep-merge FILES left to right.
    Extend {
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Replace lists instead of merging them by position.
        #[arg(long)]
        distinct: bool,
    },
    /// Print whether the document is indexed or associative.
    Classify,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut output: Box<dyn Write> = if cli.output == "-" {
        Box::new(io::stdout())
    } else {
        Box::new(
            fs::File::create(&cli.output)
                .map_err(|e| format!("Failed to create output file {:?}: {}", cli.output, e))?,
        )
    };

    let format = cli
        .format
        .or_else(|| cli.input.as_deref().and_then(Format::from_path))
        .unwrap_or(Format::Json);
    let emit = Emitter {
        format,
        pretty: cli.pretty,
    };

    if let Command::Extend { files, distinct } = &cli.command {
        let strategy = if *distinct {
            MergeStrategy::Distinct
        } else {
            MergeStrategy::Positional
        };
        let merged = extend(files, cli.format, strategy)?;
        return emit.write(&mut output, &Value::Array(merged));
    }

    let mut document = read_document(cli.input.as_deref(), format)?;

    match cli.command {
        Command::Get { path, default } => {
            let default = parse_value(&default);
            let found = pathmap::get(&document, path.as_str(), &default);
            emit.write(&mut output, &found)?;
        }
        Command::Has { path } => {
            writeln!(output, "{}", pathmap::has(&document, path.as_str()))?;
        }
        Command::Set { path, value } => {
            pathmap::set(&mut document, path.as_str(), parse_value(&value));
            emit.write(&mut output, &Value::Array(document))?;
        }
        Command::Remove { paths } => {
            pathmap::remove(&mut document, paths);
            emit.write(&mut output, &Value::Array(document))?;
        }
        Command::Add { path, value } => {
            pathmap::add(&mut document, path.as_str(), parse_value(&value));
            emit.write(&mut output, &Value::Array(document))?;
        }
        Command::Reset { deep } => {
            emit.write(&mut output, &Value::Array(pathmap::reset(&document, deep)))?;
        }
        Command::Dot { prefix } => {
            emit.write(&mut output, &Value::Array(pathmap::dot(&document, &prefix)))?;
        }
        Command::Undot => {
            emit.write(&mut output, &Value::Array(pathmap::undot(&document)))?;
        }
        Command::Classify => {
            let shape = if pathmap::is_indexed(&document) {
                "indexed"
            } else {
                "associative"
            };
            writeln!(output, "{}", shape)?;
        }
        Command::Extend { .. } => {}
    }

    Ok(())
}

fn extend(
    files: &[PathBuf],
    format: Option<Format>,
    strategy: MergeStrategy,
) -> Result<Array, Box<dyn std::error::Error>> {
    let mut layers = Vec::with_capacity(files.len());
    for file in files {
        let format = format
            .or_else(|| Format::from_path(file))
            .unwrap_or(Format::Json);
        layers.push(read_document(Some(file.as_path()), format)?);
    }
    info!(layers = layers.len(), %strategy, "merging documents");
    Ok(pathmap::merge_with(strategy, &layers))
}

fn read_document(input: Option<&FsPath>, format: Format) -> Result<Array, Box<dyn std::error::Error>> {
    let content = match input {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| format!("Failed to read file {:?}: {}", path, e))?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    debug!(bytes = content.len(), ?format, "read document");

    let document = match format {
        Format::Json => value::array_from_json(&content),
        Format::Yaml => value::array_from_yaml(&content),
    };
    Ok(document.map_err(|e| format!("Failed to parse document: {}", e))?)
}

/// Parses a command-line value as JSON, falling back to a plain string.
fn parse_value(raw: &str) -> Value {
    value::from_json(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

struct Emitter {
    format: Format,
    pretty: bool,
}

impl Emitter {
    fn write(&self, output: &mut dyn Write, doc: &Value) -> Result<(), Box<dyn std::error::Error>> {
        match self.format {
            Format::Json if self.pretty => writeln!(output, "{}", value::to_json_pretty(doc)?)?,
            Format::Json => writeln!(output, "{}", value::to_json(doc)?)?,
            Format::Yaml => write!(output, "{}", value::to_yaml(doc)?)?,
        }
        Ok(())
    }
}
