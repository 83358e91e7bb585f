//! `jsonpointer` — resolve a JSON Pointer (RFC 6901) against JSON files.
//!
//! ## Usage
//!
//! ```sh
//! # Inline pointer, one or more documents
//! jsonpointer /foo/0 doc.json other.json
//!
//! # Pointer read from a file, pretty-printed output
//! jsonpointer -f pointer.txt --indent 2 doc.json
//! ```
//!
//! Each resolved value is printed as JSON on its own line, in the order the
//! documents were given. The first failure stops processing with a non-zero
//! exit status.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};
use json_pointer::{JsonPointer, Resolved};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use tracing::debug;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "jsonpointer",
    version,
    about = "Resolve a JSON Pointer against JSON documents"
)]
struct Cli {
    /// File containing the JSON Pointer (all positional arguments are then documents)
    #[arg(short = 'f', long, value_name = "PATH")]
    pointer_file: Option<PathBuf>,

    /// Indent output by N spaces (compact output if omitted)
    #[arg(long, value_name = "N")]
    indent: Option<usize>,

    /// Percent-decode pointer tokens before ~-unescaping them
    #[arg(long)]
    legacy: bool,

    /// Log resolution steps to stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The pointer (unless --pointer-file is given) followed by the documents
    #[arg(value_name = "POINTER | FILE", required = true)]
    args: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (pointer, files) = split_args(&cli)?;
    let pointer = if cli.legacy {
        JsonPointer::parse_legacy(&pointer)
    } else {
        JsonPointer::parse(&pointer)
    }
    .with_context(|| format!("Invalid pointer: {pointer:?}"))?;
    debug!(pointer = %pointer, documents = files.len(), "resolving");

    for file in files {
        let doc = read_document(Path::new(file))?;
        let value = lookup(&doc, &pointer).with_context(|| format!("Failed to resolve in {file}"))?;
        println!("{}", render(value, cli.indent)?);
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => return,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Separate the pointer from the document paths.
fn split_args(cli: &Cli) -> Result<(String, &[String])> {
    if let Some(path) = &cli.pointer_file {
        let pointer = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read pointer file: {}", path.display()))?;
        return Ok((pointer.trim().to_string(), &cli.args));
    }
    match cli.args.split_first() {
        Some((pointer, files)) if !files.is_empty() => Ok((pointer.clone(), files)),
        _ => bail!("Expected a pointer followed by at least one document"),
    }
}

fn read_document(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse JSON: {}", path.display()))
}

fn lookup<'a>(doc: &'a Value, pointer: &JsonPointer) -> Result<&'a Value> {
    match pointer.resolve(doc)? {
        Resolved::Node(value) => Ok(value),
        Resolved::EndOfList(marker) => bail!(
            "{pointer} points past the end of a list of length {}",
            marker.index()
        ),
    }
}

fn render(value: &Value, indent: Option<usize>) -> Result<String> {
    let Some(width) = indent else {
        return Ok(serde_json::to_string(value)?);
    };
    let indent = " ".repeat(width);
    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(out)?)
}
