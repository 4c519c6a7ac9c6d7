mod hexdump;
mod listing;

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use iff::reader::DEFAULT_MAX_DEPTH;
use iff::registry::entries;
use iff::{ChunkNode, ChunkReader};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

use crate::hexdump::hexdump;
use crate::listing::{rows, Row};

#[derive(Parser)]
#[command(name = "iffmaster", version, about = "Inspect IFF (EA-85) files")]
struct Cli {
    #[command(subcommand)]
    command: Command,
    /// Log decoder activity to stderr (same as RUST_LOG=debug).
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Maximum nesting of group chunks before the file is rejected.
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

#[derive(Subcommand)]
enum Command {
    /// Print the chunk tree, one line per chunk.
    Tree {
        /// Path to an IFF file.
        file: PathBuf,
    },
    /// Print the chunk tree with the decoded fields of every chunk.
    Show {
        /// Path to an IFF file.
        file: PathBuf,
        /// Add a hex dump of each chunk payload.
        #[arg(long)]
        hex: bool,
        /// Print the listing as JSON.
        #[arg(long, conflicts_with = "hex")]
        json: bool,
    },
    /// List every known chunk type.
    Types,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn load(path: &Path, max_depth: usize) -> Result<ChunkNode> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let len = file
        .metadata()
        .with_context(|| format!("failed to stat {}", path.display()))?
        .len();
    info!(path = %path.display(), len, "reading IFF file");
    ChunkReader::new()
        .max_depth(max_depth)
        .parse(BufReader::new(file), len)
        .with_context(|| format!("failed to parse {}", path.display()))
}

fn cmd_tree(path: &Path, max_depth: usize) -> Result<()> {
    let root = load(path, max_depth)?;
    let mut out = io::stdout().lock();
    for row in rows(&root) {
        writeln!(out, "{}", row.summary())?;
    }
    Ok(())
}

fn cmd_show(path: &Path, max_depth: usize, hex: bool, json: bool) -> Result<()> {
    let root = load(path, max_depth)?;
    let rows = rows(&root);
    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &rows).context("failed to write JSON")?;
        writeln!(out)?;
        return Ok(());
    }
    for row in &rows {
        print_row(&mut out, row, hex)?;
    }
    debug!(chunks = rows.len(), "listing done");
    Ok(())
}

fn print_row(out: &mut impl Write, row: &Row<'_>, hex: bool) -> io::Result<()> {
    writeln!(out, "{}", row.summary())?;
    let indent = "  ".repeat(row.depth + 1);
    for field in &row.fields {
        writeln!(out, "{indent}{field}")?;
    }
    if hex && !row.payload.is_empty() {
        for line in hexdump(row.payload).lines() {
            writeln!(out, "{indent}{line}")?;
        }
    }
    Ok(())
}

fn cmd_types() -> Result<()> {
    let mut out = io::stdout().lock();
    for entry in entries() {
        let decoded = if entry.decoder.is_some() { "decoded" } else { "" };
        writeln!(out, "{:<12} {:<32} {decoded}", entry.key, entry.description)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Command::Tree { file } => cmd_tree(file, cli.max_depth),
        Command::Show { file, hex, json } => cmd_show(file, cli.max_depth, *hex, *json),
        Command::Types => cmd_types(),
    }
}
