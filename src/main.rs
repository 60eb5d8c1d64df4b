use anyhow::Context;
use clap::Parser;
use linesort::prelude::*;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

/// Sort the lines of a UTF-16LE text file, ignoring punctuation and spaces.
///
/// Without any of `--original`, `--sorted` or `--rev`, all three renderings are
/// written, one after another.
#[derive(Debug, Parser)]
#[command(bin_name = "linesort")]
#[command(version)]
#[command(next_line_help = true)]
struct CliArg {
    /// UTF-16LE text file to read.
    #[arg(short, long)]
    input: PathBuf,

    /// File the renderings are written to.
    #[arg(long, default_value = "output.txt")]
    output: PathBuf,

    /// Emit the lines in their original order.
    #[arg(short = 'o', long)]
    original: bool,

    /// Emit the lines sorted by their beginnings.
    #[arg(short, long)]
    sorted: bool,

    /// Emit the lines sorted by their endings.
    #[arg(short, long)]
    rev: bool,
}

impl CliArg {
    fn selection(&self) -> Selection {
        Selection {
            original: self.original,
            sorted: self.sorted,
            reversed: self.rev,
        }
        .normalized()
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::WARN.into()))
        .init();

    let args = CliArg::parse();
    let selection = args.selection();
    info!(input = %args.input.display(), ?selection, "linesort starting");

    let output = File::create(&args.output)
        .with_context(|| format!("Unable to open file {} for output", args.output.display()))?;
    let mut sink = BufWriter::new(output);

    let mut table = LineTable::load(&args.input)
        .with_context(|| format!("Unable to load {}", args.input.display()))?;

    emit_selected(&mut table, selection, &Renderer::new(), &mut sink)
        .with_context(|| format!("Unable to write {}", args.output.display()))?;

    info!(output = %args.output.display(), lines = table.len(), "done");
    println!("Asked versions written to {}", args.output.display());
    Ok(())
}
