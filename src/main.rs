// src/main.rs
//
// sentrunc: keep the first N sentences of a text or HTML fragment
//
// - Plain mode: sentences end at '.', '!', '?' (followed by whitespace) or a newline;
//   a '.' inside a number such as 4.50 never ends a sentence.
// - HTML mode: markup is copied verbatim and not counted; tags still open at the
//   cut point are closed innermost first. Unmatched close tags pass through.
// - A count of zero or less produces empty output.
// - Input is read as bytes; invalid UTF-8 is skipped rather than reported.
//
// CLI flags:
//   --html            : treat input as HTML
//   -n, --sentences N : number of sentences to keep
//   -o, --output FILE : write here instead of stdout
// Input defaults to stdin ("-" also means stdin).
//
// Logging goes to stderr; set RUST_LOG=debug to see tag repairs.

use anyhow::Context;
use clap::{ArgAction, Parser};
use sentrunc::{parse_count, truncate, Mode};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// CLI flags
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Treat input as HTML and close tags left open at the cut point
    #[arg(long, action = ArgAction::SetTrue)]
    html: bool,

    /// Number of sentences to keep (zero or negative keeps nothing)
    #[arg(
        short = 'n',
        long = "sentences",
        value_parser = parse_count,
        allow_negative_numbers = true
    )]
    sentences: i64,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Input file (default: stdin)
    input: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let src = read_input(cli.input.as_deref())?;
    let mode = if cli.html { Mode::Html } else { Mode::Plain };
    let out = truncate(mode, &src, cli.sentences);
    debug!(
        ?mode,
        sentences = cli.sentences,
        in_bytes = src.len(),
        out_bytes = out.len(),
        "truncated"
    );

    write_output(cli.output.as_deref(), out.as_bytes())
}

fn as_file(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| p.as_os_str() != "-")
}

fn read_input(path: Option<&Path>) -> anyhow::Result<Vec<u8>> {
    match as_file(path) {
        Some(path) => {
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&Path>, bytes: &[u8]) -> anyhow::Result<()> {
    match as_file(path) {
        Some(path) => {
            fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes).context("failed to write stdout")?;
            stdout.flush().context("failed to flush stdout")
        }
    }
}
