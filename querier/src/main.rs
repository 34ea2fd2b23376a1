use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};
use tse_core::{InvertedIndex, PageDir};
use tse_querier::run_session;

#[derive(Parser)]
#[command(name = "tse-querier")]
#[command(about = "Answer boolean keyword queries read from stdin", long_about = None)]
struct Args {
    /// Directory produced by the crawler (must contain a .crawler marker)
    page_directory: PathBuf,
    /// Index file produced by the indexer
    index_filename: PathBuf,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the query transcript.
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let args = Args::parse();

    let pagedir = PageDir::open(&args.page_directory)?;
    let index = InvertedIndex::load(&args.index_filename)
        .with_context(|| format!("can't find readable index file {}", args.index_filename.display()))?;
    tracing::info!(words = index.len(), "index loaded");

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    run_session(&index, &pagedir, io::stdin().lock(), &mut out, &mut err)?;
    Ok(())
}
