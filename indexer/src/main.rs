use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::OpenOptions;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};
use tse_core::{InvertedIndex, PageDir};
use tse_indexer::{build_index, MIN_WORD_LEN, TYPICAL_INDEX_SIZE};

#[derive(Parser)]
#[command(name = "tse-indexer")]
#[command(about = "Build and inspect the inverted index for a crawler page directory", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the index from a crawler page directory and save it
    Build {
        /// Directory produced by the crawler (must contain a .crawler marker)
        page_directory: PathBuf,
        /// Index file to write
        index_filename: PathBuf,
        /// Initial number of word slots in the index
        #[arg(long, default_value_t = TYPICAL_INDEX_SIZE)]
        slots: usize,
        /// Skip words shorter than this
        #[arg(long, default_value_t = MIN_WORD_LEN)]
        min_word_len: usize,
    },
    /// Load an index file and save it again under a new name
    Roundtrip {
        old_index_filename: PathBuf,
        new_index_filename: PathBuf,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { page_directory, index_filename, slots, min_word_len } => {
            let pagedir = PageDir::open(&page_directory)?;
            // Fail before indexing if the output can never be written.
            OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&index_filename)
                .with_context(|| format!("{} is not a writable path", index_filename.display()))?;
            let index = build_index(&pagedir, slots, min_word_len)?;
            index.save(&index_filename)?;
            tracing::info!(output = %index_filename.display(), "index build complete");
        }
        Commands::Roundtrip { old_index_filename, new_index_filename } => {
            let index = InvertedIndex::load(&old_index_filename)?;
            index.save(&new_index_filename)?;
            tracing::info!(words = index.len(), output = %new_index_filename.display(), "index rewritten");
        }
    }
    Ok(())
}
