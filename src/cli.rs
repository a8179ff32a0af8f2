use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_CHUNK_SIZE, DEFAULT_CHUNKS_DIR, DEFAULT_CLIENT_BIN, DEFAULT_FRAGMENT_SIZE_MB,
    DEFAULT_MAX_CHUNKS,
};

#[derive(Parser, Debug)]
#[command(name = "chunk-ferry")]
#[command(
    about = "Split large files into fixed-size chunks, ferry them through an external \
             storage client, and merge them back into one file."
)]
pub struct Cli {
    /// Chunk size in bytes; the last chunk may be smaller.
    #[arg(
        long = "chunk-size",
        global = true,
        default_value_t = DEFAULT_CHUNK_SIZE,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub chunk_size: u64,

    /// Upper bound on chunk count; also the probe range when no manifest exists.
    #[arg(long = "max-chunks", global = true, default_value_t = DEFAULT_MAX_CHUNKS)]
    pub max_chunks: u32,

    /// Fragment size in MB, forwarded opaquely to the storage client.
    #[arg(long = "fragment-size", global = true, default_value_t = DEFAULT_FRAGMENT_SIZE_MB)]
    pub fragment_size: u64,

    /// Storage client binary to invoke (name on PATH or an explicit path).
    #[arg(long = "client", global = true, default_value = DEFAULT_CLIENT_BIN)]
    pub client: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split an input file into fixed-size chunk files
    Split {
        /// File to split
        input: PathBuf,

        /// Directory that receives the chunk files and the manifest
        #[arg(long = "chunks-dir", default_value = DEFAULT_CHUNKS_DIR)]
        chunks_dir: PathBuf,
    },

    /// Upload the chunks in a directory via the storage client
    Upload {
        /// Directory holding chunk files (and the split manifest, if any)
        chunks_dir: PathBuf,
    },

    /// Download chunks into a directory via the storage client
    Download {
        /// Directory that receives the downloaded chunks
        output_dir: PathBuf,

        /// Manifest naming the chunks to fetch; probes 0..max-chunks when absent
        #[arg(long)]
        manifest: Option<PathBuf>,
    },

    /// Concatenate chunk files, in index order, into one output file
    Merge {
        /// Directory holding chunk files
        chunks_dir: PathBuf,

        /// Path of the reassembled file
        output: PathBuf,

        /// Manifest override; defaults to the one inside the chunk directory
        #[arg(long)]
        manifest: Option<PathBuf>,
    },

    /// Run split, upload, download, and merge in sequence
    All {
        /// File to split
        input: PathBuf,

        /// Path of the reassembled file
        output: PathBuf,
    },
}
