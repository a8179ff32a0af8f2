// Splitter: copy an input file into bounded fixed-size chunk files.
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Result, anyhow};
use tracing::warn;

use crate::chunk;
use crate::config::TransferConfig;
use crate::manifest::Manifest;

/// Outcome of one split run.
#[derive(Debug)]
pub struct SplitReport {
    pub chunks: u32,
    pub total_bytes: u64,
}

/// Split `input` into files of at most `config.chunk_size` bytes under
/// `chunks_dir`, at most `config.max_chunks` of them, and persist a manifest
/// describing what was produced.
///
/// Splitting stops at the first zero-byte copy (input exhausted; the empty
/// probe file stays behind, uncounted) or after a chunk shorter than the
/// configured size (terminal chunk). Input beyond `max_chunks` whole chunks
/// is not split; a warning points out the dropped tail.
///
/// Any I/O error while creating or writing a chunk is fatal and may leave a
/// partial directory behind.
pub fn split_file(
    input: &Path,
    chunks_dir: &Path,
    config: &TransferConfig,
) -> Result<SplitReport> {
    let mut file =
        File::open(input).map_err(|e| anyhow!("cannot open input file {}: {e}", input.display()))?;
    let file_size = file
        .metadata()
        .map_err(|e| anyhow!("cannot stat input file {}: {e}", input.display()))?
        .len();

    println!("Splitting file: {}", input.display());
    println!("File size: {:.2} GB", gb(file_size));

    fs::create_dir_all(chunks_dir)
        .map_err(|e| anyhow!("cannot create chunk directory {}: {e}", chunks_dir.display()))?;

    let input_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut manifest = Manifest::new(input_name, config.chunk_size);

    let mut produced = 0u32;
    while produced < config.max_chunks {
        let chunk_path = chunk::chunk_path(chunks_dir, produced);
        let mut chunk_file = File::create(&chunk_path)
            .map_err(|e| anyhow!("cannot create chunk file {}: {e}", chunk_path.display()))?;

        let written = io::copy(&mut (&mut file).take(config.chunk_size), &mut chunk_file)
            .map_err(|e| anyhow!("writing chunk file {} failed: {e}", chunk_path.display()))?;

        if written == 0 {
            // Input exhausted on a chunk boundary; the empty probe file stays
            // behind but is neither counted nor recorded.
            break;
        }

        manifest.push_chunk(produced, chunk::chunk_file_name(produced), written);
        println!(
            "Created chunk {produced}: {} ({:.2} MB)",
            chunk_path.display(),
            mb(written)
        );
        produced += 1;

        if written < config.chunk_size {
            // Short copy: end of input.
            break;
        }
    }

    if produced == config.max_chunks && manifest.total_bytes < file_size {
        warn!(
            "input is larger than {} chunks of {} bytes; {} trailing bytes were not split",
            config.max_chunks,
            config.chunk_size,
            file_size - manifest.total_bytes
        );
    }

    manifest.write_to_dir(chunks_dir)?;
    println!("Split complete: {produced} chunk file(s) in {}", chunks_dir.display());

    Ok(SplitReport {
        chunks: produced,
        total_bytes: manifest.total_bytes,
    })
}

fn mb(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}

fn gb(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0 * 1024.0)
}
