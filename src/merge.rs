// Merger: concatenate chunk files, in index order, into one output file.
use std::fs::File;
use std::io;
use std::path::Path;

use anyhow::{Result, anyhow};
use tracing::warn;

use crate::chunk;
use crate::config::TransferConfig;
use crate::manifest::{self, Manifest};

/// Outcome of one merge run.
#[derive(Debug)]
pub struct MergeReport {
    pub merged: u32,
    pub skipped: u32,
    pub total_bytes: u64,
}

/// Concatenate the chunks in `chunks_dir` into `output`, in strictly
/// ascending index order.
///
/// The expected set comes from `manifest` when given, else from a manifest
/// found inside `chunks_dir`, else from the fixed probe `0..max_chunks`.
/// A missing or unreadable chunk is skipped with a warning and its bytes are
/// simply absent from the output — no zero-fill, no abort.
pub fn merge_chunks(
    chunks_dir: &Path,
    output: &Path,
    manifest: Option<Manifest>,
    config: &TransferConfig,
) -> Result<MergeReport> {
    let mut merged_file = File::create(output)
        .map_err(|e| anyhow!("cannot create output file {}: {e}", output.display()))?;

    let manifest = manifest.or_else(|| Manifest::load_from_dir(chunks_dir));
    let indices = manifest::expected_indices(manifest.as_ref(), config.max_chunks);

    println!("Merging chunks: {} -> {}", chunks_dir.display(), output.display());

    let mut report = MergeReport {
        merged: 0,
        skipped: 0,
        total_bytes: 0,
    };

    for index in indices {
        let chunk_path = chunk::chunk_path(chunks_dir, index);
        if !chunk_path.exists() {
            warn!("chunk file missing, skipping: {}", chunk_path.display());
            report.skipped += 1;
            continue;
        }

        let mut chunk_file = match File::open(&chunk_path) {
            Ok(f) => f,
            Err(e) => {
                warn!("cannot open chunk file {}: {e}", chunk_path.display());
                report.skipped += 1;
                continue;
            }
        };

        match io::copy(&mut chunk_file, &mut merged_file) {
            Ok(copied) => {
                println!("Merged chunk {index}: {:.2} MB", mb(copied));
                report.merged += 1;
                report.total_bytes += copied;
            }
            Err(e) => {
                warn!("merging chunk {index} failed: {e}");
                report.skipped += 1;
            }
        }
    }

    let final_size = merged_file
        .metadata()
        .map(|m| m.len())
        .unwrap_or(report.total_bytes);
    println!(
        "Merge complete: {} ({:.2} GB)",
        output.display(),
        gb(final_size)
    );

    Ok(report)
}

fn mb(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}

fn gb(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0 * 1024.0)
}
