// Upload/download stages and the transport seam they run on.
pub mod storage_cli;

use std::fs;
use std::path::Path;

use anyhow::{Result, anyhow};
use tracing::{error, warn};

use crate::chunk;
use crate::config::TransferConfig;
use crate::manifest::{self, Manifest};

pub use storage_cli::StorageCli;

/// One-chunk transfer operations against the storage network.
///
/// The stage drivers only ever move a single chunk at a time through this
/// trait, so an SDK-backed client can replace the subprocess-based
/// [`StorageCli`] without touching the pipeline logic.
pub trait Transport {
    /// Upload one chunk file.
    fn upload(
        &self,
        chunk_file: &Path,
    ) -> Result<()>;

    /// Download the chunk stored under `remote_id` into `dest`.
    fn download(
        &self,
        remote_id: &str,
        dest: &Path,
    ) -> Result<()>;
}

/// Outcome of one upload or download batch.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct TransferReport {
    pub attempted: u32,
    pub transferred: u32,
    pub skipped: u32,
    pub failed: u32,
}

/// Resolve the transport for a batch: the external client when it is on the
/// search path, else `None` after printing the SDK integration notice.
pub fn resolve_transport(config: &TransferConfig) -> Option<StorageCli> {
    match StorageCli::locate(config) {
        Ok(client) => Some(client),
        Err(e) => {
            warn!("storage client unavailable: {e}");
            print_sdk_notice(&config.client_bin);
            None
        }
    }
}

// Placeholder for an SDK-backed integration: nothing is transferred, the
// notice just documents where a real Transport implementation would plug in.
fn print_sdk_notice(client_bin: &str) {
    println!("'{client_bin}' was not found on PATH; nothing will be transferred.");
    println!("Install the client, or point --client at it, or substitute an");
    println!("SDK-backed Transport implementation for the subprocess one.");
}

/// Upload every expected chunk found in `chunks_dir` through the storage
/// client, skipping missing files and carrying on past per-chunk failures.
/// A missing client degrades to the SDK notice and an empty report.
pub fn upload_chunks(
    chunks_dir: &Path,
    config: &TransferConfig,
) -> Result<TransferReport> {
    match resolve_transport(config) {
        Some(client) => upload_chunks_with(chunks_dir, config, &client),
        None => Ok(TransferReport::default()),
    }
}

/// Upload batch against an explicit transport. The expected set comes from
/// the manifest inside `chunks_dir` when one is readable, else from the
/// fixed probe `0..max_chunks`.
pub fn upload_chunks_with(
    chunks_dir: &Path,
    config: &TransferConfig,
    transport: &dyn Transport,
) -> Result<TransferReport> {
    let manifest = Manifest::load_from_dir(chunks_dir);
    let indices = manifest::expected_indices(manifest.as_ref(), config.max_chunks);

    println!("Uploading chunks from: {}", chunks_dir.display());

    let mut report = TransferReport::default();
    for index in indices {
        let chunk_path = chunk::chunk_path(chunks_dir, index);
        if !chunk_path.exists() {
            println!("Skipping missing chunk file: {}", chunk_path.display());
            report.skipped += 1;
            continue;
        }

        println!("Uploading chunk {index}: {}", chunk_path.display());
        report.attempted += 1;
        match transport.upload(&chunk_path) {
            Ok(()) => {
                println!("Uploaded chunk {index}");
                report.transferred += 1;
            }
            Err(e) => {
                // One failed chunk never aborts the batch.
                error!("uploading chunk {index} failed: {e}");
                report.failed += 1;
            }
        }
    }

    println!(
        "Upload finished: {} uploaded, {} skipped, {} failed",
        report.transferred, report.skipped, report.failed
    );
    Ok(report)
}

/// Fetch every expected chunk into `output_dir` through the storage client.
/// The directory is created first (fatal on failure) even when the client
/// turns out to be missing.
pub fn download_chunks(
    output_dir: &Path,
    manifest: Option<Manifest>,
    config: &TransferConfig,
) -> Result<TransferReport> {
    fs::create_dir_all(output_dir).map_err(|e| {
        anyhow!(
            "cannot create download directory {}: {e}",
            output_dir.display()
        )
    })?;

    match resolve_transport(config) {
        Some(client) => download_chunks_with(output_dir, manifest, config, &client),
        None => Ok(TransferReport::default()),
    }
}

/// Download batch against an explicit transport. Every expected index is
/// attempted regardless of what is already present locally; the remote
/// identifier is the chunk's filename-by-index convention.
pub fn download_chunks_with(
    output_dir: &Path,
    manifest: Option<Manifest>,
    config: &TransferConfig,
    transport: &dyn Transport,
) -> Result<TransferReport> {
    let indices = manifest::expected_indices(manifest.as_ref(), config.max_chunks);

    println!("Downloading chunks into: {}", output_dir.display());

    let mut report = TransferReport::default();
    for index in indices {
        let dest = chunk::chunk_path(output_dir, index);
        println!("Downloading chunk {index}: {}", dest.display());
        report.attempted += 1;
        match transport.download(&chunk::remote_id(index), &dest) {
            Ok(()) => {
                println!("Downloaded chunk {index}");
                report.transferred += 1;
            }
            Err(e) => {
                error!("downloading chunk {index} failed: {e}");
                report.failed += 1;
            }
        }
    }

    // A manifest that drove this batch describes the directory we just
    // filled; keep a copy there so a later merge is manifest-driven too.
    if let Some(m) = &manifest {
        if let Err(e) = m.write_to_dir(output_dir) {
            warn!("could not copy manifest into {}: {e}", output_dir.display());
        }
    }

    println!(
        "Download finished: {} downloaded, {} failed",
        report.transferred, report.failed
    );
    Ok(report)
}
