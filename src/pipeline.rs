// End-to-end orchestration: split, upload, download, merge in one run.
use std::path::Path;

use anyhow::Result;

use crate::config::TransferConfig;
use crate::constants::{DEFAULT_CHUNKS_DIR, DEFAULT_DOWNLOAD_DIR};
use crate::manifest::Manifest;
use crate::merge;
use crate::split;
use crate::transfer;

/// Run the whole pipeline: split `input`, upload the chunks, download them
/// back, and merge the downloads into `output`.
///
/// The intermediate chunks land in the fixed working directories (`chunks/`
/// and `downloaded_chunks/` under the current directory) and are left behind
/// for inspection afterwards.
pub fn run_all(
    input: &Path,
    output: &Path,
    config: &TransferConfig,
) -> Result<()> {
    let chunks_dir = Path::new(DEFAULT_CHUNKS_DIR);
    let download_dir = Path::new(DEFAULT_DOWNLOAD_DIR);

    println!("========== full pipeline ==========");

    println!("\n[step 1/4] split");
    split::split_file(input, chunks_dir, config)?;

    println!("\n[step 2/4] upload");
    transfer::upload_chunks(chunks_dir, config)?;

    println!("\n[step 3/4] download");
    let manifest = Manifest::load_from_dir(chunks_dir);
    transfer::download_chunks(download_dir, manifest, config)?;

    // The download stage dropped a manifest copy into its directory, so the
    // merge picks it up from there.
    println!("\n[step 4/4] merge");
    merge::merge_chunks(download_dir, output, None, config)?;

    println!("\n========== pipeline finished ==========");
    Ok(())
}
