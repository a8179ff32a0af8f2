// Chunk file naming: the one contract every stage shares.
use std::path::{Path, PathBuf};

/// File name of the chunk at `index`: `chunk_<index>.dat`.
pub fn chunk_file_name(index: u32) -> String {
    format!("chunk_{index}.dat")
}

/// Path of the chunk at `index` inside `dir`.
pub fn chunk_path(
    dir: &Path,
    index: u32,
) -> PathBuf {
    dir.join(chunk_file_name(index))
}

/// Remote identifier a chunk is addressed by on the storage network.
///
/// Assumed to equal the local file name; the external client's real
/// addressing scheme has not been confirmed, so nothing here verifies it.
pub fn remote_id(index: u32) -> String {
    chunk_file_name(index)
}
