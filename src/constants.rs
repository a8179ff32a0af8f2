// Centralized magic numbers & default values
pub const DEFAULT_CHUNK_SIZE: u64 = 400 * 1024 * 1024;
pub const DEFAULT_MAX_CHUNKS: u32 = 10;
pub const DEFAULT_FRAGMENT_SIZE_MB: u64 = 400;
pub const DEFAULT_CLIENT_BIN: &str = "0g-storage-client";
pub const DEFAULT_CHUNKS_DIR: &str = "chunks";
pub const DEFAULT_DOWNLOAD_DIR: &str = "downloaded_chunks";
pub const MANIFEST_FILE: &str = "manifest.json";
