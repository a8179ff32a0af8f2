use crate::cli::Cli;
use crate::constants::{
    DEFAULT_CHUNK_SIZE, DEFAULT_CLIENT_BIN, DEFAULT_FRAGMENT_SIZE_MB, DEFAULT_MAX_CHUNKS,
};

/// Transfer parameters shared by every stage, so split, upload, download, and
/// merge can be invoked with consistent values across separate runs.
#[derive(Debug, Clone)]
pub struct TransferConfig {
    /// Bytes per chunk; the last chunk may be smaller.
    pub chunk_size: u64,
    /// Upper bound on chunk count; also the probe range when no manifest exists.
    pub max_chunks: u32,
    /// Forwarded opaquely to the storage client as `<N>MB`.
    pub fragment_size_mb: u64,
    /// Storage client binary, a name on PATH or an explicit path.
    pub client_bin: String,
}

impl TransferConfig {
    /// Build the stage configuration from parsed CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            chunk_size: cli.chunk_size,
            max_chunks: cli.max_chunks,
            fragment_size_mb: cli.fragment_size,
            client_bin: cli.client.clone(),
        }
    }
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            max_chunks: DEFAULT_MAX_CHUNKS,
            fragment_size_mb: DEFAULT_FRAGMENT_SIZE_MB,
            client_bin: DEFAULT_CLIENT_BIN.to_string(),
        }
    }
}
