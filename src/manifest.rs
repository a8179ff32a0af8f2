// Split manifest: records what a split actually produced so later stages
// read it instead of guessing indices from a fixed upper bound.
use std::fs;
use std::path::Path;

use anyhow::{Result, anyhow};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::MANIFEST_FILE;

/// One produced chunk as recorded at split time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkEntry {
    pub index: u32,
    pub file_name: String,
    pub size: u64,
}

/// Record of one split run, persisted as `manifest.json` next to the chunks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub input_name: String,
    pub chunk_size: u64,
    pub total_bytes: u64,
    pub generated_at: String,
    pub chunks: Vec<ChunkEntry>,
}

impl Manifest {
    pub fn new(
        input_name: String,
        chunk_size: u64,
    ) -> Self {
        Self {
            input_name,
            chunk_size,
            total_bytes: 0,
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            chunks: Vec::new(),
        }
    }

    /// Record one produced chunk. Entries are appended in split order, so the
    /// list stays sorted by index.
    pub fn push_chunk(
        &mut self,
        index: u32,
        file_name: String,
        size: u64,
    ) {
        self.total_bytes += size;
        self.chunks.push(ChunkEntry {
            index,
            file_name,
            size,
        });
    }

    /// Chunk indices in ascending order.
    pub fn indices(&self) -> Vec<u32> {
        self.chunks.iter().map(|c| c.index).collect()
    }

    /// Write the manifest into `dir` as `manifest.json`.
    pub fn write_to_dir(
        &self,
        dir: &Path,
    ) -> Result<()> {
        let path = dir.join(MANIFEST_FILE);
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json)
            .map_err(|e| anyhow!("cannot write manifest {}: {e}", path.display()))?;
        Ok(())
    }

    /// Load a manifest from an explicit path. Errors here are for the caller
    /// to treat as fatal (the path was asked for by name).
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .map_err(|e| anyhow!("cannot read manifest {}: {e}", path.display()))?;
        serde_json::from_str(&data)
            .map_err(|e| anyhow!("invalid manifest {}: {e}", path.display()))
    }

    /// Manifest found inside `dir`, if a readable one is there. An unreadable
    /// or invalid manifest degrades to `None` with a warning so the stage can
    /// fall back to probing.
    pub fn load_from_dir(dir: &Path) -> Option<Self> {
        let path = dir.join(MANIFEST_FILE);
        if !path.exists() {
            return None;
        }
        match Self::load(&path) {
            Ok(manifest) => Some(manifest),
            Err(e) => {
                warn!("ignoring manifest in {}: {e}", dir.display());
                None
            }
        }
    }
}

/// Expected chunk indices for a stage: the manifest's entries when one is
/// available, else the legacy fixed-count probe `0..max_chunks`.
pub fn expected_indices(
    manifest: Option<&Manifest>,
    max_chunks: u32,
) -> Vec<u32> {
    match manifest {
        Some(m) => m.indices(),
        None => (0..max_chunks).collect(),
    }
}
