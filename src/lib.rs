pub mod chunk;
pub mod cli;
pub mod config;
pub mod constants;
pub mod manifest;
pub mod merge;
pub mod pipeline;
pub mod split;
pub mod transfer;

// Re-export the stage entry points for library users
pub use config::TransferConfig;
pub use manifest::Manifest;
pub use merge::{MergeReport, merge_chunks};
pub use split::{SplitReport, split_file};
pub use transfer::{StorageCli, TransferReport, Transport, download_chunks, upload_chunks};
