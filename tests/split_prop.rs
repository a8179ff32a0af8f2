use std::fs;

use chunk_ferry::{TransferConfig, merge_chunks, split_file};
use proptest::prelude::*;

fn config(
    chunk_size: u64,
    max_chunks: u32,
) -> TransferConfig {
    TransferConfig {
        chunk_size,
        max_chunks,
        ..TransferConfig::default()
    }
}

proptest! {
    // The hand-written cases pin a handful of sizes; these run the split
    // and merge stages against arbitrary inputs and chunk sizes, which is
    // where off-by-one bugs around chunk boundaries actually live.
    #[test]
    fn split_then_merge_is_identity(
        data in prop::collection::vec(any::<u8>(), 0..4096),
        chunk_size in 1u64..512,
    ) {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.bin");
        fs::write(&input, &data).unwrap();

        let chunks_dir = dir.path().join("chunks");
        let output = dir.path().join("restored.bin");
        let cfg = config(chunk_size, 8192);

        split_file(&input, &chunks_dir, &cfg).unwrap();
        merge_chunks(&chunks_dir, &output, None, &cfg).unwrap();

        prop_assert_eq!(fs::read(&output).unwrap(), data);
    }

    #[test]
    fn chunk_count_is_the_ceiling_of_size_over_chunk_size(
        data in prop::collection::vec(any::<u8>(), 0..4096),
        chunk_size in 1u64..512,
    ) {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.bin");
        fs::write(&input, &data).unwrap();

        let report = split_file(
            &input,
            &dir.path().join("chunks"),
            &config(chunk_size, 8192),
        )
        .unwrap();

        let size = data.len() as u64;
        prop_assert_eq!(u64::from(report.chunks), size.div_ceil(chunk_size));
        prop_assert_eq!(report.total_bytes, size);
    }

    #[test]
    fn chunk_cap_truncates_the_tail_and_nothing_else(
        data in prop::collection::vec(any::<u8>(), 0..2048),
        chunk_size in 1u64..128,
        max_chunks in 0u32..8,
    ) {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.bin");
        fs::write(&input, &data).unwrap();

        let chunks_dir = dir.path().join("chunks");
        let output = dir.path().join("restored.bin");
        let cfg = config(chunk_size, max_chunks);

        split_file(&input, &chunks_dir, &cfg).unwrap();
        merge_chunks(&chunks_dir, &output, None, &cfg).unwrap();

        let kept = (data.len() as u64).min(chunk_size * u64::from(max_chunks)) as usize;
        prop_assert_eq!(fs::read(&output).unwrap(), &data[..kept]);
    }
}
