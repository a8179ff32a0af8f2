use assert_fs::prelude::*;
use predicates::str::contains;

#[test]
fn no_subcommand_is_a_usage_error() {
    assert_cmd::cargo::cargo_bin_cmd!("chunk-ferry")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn unknown_subcommand_is_a_usage_error() {
    assert_cmd::cargo::cargo_bin_cmd!("chunk-ferry")
        .arg("frobnicate")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn chunk_size_zero_is_invalid() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("input.bin").write_str("hello").unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("chunk-ferry")
        .current_dir(&dir)
        .args(["--chunk-size", "0", "split", "input.bin"])
        .assert()
        .failure()
        .code(2);

    // Rejected before the stage ran: nothing was created.
    assert!(!dir.path().join("chunks").exists());
}

#[test]
fn split_with_a_missing_input_fails_without_side_effects() {
    let dir = assert_fs::TempDir::new().unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("chunk-ferry")
        .current_dir(&dir)
        .args(["split", "absent.bin"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("cannot open input file"));

    assert!(!dir.path().join("chunks").exists());
}

#[test]
fn download_with_an_unreadable_manifest_fails_before_creating_anything() {
    let dir = assert_fs::TempDir::new().unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("chunk-ferry")
        .current_dir(&dir)
        .args(["download", "incoming", "--manifest", "nope.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("cannot read manifest"));

    assert!(!dir.path().join("incoming").exists());
}

#[test]
fn merge_with_an_invalid_manifest_is_fatal() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("meta.json").write_str("{").unwrap();
    dir.child("chunks").create_dir_all().unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("chunk-ferry")
        .current_dir(&dir)
        .args(["merge", "chunks", "restored.bin", "--manifest", "meta.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("invalid manifest"));

    assert!(!dir.path().join("restored.bin").exists());
}
