/// Deterministic non-repeating byte pattern, so any reordering or gap in a
/// reassembled file shows up as a comparison failure.
pub fn patterned_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

/// Install a shell-script stand-in for the storage client into `dir` and
/// return its path.
///
/// The script honors the real invocation shapes (`upload --fragment-size
/// <N>MB <path>`, `download --fragment-size <N>MB --output <path> <id>`)
/// against a directory named by `FAKE_STORE`, appends each invocation's
/// arguments to the file named by `FAKE_LOG`, and exits non-zero when the
/// chunk argument matches `FAIL_MATCH`.
#[cfg(unix)]
pub fn install_fake_client(dir: &std::path::Path) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("fake-storage-client");
    std::fs::write(
        &script,
        r#"#!/bin/sh
printf '%s\n' "$*" >> "$FAKE_LOG"
cmd="$1"; shift
arg=""
out=""
while [ $# -gt 0 ]; do
  case "$1" in
    --fragment-size) shift 2 ;;
    --output) out="$2"; shift 2 ;;
    *) arg="$1"; shift ;;
  esac
done
if [ -n "$FAIL_MATCH" ]; then
  case "$arg" in
    *"$FAIL_MATCH"*) exit 1 ;;
  esac
fi
case "$cmd" in
  upload)
    cp "$arg" "$FAKE_STORE/$(basename "$arg")" || exit 1
    ;;
  download)
    [ -f "$FAKE_STORE/$arg" ] || exit 1
    cp "$FAKE_STORE/$arg" "$out" || exit 1
    ;;
  *)
    exit 2
    ;;
esac
exit 0
"#,
    )
    .unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
    script
}
