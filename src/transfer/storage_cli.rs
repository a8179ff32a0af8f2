// Subprocess transport: one blocking invocation of the storage client per chunk.
use std::env;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::{Result, anyhow};

use crate::config::TransferConfig;

use super::Transport;

/// The external storage-network client, driven as a black-box subprocess.
///
/// Invocation shapes are fixed:
/// `<client> upload --fragment-size <N>MB <path>` and
/// `<client> download --fragment-size <N>MB --output <path> <remote-id>`.
/// Success means exit status zero; the client's stdout and stderr pass
/// straight through to the console.
#[derive(Debug, Clone)]
pub struct StorageCli {
    bin: PathBuf,
    fragment_size_mb: u64,
}

impl StorageCli {
    /// Resolve the configured client binary on the execution search path and
    /// wrap it as a transport. Fails when the binary cannot be found, which
    /// callers turn into the SDK-stub notice.
    pub fn locate(config: &TransferConfig) -> Result<Self> {
        let bin = find_on_path(&config.client_bin)
            .ok_or_else(|| anyhow!("'{}' not found on PATH", config.client_bin))?;
        Ok(Self {
            bin,
            fragment_size_mb: config.fragment_size_mb,
        })
    }

    fn fragment_size_arg(&self) -> String {
        format!("{}MB", self.fragment_size_mb)
    }

    fn run(
        &self,
        cmd: &mut Command,
    ) -> Result<()> {
        // Blocks until the client exits; no timeout is enforced.
        let status = cmd
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| anyhow!("failed to run {}: {e}", self.bin.display()))?;
        if !status.success() {
            return Err(anyhow!("{} exited with {status}", self.bin.display()));
        }
        Ok(())
    }
}

impl Transport for StorageCli {
    fn upload(
        &self,
        chunk_file: &Path,
    ) -> Result<()> {
        let mut cmd = Command::new(&self.bin);
        cmd.arg("upload")
            .arg("--fragment-size")
            .arg(self.fragment_size_arg())
            .arg(chunk_file);
        self.run(&mut cmd)
    }

    fn download(
        &self,
        remote_id: &str,
        dest: &Path,
    ) -> Result<()> {
        let mut cmd = Command::new(&self.bin);
        cmd.arg("download")
            .arg("--fragment-size")
            .arg(self.fragment_size_arg())
            .arg("--output")
            .arg(dest)
            .arg(remote_id);
        self.run(&mut cmd)
    }
}

/// Find `bin` on the search path, mirroring what the OS would do when
/// spawning it. A value containing a path separator is taken as an explicit
/// path instead.
fn find_on_path(bin: &str) -> Option<PathBuf> {
    let candidate = Path::new(bin);
    if candidate.components().count() > 1 {
        return candidate.is_file().then(|| candidate.to_path_buf());
    }
    let path_var = env::var_os("PATH")?;
    env::split_paths(&path_var)
        .map(|dir| dir.join(bin))
        .find(|p| is_executable(p))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
