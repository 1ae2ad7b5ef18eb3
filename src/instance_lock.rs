use std::fs::{File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const LOCK_FILE: &str = "lifetracker.lock";

/// `<temp dir>/lifetracker.lock`
pub fn default_lock_path() -> PathBuf {
    std::env::temp_dir().join(LOCK_FILE)
}

#[derive(Debug)]
pub enum LockOutcome {
    Acquired(InstanceLock),
    /// The lock file already exists. It is not checked against a live
    /// process, so a stale file left by a crash also lands here.
    AlreadyRunning,
}

/// Single-instance guard. The lock file is removed when the guard drops.
#[derive(Debug)]
pub struct InstanceLock {
    path: PathBuf,
    file: Option<File>,
}

impl InstanceLock {
    /// Create the lock file exclusively. Any failure other than the file
    /// already existing is returned as an error.
    pub fn acquire(path: impl AsRef<Path>) -> anyhow::Result<LockOutcome> {
        let path = path.as_ref();
        match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => {
                tracing::info!(path = %path.display(), "acquired instance lock");
                Ok(LockOutcome::Acquired(Self {
                    path: path.to_path_buf(),
                    file: Some(file),
                }))
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                tracing::info!(path = %path.display(), "instance lock already held");
                Ok(LockOutcome::AlreadyRunning)
            }
            Err(e) => Err(anyhow::Error::new(e)
                .context(format!("failed to create lock file {}", path.display()))),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for InstanceLock {
    fn drop(&mut self) {
        // close before removing so the delete also succeeds on Windows
        self.file.take();
        match std::fs::remove_file(&self.path) {
            Ok(()) => tracing::info!(path = %self.path.display(), "released instance lock"),
            Err(e) => tracing::error!(path = %self.path.display(), "failed to remove lock file: {e}"),
        }
    }
}
