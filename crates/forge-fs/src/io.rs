//! Atomic I/O operations with file locking

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use fs2::FileExt;

use crate::{Error, Result};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Removes the temp file on drop unless the rename went through.
struct TempFile {
    path: PathBuf,
    committed: bool,
}

impl Drop for TempFile {
    fn drop(&mut self) {
        if !self.committed {
            if let Err(e) = fs::remove_file(&self.path) {
                tracing::debug!(path = ?self.path, error = %e, "Could not remove temp file");
            }
        }
    }
}

fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let name = target
        .file_name()
        .ok_or_else(|| Error::NoFileName {
            path: target.to_path_buf(),
        })?
        .to_string_lossy();
    let temp_name = format!(
        ".{}.{}.{}.tmp",
        name,
        std::process::id(),
        TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
    );
    Ok(target.with_file_name(temp_name))
}

/// Write content atomically to a file with locking.
///
/// The content goes to a temp file in the same directory (same filesystem),
/// is flushed to disk, then renamed over the target. On any failure the temp
/// file is removed and the target keeps its previous content.
pub fn write_atomic(path: impl AsRef<Path>, content: &[u8]) -> Result<()> {
    let target = path.as_ref();

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let mut temp = TempFile {
        path: temp_path_for(target)?,
        committed: false,
    };

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&temp.path)
        .map_err(|e| Error::io(&temp.path, e))?;

    file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: target.to_path_buf(),
    })?;

    file.write_all(content)
        .map_err(|e| Error::io(&temp.path, e))?;
    file.sync_all().map_err(|e| Error::io(&temp.path, e))?;

    file.unlock().map_err(|_| Error::LockFailed {
        path: target.to_path_buf(),
    })?;
    drop(file);

    fs::rename(&temp.path, target).map_err(|e| Error::io(target, e))?;
    temp.committed = true;

    tracing::debug!(path = ?target, bytes = content.len(), "Wrote file atomically");
    Ok(())
}

/// Write text content to a file atomically.
pub fn write_text(path: impl AsRef<Path>, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// Read text content from a file.
pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Read text content, returning `None` when the file does not exist.
pub fn read_text_optional(path: impl AsRef<Path>) -> Result<Option<String>> {
    match read_text(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}
