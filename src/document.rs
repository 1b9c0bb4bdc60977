use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{SpliceError, SpliceResult};

/// Read the whole target file as UTF-8 text
pub fn read_source(path: &Path) -> SpliceResult<String> {
    debug!(path = %path.display(), "reading target file");
    fs::read_to_string(path).map_err(|e| SpliceError::io(path, e))
}

/// Overwrite the target file with `content`.
///
/// With `atomic` set the content goes to a sibling temp file first and is
/// renamed over the target, so a failed write never leaves a truncated file.
pub fn write_source(path: &Path, content: &str, atomic: bool) -> SpliceResult<()> {
    if atomic {
        AtomicFile::new(path)?.write(content.as_bytes())?;
    } else {
        fs::write(path, content).map_err(|e| SpliceError::io(path, e))?;
    }

    info!(path = %path.display(), bytes = content.len(), "wrote target file");
    Ok(())
}

/// Write-then-rename file replacement
pub struct AtomicFile {
    path: PathBuf,
    temp_path: PathBuf,
}

impl AtomicFile {
    pub fn new<P: AsRef<Path>>(path: P) -> SpliceResult<Self> {
        let path = path.as_ref().to_path_buf();
        let temp_path = Self::temp_path(&path)?;

        Ok(Self { path, temp_path })
    }

    fn temp_path(path: &Path) -> SpliceResult<PathBuf> {
        let file_name = path.file_name().ok_or_else(|| {
            SpliceError::io(
                path,
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
            )
        })?;

        let temp_name = format!(
            ".{}.tmp.{}",
            file_name.to_string_lossy(),
            std::process::id()
        );

        Ok(path.with_file_name(temp_name))
    }

    pub fn write(&self, content: &[u8]) -> SpliceResult<()> {
        let result = self.write_and_rename(content);
        if result.is_err() && self.temp_path.exists() {
            let _ = fs::remove_file(&self.temp_path);
        }
        result
    }

    fn write_and_rename(&self, content: &[u8]) -> SpliceResult<()> {
        let temp_err = |e| SpliceError::io(&self.temp_path, e);

        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.temp_path)
            .map_err(temp_err)?;

        temp_file.write_all(content).map_err(temp_err)?;
        temp_file.sync_all().map_err(temp_err)?;

        // Keep the permissions of the file being replaced
        if let Ok(metadata) = fs::metadata(&self.path) {
            fs::set_permissions(&self.temp_path, metadata.permissions()).map_err(temp_err)?;
        }

        fs::rename(&self.temp_path, &self.path).map_err(|e| SpliceError::io(&self.path, e))?;

        Ok(())
    }
}
