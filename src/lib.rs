pub mod config;
pub mod document;
pub mod error;
pub mod patch;

use std::path::{Path, PathBuf};

use tracing::{debug, info};

pub use error::{ConfigError, SpliceError, SpliceResult};
pub use patch::{Patch, PatchKind, PatchReport, StepOutcome, StepReport};

/// Entry point tying config, file I/O and the patches together
#[derive(Debug, Clone)]
pub struct Splicer {
    config: config::Config,
}

impl Splicer {
    pub fn new(project_root: impl AsRef<Path>) -> SpliceResult<Self> {
        let config = config::Config::load_or_default(project_root)?;

        Ok(Self { config })
    }

    /// Write a default config when missing. The flag is false if one already existed.
    pub fn init(project_root: impl AsRef<Path>) -> SpliceResult<(Self, bool)> {
        let project_root = project_root.as_ref();
        let created = config::Config::init(project_root)?;

        Ok((Self::new(project_root)?, created))
    }

    pub fn config(&self) -> &config::Config {
        &self.config
    }

    /// The file to edit: `file` when given, otherwise the configured target
    pub fn target(&self, file: Option<&Path>) -> PathBuf {
        match file {
            Some(path) => path.to_path_buf(),
            None => self.config.target_path(),
        }
    }

    /// Run a patch in memory without touching the file
    pub fn preview(&self, kind: PatchKind, file: &Path) -> SpliceResult<PatchReport> {
        let content = document::read_source(file)?;
        Ok(Patch::new(kind)?.apply(&content))
    }

    /// Run a patch and write the file back when the buffer changed
    pub fn apply(&self, kind: PatchKind, file: &Path) -> SpliceResult<PatchReport> {
        let report = self.preview(kind, file)?;

        if report.changed() {
            document::write_source(file, &report.content, self.config.data.write.atomic)?;
            info!(patch = %kind, path = %file.display(), "patch applied");
        } else {
            debug!(patch = %kind, path = %file.display(), "nothing to write");
        }

        Ok(report)
    }

    /// Which patches already have their transformed shape in the file
    pub fn status(&self, file: &Path) -> SpliceResult<Vec<(PatchKind, bool)>> {
        let content = document::read_source(file)?;

        PatchKind::ALL
            .into_iter()
            .map(|kind| Patch::new(kind).map(|patch| (kind, patch.is_applied(&content))))
            .collect()
    }
}
