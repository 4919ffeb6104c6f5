//! Test utilities: fake runtime layouts and a recording generator.

use std::fs;
use std::path::{Path, PathBuf};

use crate::generate::{GenerationJob, Generator};
use crate::platform::{PlatformLocator, RuntimeVersion};

/// Locator with fixed answers.
#[derive(Clone, Debug, Default)]
pub struct FixedLocator {
    pub version: Option<RuntimeVersion>,
    pub root: Option<PathBuf>,
    pub legacy_root: Option<PathBuf>,
}

impl FixedLocator {
    pub fn modern(root: &Path, version: RuntimeVersion) -> Self {
        Self {
            version: Some(version),
            root: Some(root.to_path_buf()),
            legacy_root: None,
        }
    }

    pub fn legacy(legacy_root: &Path) -> Self {
        Self {
            version: Some(RuntimeVersion::new(4, 0)),
            root: None,
            legacy_root: Some(legacy_root.to_path_buf()),
        }
    }
}

impl PlatformLocator for FixedLocator {
    fn runtime_version(&self) -> Option<RuntimeVersion> {
        self.version
    }

    fn platform_root(&self) -> Option<PathBuf> {
        self.root.clone()
    }

    fn legacy_reference_root(&self) -> Option<PathBuf> {
        self.legacy_root.clone()
    }
}

/// Create `<root>/packs/<pack>.Ref/<version>/ref/<tfm>` and return it.
pub fn make_pack(root: &Path, pack: &str, version: &str, tfm: &str) -> PathBuf {
    let dir = root
        .join("packs")
        .join(format!("{pack}.Ref"))
        .join(version)
        .join("ref")
        .join(tfm);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Create an empty file `<dir>/<name>` and return its path.
pub fn touch(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, b"").unwrap();
    path
}

#[derive(Debug, thiserror::Error)]
#[error("generator rejected {0}")]
pub struct Rejected(pub String);

/// Generator that records every job and optionally fails on one input.
#[derive(Debug, Default)]
pub struct RecordingGenerator {
    pub jobs: Vec<GenerationJob>,
    pub fail_on: Option<PathBuf>,
}

impl Generator for RecordingGenerator {
    type Error = Rejected;

    fn generate(&mut self, job: &GenerationJob) -> Result<(), Rejected> {
        self.jobs.push(job.clone());
        if self.fail_on.as_deref() == Some(job.input.as_path()) {
            return Err(Rejected(job.input.display().to_string()));
        }
        Ok(())
    }
}
