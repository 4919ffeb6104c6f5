//! Generator that hands each job to the external emitter process.
//!
//! The emitter reads one JSON request from stdin, writes the type definitions
//! (and the loader module, if requested), and exits non-zero on failure.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use log::debug;
use serde::Serialize;

use asmdts_lib::{GenerationJob, Generator};

/// Emitter executable name, without platform suffix.
pub const EMITTER_NAME: &str = "asmdts-emit";

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("failed to start '{}': {}", .program.display(), .source)]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to send request to '{}': {}", .program.display(), .source)]
    Request {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{}' {}", .program.display(), .status)]
    Failed { program: PathBuf, status: ExitStatus },
}

/// Request document sent to the emitter.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmitRequest<'a> {
    pub assembly: &'a Path,
    pub references: &'a [PathBuf],
    pub reference_directories: Vec<&'a Path>,
    pub typedefs: &'a Path,
    pub loader: Option<&'a Path>,
    pub module: &'static str,
    pub is_system_assembly: bool,
    pub suppress_warnings: bool,
}

impl<'a> From<&'a GenerationJob> for EmitRequest<'a> {
    fn from(job: &'a GenerationJob) -> Self {
        Self {
            assembly: &job.input,
            references: &job.references,
            reference_directories: job.reference_directories.iter().map(|d| d.path()).collect(),
            typedefs: &job.typedefs,
            loader: job.loader.as_deref(),
            module: job.module.as_str(),
            is_system_assembly: job.system_assembly,
            suppress_warnings: job.suppress_warnings,
        }
    }
}

/// Runs the emitter once per job.
#[derive(Debug)]
pub struct BackendProcess {
    program: PathBuf,
}

impl BackendProcess {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The emitter installed next to the running executable, or the one on `PATH`.
    pub fn locate() -> Self {
        let file_name = format!("{EMITTER_NAME}{}", std::env::consts::EXE_SUFFIX);
        let sibling = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(&file_name)))
            .filter(|path| path.is_file());

        Self::new(sibling.unwrap_or_else(|| PathBuf::from(EMITTER_NAME)))
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Generator for BackendProcess {
    type Error = BackendError;

    fn generate(&mut self, job: &GenerationJob) -> Result<(), BackendError> {
        let request = serde_json::to_vec(&EmitRequest::from(job))?;
        debug!("{} < {} bytes", self.program.display(), request.len());

        let mut child = Command::new(&self.program)
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|source| BackendError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            // An emitter that exits without reading is judged by its status.
            match stdin.write_all(&request) {
                Err(e) if e.kind() != io::ErrorKind::BrokenPipe => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(BackendError::Request {
                        program: self.program.clone(),
                        source: e,
                    });
                }
                _ => {}
            }
        }

        let status = child.wait().map_err(|source| BackendError::Request {
            program: self.program.clone(),
            source,
        })?;
        if !status.success() {
            return Err(BackendError::Failed {
                program: self.program.clone(),
                status,
            });
        }
        Ok(())
    }
}
