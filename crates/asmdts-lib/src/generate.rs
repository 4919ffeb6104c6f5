//! Per-assembly generation jobs.
//!
//! The declaration emitter itself lives behind [`Generator`]. This module
//! decides what each call receives: an assembly references every explicit
//! reference plus every other input assembly, never itself.

use std::path::PathBuf;

use log::info;

use crate::config::{GenerationConfig, ModuleFormat, ReferenceDirectory};
use crate::paths::loader_path;
use crate::{Error, Result};

/// Everything one generator call needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationJob {
    pub input: PathBuf,
    /// Explicit references followed by the other inputs.
    pub references: Vec<PathBuf>,
    /// For references the generator resolves on demand.
    pub reference_directories: Vec<ReferenceDirectory>,
    pub typedefs: PathBuf,
    pub module: ModuleFormat,
    pub system_assembly: bool,
    pub suppress_warnings: bool,
    /// Loader module path, present unless the module format is `None`.
    pub loader: Option<PathBuf>,
}

/// Emits type definitions (and the loader module, if requested) for one assembly.
pub trait Generator {
    type Error: std::error::Error + Send + Sync + 'static;

    fn generate(&mut self, job: &GenerationJob) -> std::result::Result<(), Self::Error>;
}

/// Build the jobs for every input, in input order.
pub fn plan(config: &GenerationConfig) -> Vec<GenerationJob> {
    let inputs = config.inputs();
    inputs
        .iter()
        .zip(config.typedefs())
        .enumerate()
        .map(|(i, (input, typedefs))| {
            let references = config
                .references()
                .iter()
                .cloned()
                .chain(
                    inputs
                        .iter()
                        .enumerate()
                        .filter(|&(j, _)| j != i)
                        .map(|(_, other)| other.path().to_path_buf()),
                )
                .collect();

            GenerationJob {
                input: input.path().to_path_buf(),
                references,
                reference_directories: config.reference_directories().to_vec(),
                typedefs: typedefs.clone(),
                module: config.module(),
                system_assembly: input.is_system_resolved(),
                suppress_warnings: config.suppress_warnings(),
                loader: config.module().emits_loader().then(|| loader_path(typedefs)),
            }
        })
        .collect()
}

/// Run `generator` over every job, one at a time.
///
/// The first generator error stops the run.
pub fn generate_all<G: Generator>(
    config: &GenerationConfig,
    generator: &mut G,
) -> Result<Vec<GenerationJob>> {
    let jobs = plan(config);
    for job in &jobs {
        info!("{} -> {}", job.input.display(), job.typedefs.display());

        generator.generate(job).map_err(|e| Error::Generate {
            input: job.input.clone(),
            source: Box::new(e),
        })?;

        if let Some(loader) = &job.loader {
            info!("{} -> {}", job.input.display(), loader.display());
        }
    }
    Ok(jobs)
}
