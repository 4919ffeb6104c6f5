//! Binding bare assembly names to reference assemblies.

use std::fmt;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::{InputModule, ReferenceDirectory};
use crate::paths::{SYSTEM_ASSEMBLY_EXTENSION, has_assembly_extension};

/// A bare assembly name that no reference directory contains.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnresolvedModule {
    pub name: String,
    /// Every directory that was probed, in search order.
    pub searched: Vec<PathBuf>,
}

impl fmt::Display for UnresolvedModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Assembly '{}' was not found in reference assembly directories:",
            self.name
        )?;
        for dir in &self.searched {
            write!(f, "\n    {}", dir.display())?;
        }
        Ok(())
    }
}

/// Resolve every bare name in `inputs` against `directories`.
///
/// Inputs with an assembly extension pass through untouched. A bare name
/// found in a directory becomes system-resolved with that file's path; one
/// found nowhere is kept as given and reported.
pub fn resolve_modules(
    inputs: Vec<InputModule>,
    directories: &[ReferenceDirectory],
) -> (Vec<InputModule>, Vec<UnresolvedModule>) {
    let mut unresolved = Vec::new();

    let resolved: Vec<InputModule> = inputs
        .into_iter()
        .map(|input| {
            if has_assembly_extension(input.path()) {
                return input;
            }

            let name = input.path().to_string_lossy().into_owned();
            match find_system_assembly(&name, directories) {
                Some(path) => InputModule::system_resolved(path),
                None => {
                    unresolved.push(UnresolvedModule {
                        name,
                        searched: directories.iter().map(|d| d.path().to_path_buf()).collect(),
                    });
                    input
                }
            }
        })
        .collect();

    (resolved, unresolved)
}

/// First `<dir>/<name>.dll` that exists, in directory order.
pub fn find_system_assembly(name: &str, directories: &[ReferenceDirectory]) -> Option<PathBuf> {
    directories.iter().find_map(|dir| probe(dir.path(), name))
}

fn probe(dir: &Path, name: &str) -> Option<PathBuf> {
    let candidate = dir.join(format!("{name}{SYSTEM_ASSEMBLY_EXTENSION}"));
    let found = candidate.is_file();
    debug!("probe {}: {}", candidate.display(), if found { "found" } else { "missing" });
    found.then_some(candidate)
}
