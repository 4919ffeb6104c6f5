//! The resolved generation configuration.
//!
//! A [`GenerationConfig`] is built once from validated [`GenerationOptions`]
//! after the platform and module resolution stages have both finished. It is
//! read-only from then on.

use std::path::{Path, PathBuf};

use crate::Result;
use crate::modules::{UnresolvedModule, resolve_modules};
use crate::options::GenerationOptions;
use crate::platform::{PlatformDescriptor, PlatformLocator, resolve_platform};

/// Flavor of the JS loader module emitted next to the type definitions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModuleFormat {
    /// Type definitions only.
    #[default]
    None,
    CommonJs,
    Es,
}

impl ModuleFormat {
    /// Parse a `--module` value. Case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "commonjs" | "cjs" => Some(Self::CommonJs),
            "es" | "esm" | "mjs" => Some(Self::Es),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::CommonJs => "commonjs",
            Self::Es => "es",
        }
    }

    pub fn emits_loader(self) -> bool {
        self != Self::None
    }
}

/// Where an input assembly path came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Provenance {
    /// Taken verbatim from the command line.
    UserSupplied,
    /// A bare name bound to a file in a reference directory.
    SystemResolved,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputModule {
    path: PathBuf,
    provenance: Provenance,
}

impl InputModule {
    pub fn user_supplied(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            provenance: Provenance::UserSupplied,
        }
    }

    pub fn system_resolved(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            provenance: Provenance::SystemResolved,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    pub fn is_system_resolved(&self) -> bool {
        self.provenance == Provenance::SystemResolved
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirectoryOrigin {
    /// .NET Framework reference assemblies under the system-wide location.
    LegacyFramework,
    /// A versioned `ref/<tfm>` directory of a targeting pack.
    TargetingPack,
}

/// A directory searched for reference assemblies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferenceDirectory {
    path: PathBuf,
    origin: DirectoryOrigin,
}

impl ReferenceDirectory {
    pub fn new(path: impl Into<PathBuf>, origin: DirectoryOrigin) -> Self {
        Self {
            path: path.into(),
            origin,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn origin(&self) -> DirectoryOrigin {
        self.origin
    }
}

#[derive(Clone, Debug)]
pub struct GenerationConfig {
    platform: PlatformDescriptor,
    inputs: Vec<InputModule>,
    references: Vec<PathBuf>,
    reference_directories: Vec<ReferenceDirectory>,
    typedefs: Vec<PathBuf>,
    module: ModuleFormat,
    suppress_warnings: bool,
}

impl GenerationConfig {
    /// Resolve reference directories and bare assembly names.
    ///
    /// Assemblies that cannot be found are left as given and reported in the
    /// returned list; they do not fail resolution.
    pub fn resolve(
        options: GenerationOptions,
        locator: &dyn PlatformLocator,
    ) -> Result<(Self, Vec<UnresolvedModule>)> {
        let platform = resolve_platform(options.framework(), options.packs(), locator)?;
        let parts = options.into_parts();
        let (inputs, unresolved) = resolve_modules(parts.inputs, &platform.directories);

        let config = Self {
            platform: platform.descriptor,
            inputs,
            references: parts.references,
            reference_directories: platform.directories,
            typedefs: parts.typedefs,
            module: parts.module,
            suppress_warnings: parts.suppress_warnings,
        };
        Ok((config, unresolved))
    }

    pub fn platform(&self) -> &PlatformDescriptor {
        &self.platform
    }

    pub fn inputs(&self) -> &[InputModule] {
        &self.inputs
    }

    /// Explicit `-r` references, shared by every input.
    pub fn references(&self) -> &[PathBuf] {
        &self.references
    }

    /// Search order: first match wins.
    pub fn reference_directories(&self) -> &[ReferenceDirectory] {
        &self.reference_directories
    }

    /// One output per input, index for index.
    pub fn typedefs(&self) -> &[PathBuf] {
        &self.typedefs
    }

    pub fn module(&self) -> ModuleFormat {
        self.module
    }

    pub fn suppress_warnings(&self) -> bool {
        self.suppress_warnings
    }
}
