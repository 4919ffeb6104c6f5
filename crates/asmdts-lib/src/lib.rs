//! asmdts: reference resolution and generation planning for TypeScript type
//! definitions of .NET assemblies.
//!
//! This crate provides the pipeline behind the `asmdts` CLI. Each stage
//! finishes before the next one starts:
//! - `options` - validated command-line options
//! - `platform` - reference directories for a target framework
//! - `modules` - binding bare assembly names to reference assemblies
//! - `generate` - per-assembly jobs handed to a [`Generator`]
//!
//! # Example
//!
//! ```
//! use asmdts_lib::{GenerationOptions, ModuleFormat};
//!
//! let options = GenerationOptions::builder()
//!     .assemblies("lib.dll")
//!     .typedefs("lib.d.ts")
//!     .module(ModuleFormat::Es)
//!     .build()
//!     .expect("valid options");
//!
//! assert_eq!(options.inputs().len(), options.typedefs().len());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::path::PathBuf;

pub mod config;
pub mod generate;
pub mod modules;
pub mod options;
pub mod paths;
pub mod platform;

#[cfg(test)]
pub mod test_utils;


pub use config::{
    DirectoryOrigin, GenerationConfig, InputModule, ModuleFormat, Provenance, ReferenceDirectory,
};
pub use generate::{GenerationJob, Generator};
pub use modules::UnresolvedModule;
pub use options::{GenerationOptions, OptionsBuilder, ValidationError};
pub use platform::{HostLocator, PlatformDescriptor, PlatformLocator, RuntimeVersion};

/// Errors that abort a generation run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No target framework was given and the host runtime version is unknown.
    #[error("cannot determine the runtime version, specify a target framework with -f")]
    UnknownRuntimeVersion,

    #[error("failed to read '{}': {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The generator failed for one assembly. Later assemblies are not processed.
    #[error("failed to generate type definitions for '{}': {}", .input.display(), .source)]
    Generate {
        input: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for resolution and generation.
pub type Result<T> = std::result::Result<T, Error>;
