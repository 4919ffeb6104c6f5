//! Validated command-line options.
//!
//! [`OptionsBuilder`] accumulates raw list values in command-line order and
//! [`OptionsBuilder::build`] either returns complete [`GenerationOptions`] or
//! the first validation failure. There is no partially valid state.

use std::path::PathBuf;

use crate::config::{InputModule, ModuleFormat};
use crate::paths::{
    display_name, has_assembly_extension, has_typedef_extension, is_bare_assembly_name,
    split_list,
};

/// A structurally valid command line with semantically invalid values.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Incorrect assembly file extension: {0}")]
    AssemblyExtension(String),

    #[error("Incorrect typedef file extension: {0}")]
    TypedefExtension(String),

    #[error("Specify an assembly file path.")]
    MissingAssembly,

    #[error("Specify a type definitions file path.")]
    MissingTypedefs,

    #[error("Specify a type definitions file path for every assembly.")]
    TypedefCountMismatch,
}

/// Options for one generation run.
///
/// Holds at least one input and exactly one type definitions path per input.
#[derive(Clone, Debug)]
pub struct GenerationOptions {
    inputs: Vec<InputModule>,
    references: Vec<PathBuf>,
    typedefs: Vec<PathBuf>,
    framework: Option<String>,
    packs: Vec<String>,
    module: ModuleFormat,
    suppress_warnings: bool,
}

/// Owned fields of [`GenerationOptions`], moved into the resolved config.
pub(crate) struct OptionsParts {
    pub inputs: Vec<InputModule>,
    pub references: Vec<PathBuf>,
    pub typedefs: Vec<PathBuf>,
    pub module: ModuleFormat,
    pub suppress_warnings: bool,
}

impl GenerationOptions {
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }

    pub fn inputs(&self) -> &[InputModule] {
        &self.inputs
    }

    pub fn references(&self) -> &[PathBuf] {
        &self.references
    }

    pub fn typedefs(&self) -> &[PathBuf] {
        &self.typedefs
    }

    /// Target framework label as given, e.g. `net8.0-windows`.
    pub fn framework(&self) -> Option<&str> {
        self.framework.as_deref()
    }

    pub fn packs(&self) -> &[String] {
        &self.packs
    }

    pub fn module(&self) -> ModuleFormat {
        self.module
    }

    pub fn suppress_warnings(&self) -> bool {
        self.suppress_warnings
    }

    pub(crate) fn into_parts(self) -> OptionsParts {
        OptionsParts {
            inputs: self.inputs,
            references: self.references,
            typedefs: self.typedefs,
            module: self.module,
            suppress_warnings: self.suppress_warnings,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct OptionsBuilder {
    assemblies: Vec<String>,
    references: Vec<String>,
    typedefs: Vec<String>,
    framework: Option<String>,
    packs: Vec<String>,
    module: ModuleFormat,
    suppress_warnings: bool,
}

impl OptionsBuilder {
    /// Append `;`-separated input assemblies.
    pub fn assemblies(mut self, list: &str) -> Self {
        self.assemblies.extend(split_list(list).map(str::to_owned));
        self
    }

    /// Append `;`-separated reference assemblies.
    pub fn references(mut self, list: &str) -> Self {
        self.references.extend(split_list(list).map(str::to_owned));
        self
    }

    /// Append `;`-separated type definition outputs.
    pub fn typedefs(mut self, list: &str) -> Self {
        self.typedefs.extend(split_list(list).map(str::to_owned));
        self
    }

    /// Append `;`-separated targeting pack names.
    pub fn packs(mut self, list: &str) -> Self {
        self.packs.extend(split_list(list).map(str::to_owned));
        self
    }

    pub fn framework(mut self, label: impl Into<String>) -> Self {
        self.framework = Some(label.into());
        self
    }

    pub fn module(mut self, module: ModuleFormat) -> Self {
        self.module = module;
        self
    }

    pub fn suppress_warnings(mut self, suppress: bool) -> Self {
        self.suppress_warnings = suppress;
        self
    }

    pub fn build(self) -> Result<GenerationOptions, ValidationError> {
        let inputs: Vec<PathBuf> = self.assemblies.into_iter().map(PathBuf::from).collect();
        let references: Vec<PathBuf> = self.references.into_iter().map(PathBuf::from).collect();
        let typedefs: Vec<PathBuf> = self.typedefs.into_iter().map(PathBuf::from).collect();

        let invalid_assembly = inputs
            .iter()
            .filter(|p| !is_bare_assembly_name(p))
            .chain(references.iter())
            .find(|p| !has_assembly_extension(p));
        if let Some(path) = invalid_assembly {
            return Err(ValidationError::AssemblyExtension(display_name(path)));
        }

        if let Some(path) = typedefs.iter().find(|p| !has_typedef_extension(p)) {
            return Err(ValidationError::TypedefExtension(display_name(path)));
        }

        if inputs.is_empty() {
            return Err(ValidationError::MissingAssembly);
        }
        if typedefs.is_empty() {
            return Err(ValidationError::MissingTypedefs);
        }
        if typedefs.len() != inputs.len() {
            return Err(ValidationError::TypedefCountMismatch);
        }

        Ok(GenerationOptions {
            inputs: inputs.into_iter().map(InputModule::user_supplied).collect(),
            references,
            typedefs,
            framework: self.framework,
            packs: self.packs,
            module: self.module,
            suppress_warnings: self.suppress_warnings,
        })
    }
}
