//! Dispatch logic: extract params from ArgMatches and convert them to
//! validated generation options.
//!
//! List-valued options keep one entry per occurrence here. Splitting on `;`
//! and validation happen in the conversion to `GenerationOptions`.

use clap::ArgMatches;

use asmdts_lib::{GenerationOptions, ModuleFormat, ValidationError};

pub struct GenerateParams {
    pub assemblies: Vec<String>,
    pub framework: Option<String>,
    pub packs: Vec<String>,
    pub references: Vec<String>,
    pub typedefs: Vec<String>,
    pub module: ModuleFormat,
    pub nowarn: bool,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            // Inputs and outputs
            assemblies: get_all(m, "assemblies"),
            typedefs: get_all(m, "typedefs"),

            // Reference resolution
            framework: m.get_one::<String>("framework").cloned(),
            packs: get_all(m, "packs"),
            references: get_all(m, "references"),

            // Generation options
            module: m.get_one::<ModuleFormat>("module").copied().unwrap_or_default(),
            nowarn: m.get_flag("nowarn"),
        }
    }
}

impl TryFrom<GenerateParams> for GenerationOptions {
    type Error = ValidationError;

    fn try_from(p: GenerateParams) -> Result<Self, Self::Error> {
        let mut builder = GenerationOptions::builder()
            .module(p.module)
            .suppress_warnings(p.nowarn);

        if let Some(framework) = p.framework {
            builder = builder.framework(framework);
        }
        for list in &p.assemblies {
            builder = builder.assemblies(list);
        }
        for list in &p.packs {
            builder = builder.packs(list);
        }
        for list in &p.references {
            builder = builder.references(list);
        }
        for list in &p.typedefs {
            builder = builder.typedefs(list);
        }

        builder.build()
    }
}

/// All occurrences of an appending option, in command-line order.
fn get_all(m: &ArgMatches, id: &str) -> Vec<String> {
    m.get_many::<String>(id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}
