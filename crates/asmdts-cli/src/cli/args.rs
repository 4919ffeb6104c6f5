//! Argument builders for the CLI.
//!
//! Every value-taking option consumes the next token verbatim, even one that
//! starts with `-`, so a dangling flag at the end of the command line is the
//! only way to be missing a value.

use clap::{Arg, ArgAction};

use asmdts_lib::ModuleFormat;

/// Input assemblies (-a/--assembly/--assemblies).
pub fn assemblies_arg() -> Arg {
    Arg::new("assemblies")
        .short('a')
        .long("assembly")
        .visible_alias("assemblies")
        .value_name("PATHS")
        .action(ArgAction::Append)
        .allow_hyphen_values(true)
        .help("Input assemblies, ';'-separated (a bare name is looked up in the targeting packs)")
}

/// Target framework (-f/--framework).
pub fn framework_arg() -> Arg {
    Arg::new("framework")
        .short('f')
        .long("framework")
        .value_name("TFM")
        .allow_hyphen_values(true)
        .help("Target framework of system assemblies (default: the current runtime)")
}

/// Targeting packs (-p/--pack/--packs).
pub fn packs_arg() -> Arg {
    Arg::new("packs")
        .short('p')
        .long("pack")
        .visible_alias("packs")
        .value_name("PACKS")
        .action(ArgAction::Append)
        .allow_hyphen_values(true)
        .help("Targeting packs, ';'-separated (default: Microsoft.NETCore.App)")
}

/// Reference assemblies (-r/--reference/--references).
pub fn references_arg() -> Arg {
    Arg::new("references")
        .short('r')
        .long("reference")
        .visible_alias("references")
        .value_name("PATHS")
        .action(ArgAction::Append)
        .allow_hyphen_values(true)
        .help("Reference assemblies, ';'-separated")
}

/// Output type definitions (-t/--typedef/--typedefs).
pub fn typedefs_arg() -> Arg {
    Arg::new("typedefs")
        .short('t')
        .long("typedef")
        .visible_alias("typedefs")
        .value_name("PATHS")
        .action(ArgAction::Append)
        .allow_hyphen_values(true)
        .help("Output .d.ts files, ';'-separated, one per assembly")
}

/// Loader module flavor (-m/--module/--modules).
pub fn module_arg() -> Arg {
    Arg::new("module")
        .short('m')
        .long("module")
        .visible_alias("modules")
        .value_name("FORMAT")
        .allow_hyphen_values(true)
        .value_parser(parse_module_format)
        .help("Also generate JS loader modules: commonjs (cjs) or esm (es, mjs)")
}

/// Suppress warnings (--nowarn).
pub fn nowarn_arg() -> Arg {
    Arg::new("nowarn")
        .long("nowarn")
        .action(ArgAction::SetTrue)
        .help("Suppress warnings")
}

fn parse_module_format(value: &str) -> Result<ModuleFormat, String> {
    ModuleFormat::from_name(value)
        .ok_or_else(|| "expected one of: commonjs, cjs, es, esm, mjs".to_owned())
}
