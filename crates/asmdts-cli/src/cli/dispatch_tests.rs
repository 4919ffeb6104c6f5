//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Flag table: every short, long, and alias form is accepted
//! 2. Grammar errors: dangling value flags, unknown flags, stray positionals
//! 3. Params extraction: list values, module formats, last-wins options
//! 4. Conversion: `;` splitting and validation into `GenerationOptions`

use std::path::PathBuf;

use clap::error::ErrorKind;

use super::*;
use asmdts_lib::{GenerationOptions, ModuleFormat, ValidationError};

fn params(args: &[&str]) -> GenerateParams {
    let m = build_cli()
        .try_get_matches_from(std::iter::once("asmdts").chain(args.iter().copied()))
        .unwrap_or_else(|e| panic!("{args:?} should parse: {e}"));
    GenerateParams::from_matches(&m)
}

fn parse_err(args: &[&str]) -> clap::Error {
    match build_cli().try_get_matches_from(std::iter::once("asmdts").chain(args.iter().copied())) {
        Ok(_) => panic!("{args:?} should not parse"),
        Err(e) => e,
    }
}

fn options(args: &[&str]) -> Result<GenerationOptions, ValidationError> {
    GenerationOptions::try_from(params(args))
}

#[test]
fn short_flags() {
    let p = params(&[
        "-a", "lib.dll", "-f", "net8.0", "-p", "Pack.A", "-r", "ref.dll", "-t", "lib.d.ts", "-m",
        "esm", "--nowarn",
    ]);

    assert_eq!(p.assemblies, ["lib.dll"]);
    assert_eq!(p.framework.as_deref(), Some("net8.0"));
    assert_eq!(p.packs, ["Pack.A"]);
    assert_eq!(p.references, ["ref.dll"]);
    assert_eq!(p.typedefs, ["lib.d.ts"]);
    assert_eq!(p.module, ModuleFormat::Es);
    assert!(p.nowarn);
}

#[test]
fn long_flags() {
    let p = params(&[
        "--assembly",
        "a.dll",
        "--framework",
        "net8.0",
        "--pack",
        "Pack.A",
        "--reference",
        "r.dll",
        "--typedef",
        "a.d.ts",
        "--module",
        "commonjs",
    ]);

    assert_eq!(p.assemblies, ["a.dll"]);
    assert_eq!(p.packs, ["Pack.A"]);
    assert_eq!(p.references, ["r.dll"]);
    assert_eq!(p.typedefs, ["a.d.ts"]);
    assert_eq!(p.module, ModuleFormat::CommonJs);
    assert!(!p.nowarn);
}

#[test]
fn plural_aliases_append() {
    let p = params(&[
        "--assembly",
        "a.dll",
        "--assemblies",
        "b.dll",
        "--packs",
        "Pack.A",
        "--references",
        "r.dll",
        "--typedefs",
        "a.d.ts;b.d.ts",
        "--modules",
        "cjs",
    ]);

    assert_eq!(p.assemblies, ["a.dll", "b.dll"]);
    assert_eq!(p.packs, ["Pack.A"]);
    assert_eq!(p.references, ["r.dll"]);
    assert_eq!(p.typedefs, ["a.d.ts;b.d.ts"]);
    assert_eq!(p.module, ModuleFormat::CommonJs);
}

#[test]
fn no_flags_parse_to_empty_params() {
    let p = params(&[]);

    assert!(p.assemblies.is_empty());
    assert!(p.typedefs.is_empty());
    assert_eq!(p.framework, None);
    assert_eq!(p.module, ModuleFormat::None);
}

#[test]
fn dangling_value_flag_is_usage_error() {
    for flag in [
        "-a",
        "--assembly",
        "--assemblies",
        "-f",
        "--framework",
        "-p",
        "--pack",
        "--packs",
        "-r",
        "--reference",
        "--references",
        "-t",
        "--typedef",
        "--typedefs",
        "-m",
        "--module",
        "--modules",
    ] {
        let result = build_cli().try_get_matches_from(["asmdts", "-a", "lib.dll", flag]);
        assert!(result.is_err(), "{flag} without a value should fail");
    }
}

#[test]
fn trailing_nowarn_is_fine() {
    let p = params(&["-a", "lib.dll", "-t", "lib.d.ts", "--nowarn"]);
    assert!(p.nowarn);
}

#[test]
fn unknown_flag_names_token() {
    let err = parse_err(&["-a", "lib.dll", "--bogus", "x"]);

    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    assert!(err.to_string().contains("--bogus"));
}

#[test]
fn help_flag_is_not_recognized() {
    let err = parse_err(&["--help"]);
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
}

#[test]
fn stray_positional_is_rejected() {
    let err = parse_err(&["lib.dll"]);
    assert!(err.to_string().contains("lib.dll"));
}

#[test]
fn invalid_module_format() {
    let err = parse_err(&["-a", "lib.dll", "-t", "lib.d.ts", "-m", "amd"]);
    assert_eq!(err.kind(), ErrorKind::ValueValidation);
}

#[test]
fn module_format_ignores_case() {
    assert_eq!(params(&["-m", "ESM"]).module, ModuleFormat::Es);
    assert_eq!(params(&["-m", "Mjs"]).module, ModuleFormat::Es);
    assert_eq!(params(&["-m", "es"]).module, ModuleFormat::Es);
    assert_eq!(params(&["-m", "CommonJS"]).module, ModuleFormat::CommonJs);
}

#[test]
fn single_value_options_last_wins() {
    let p = params(&["-f", "net6.0", "-f", "net8.0", "-m", "cjs", "-m", "esm"]);

    assert_eq!(p.framework.as_deref(), Some("net8.0"));
    assert_eq!(p.module, ModuleFormat::Es);
}

#[test]
fn value_may_start_with_hyphen() {
    let p = params(&["-a", "--nowarn"]);

    assert_eq!(p.assemblies, ["--nowarn"]);
    assert!(!p.nowarn);
}

#[test]
fn options_split_lists_and_drop_empty_entries() {
    let options = options(&["-a", "a.dll;;b.dll", "-a", "", "-t", "a.d.ts;b.d.ts;"]).unwrap();

    let inputs: Vec<_> = options.inputs().iter().map(|i| i.path()).collect();
    assert_eq!(inputs, [PathBuf::from("a.dll"), PathBuf::from("b.dll")]);
    assert_eq!(
        options.typedefs(),
        [PathBuf::from("a.d.ts"), PathBuf::from("b.d.ts")]
    );
}

#[test]
fn options_carry_resolution_inputs() {
    let options = options(&[
        "-a",
        "System.Runtime",
        "-t",
        "sr.d.ts",
        "-f",
        "net8.0-windows",
        "-p",
        "Pack.A;Pack.B",
        "--nowarn",
    ])
    .unwrap();

    assert_eq!(options.framework(), Some("net8.0-windows"));
    assert_eq!(options.packs(), ["Pack.A", "Pack.B"]);
    assert!(options.suppress_warnings());
}

#[test]
fn options_report_validation_errors() {
    assert_eq!(
        options(&["-a", "lib.txt/", "-t", "lib.d.ts"]).unwrap_err(),
        ValidationError::AssemblyExtension("lib.txt".into())
    );
    assert_eq!(
        options(&["-a", "lib.dll", "-t", "lib.ts"]).unwrap_err(),
        ValidationError::TypedefExtension("lib.ts".into())
    );
    assert_eq!(
        options(&["-a", "a.dll;b.dll", "-t", "a.d.ts"]).unwrap_err(),
        ValidationError::TypedefCountMismatch
    );
    assert_eq!(
        options(&["--nowarn"]).unwrap_err(),
        ValidationError::MissingAssembly
    );
}
