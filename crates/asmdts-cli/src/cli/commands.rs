//! Command builder for the CLI.
//!
//! The tool has a single flat command. There are no `--help`/`--version`
//! flags: any grammar error prints the help text instead.

use clap::Command;

use super::args::*;

/// Build the complete CLI.
pub fn build_cli() -> Command {
    Command::new("asmdts")
        .about("Generate TypeScript type definitions for .NET assemblies")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .args_override_self(true)
        .override_usage(
            "\
  asmdts -a <ASSEMBLY> -t <TYPEDEFS> [options...]
  asmdts -a <A.dll;B.dll> -t <A.d.ts;B.d.ts> -r <REFS> -m esm",
        )
        .after_help(
            r#"EXAMPLES:
  asmdts -a lib.dll -t lib.d.ts                     # type definitions only
  asmdts -a lib.dll -t lib.d.ts -m esm              # plus lib.js ES loader
  asmdts -a System.Runtime -t System.Runtime.d.ts   # system assembly by name
  asmdts -a System.Runtime -t sr.d.ts -f net8.0 -p Microsoft.NETCore.App"#,
        )
        .arg(assemblies_arg())
        .arg(framework_arg())
        .arg(packs_arg())
        .arg(references_arg())
        .arg(typedefs_arg())
        .arg(module_arg())
        .arg(nowarn_arg())
}
