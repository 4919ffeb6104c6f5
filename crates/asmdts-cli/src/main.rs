mod cli;
mod commands;

use std::io::Write;
use std::process::ExitCode;

use log::Level;

use asmdts_lib::GenerationOptions;
use cli::{GenerateParams, build_cli};

fn main() -> ExitCode {
    init_logging();

    let mut cmd = build_cli();
    let matches = match cmd.try_get_matches_from_mut(std::env::args_os()) {
        Ok(m) => m,
        Err(e) => {
            let _ = e.print();
            println!();
            println!("{}", cmd.render_help());
            return ExitCode::FAILURE;
        }
    };

    let params = GenerateParams::from_matches(&matches);
    let options = match GenerationOptions::try_from(params) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match commands::generate::run(options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Plain messages for `info`, a level prefix for everything else.
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            Level::Warn => writeln!(buf, "warning: {}", record.args()),
            level => writeln!(buf, "{}: {}", level.as_str().to_lowercase(), record.args()),
        })
        .init();
}
