use std::{io, path::PathBuf, process::ExitCode};

use catlang::run_file;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// catlang runs CatLang scripts: a small, line-oriented scripting language
/// for cats and the people who feed them.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the script to run. Must end in `.cat` or `.catlang`.
    script: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
                             .with_writer(io::stderr)
                             .without_time()
                             .init();

    let args = Args::parse();

    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr();

    match run_file(&args.script, &mut stdout, &mut stderr) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
