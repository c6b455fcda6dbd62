use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "skillwrap",
    about = "Package a skill folder into a distributable .skill archive"
)]
struct Cli {
    /// Path to the skill folder (must contain SKILL.md)
    skill_dir: PathBuf,
    /// Directory to write the archive into (defaults to the current directory)
    output_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();

    // Usage errors exit 1 like any other failure.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    match skillwrap_cli::commands::package::run_package(&cli.skill_dir, cli.output_dir.as_deref())
    {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
