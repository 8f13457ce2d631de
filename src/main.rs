use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::GlobalArgs;

mod commands;
mod output;
mod tty;

use commands::{config, db, fs};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "folio")]
#[command(version = VERSION)]
#[command(about = "Build the portfolio project manifest")]
struct Cli {
    /// Directory all configured paths are resolved against (default: current directory)
    #[arg(long, global = true, value_name = "DIR")]
    base_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the manifest from project directories and sidecar files
    Fs(fs::FsArgs),
    /// Build the manifest from the SQLite project store
    Db(db::DbArgs),
    /// Show the effective configuration
    Config(config::ConfigArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let (json_result, exit_code) = match GlobalArgs::resolve(cli.base_dir) {
        Ok(global) => commands::run_json(cli.command, &global),
        Err(err) => commands::unresolved_base_dir(&cli.command, err),
    };
    let _ = output::print_result(json_result);

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
