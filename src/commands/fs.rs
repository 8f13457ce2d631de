use clap::Args;
use folio::filesystem;
use folio::log_error;
use folio::BuildSummary;

use super::{override_with, CmdResult};

#[derive(Args)]
pub struct FsArgs {
    /// Directory containing one subdirectory per project
    #[arg(long, value_name = "PATH")]
    pub projects_dir: Option<String>,

    /// Directory holding technology icons (<name>.svg or <name>.png)
    #[arg(long, value_name = "PATH")]
    pub icons_dir: Option<String>,

    /// Manifest output path
    #[arg(long, value_name = "PATH")]
    pub output: Option<String>,

    /// Build and report without writing the manifest
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(args: FsArgs, global: &crate::commands::GlobalArgs) -> CmdResult<BuildSummary> {
    let mut config = global.load_config();
    override_with(&mut config.projects_dir, args.projects_dir);
    override_with(&mut config.icons_dir, args.icons_dir);
    override_with(&mut config.output, args.output);

    let paths = global.build_paths(&config);

    match filesystem::run(&paths, &config, args.dry_run) {
        Ok(summary) => Ok((summary, 0)),
        Err(err) => {
            log_error!("fs", "{}", err);
            Err(err)
        }
    }
}
