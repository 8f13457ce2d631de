use clap::Args;
use folio::database::{self, DbBuildSummary};
use folio::log_error;

use super::{override_with, CmdResult};

#[derive(Args)]
pub struct DbArgs {
    /// SQLite database file
    #[arg(long, value_name = "PATH")]
    pub database: Option<String>,

    /// Manifest output path
    #[arg(long, value_name = "PATH")]
    pub output: Option<String>,

    /// Bootstrap the store and report without writing the manifest
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(args: DbArgs, global: &crate::commands::GlobalArgs) -> CmdResult<DbBuildSummary> {
    let mut config = global.load_config();
    override_with(&mut config.database, args.database);
    override_with(&mut config.output, args.output);

    let paths = global.build_paths(&config);

    match database::run(&paths, args.dry_run) {
        Ok(summary) => Ok((summary, 0)),
        Err(err) => {
            log_error!("db", "{}", err);
            Err(err)
        }
    }
}
