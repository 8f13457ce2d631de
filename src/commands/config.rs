use clap::Args;
use serde::Serialize;

use folio::config::{self, FolioConfig};
use folio::paths::{self, BuildPaths};

use super::CmdResult;

#[derive(Args)]
pub struct ConfigArgs {
    /// Show only built-in defaults (ignore folio.json)
    #[arg(long)]
    pub builtin: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOutput {
    path: String,
    exists: bool,
    config: FolioConfig,
    resolved: BuildPaths,
}

pub fn run(args: ConfigArgs, global: &crate::commands::GlobalArgs) -> CmdResult<ConfigOutput> {
    let exists = config::config_exists(&global.base_dir);

    let config = if args.builtin {
        FolioConfig::default()
    } else if exists {
        // An explicit show surfaces parse errors instead of silently defaulting
        config::load_config_from_file(&global.base_dir)?
    } else {
        FolioConfig::default()
    };

    let resolved = global.build_paths(&config);

    Ok((
        ConfigOutput {
            path: paths::config_file(&global.base_dir).display().to_string(),
            exists,
            config,
            resolved,
        },
        0,
    ))
}
