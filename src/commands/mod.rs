use std::path::PathBuf;

use folio::config::FolioConfig;
use folio::paths::BuildPaths;

pub type CmdResult<T> = folio::Result<(T, i32)>;

pub(crate) struct GlobalArgs {
    pub base_dir: PathBuf,
}

impl GlobalArgs {
    /// Pin the base directory once; nothing below reads the process cwd.
    pub fn resolve(base_dir: Option<PathBuf>) -> folio::Result<Self> {
        let base_dir = match base_dir {
            Some(dir) => dir,
            None => std::env::current_dir().map_err(|e| {
                folio::Error::internal_io(
                    e.to_string(),
                    Some("resolve current directory".to_string()),
                )
            })?,
        };

        if !base_dir.is_dir() {
            return Err(folio::Error::validation_invalid_argument(
                "base_dir",
                format!("'{}' is not a directory", base_dir.display()),
            ));
        }

        Ok(Self { base_dir })
    }

    pub fn load_config(&self) -> FolioConfig {
        folio::config::load_config(&self.base_dir)
    }

    pub fn build_paths(&self, config: &FolioConfig) -> BuildPaths {
        BuildPaths::from_config(&self.base_dir, config)
    }
}

/// Replace a config value when the matching flag was given.
pub(crate) fn override_with(target: &mut String, flag: Option<String>) {
    if let Some(value) = flag {
        *target = value;
    }
}

pub mod config;
pub mod db;
pub mod fs;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

/// Report a base directory that could not be resolved.
///
/// Without a base dir there is no projects root either, so `fs` logs the
/// error and still exits 0; `db` and `config` map it to a nonzero exit.
pub(crate) fn unresolved_base_dir(
    command: &crate::Commands,
    err: folio::Error,
) -> (folio::Result<serde_json::Value>, i32) {
    match command {
        crate::Commands::Fs(_) => {
            folio::log_error!("fs", "{}", err);
            (Err(err), 0)
        }
        crate::Commands::Db(_) | crate::Commands::Config(_) => {
            let exit_code = crate::output::exit_code_for_error(err.code);
            (Err(err), exit_code)
        }
    }
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (folio::Result<serde_json::Value>, i32) {
    crate::tty::status("folio is working...");

    match command {
        // Filesystem builds always exit 0; failures are logged and reported
        crate::Commands::Fs(args) => {
            let (result, _) = dispatch!(args, global, fs);
            (result, 0)
        }
        crate::Commands::Db(args) => dispatch!(args, global, db),
        crate::Commands::Config(args) => dispatch!(args, global, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Commands;
    use tempfile::tempdir;

    fn fs_command() -> Commands {
        Commands::Fs(fs::FsArgs {
            projects_dir: None,
            icons_dir: None,
            output: None,
            dry_run: false,
        })
    }

    fn db_command() -> Commands {
        Commands::Db(db::DbArgs {
            database: None,
            output: None,
            dry_run: false,
        })
    }

    #[test]
    fn fs_exits_zero_when_projects_root_is_missing() {
        let dir = tempdir().unwrap();
        let global = GlobalArgs {
            base_dir: dir.path().to_path_buf(),
        };

        let (result, exit_code) = run_json(fs_command(), &global);

        assert_eq!(exit_code, 0);
        let err = result.unwrap_err();
        assert_eq!(err.code.as_str(), "projects.root_missing");
    }

    #[test]
    fn fs_exits_zero_when_base_dir_is_missing() {
        let dir = tempdir().unwrap();
        let err = GlobalArgs::resolve(Some(dir.path().join("gone")))
            .err()
            .unwrap();

        let (result, exit_code) = unresolved_base_dir(&fs_command(), err);

        assert_eq!(exit_code, 0);
        assert!(result.is_err());
    }

    #[test]
    fn db_and_config_exit_nonzero_when_base_dir_is_missing() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("gone");
        let config_command = Commands::Config(config::ConfigArgs { builtin: false });

        for command in [db_command(), config_command] {
            let err = GlobalArgs::resolve(Some(missing.clone())).err().unwrap();
            let (result, exit_code) = unresolved_base_dir(&command, err);

            assert_eq!(exit_code, 2);
            assert_eq!(
                result.unwrap_err().code.as_str(),
                "validation.invalid_argument"
            );
        }
    }
}
