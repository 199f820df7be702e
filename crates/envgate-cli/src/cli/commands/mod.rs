pub mod check;
pub mod policies;

use std::path::{Path, PathBuf};

use anyhow::Context;
use envgate_core::{EnvgateConfig, CONFIG_FILE_NAME};

use super::args::{Cli, Command};

pub fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Check(args) => check::run(args, cli.verbose),
        Command::Policies(args) => policies::run(args, cli.verbose),
    }
}

/// Config named on the command line, else `envgate.yaml` in the working
/// directory when it exists, else an empty config.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<(EnvgateConfig, Option<PathBuf>)> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let fallback = PathBuf::from(CONFIG_FILE_NAME);
            if !fallback.is_file() {
                return Ok((EnvgateConfig::default(), None));
            }
            fallback
        }
    };

    let config = EnvgateConfig::from_path(&path)
        .with_context(|| format!("failed to load config {}", path.display()))?;
    tracing::debug!(path = %path.display(), policies = config.policies.len(), "loaded config");
    Ok((config, Some(path)))
}
