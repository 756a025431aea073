/*
 * Runtime configuration of the shell, read from the environment at startup.
 * There is no configuration file: the only switches are the development mode
 * (which enables webview devtools and the developer-tooling install) and the
 * location of the optional renderer-devtools bundle.
 */

use std::path::PathBuf;

pub const ENV_MODE: &str = "LIGHTBOX_ENV";
pub const ENV_DEVTOOLS_DIR: &str = "LIGHTBOX_DEVTOOLS_DIR";
pub const ENV_LOG: &str = "LIGHTBOX_LOG";

const DEVELOPMENT_MODE: &str = "development";

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub dev_mode: bool,
    /// Directory holding a renderer-devtools extension bundle to install on
    /// startup in dev mode. Unset means nothing to install.
    pub devtools_bundle_dir: Option<PathBuf>,
}

impl RuntimeConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source so tests
    /// do not have to mutate the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let dev_mode = lookup(ENV_MODE)
            .map(|v| v.eq_ignore_ascii_case(DEVELOPMENT_MODE))
            .unwrap_or(false);
        let devtools_bundle_dir = lookup(ENV_DEVTOOLS_DIR).map(PathBuf::from);
        RuntimeConfig {
            dev_mode,
            devtools_bundle_dir,
        }
    }
}
