/*
 * Domain-side support for the shell: application constants, runtime
 * configuration, and the optional developer-tooling installer.
 */
pub mod config;
pub mod constants;
pub mod devtools;

pub use config::RuntimeConfig;
pub use devtools::{DevToolsInstallerOperations, DiskDevToolsInstaller, ToolingInstallError};
