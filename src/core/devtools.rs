/*
 * Optional developer-tooling installation, attempted once at startup when the
 * shell runs in development mode. The installer copies a renderer-devtools
 * extension bundle from a configured source directory into the per-user data
 * directory, where the renderer picks it up on its next load.
 *
 * Installation failure is never fatal: the lifecycle logs it and proceeds
 * with window creation regardless.
 */

use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum ToolingInstallError {
    /// No bundle directory was configured; nothing to install.
    NotConfigured,
    /// The configured bundle directory does not exist.
    MissingBundle(PathBuf),
    /// The per-user data directory could not be determined.
    NoUserDataDir,
    Io(io::Error),
}

impl From<io::Error> for ToolingInstallError {
    fn from(err: io::Error) -> Self {
        ToolingInstallError::Io(err)
    }
}

impl std::fmt::Display for ToolingInstallError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolingInstallError::NotConfigured => {
                write!(f, "No devtools bundle directory configured")
            }
            ToolingInstallError::MissingBundle(p) => {
                write!(f, "Devtools bundle directory does not exist: {:?}", p)
            }
            ToolingInstallError::NoUserDataDir => {
                write!(f, "Could not determine the per-user data directory")
            }
            ToolingInstallError::Io(e) => write!(f, "I/O error during devtools install: {}", e),
        }
    }
}

impl std::error::Error for ToolingInstallError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ToolingInstallError::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// Seam for the startup tooling install, so the application logic can be
/// tested without touching the filesystem.
pub trait DevToolsInstallerOperations: Send {
    /// Attempts the install and returns the directory the bundle landed in.
    fn install(&self) -> Result<PathBuf, ToolingInstallError>;
}

/// Installs the bundle by copying it under `<user data dir>/devtools`.
pub struct DiskDevToolsInstaller {
    bundle_dir: Option<PathBuf>,
}

impl DiskDevToolsInstaller {
    pub fn new(bundle_dir: Option<PathBuf>) -> Self {
        DiskDevToolsInstaller { bundle_dir }
    }

    fn target_dir() -> Result<PathBuf, ToolingInstallError> {
        let dirs = ProjectDirs::from("", "", crate::core::constants::APP_DISPLAY_NAME)
            .ok_or(ToolingInstallError::NoUserDataDir)?;
        Ok(dirs.data_dir().join("devtools"))
    }
}

impl DevToolsInstallerOperations for DiskDevToolsInstaller {
    fn install(&self) -> Result<PathBuf, ToolingInstallError> {
        let source = self
            .bundle_dir
            .as_deref()
            .ok_or(ToolingInstallError::NotConfigured)?;
        if !source.is_dir() {
            return Err(ToolingInstallError::MissingBundle(source.to_path_buf()));
        }
        let target = Self::target_dir()?;
        copy_dir_recursive(source, &target)?;
        log::debug!("DevTools: bundle copied from {:?} to {:?}", source, target);
        Ok(target)
    }
}

fn copy_dir_recursive(source: &Path, target: &Path) -> io::Result<()> {
    fs::create_dir_all(target)?;
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let dest = target.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&entry.path(), &dest)?;
        } else {
            fs::copy(entry.path(), &dest)?;
        }
    }
    Ok(())
}
