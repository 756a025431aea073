/*
 * Fixed values describing the Lightbox shell: window geometry, the renderer
 * build artifact, and the dialog filter for openable documents.
 */

use std::path::PathBuf;

pub const APP_DISPLAY_NAME: &str = "Lightbox";

pub const WINDOW_MIN_WIDTH: u32 = 790;
pub const WINDOW_MIN_HEIGHT: u32 = 420;

/// Background shown before the renderer paints (dark gray, opaque).
pub const WINDOW_BACKGROUND_COLOR: (u8, u8, u8, u8) = (0x33, 0x33, 0x33, 0xff);

/// Zoom factor the renderer content starts at and resets to.
pub const DEFAULT_ZOOM_FACTOR: f64 = 0.7;
pub const ZOOM_STEP: f64 = 0.1;
pub const MIN_ZOOM_FACTOR: f64 = 0.3;
pub const MAX_ZOOM_FACTOR: f64 = 3.0;

/// Extensions the open-file dialog is restricted to.
pub const OPEN_FILE_FILTER_LABEL: &str = "Images";
pub const OPEN_FILE_EXTENSIONS: [&str; 5] = ["jpeg", "jpg", "png", "gif", "pdf"];

/// Action label of the export-target folder picker.
pub const EXPORT_DIALOG_LABEL: &str = "Export";

pub const LEARN_MORE_URL: &str = "https://github.com/lightbox-app/lightbox";

/// Relative location of the renderer build artifact next to the executable.
const CONTENT_ARTIFACT_RELATIVE: &str = "build/index.html";

/*
 * Resolves the fixed `file://` URL of the renderer build artifact. The
 * artifact lives next to the executable; when the executable's location
 * cannot be determined (some test harnesses), the current directory is used.
 */
pub fn content_artifact_url() -> String {
    let base = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));
    format!(
        "file://{}",
        base.join(CONTENT_ARTIFACT_RELATIVE).display()
    )
}
