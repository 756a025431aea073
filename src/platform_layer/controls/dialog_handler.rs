/*
 * Native modal dialogs. Each dialog call blocks the initiating flow until the
 * user responds, then reports the outcome as a completion event that the run
 * loop feeds back to the application logic. Cancellation is a `None` result,
 * never an error.
 */

use crate::platform_layer::types::{AppEvent, FileDialogFilter, WindowId};

/// Presents the open-file dialog, modal against the main window.
/// Single-selection only: the result is at most one path by construction.
pub(crate) fn show_open_file_dialog(
    owner: &tao::window::Window,
    window_id: WindowId,
    title: &str,
    filters: &[FileDialogFilter],
) -> AppEvent {
    let mut dialog = rfd::FileDialog::new().set_title(title).set_parent(owner);
    for filter in filters {
        dialog = dialog.add_filter(&filter.label, &filter.extensions);
    }

    let result = dialog.pick_file();
    match &result {
        Some(path) => log::debug!("Platform: Open dialog returned path: {:?}", path),
        None => log::debug!("Platform: Open dialog cancelled by user."),
    }
    AppEvent::FileOpenDialogCompleted { window_id, result }
}

/// Presents the directory-only picker used for the export target.
pub(crate) fn show_folder_picker_dialog(
    owner: &tao::window::Window,
    window_id: WindowId,
    action_label: &str,
) -> AppEvent {
    let result = rfd::FileDialog::new()
        .set_title(action_label)
        .set_parent(owner)
        .pick_folder();
    match &result {
        Some(path) => log::debug!("Platform: Folder picker returned path: {:?}", path),
        None => log::debug!("Platform: Folder picker cancelled by user."),
    }
    AppEvent::FolderPickerDialogCompleted { window_id, result }
}
