/*
 * This module is responsible for executing `PlatformCommand`s against the
 * native state. Commands that complete a user interaction (the dialogs,
 * window creation) return a follow-up `AppEvent` which the run loop feeds
 * back to the application logic; everything else returns `None`.
 *
 * The fire-and-forget shell commands (reveal path, open URL) swallow their
 * failures by contract: a `ShellIntegrationFailure` is logged here and never
 * propagated further.
 */

use super::app::{PlatformState, UserEvent};
use super::controls::{dialog_handler, menu_handler};
use super::error::{PlatformError, Result as PlatformResult};
use super::types::{AppEvent, PlatformCommand, WindowId};
use super::window_common::{self, MainWindowData};

use tao::event_loop::EventLoopWindowTarget;
use tao::window::Fullscreen;

pub(crate) fn execute(
    state: &mut PlatformState,
    target: &EventLoopWindowTarget<UserEvent>,
    command: PlatformCommand,
) -> PlatformResult<Option<AppEvent>> {
    match command {
        PlatformCommand::CreateMainWindow { config } => {
            if state.main_window.is_some() {
                return Err(PlatformError::OperationFailed(
                    "Main window slot is already occupied".into(),
                ));
            }
            let window_id = state.generate_window_id();
            let data = window_common::create_main_window(target, &state.proxy, window_id, &config)?;
            state.main_window = Some(data);
            Ok(Some(AppEvent::MainWindowCreated { window_id }))
        }

        PlatformCommand::ShowWindow { window_id } => {
            window_mut(state, window_id, "ShowWindow")?.show();
            Ok(None)
        }

        PlatformCommand::SetApplicationMenu {
            window_id,
            menu_items,
        } => {
            let PlatformState {
                main_window, menu, ..
            } = state;
            let data = main_window
                .as_ref()
                .filter(|w| w.id == window_id)
                .ok_or_else(|| invalid_handle(window_id, "SetApplicationMenu"))?;
            menu_handler::install_application_menu(menu, &data.window, &menu_items)?;
            Ok(None)
        }

        PlatformCommand::ShowOpenFileDialog {
            window_id,
            title,
            filters,
        } => {
            let data = window_ref(state, window_id, "ShowOpenFileDialog")?;
            Ok(Some(dialog_handler::show_open_file_dialog(
                &data.window,
                window_id,
                &title,
                &filters,
            )))
        }

        PlatformCommand::ShowFolderPickerDialog {
            window_id,
            action_label,
        } => {
            let data = window_ref(state, window_id, "ShowFolderPickerDialog")?;
            Ok(Some(dialog_handler::show_folder_picker_dialog(
                &data.window,
                window_id,
                &action_label,
            )))
        }

        PlatformCommand::RevealPathInFileBrowser { path } => {
            if let Err(e) = open::that_detached(&path) {
                let err = PlatformError::ShellIntegration(format!(
                    "reveal {:?} in file browser: {}",
                    path, e
                ));
                log::warn!("Platform: {}", err);
            }
            Ok(None)
        }

        PlatformCommand::OpenExternalUrl { url } => {
            if let Err(e) = open::that_detached(&url) {
                let err =
                    PlatformError::ShellIntegration(format!("open external URL {}: {}", url, e));
                log::warn!("Platform: {}", err);
            }
            Ok(None)
        }

        PlatformCommand::ToggleDevTools { window_id } => {
            let data = window_ref(state, window_id, "ToggleDevTools")?;
            if data.webview.is_devtools_open() {
                data.webview.close_devtools();
            } else {
                data.webview.open_devtools();
            }
            Ok(None)
        }

        PlatformCommand::ReloadWebContent { window_id } => {
            let data = window_ref(state, window_id, "ReloadWebContent")?;
            data.webview.evaluate_script("window.location.reload();")?;
            Ok(None)
        }

        PlatformCommand::SetWebZoom { window_id, factor } => {
            let data = window_ref(state, window_id, "SetWebZoom")?;
            data.webview.zoom(factor)?;
            Ok(None)
        }

        PlatformCommand::ToggleFullScreen { window_id } => {
            let data = window_ref(state, window_id, "ToggleFullScreen")?;
            if data.window.fullscreen().is_some() {
                data.window.set_fullscreen(None);
            } else {
                data.window
                    .set_fullscreen(Some(Fullscreen::Borderless(None)));
            }
            Ok(None)
        }

        PlatformCommand::SendRendererNotification {
            window_id,
            notification,
        } => {
            let data = window_ref(state, window_id, "SendRendererNotification")?;
            log::debug!(
                "Platform: Delivering '{}' notification to renderer.",
                notification.channel()
            );
            data.webview
                .evaluate_script(&notification.to_dispatch_script())?;
            Ok(None)
        }

        PlatformCommand::QuitApplication => {
            log::info!("Platform: Quit requested, exiting event loop.");
            state.exit_requested = true;
            Ok(None)
        }
    }
}

fn invalid_handle(window_id: WindowId, operation: &str) -> PlatformError {
    PlatformError::InvalidHandle(format!(
        "WindowId {:?} not found for {}",
        window_id, operation
    ))
}

fn window_ref<'a>(
    state: &'a PlatformState,
    window_id: WindowId,
    operation: &str,
) -> PlatformResult<&'a MainWindowData> {
    state
        .main_window
        .as_ref()
        .filter(|w| w.id == window_id)
        .ok_or_else(|| invalid_handle(window_id, operation))
}

fn window_mut<'a>(
    state: &'a mut PlatformState,
    window_id: WindowId,
    operation: &str,
) -> PlatformResult<&'a mut MainWindowData> {
    state
        .main_window
        .as_mut()
        .filter(|w| w.id == window_id)
        .ok_or_else(|| invalid_handle(window_id, operation))
}
