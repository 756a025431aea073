use super::handler::ShellAppLogic;
use super::lifecycle::LifecyclePhase;

use crate::core::config::RuntimeConfig;
use crate::core::constants;
use crate::core::devtools::{DevToolsInstallerOperations, ToolingInstallError};
use crate::ipc::{RendererNotification, RendererRequest};
use crate::platform_layer::{
    AppEvent, MenuAction, MenuItemConfig, PlatformCommand, PlatformEventHandler, Platform,
    WindowId,
};

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/*
 * Unit tests for `ShellAppLogic`. The logic is driven purely through
 * `AppEvent`s and observed through the commands it dequeues; the only mocked
 * dependency is the developer-tooling installer.
 */

// --- Mock DevToolsInstaller ---
struct MockDevToolsInstaller {
    fail: bool,
    install_calls: Arc<AtomicUsize>,
}

impl MockDevToolsInstaller {
    fn succeeding(calls: Arc<AtomicUsize>) -> Self {
        MockDevToolsInstaller {
            fail: false,
            install_calls: calls,
        }
    }
    fn failing(calls: Arc<AtomicUsize>) -> Self {
        MockDevToolsInstaller {
            fail: true,
            install_calls: calls,
        }
    }
}

impl DevToolsInstallerOperations for MockDevToolsInstaller {
    fn install(&self) -> Result<PathBuf, ToolingInstallError> {
        self.install_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(ToolingInstallError::NotConfigured)
        } else {
            Ok(PathBuf::from("/tmp/devtools"))
        }
    }
}
// --- End MockDevToolsInstaller ---

fn config(dev_mode: bool) -> RuntimeConfig {
    RuntimeConfig {
        dev_mode,
        devtools_bundle_dir: None,
    }
}

fn logic(platform: Platform) -> ShellAppLogic {
    ShellAppLogic::new(
        platform,
        config(false),
        Box::new(MockDevToolsInstaller::succeeding(Arc::new(
            AtomicUsize::new(0),
        ))),
    )
}

fn drain(logic: &mut ShellAppLogic) -> Vec<PlatformCommand> {
    let mut commands = Vec::new();
    while let Some(cmd) = logic.try_dequeue_command() {
        commands.push(cmd);
    }
    commands
}

/// Brings the logic to the WindowActive phase with a visible window and
/// returns the window id, discarding the setup commands.
fn with_live_window(logic: &mut ShellAppLogic) -> WindowId {
    logic.handle_event(AppEvent::ApplicationReady);
    let window_id = WindowId(1);
    logic.handle_event(AppEvent::MainWindowCreated { window_id });
    logic.handle_event(AppEvent::WindowContentReady { window_id });
    drain(logic);
    window_id
}

#[test]
fn startup_creates_hidden_window() {
    let mut logic = logic(Platform::Linux);
    logic.handle_event(AppEvent::ApplicationReady);

    let commands = drain(&mut logic);
    assert_eq!(commands.len(), 1);
    match &commands[0] {
        PlatformCommand::CreateMainWindow { config } => {
            assert_eq!(config.title, constants::APP_DISPLAY_NAME);
            assert_eq!(config.min_width, constants::WINDOW_MIN_WIDTH);
            assert_eq!(config.min_height, constants::WINDOW_MIN_HEIGHT);
            assert!(!config.devtools);
        }
        other => panic!("expected CreateMainWindow, got {:?}", other),
    }
    assert_eq!(logic.phase(), LifecyclePhase::Ready);
}

#[test]
fn dev_mode_attempts_tooling_install_before_window_creation() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut logic = ShellAppLogic::new(
        Platform::Linux,
        config(true),
        Box::new(MockDevToolsInstaller::succeeding(calls.clone())),
    );
    logic.handle_event(AppEvent::ApplicationReady);

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    let commands = drain(&mut logic);
    assert!(matches!(
        commands[0],
        PlatformCommand::CreateMainWindow { .. }
    ));
}

#[test]
fn tooling_install_failure_is_swallowed() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut logic = ShellAppLogic::new(
        Platform::Linux,
        config(true),
        Box::new(MockDevToolsInstaller::failing(calls.clone())),
    );
    logic.handle_event(AppEvent::ApplicationReady);

    // Window creation proceeds regardless of the failed install.
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    let commands = drain(&mut logic);
    assert!(matches!(
        commands[0],
        PlatformCommand::CreateMainWindow { .. }
    ));
    assert_eq!(logic.phase(), LifecyclePhase::Ready);
}

#[test]
fn production_mode_never_touches_the_installer() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut logic = ShellAppLogic::new(
        Platform::Linux,
        config(false),
        Box::new(MockDevToolsInstaller::succeeding(calls.clone())),
    );
    logic.handle_event(AppEvent::ApplicationReady);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn window_creation_installs_the_platform_menu() {
    let mut logic = logic(Platform::MacOs);
    logic.handle_event(AppEvent::ApplicationReady);
    drain(&mut logic);

    logic.handle_event(AppEvent::MainWindowCreated {
        window_id: WindowId(1),
    });
    let commands = drain(&mut logic);
    assert_eq!(commands.len(), 1);
    match &commands[0] {
        PlatformCommand::SetApplicationMenu {
            window_id,
            menu_items,
        } => {
            assert_eq!(*window_id, WindowId(1));
            // Identity submenu leads on macOS.
            match &menu_items[0] {
                MenuItemConfig::Submenu { text, .. } => {
                    assert_eq!(text, constants::APP_DISPLAY_NAME)
                }
                other => panic!("expected identity submenu, got {:?}", other),
            }
        }
        other => panic!("expected SetApplicationMenu, got {:?}", other),
    }
    assert_eq!(logic.phase(), LifecyclePhase::WindowActive);
}

#[test]
fn content_ready_shows_the_window_exactly_once() {
    let mut logic = logic(Platform::Linux);
    logic.handle_event(AppEvent::ApplicationReady);
    let window_id = WindowId(1);
    logic.handle_event(AppEvent::MainWindowCreated { window_id });
    drain(&mut logic);

    logic.handle_event(AppEvent::WindowContentReady { window_id });
    let commands = drain(&mut logic);
    assert!(matches!(
        commands.as_slice(),
        [PlatformCommand::ShowWindow { .. }]
    ));

    // A repeated ready signal must not produce a second show.
    logic.handle_event(AppEvent::WindowContentReady { window_id });
    assert!(drain(&mut logic).is_empty());
}

#[test]
fn window_slot_holds_at_most_one_handle() {
    let mut logic = logic(Platform::Linux);
    assert_eq!(logic.window_id(), None);
    let window_id = with_live_window(&mut logic);
    assert_eq!(logic.window_id(), Some(window_id));

    // A second creation event while the slot is occupied is ignored.
    logic.handle_event(AppEvent::MainWindowCreated {
        window_id: WindowId(2),
    });
    assert_eq!(logic.window_id(), Some(window_id));
    assert!(drain(&mut logic).is_empty());

    logic.handle_event(AppEvent::WindowDestroyed { window_id });
    assert_eq!(logic.window_id(), None);
}

#[test]
fn choose_app_dir_opens_the_export_folder_picker() {
    let mut logic = logic(Platform::Linux);
    let window_id = with_live_window(&mut logic);

    logic.handle_event(AppEvent::RendererRequestReceived {
        window_id,
        request: RendererRequest::ChooseAppDir,
    });
    let commands = drain(&mut logic);
    match commands.as_slice() {
        [PlatformCommand::ShowFolderPickerDialog { action_label, .. }] => {
            assert_eq!(action_label, constants::EXPORT_DIALOG_LABEL);
        }
        other => panic!("expected ShowFolderPickerDialog, got {:?}", other),
    }
}

#[test]
fn selected_export_dir_emits_exactly_one_notification() {
    let mut logic = logic(Platform::Linux);
    let window_id = with_live_window(&mut logic);

    logic.handle_event(AppEvent::FolderPickerDialogCompleted {
        window_id,
        result: Some(PathBuf::from("/tmp/export")),
    });
    let commands = drain(&mut logic);
    match commands.as_slice() {
        [PlatformCommand::SendRendererNotification { notification, .. }] => {
            assert_eq!(
                *notification,
                RendererNotification::AppDirSelected(PathBuf::from("/tmp/export"))
            );
        }
        other => panic!("expected one SendRendererNotification, got {:?}", other),
    }
}

#[test]
fn cancelled_folder_picker_emits_nothing() {
    let mut logic = logic(Platform::Linux);
    let window_id = with_live_window(&mut logic);

    logic.handle_event(AppEvent::FolderPickerDialogCompleted {
        window_id,
        result: None,
    });
    assert!(drain(&mut logic).is_empty());
}

#[test]
fn update_file_opens_the_image_file_dialog() {
    let mut logic = logic(Platform::Linux);
    let window_id = with_live_window(&mut logic);

    logic.handle_event(AppEvent::RendererRequestReceived {
        window_id,
        request: RendererRequest::UpdateFile,
    });
    let commands = drain(&mut logic);
    match commands.as_slice() {
        [PlatformCommand::ShowOpenFileDialog { filters, .. }] => {
            assert_eq!(filters.len(), 1);
            assert_eq!(filters[0].label, constants::OPEN_FILE_FILTER_LABEL);
            assert_eq!(
                filters[0].extensions,
                vec!["jpeg", "jpg", "png", "gif", "pdf"]
            );
        }
        other => panic!("expected ShowOpenFileDialog, got {:?}", other),
    }
}

#[test]
fn selected_file_emits_new_file_notification() {
    let mut logic = logic(Platform::Linux);
    let window_id = with_live_window(&mut logic);

    logic.handle_event(AppEvent::FileOpenDialogCompleted {
        window_id,
        result: Some(PathBuf::from("/pics/cat.png")),
    });
    let commands = drain(&mut logic);
    match commands.as_slice() {
        [PlatformCommand::SendRendererNotification { notification, .. }] => {
            assert_eq!(
                *notification,
                RendererNotification::NewFile(PathBuf::from("/pics/cat.png"))
            );
        }
        other => panic!("expected one SendRendererNotification, got {:?}", other),
    }
}

#[test]
fn cancelled_file_dialog_emits_no_new_file() {
    let mut logic = logic(Platform::Linux);
    let window_id = with_live_window(&mut logic);

    logic.handle_event(AppEvent::FileOpenDialogCompleted {
        window_id,
        result: None,
    });
    assert!(drain(&mut logic).is_empty());
}

#[test]
fn view_app_dir_reveals_the_path() {
    let mut logic = logic(Platform::Linux);
    let window_id = with_live_window(&mut logic);

    logic.handle_event(AppEvent::RendererRequestReceived {
        window_id,
        request: RendererRequest::ViewAppDir {
            path: PathBuf::from("/tmp/export"),
        },
    });
    let commands = drain(&mut logic);
    match commands.as_slice() {
        [PlatformCommand::RevealPathInFileBrowser { path }] => {
            assert_eq!(path, &PathBuf::from("/tmp/export"));
        }
        other => panic!("expected RevealPathInFileBrowser, got {:?}", other),
    }
}

#[test]
fn menu_open_file_triggers_the_dialog() {
    let mut logic = logic(Platform::Linux);
    with_live_window(&mut logic);

    logic.handle_event(AppEvent::MenuActionClicked {
        action: MenuAction::OpenFile,
    });
    let commands = drain(&mut logic);
    assert!(matches!(
        commands.as_slice(),
        [PlatformCommand::ShowOpenFileDialog { .. }]
    ));
}

#[test]
fn open_file_without_a_window_is_dropped() {
    let mut logic = logic(Platform::Linux);
    logic.handle_event(AppEvent::MenuActionClicked {
        action: MenuAction::OpenFile,
    });
    assert!(drain(&mut logic).is_empty());
}

#[test]
fn learn_more_opens_the_external_url() {
    let mut logic = logic(Platform::Linux);
    with_live_window(&mut logic);

    logic.handle_event(AppEvent::MenuActionClicked {
        action: MenuAction::LearnMore,
    });
    let commands = drain(&mut logic);
    match commands.as_slice() {
        [PlatformCommand::OpenExternalUrl { url }] => {
            assert_eq!(url, constants::LEARN_MORE_URL);
        }
        other => panic!("expected OpenExternalUrl, got {:?}", other),
    }
}

#[test]
fn zoom_actions_step_and_reset_around_the_default() {
    let mut logic = logic(Platform::Linux);
    with_live_window(&mut logic);

    logic.handle_event(AppEvent::MenuActionClicked {
        action: MenuAction::ZoomIn,
    });
    let commands = drain(&mut logic);
    match commands.as_slice() {
        [PlatformCommand::SetWebZoom { factor, .. }] => {
            assert!((factor - (constants::DEFAULT_ZOOM_FACTOR + constants::ZOOM_STEP)).abs() < 1e-9);
        }
        other => panic!("expected SetWebZoom, got {:?}", other),
    }

    logic.handle_event(AppEvent::MenuActionClicked {
        action: MenuAction::ResetZoom,
    });
    let commands = drain(&mut logic);
    match commands.as_slice() {
        [PlatformCommand::SetWebZoom { factor, .. }] => {
            assert!((factor - constants::DEFAULT_ZOOM_FACTOR).abs() < 1e-9);
        }
        other => panic!("expected SetWebZoom, got {:?}", other),
    }
}

#[test]
fn zoom_out_never_goes_below_the_floor() {
    let mut logic = logic(Platform::Linux);
    with_live_window(&mut logic);

    for _ in 0..20 {
        logic.handle_event(AppEvent::MenuActionClicked {
            action: MenuAction::ZoomOut,
        });
    }
    let commands = drain(&mut logic);
    match commands.last() {
        Some(PlatformCommand::SetWebZoom { factor, .. }) => {
            assert!((factor - constants::MIN_ZOOM_FACTOR).abs() < 1e-9);
        }
        other => panic!("expected SetWebZoom, got {:?}", other),
    }
}

#[test]
fn toggle_devtools_targets_the_live_window() {
    let mut logic = logic(Platform::Linux);
    let window_id = with_live_window(&mut logic);

    logic.handle_event(AppEvent::MenuActionClicked {
        action: MenuAction::ToggleDevTools,
    });
    let commands = drain(&mut logic);
    assert!(matches!(
        commands.as_slice(),
        [PlatformCommand::ToggleDevTools { window_id: id }] if *id == window_id
    ));
}

#[test]
fn closing_the_sole_window_quits_on_non_macos() {
    let mut logic = logic(Platform::Linux);
    let window_id = with_live_window(&mut logic);

    logic.handle_event(AppEvent::WindowDestroyed { window_id });
    let commands = drain(&mut logic);
    assert!(matches!(
        commands.as_slice(),
        [PlatformCommand::QuitApplication]
    ));
    assert_eq!(logic.phase(), LifecyclePhase::Terminating);
    assert_eq!(logic.window_id(), None);
}

#[test]
fn closing_the_sole_window_idles_on_macos() {
    let mut logic = logic(Platform::MacOs);
    let window_id = with_live_window(&mut logic);

    logic.handle_event(AppEvent::WindowDestroyed { window_id });
    assert!(drain(&mut logic).is_empty());
    assert_eq!(logic.phase(), LifecyclePhase::AllWindowsClosed);
    assert_eq!(logic.window_id(), None);
}

#[test]
fn reactivation_after_close_recreates_the_window() {
    let mut logic = logic(Platform::MacOs);
    let window_id = with_live_window(&mut logic);
    logic.handle_event(AppEvent::WindowDestroyed { window_id });
    drain(&mut logic);

    logic.handle_event(AppEvent::ApplicationReactivated);
    let commands = drain(&mut logic);
    assert!(matches!(
        commands.as_slice(),
        [PlatformCommand::CreateMainWindow { .. }]
    ));

    // The recreated window goes through the normal created -> shown cycle.
    let new_id = WindowId(2);
    logic.handle_event(AppEvent::MainWindowCreated { window_id: new_id });
    logic.handle_event(AppEvent::WindowContentReady { window_id: new_id });
    let commands = drain(&mut logic);
    assert!(commands
        .iter()
        .any(|c| matches!(c, PlatformCommand::ShowWindow { window_id } if *window_id == new_id)));
}

#[test]
fn reactivation_with_a_live_window_is_ignored() {
    let mut logic = logic(Platform::MacOs);
    with_live_window(&mut logic);

    logic.handle_event(AppEvent::ApplicationReactivated);
    assert!(drain(&mut logic).is_empty());
}

#[test]
fn requests_from_stale_windows_are_dropped() {
    let mut logic = logic(Platform::Linux);
    with_live_window(&mut logic);

    logic.handle_event(AppEvent::RendererRequestReceived {
        window_id: WindowId(99),
        request: RendererRequest::ChooseAppDir,
    });
    assert!(drain(&mut logic).is_empty());
}
