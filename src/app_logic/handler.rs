use crate::core::constants;
use crate::core::{DevToolsInstallerOperations, RuntimeConfig};
use crate::ipc::{RendererNotification, RendererRequest};
use crate::platform_layer::{
    AppEvent, FileDialogFilter, MenuAction, PlatformCommand, PlatformEventHandler, Platform,
    WindowConfig, WindowId,
};
use crate::ui_description_layer;

use super::lifecycle::LifecyclePhase;

use std::collections::VecDeque;

/*
 * Manages the host-side application state in a platform-agnostic manner.
 * It processes events received from the platform layer and enqueues commands
 * for it: window creation and show-on-ready, menu installation and menu
 * actions, the renderer request routing, and the quit/reactivation
 * conventions. It owns the single lifecycle-facing window slot; the platform
 * layer owns the corresponding native resources.
 */
pub struct ShellAppLogic {
    platform: Platform,
    config: RuntimeConfig,
    devtools_installer: Box<dyn DevToolsInstallerOperations>,
    phase: LifecyclePhase,
    main_window_id: Option<WindowId>,
    window_shown: bool,
    zoom_factor: f64,
    command_queue: VecDeque<PlatformCommand>,
}

impl ShellAppLogic {
    pub fn new(
        platform: Platform,
        config: RuntimeConfig,
        devtools_installer: Box<dyn DevToolsInstallerOperations>,
    ) -> Self {
        ShellAppLogic {
            platform,
            config,
            devtools_installer,
            phase: LifecyclePhase::Starting,
            main_window_id: None,
            window_shown: false,
            zoom_factor: constants::DEFAULT_ZOOM_FACTOR,
            command_queue: VecDeque::new(),
        }
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    /// The lifecycle-facing window slot. At most one window exists at a time;
    /// `None` before first creation and after the window is destroyed.
    pub fn window_id(&self) -> Option<WindowId> {
        self.main_window_id
    }

    fn enqueue(&mut self, command: PlatformCommand) {
        self.command_queue.push_back(command);
    }

    fn enqueue_window_creation(&mut self) {
        self.enqueue(PlatformCommand::CreateMainWindow {
            config: WindowConfig {
                title: constants::APP_DISPLAY_NAME.to_string(),
                min_width: constants::WINDOW_MIN_WIDTH,
                min_height: constants::WINDOW_MIN_HEIGHT,
                background_color: constants::WINDOW_BACKGROUND_COLOR,
                content_url: constants::content_artifact_url(),
                initial_zoom: constants::DEFAULT_ZOOM_FACTOR,
                devtools: self.config.dev_mode,
            },
        });
    }

    fn on_application_ready(&mut self) {
        if self.config.dev_mode {
            self.phase = LifecyclePhase::DevToolingPending;
            // Install failure is logged and swallowed; startup continues.
            match self.devtools_installer.install() {
                Ok(dir) => log::info!("AppLogic: Developer tooling installed at {:?}", dir),
                Err(e) => log::warn!(
                    "AppLogic: Developer tooling install failed, continuing without it: {}",
                    e
                ),
            }
        }
        self.phase = LifecyclePhase::Ready;
        self.enqueue_window_creation();
    }

    fn on_main_window_created(&mut self, window_id: WindowId) {
        if self.main_window_id.is_some() {
            log::error!(
                "AppLogic: MainWindowCreated while a window slot is occupied; ignoring {:?}",
                window_id
            );
            return;
        }
        self.main_window_id = Some(window_id);
        self.window_shown = false;
        self.zoom_factor = constants::DEFAULT_ZOOM_FACTOR;
        self.phase = LifecyclePhase::WindowActive;
        self.enqueue(PlatformCommand::SetApplicationMenu {
            window_id,
            menu_items: ui_description_layer::build_application_menu(
                self.platform,
                constants::APP_DISPLAY_NAME,
            ),
        });
    }

    fn on_window_content_ready(&mut self, window_id: WindowId) {
        if self.main_window_id != Some(window_id) {
            log::warn!(
                "AppLogic: Content ready for unknown window {:?}, ignoring.",
                window_id
            );
            return;
        }
        // Exactly one show transition per window instance.
        if !self.window_shown {
            self.window_shown = true;
            self.enqueue(PlatformCommand::ShowWindow { window_id });
        }
    }

    fn on_window_destroyed(&mut self, window_id: WindowId) {
        if self.main_window_id != Some(window_id) {
            log::warn!(
                "AppLogic: Destroy notification for unknown window {:?}, ignoring.",
                window_id
            );
            return;
        }
        self.main_window_id = None;
        self.window_shown = false;
        if self.platform.quits_on_last_window_closed() {
            self.phase = LifecyclePhase::Terminating;
            self.enqueue(PlatformCommand::QuitApplication);
        } else {
            self.phase = LifecyclePhase::AllWindowsClosed;
            log::info!("AppLogic: All windows closed, staying resident.");
        }
    }

    fn on_application_reactivated(&mut self) {
        if self.main_window_id.is_some() {
            return;
        }
        if matches!(
            self.phase,
            LifecyclePhase::AllWindowsClosed | LifecyclePhase::Ready
        ) {
            log::info!("AppLogic: Reactivated without a live window, recreating.");
            self.enqueue_window_creation();
        }
    }

    /// Starts the open-file flow. Shared by the File menu entry and the
    /// renderer's `update-file` request; the eventual selection comes back as
    /// `FileOpenDialogCompleted`.
    fn open_file(&mut self) {
        let Some(window_id) = self.main_window_id else {
            log::warn!("AppLogic: Open-file requested without a live window, dropping.");
            return;
        };
        self.enqueue(PlatformCommand::ShowOpenFileDialog {
            window_id,
            title: "Open File".to_string(),
            filters: vec![FileDialogFilter {
                label: constants::OPEN_FILE_FILTER_LABEL.to_string(),
                extensions: constants::OPEN_FILE_EXTENSIONS
                    .iter()
                    .map(|e| e.to_string())
                    .collect(),
            }],
        });
    }

    fn set_zoom(&mut self, factor: f64) {
        let Some(window_id) = self.main_window_id else {
            return;
        };
        self.zoom_factor = factor.clamp(constants::MIN_ZOOM_FACTOR, constants::MAX_ZOOM_FACTOR);
        self.enqueue(PlatformCommand::SetWebZoom {
            window_id,
            factor: self.zoom_factor,
        });
    }

    fn on_menu_action(&mut self, action: MenuAction) {
        match action {
            MenuAction::OpenFile => self.open_file(),
            MenuAction::ReloadContent => {
                if let Some(window_id) = self.main_window_id {
                    self.enqueue(PlatformCommand::ReloadWebContent { window_id });
                }
            }
            MenuAction::ResetZoom => self.set_zoom(constants::DEFAULT_ZOOM_FACTOR),
            MenuAction::ZoomIn => self.set_zoom(self.zoom_factor + constants::ZOOM_STEP),
            MenuAction::ZoomOut => self.set_zoom(self.zoom_factor - constants::ZOOM_STEP),
            MenuAction::ToggleFullScreen => {
                if let Some(window_id) = self.main_window_id {
                    self.enqueue(PlatformCommand::ToggleFullScreen { window_id });
                }
            }
            MenuAction::LearnMore => {
                self.enqueue(PlatformCommand::OpenExternalUrl {
                    url: constants::LEARN_MORE_URL.to_string(),
                });
            }
            MenuAction::ToggleDevTools => {
                if let Some(window_id) = self.main_window_id {
                    self.enqueue(PlatformCommand::ToggleDevTools { window_id });
                }
            }
        }
    }

    fn on_renderer_request(&mut self, window_id: WindowId, request: RendererRequest) {
        if self.main_window_id != Some(window_id) {
            log::warn!(
                "AppLogic: Renderer request from unknown window {:?}, dropping.",
                window_id
            );
            return;
        }
        match request {
            RendererRequest::ChooseAppDir => {
                self.enqueue(PlatformCommand::ShowFolderPickerDialog {
                    window_id,
                    action_label: constants::EXPORT_DIALOG_LABEL.to_string(),
                });
            }
            RendererRequest::ViewAppDir { path } => {
                self.enqueue(PlatformCommand::RevealPathInFileBrowser { path });
            }
            RendererRequest::UpdateFile => self.open_file(),
        }
    }

    /// Routes a completed dialog to its renderer notification. A `None`
    /// result is a user cancellation: nothing is emitted downstream.
    fn notify_if_selected(
        &mut self,
        window_id: WindowId,
        result: Option<std::path::PathBuf>,
        make: fn(std::path::PathBuf) -> RendererNotification,
    ) {
        if self.main_window_id != Some(window_id) {
            log::warn!(
                "AppLogic: Dialog completion for unknown window {:?}, dropping.",
                window_id
            );
            return;
        }
        match result {
            Some(path) => self.enqueue(PlatformCommand::SendRendererNotification {
                window_id,
                notification: make(path),
            }),
            None => log::debug!("AppLogic: Dialog cancelled, no notification."),
        }
    }
}

impl PlatformEventHandler for ShellAppLogic {
    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ApplicationReady => self.on_application_ready(),
            AppEvent::MainWindowCreated { window_id } => self.on_main_window_created(window_id),
            AppEvent::WindowContentReady { window_id } => self.on_window_content_ready(window_id),
            AppEvent::WindowDestroyed { window_id } => self.on_window_destroyed(window_id),
            AppEvent::ApplicationReactivated => self.on_application_reactivated(),
            AppEvent::MenuActionClicked { action } => self.on_menu_action(action),
            AppEvent::FileOpenDialogCompleted { window_id, result } => {
                self.notify_if_selected(window_id, result, RendererNotification::NewFile)
            }
            AppEvent::FolderPickerDialogCompleted { window_id, result } => {
                self.notify_if_selected(window_id, result, RendererNotification::AppDirSelected)
            }
            AppEvent::RendererRequestReceived { window_id, request } => {
                self.on_renderer_request(window_id, request)
            }
        }
    }

    fn try_dequeue_command(&mut self) -> Option<PlatformCommand> {
        self.command_queue.pop_front()
    }

    fn on_quit(&mut self) {
        log::info!("AppLogic: on_quit called by platform. Application is exiting.");
    }
}
