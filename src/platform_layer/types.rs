/*
 * This module defines the core data types used for communication between the
 * application logic and the platform layer: the opaque window identifier, the
 * platform tag, configurations for the main window and the application menu,
 * platform-agnostic event types (`AppEvent`), commands for the platform layer
 * (`PlatformCommand`), and the `PlatformEventHandler` trait that the
 * application logic must implement.
 */

use crate::ipc::{RendererNotification, RendererRequest};

use std::path::PathBuf;

// An opaque identifier for the native main window, managed by the platform layer.
//
// The application logic layer uses this ID to refer to the window when sending
// commands or receiving events, without needing to know about native handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(pub(crate) usize);

/*
 * Identifies the desktop platform convention the shell is running under.
 * Menu assembly and quit semantics are functions of this tag, so the
 * platform-conditional behavior stays testable on any host.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    Linux,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }

    /// Whether closing the last window terminates the application.
    /// macOS applications conventionally stay resident until an explicit quit.
    pub fn quits_on_last_window_closed(&self) -> bool {
        !matches!(self, Platform::MacOs)
    }
}

// --- Semantic Menu Action Identifiers ---

/*
 * Represents logical menu actions in a platform-agnostic way. Actions are
 * handled by the application logic; the platform layer manages the mapping
 * from these to dynamically assigned native menu item ids.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    OpenFile,
    ReloadContent,
    ResetZoom,
    ZoomIn,
    ZoomOut,
    ToggleFullScreen,
    LearnMore,
    ToggleDevTools,
}

/*
 * Menu entries whose semantics are delegated entirely to the native toolkit.
 * These never reach the application logic as events.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuRole {
    Cut,
    Copy,
    Paste,
    SelectAll,
    Minimize,
    CloseWindow,
    Zoom,
    Front,
    About,
    Services,
    Hide,
    HideOthers,
    ShowAll,
    Quit,
}

/*
 * Declarative description of one menu entry. The full application menu is an
 * ordered tree of these, built once per window-creation cycle by the UI
 * description layer and installed wholesale by the platform layer.
 */
#[derive(Debug, Clone, PartialEq)]
pub enum MenuItemConfig {
    /// A custom entry routed back to the application logic as `MenuAction`.
    Action {
        action: MenuAction,
        text: String,
        accelerator: Option<String>,
    },
    /// An entry with host-native semantics.
    Native { role: MenuRole },
    Separator,
    Submenu {
        text: String,
        children: Vec<MenuItemConfig>,
    },
}

/// A named extension filter for the open-file dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct FileDialogFilter {
    pub label: String,
    pub extensions: Vec<String>,
}

// Configuration for creating the main window.
//
// Provided by the application logic, describing the desired properties of the
// window without specifying native details. The window is always constructed
// hidden and sized to the primary display; it becomes visible only when its
// content reports ready.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub min_width: u32,
    pub min_height: u32,
    /// RGBA background shown before the renderer paints.
    pub background_color: (u8, u8, u8, u8),
    /// URL of the fixed local build artifact the renderer loads.
    pub content_url: String,
    pub initial_zoom: f64,
    pub devtools: bool,
}

// --- Events from Platform to App Logic ---

/*
 * Platform-agnostic events generated by the native toolkit or the renderer.
 * The platform layer translates native OS events and webview messages into
 * these and dispatches them to the application logic.
 */
#[derive(Debug)]
pub enum AppEvent {
    /// The event loop is up; windows may now be created.
    ApplicationReady,
    MainWindowCreated {
        window_id: WindowId,
    },
    /// The renderer finished loading the window content.
    WindowContentReady {
        window_id: WindowId,
    },
    // Signals that the window and its native resources have been destroyed.
    // The `WindowId` is invalid after this event.
    WindowDestroyed {
        window_id: WindowId,
    },
    /// The user reactivated the application (e.g. clicked the dock icon) while
    /// no window was live. macOS only.
    ApplicationReactivated,
    MenuActionClicked {
        action: MenuAction,
    },
    /// Result of the open-file dialog. `None` means the user cancelled.
    FileOpenDialogCompleted {
        window_id: WindowId,
        result: Option<PathBuf>,
    },
    /// Result of the folder picker. `None` means the user cancelled.
    FolderPickerDialogCompleted {
        window_id: WindowId,
        result: Option<PathBuf>,
    },
    /// A named request arrived on the renderer channel.
    RendererRequestReceived {
        window_id: WindowId,
        request: RendererRequest,
    },
}

// Commands sent from the application logic to the platform layer.
//
// These instruct the platform layer to perform specific actions on native
// resources. Dialog commands complete synchronously from the initiating
// flow's perspective and report back via the corresponding `AppEvent`.
#[derive(Debug, Clone)]
pub enum PlatformCommand {
    CreateMainWindow {
        config: WindowConfig,
    },
    ShowWindow {
        window_id: WindowId,
    },
    /// Replaces the process-wide application menu with the given template.
    SetApplicationMenu {
        window_id: WindowId,
        menu_items: Vec<MenuItemConfig>,
    },
    ShowOpenFileDialog {
        window_id: WindowId,
        title: String,
        filters: Vec<FileDialogFilter>,
    },
    ShowFolderPickerDialog {
        window_id: WindowId,
        /// Dialog action label, e.g. "Export".
        action_label: String,
    },
    /// Fire-and-forget: open the OS file browser at `path`.
    RevealPathInFileBrowser {
        path: PathBuf,
    },
    /// Fire-and-forget: open `url` in the default browser.
    OpenExternalUrl {
        url: String,
    },
    ToggleDevTools {
        window_id: WindowId,
    },
    ReloadWebContent {
        window_id: WindowId,
    },
    SetWebZoom {
        window_id: WindowId,
        factor: f64,
    },
    ToggleFullScreen {
        window_id: WindowId,
    },
    /// Deliver a named notification to the renderer.
    SendRendererNotification {
        window_id: WindowId,
        notification: RendererNotification,
    },
    QuitApplication,
}

// --- Trait for App Logic to Handle Events ---

// Implemented by the application logic layer. The platform run loop calls
// `handle_event` for each translated native event, then drains the command
// queue via `try_dequeue_command` until it is empty.
pub trait PlatformEventHandler: Send + 'static {
    fn handle_event(&mut self, event: AppEvent);

    // Attempts to dequeue a single `PlatformCommand` from the internal queue.
    fn try_dequeue_command(&mut self) -> Option<PlatformCommand>;

    // Called when the platform layer is about to exit its main loop.
    fn on_quit(&mut self) {}
}
