/*
 * Wire format of the renderer channel. Both directions carry named,
 * fire-and-forget messages encoded as a JSON envelope:
 *
 *   { "channel": "<name>", "payload": <value | null> }
 *
 * Renderer-to-host requests arrive through the webview's IPC bridge and are
 * parsed here into `RendererRequest`. Host-to-renderer notifications are
 * encoded as a script evaluation that invokes `window.__host_dispatch` inside
 * the renderer; the bootstrap script below installs both halves of the bridge.
 */

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// Renderer-to-host channel names.
pub const CHANNEL_CHOOSE_APP_DIR: &str = "choose_app_dir";
pub const CHANNEL_VIEW_APP_DIR: &str = "view_app_dir";
pub const CHANNEL_UPDATE_FILE: &str = "update-file";

// Host-to-renderer channel names.
pub const CHANNEL_APP_DIR_SELECTED: &str = "app_dir_selected";
pub const CHANNEL_NEW_FILE: &str = "new-file";

/// Installed into every renderer page before any of its own scripts run.
/// `window.host.send` posts the request envelope; `window.__host_dispatch`
/// fans host notifications out as DOM events the renderer can listen for.
pub const RENDERER_BOOTSTRAP_JS: &str = r#"
(function () {
  if (window.host) { return; }
  window.host = {
    send: function (channel, payload) {
      window.ipc.postMessage(JSON.stringify({
        channel: channel,
        payload: payload === undefined ? null : payload
      }));
    }
  };
  window.__host_dispatch = function (channel, payload) {
    window.dispatchEvent(new CustomEvent('host-message', {
      detail: { channel: channel, payload: payload }
    }));
  };
})();
"#;

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    channel: String,
    #[serde(default)]
    payload: serde_json::Value,
}

/// A named request the renderer may issue. Fire-and-forget: there is no reply
/// value; effects are delivered later as `RendererNotification`s, or not at
/// all when the user cancels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RendererRequest {
    /// Open the directory picker for the export target.
    ChooseAppDir,
    /// Reveal the given path in the OS file browser.
    ViewAppDir { path: PathBuf },
    /// Open the file dialog to pick a new document.
    UpdateFile,
}

impl RendererRequest {
    /// Parses a raw IPC message body. Unknown channels and malformed payloads
    /// are reported as errors; the caller logs and drops them.
    pub fn parse(raw: &str) -> Result<Self, IpcError> {
        let envelope: Envelope = serde_json::from_str(raw).map_err(IpcError::MalformedMessage)?;
        match envelope.channel.as_str() {
            CHANNEL_CHOOSE_APP_DIR => Ok(RendererRequest::ChooseAppDir),
            CHANNEL_VIEW_APP_DIR => match envelope.payload.as_str() {
                Some(path) => Ok(RendererRequest::ViewAppDir {
                    path: PathBuf::from(path),
                }),
                None => Err(IpcError::MissingPayload(CHANNEL_VIEW_APP_DIR)),
            },
            CHANNEL_UPDATE_FILE => Ok(RendererRequest::UpdateFile),
            _ => Err(IpcError::UnknownChannel(envelope.channel)),
        }
    }
}

/// A named notification pushed from the host to the renderer. Each carries a
/// filesystem path produced by a completed dialog interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RendererNotification {
    AppDirSelected(PathBuf),
    NewFile(PathBuf),
}

impl RendererNotification {
    pub fn channel(&self) -> &'static str {
        match self {
            RendererNotification::AppDirSelected(_) => CHANNEL_APP_DIR_SELECTED,
            RendererNotification::NewFile(_) => CHANNEL_NEW_FILE,
        }
    }

    pub fn payload(&self) -> serde_json::Value {
        match self {
            RendererNotification::AppDirSelected(path) | RendererNotification::NewFile(path) => {
                serde_json::Value::String(path.to_string_lossy().into_owned())
            }
        }
    }

    /// Renders the script evaluated in the renderer to deliver this
    /// notification. Channel and payload are JSON-encoded, so arbitrary path
    /// contents cannot break out of the script.
    pub fn to_dispatch_script(&self) -> String {
        let channel = serde_json::Value::String(self.channel().to_string());
        format!("window.__host_dispatch({}, {});", channel, self.payload())
    }
}

#[derive(Debug)]
pub enum IpcError {
    MalformedMessage(serde_json::Error),
    UnknownChannel(String),
    MissingPayload(&'static str),
}

impl std::fmt::Display for IpcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IpcError::MalformedMessage(e) => write!(f, "Malformed IPC message: {}", e),
            IpcError::UnknownChannel(c) => write!(f, "Unknown IPC channel: {}", c),
            IpcError::MissingPayload(c) => {
                write!(f, "Missing payload for IPC channel: {}", c)
            }
        }
    }
}

impl std::error::Error for IpcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IpcError::MalformedMessage(e) => Some(e),
            _ => None,
        }
    }
}
