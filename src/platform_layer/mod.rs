pub mod app;
pub(crate) mod command_executor;
pub(crate) mod controls;
pub mod error;
pub mod types;
pub(crate) mod window_common;

pub use app::PlatformInterface;
pub use error::{PlatformError, Result as PlatformResult};
pub use types::{
    AppEvent, FileDialogFilter, MenuAction, MenuItemConfig, MenuRole, Platform, PlatformCommand,
    PlatformEventHandler, WindowConfig, WindowId,
};
