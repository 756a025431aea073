// Represents errors that can occur within the platform abstraction layer.
//
// This enum centralizes error handling for operations related to the native
// toolkit, such as window or webview creation failures, invalid operations,
// or underlying OS errors. Shell-integration failures are deliberately kept
// as a named variant even though they are only ever logged: the
// fire-and-forget contract swallows them, but they should not vanish from
// the taxonomy.
#[derive(Debug)]
pub enum PlatformError {
    /// Failure during the initialization of the platform layer.
    InitializationFailed(String),
    /// Failure to create the native window.
    WindowCreationFailed(tao::error::OsError),
    /// Failure to create or drive the embedded webview.
    WebView(wry::Error),
    /// Failure to build or install the application menu.
    Menu(muda::Error),
    /// An invalid `WindowId` was used, or no window is live.
    InvalidHandle(String),
    /// A requested operation could not be completed.
    OperationFailed(String),
    /// A fire-and-forget shell call (reveal path, open URL) failed.
    ShellIntegration(String),
}

impl From<tao::error::OsError> for PlatformError {
    fn from(err: tao::error::OsError) -> Self {
        PlatformError::WindowCreationFailed(err)
    }
}

impl From<wry::Error> for PlatformError {
    fn from(err: wry::Error) -> Self {
        PlatformError::WebView(err)
    }
}

impl From<muda::Error> for PlatformError {
    fn from(err: muda::Error) -> Self {
        PlatformError::Menu(err)
    }
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlatformError::InitializationFailed(s) => write!(f, "Initialization Failed: {}", s),
            PlatformError::WindowCreationFailed(e) => write!(f, "Window Creation Failed: {}", e),
            PlatformError::WebView(e) => write!(f, "WebView Error: {}", e),
            PlatformError::Menu(e) => write!(f, "Menu Error: {}", e),
            PlatformError::InvalidHandle(s) => write!(f, "Invalid Handle: {}", s),
            PlatformError::OperationFailed(s) => write!(f, "Operation Failed: {}", s),
            PlatformError::ShellIntegration(s) => write!(f, "Shell Integration Failed: {}", s),
        }
    }
}

impl std::error::Error for PlatformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlatformError::WindowCreationFailed(e) => Some(e),
            PlatformError::WebView(e) => Some(e),
            PlatformError::Menu(e) => Some(e),
            _ => None,
        }
    }
}

/// A specialized `Result` type for platform layer operations.
pub type Result<T> = std::result::Result<T, PlatformError>;
