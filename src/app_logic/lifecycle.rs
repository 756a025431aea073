/*
 * Process-wide lifecycle phases of the shell. `ShellAppLogic` owns the
 * current phase and drives the transitions from platform events:
 *
 *   Starting -> [DevToolingPending] -> Ready -> WindowActive
 *   WindowActive -> AllWindowsClosed (macOS idle) or Terminating
 *   AllWindowsClosed -> WindowActive (reactivation recreates the window)
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    Starting,
    /// Dev mode only: the developer-tooling install is being attempted.
    DevToolingPending,
    Ready,
    WindowActive,
    /// Stable idle state on macOS after the sole window closes.
    AllWindowsClosed,
    Terminating,
}

impl std::fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LifecyclePhase::Starting => "Starting",
            LifecyclePhase::DevToolingPending => "DevToolingPending",
            LifecyclePhase::Ready => "Ready",
            LifecyclePhase::WindowActive => "WindowActive",
            LifecyclePhase::AllWindowsClosed => "AllWindowsClosed",
            LifecyclePhase::Terminating => "Terminating",
        };
        f.write_str(name)
    }
}
