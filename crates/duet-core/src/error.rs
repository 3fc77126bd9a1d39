use thiserror::Error;

/// Convenience alias so the launcher can write `Result<T>` instead of
/// `Result<T, LaunchError>`.
pub type Result<T> = std::result::Result<T, LaunchError>;

/// Failure to start a child process.
///
/// Wraps whatever the OS reported: executable not found, working
/// directory missing, permission denied. Nothing catches this; it
/// propagates to the top level and ends the launcher.
#[derive(Debug, Error)]
#[error("failed to start {name}: {source}")]
pub struct LaunchError {
    /// Human-readable name of the process that failed to start.
    pub name: String,
    #[source]
    pub source: std::io::Error,
}
