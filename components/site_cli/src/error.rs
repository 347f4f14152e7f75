//! Error types for the site shell

use event_loop::TaskError;
use std::fmt;
use theme_store::StoreError;

/// Shell-specific errors
#[derive(Debug)]
pub enum SiteError {
    /// Preference storage error
    Store(StoreError),

    /// A scheduled benchmark task failed
    Task(TaskError),

    /// Interactive shell error
    Shell(String),
}

impl fmt::Display for SiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteError::Store(e) => write!(f, "preference error: {}", e),
            SiteError::Task(e) => write!(f, "benchmark error: {}", e),
            SiteError::Shell(s) => write!(f, "shell error: {}", s),
        }
    }
}

impl std::error::Error for SiteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SiteError::Store(e) => Some(e),
            SiteError::Task(e) => Some(e),
            SiteError::Shell(_) => None,
        }
    }
}

impl From<StoreError> for SiteError {
    fn from(err: StoreError) -> Self {
        SiteError::Store(err)
    }
}

impl From<TaskError> for SiteError {
    fn from(err: TaskError) -> Self {
        SiteError::Task(err)
    }
}

/// Result type for shell operations
pub type SiteResult<T> = Result<T, SiteError>;
