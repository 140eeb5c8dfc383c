use thiserror::Error;

/// Unified result type for the zonesnap crate.
pub type Result<T> = std::result::Result<T, SnapError>;

/// Errors surfaced by the snapping core.
#[derive(Debug, Error)]
pub enum SnapError {
    #[error("layout `{0}` not found")]
    LayoutNotFound(String),
    #[error("window placement failed: {0}")]
    Placement(String),
    #[error("layout encoding error: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
