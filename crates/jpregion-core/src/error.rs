// crates/jpregion-core/src/error.rs
use thiserror::Error;

/// Errors raised at the definition-source seam.
///
/// The public lookup operations never surface these: the
/// [`DefinitionStore`](crate::store::DefinitionStore) logs them and serves an
/// empty [`DefinitionSet`](crate::model::DefinitionSet) instead.
#[derive(Debug, Error)]
pub enum RegionError {
    #[error("Definitions not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// The resource parsed fine but describes a different scope.
    #[error("Scope mismatch: requested {requested}, resource holds {found}")]
    ScopeMismatch { requested: String, found: String },
}

pub type Result<T> = std::result::Result<T, RegionError>;
