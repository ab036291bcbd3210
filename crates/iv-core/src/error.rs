//! Error types for the core data model.

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when manipulating the skill registry.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The named attribute does not exist in this catalog.
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    /// The named skill does not exist in this catalog.
    #[error("unknown skill: {0}")]
    UnknownSkill(String),

    /// Two attributes or two skills in the catalog share a name.
    #[error("duplicate catalog name: \"{0}\"")]
    DuplicateCatalogName(String),
}
