/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.persistence")]
    Persistence,
    #[error("repository.serialization")]
    Serialization,
}

impl RepositoryError {
    pub fn persistence() -> Self {
        RepositoryError::Persistence
    }
    pub fn serialization() -> Self {
        RepositoryError::Serialization
    }
}
