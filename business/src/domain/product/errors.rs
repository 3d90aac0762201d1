#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.not_found")]
    NotFound,
    #[error("product.empty_query")]
    EmptyQuery,
    #[error("product.duplicate_id")]
    DuplicateId(i64),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
