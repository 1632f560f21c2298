use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirectoryError {
    /// A unique constraint (user email or role name) was violated.
    #[error("{0} already exists")]
    Duplicate(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl DirectoryError {
    /// Maps unique violations to [`DirectoryError::Duplicate`] for `what`.
    pub(crate) fn from_insert(err: sqlx::Error, what: &str) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                DirectoryError::Duplicate(what.to_string())
            }
            _ => DirectoryError::Database(err),
        }
    }
}
