use crate::domain_model::User;

#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("User with login {0:?} already exists")]
    DuplicateLogin(String),
    #[error("User with id {0:?} already exists")]
    DuplicateId(String),
    #[error("User {0:?} not found")]
    NotFound(String),
}

impl From<validator::ValidationErrors> for UserError {
    fn from(errors: validator::ValidationErrors) -> Self {
        UserError::Validation(errors.to_string())
    }
}

/// The user directory. Lookups by id or login only see active users;
/// `list` and `autosuggest` scan every record, soft-deleted ones included.
#[async_trait::async_trait]
pub trait UserService: Send + Sync {
    async fn list(&self) -> Vec<User>;

    /// Rejects the candidate on the first failed check: schema, then login, then id.
    async fn create(&self, candidate: User) -> Result<(), UserError>;

    async fn get_by_id(&self, id: &str) -> Result<User, UserError>;

    /// Replaces every field of the active user `id` and returns the stored result.
    async fn update(&self, id: &str, replacement: User) -> Result<User, UserError>;

    async fn delete(&self, id: &str) -> Result<(), UserError>;

    async fn autosuggest(&self, login_substring: &str, limit: usize) -> Vec<User>;
}
