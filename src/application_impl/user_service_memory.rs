use crate::application_port::{UserError, UserService};
use crate::domain_model::User;
use crate::logger::*;
use tokio::sync::RwLock;
use validator::Validate;

/// Keeps the directory in process memory. Writers hold the lock across the
/// uniqueness checks and the mutation.
#[derive(Debug, Default)]
pub struct InMemoryUserService {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserService {
    pub fn new() -> Self {
        Self::default()
    }
}

fn position_by_id(users: &[User], id: &str) -> Option<usize> {
    users.iter().position(|u| u.is_active() && u.id == id)
}

fn find_by_login<'a>(users: &'a [User], login: &str) -> Option<&'a User> {
    users.iter().find(|u| u.is_active() && u.login == login)
}

#[async_trait::async_trait]
impl UserService for InMemoryUserService {
    async fn list(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    async fn create(&self, candidate: User) -> Result<(), UserError> {
        candidate.validate()?;

        let mut users = self.users.write().await;
        if find_by_login(&users, &candidate.login).is_some() {
            debug!(login = %candidate.login, "create rejected: login taken");
            return Err(UserError::DuplicateLogin(candidate.login));
        }
        if position_by_id(&users, &candidate.id).is_some() {
            debug!(id = %candidate.id, "create rejected: id taken");
            return Err(UserError::DuplicateId(candidate.id));
        }

        info!(id = %candidate.id, login = %candidate.login, "user created");
        users.push(candidate);
        Ok(())
    }

    async fn get_by_id(&self, id: &str) -> Result<User, UserError> {
        let users = self.users.read().await;
        position_by_id(&users, id)
            .map(|index| users[index].clone())
            .ok_or_else(|| UserError::NotFound(id.to_owned()))
    }

    async fn update(&self, id: &str, replacement: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;
        let index = position_by_id(&users, id).ok_or_else(|| UserError::NotFound(id.to_owned()))?;

        replacement.validate()?;

        let current = &users[index];
        if current.login != replacement.login && find_by_login(&users, &replacement.login).is_some() {
            debug!(id, login = %replacement.login, "update rejected: login taken");
            return Err(UserError::DuplicateLogin(replacement.login));
        }
        if current.id != replacement.id && position_by_id(&users, &replacement.id).is_some() {
            debug!(id, new_id = %replacement.id, "update rejected: id taken");
            return Err(UserError::DuplicateId(replacement.id));
        }

        info!(id, new_id = %replacement.id, "user updated");
        users[index] = replacement.clone();
        Ok(replacement)
    }

    async fn delete(&self, id: &str) -> Result<(), UserError> {
        let mut users = self.users.write().await;
        let index = position_by_id(&users, id).ok_or_else(|| UserError::NotFound(id.to_owned()))?;

        users[index].is_deleted = true;
        info!(id, "user deleted");
        Ok(())
    }

    async fn autosuggest(&self, login_substring: &str, limit: usize) -> Vec<User> {
        self.users
            .read()
            .await
            .iter()
            .filter(|u| u.login.contains(login_substring))
            .take(limit)
            .cloned()
            .collect()
    }
}
