//! In-process [`Directory`] used by tests.
//!
//! Seeded with the same built-in roles as the database migrations.

use async_trait::async_trait;
use rolegate_models::{
    ADMIN_ROLE, DEFAULT_ROLE, MODERATOR_ROLE, NewUser, Role, User, UserAccount, UserStatus,
};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::directory::Directory;
use crate::error::DirectoryError;

#[derive(Debug, Default)]
struct Store {
    accounts: Vec<UserAccount>,
    roles: Vec<Role>,
}

#[derive(Debug)]
pub struct MemoryDirectory {
    store: RwLock<Store>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        let roles = [DEFAULT_ROLE, ADMIN_ROLE, MODERATOR_ROLE]
            .into_iter()
            .map(|name| Role {
                id: Uuid::new_v4(),
                name: name.to_string(),
            })
            .collect();

        Self {
            store: RwLock::new(Store {
                accounts: Vec::new(),
                roles,
            }),
        }
    }

    pub async fn user_count(&self) -> usize {
        self.store.read().await.accounts.len()
    }
}

impl Default for MemoryDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Directory for MemoryDirectory {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserAccount>, DirectoryError> {
        let store = self.store.read().await;
        Ok(store
            .accounts
            .iter()
            .find(|a| a.user.email == email)
            .cloned())
    }

    async fn find_users_by_status(&self, status: UserStatus) -> Result<Vec<User>, DirectoryError> {
        let store = self.store.read().await;
        let mut users: Vec<User> = store
            .accounts
            .iter()
            .filter(|a| a.user.status == status)
            .map(|a| a.user.clone())
            .collect();
        users.sort_by(|a, b| a.email.cmp(&b.email));
        Ok(users)
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User, DirectoryError> {
        let mut store = self.store.write().await;
        if store.accounts.iter().any(|a| a.user.email == new_user.email) {
            return Err(DirectoryError::Duplicate(new_user.email));
        }

        let mut roles = new_user.roles;
        roles.sort_by(|a, b| a.name.cmp(&b.name));
        roles.dedup_by(|a, b| a.id == b.id);

        let user = User {
            id: Uuid::new_v4(),
            full_name: new_user.full_name,
            cell_number: new_user.cell_number,
            email: new_user.email,
            status: new_user.status,
            roles,
        };

        store.accounts.push(UserAccount {
            user: user.clone(),
            password_hash: new_user.password_hash,
        });
        Ok(user)
    }

    async fn update_user_status(
        &self,
        email: &str,
        status: UserStatus,
    ) -> Result<bool, DirectoryError> {
        let mut store = self.store.write().await;
        match store.accounts.iter_mut().find(|a| a.user.email == email) {
            Some(account) => {
                account.user.status = status;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_role_by_name(&self, name: &str) -> Result<Option<Role>, DirectoryError> {
        let store = self.store.read().await;
        Ok(store.roles.iter().find(|r| r.name == name).cloned())
    }

    async fn create_role(&self, name: &str) -> Result<Role, DirectoryError> {
        let mut store = self.store.write().await;
        if store.roles.iter().any(|r| r.name == name) {
            return Err(DirectoryError::Duplicate(name.to_string()));
        }

        let role = Role {
            id: Uuid::new_v4(),
            name: name.to_string(),
        };
        store.roles.push(role.clone());
        Ok(role)
    }

    async fn list_roles(&self) -> Result<Vec<Role>, DirectoryError> {
        let store = self.store.read().await;
        let mut roles = store.roles.clone();
        roles.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(roles)
    }
}
