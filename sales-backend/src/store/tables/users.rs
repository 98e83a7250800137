//! User lookups and the login check

use crate::error::{StoreError, StoreResult};
use crate::models::{Role, User};
use super::super::CrmData;

impl CrmData {
    /// Exact, plaintext match on username and password.
    pub fn authenticate(&self, username: &str, password: &str) -> StoreResult<&User> {
        self.users
            .iter()
            .find(|u| u.username == username && u.password == password)
            .ok_or(StoreError::InvalidCredentials)
    }

    pub fn user(&self, id: u64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Salespeople, for the manager's filter drop-down
    pub fn sales_users(&self) -> Vec<&User> {
        self.users.iter().filter(|u| u.role == Role::Sales).collect()
    }
}
