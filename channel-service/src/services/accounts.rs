//! Account registration. Credentials and sessions live in the gateway; the
//! core only owns the profile document and the handle/email uniqueness rule.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::domain::models::Account;
use crate::error::{ServiceError, ServiceResult};
use crate::store::EntityStore;

/// Input for account registration. Handles are stored lowercased.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub handle: String,
    pub display_name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub cover_image: Option<String>,
}

#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn EntityStore>,
}

impl AccountService {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn register(&self, new: NewAccount) -> ServiceResult<Account> {
        for (field, value) in [
            ("handle", &new.handle),
            ("displayName", &new.display_name),
            ("email", &new.email),
        ] {
            if value.trim().is_empty() {
                return Err(ServiceError::InvalidInput(format!("{field} is required")));
            }
        }

        let account = Account {
            id: Uuid::new_v4(),
            handle: new.handle.trim().to_lowercase(),
            display_name: new.display_name.trim().to_string(),
            email: new.email.trim().to_string(),
            avatar: new.avatar,
            cover_image: new.cover_image,
            created_at: Utc::now(),
        };

        match self.store.insert_account(account).await? {
            Some(account) => {
                info!(handle = %account.handle, "account registered");
                Ok(account)
            }
            None => Err(ServiceError::Conflict(
                "handle or email already exists".into(),
            )),
        }
    }
}
