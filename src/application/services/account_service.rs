//! Account registration and login service.

use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password::{hash_password, verify_password};

/// Service for registering accounts and checking login attempts.
///
/// Passwords are hashed with argon2id (per-call random salt) before they
/// reach the repository; the plaintext never leaves this service and is
/// never logged.
pub struct AccountService {
    users: Arc<dyn UserRepository>,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Registers a new account.
    ///
    /// Username uniqueness is left to the storage constraint rather than a
    /// racy lookup-then-insert.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateUsername`] if the username is taken.
    /// Returns [`AppError::Validation`] for empty credentials.
    pub async fn register(&self, username: &str, password: &str) -> Result<User, AppError> {
        if username.trim().is_empty() {
            return Err(AppError::bad_request("username must not be empty"));
        }
        if password.is_empty() {
            return Err(AppError::bad_request("password must not be empty"));
        }

        let password_hash = hash_password(password)?;

        let user = self
            .users
            .insert(NewUser {
                username: username.to_string(),
                password_hash,
            })
            .await?;

        tracing::info!(username = %user.username, user_id = user.id, "account registered");

        Ok(user)
    }

    /// Checks a login attempt.
    ///
    /// Unknown username and wrong password both surface as
    /// [`AppError::InvalidCredentials`] so the boundary does not reveal which
    /// one failed; the lookup miss only short-circuits internally.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidCredentials`] when authentication fails.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, AppError> {
        let Some(user) = self.users.find_by_username(username).await? else {
            return Err(AppError::InvalidCredentials);
        };

        if !verify_password(password, &user.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUserRepository;
    use chrono::Utc;

    fn stored_user(id: i64, username: &str, password_hash: &str) -> User {
        User {
            id,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_register_stores_hash_not_plaintext() {
        let mut mock_users = MockUserRepository::new();

        mock_users
            .expect_insert()
            .withf(|new_user| {
                new_user.username == "alice"
                    && new_user.password_hash != "pw123"
                    && new_user.password_hash.starts_with("$argon2")
            })
            .times(1)
            .returning(|new_user| Ok(stored_user(1, &new_user.username, &new_user.password_hash)));

        let service = AccountService::new(Arc::new(mock_users));

        let user = service.register("alice", "pw123").await.unwrap();
        assert_eq!(user.username, "alice");
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let mut mock_users = MockUserRepository::new();

        mock_users
            .expect_insert()
            .times(1)
            .returning(|_| Err(AppError::DuplicateUsername));

        let service = AccountService::new(Arc::new(mock_users));

        let result = service.register("alice", "pw123").await;
        assert!(matches!(result, Err(AppError::DuplicateUsername)));
    }

    #[tokio::test]
    async fn test_register_rejects_empty_credentials() {
        let mut mock_users = MockUserRepository::new();
        mock_users.expect_insert().times(0);

        let service = AccountService::new(Arc::new(mock_users));

        assert!(matches!(
            service.register("  ", "pw123").await,
            Err(AppError::Validation { .. })
        ));
        assert!(matches!(
            service.register("alice", "").await,
            Err(AppError::Validation { .. })
        ));
    }

    #[tokio::test]
    async fn test_authenticate_success_after_register() {
        let hash = hash_password("pw123").unwrap();

        let mut mock_users = MockUserRepository::new();
        mock_users
            .expect_find_by_username()
            .withf(|username| username == "alice")
            .times(1)
            .returning(move |_| Ok(Some(stored_user(1, "alice", &hash))));

        let service = AccountService::new(Arc::new(mock_users));

        let user = service.authenticate("alice", "pw123").await.unwrap();
        assert_eq!(user.id, 1);
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password() {
        let hash = hash_password("pw123").unwrap();

        let mut mock_users = MockUserRepository::new();
        mock_users
            .expect_find_by_username()
            .times(1)
            .returning(move |_| Ok(Some(stored_user(1, "alice", &hash))));

        let service = AccountService::new(Arc::new(mock_users));

        let result = service.authenticate("alice", "wrong").await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_unknown_user_and_wrong_password_are_indistinguishable() {
        let hash = hash_password("pw123").unwrap();

        let mut mock_users = MockUserRepository::new();
        mock_users
            .expect_find_by_username()
            .withf(|username| username == "nobody")
            .returning(|_| Ok(None));
        mock_users
            .expect_find_by_username()
            .withf(|username| username == "alice")
            .returning(move |_| Ok(Some(stored_user(1, "alice", &hash))));

        let service = AccountService::new(Arc::new(mock_users));

        let unknown = service.authenticate("nobody", "pw123").await.unwrap_err();
        let wrong = service.authenticate("alice", "wrong").await.unwrap_err();

        // Both failure paths return the identical error kind at the boundary.
        assert_eq!(unknown.code(), wrong.code());
        assert_eq!(unknown.to_string(), wrong.to_string());
    }
}
