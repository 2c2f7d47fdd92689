use async_trait::async_trait;
use serde::Serialize;

use crate::shared::validation::ValidationError;

//
// ──────────────────────────────────────────────────────────
// Command / result
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct LoginAdminCommand {
    username: String,
    password: String,
}

impl LoginAdminCommand {
    pub fn new(username: String, password: String) -> Result<Self, ValidationError> {
        let username = username.trim().to_string();
        if username.is_empty() {
            return Err(ValidationError::Required("username"));
        }

        // passwords are compared byte for byte, never trimmed
        if password.is_empty() {
            return Err(ValidationError::Required("password"));
        }

        Ok(Self { username, password })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginAdminResult {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginAdminError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordCheckFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait LoginAdminUseCase: Send + Sync {
    async fn execute(&self, command: LoginAdminCommand)
        -> Result<LoginAdminResult, LoginAdminError>;
}
