use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::ports::incoming::use_cases::{
    LoginAdminCommand, LoginAdminError, LoginAdminResult, LoginAdminUseCase,
};
use crate::auth::application::ports::outgoing::{PasswordVerifier, TokenProvider};
use crate::config::AdminCredentials;

pub struct LoginAdminService<V>
where
    V: PasswordVerifier,
{
    verifier: V,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
    admin: AdminCredentials,
}

impl<V> LoginAdminService<V>
where
    V: PasswordVerifier,
{
    pub fn new(
        verifier: V,
        tokens: Arc<dyn TokenProvider + Send + Sync>,
        admin: AdminCredentials,
    ) -> Self {
        Self {
            verifier,
            tokens,
            admin,
        }
    }
}

#[async_trait]
impl<V> LoginAdminUseCase for LoginAdminService<V>
where
    V: PasswordVerifier + Send + Sync,
{
    async fn execute(
        &self,
        command: LoginAdminCommand,
    ) -> Result<LoginAdminResult, LoginAdminError> {
        if command.username() != self.admin.username {
            tracing::info!("Rejected admin login for unknown user");
            return Err(LoginAdminError::InvalidCredentials);
        }

        let valid = self
            .verifier
            .verify_password(command.password(), &self.admin.password_hash)
            .await
            .map_err(|e| LoginAdminError::PasswordCheckFailed(e.to_string()))?;

        if !valid {
            tracing::info!("Rejected admin login: wrong password");
            return Err(LoginAdminError::InvalidCredentials);
        }

        let access_token = self
            .tokens
            .generate_access_token(command.username())
            .map_err(|e| LoginAdminError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginAdminResult {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.tokens.access_token_ttl(),
        })
    }
}
