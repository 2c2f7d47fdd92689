use argon2::{
    password_hash::{Error as PasswordHashError, PasswordHash, PasswordVerifier as _},
    Argon2,
};
use async_trait::async_trait;

use crate::auth::application::ports::outgoing::password_verifier::{
    PasswordVerifier, PasswordVerifyError,
};

/// Checks passwords against Argon2 PHC strings. The parameters are read from
/// the hash itself, so any cost settings used by `hash-password` verify.
#[derive(Clone, Default)]
pub struct Argon2PasswordVerifier;

impl Argon2PasswordVerifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PasswordVerifier for Argon2PasswordVerifier {
    async fn verify_password(
        &self,
        password: &str,
        hash: &str,
    ) -> Result<bool, PasswordVerifyError> {
        let password = password.to_string();
        let hash = hash.to_string();

        // argon2 is deliberately slow; keep it off the async workers
        tokio::task::spawn_blocking(move || {
            let parsed_hash =
                PasswordHash::new(&hash).map_err(|_| PasswordVerifyError::MalformedHash)?;

            match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
                Ok(_) => Ok(true),
                Err(PasswordHashError::Password) => Ok(false),
                Err(_) => Err(PasswordVerifyError::VerifyFailed),
            }
        })
        .await
        .map_err(|_| PasswordVerifyError::TaskFailed)?
    }
}
