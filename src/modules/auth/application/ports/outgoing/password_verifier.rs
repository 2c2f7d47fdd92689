use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordVerifyError {
    #[error("Stored password hash is malformed")]
    MalformedHash,

    #[error("Password verification failed")]
    VerifyFailed,

    #[error("Background task failed")]
    TaskFailed,
}

#[async_trait]
pub trait PasswordVerifier: Send + Sync {
    /// `Ok(false)` is a wrong password; `Err` means the check itself broke.
    async fn verify_password(&self, password: &str, hash: &str)
        -> Result<bool, PasswordVerifyError>;
}
