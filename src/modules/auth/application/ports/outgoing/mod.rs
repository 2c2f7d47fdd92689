pub mod password_verifier;
pub mod token_provider;

pub use password_verifier::{PasswordVerifier, PasswordVerifyError};
pub use token_provider::{AccessClaims, TokenError, TokenProvider};
