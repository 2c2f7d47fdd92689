use std::sync::Arc;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::TokenProvider;

pub const TEST_ADMIN: &str = "admin";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret_key: "test_secret_key_for_testing_only_0123456789".to_string(),
        issuer: "portfolio-cms".to_string(),
        access_token_expiry: 3600,
    }
}

pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(JwtTokenService::new(test_jwt_config()))
}

/// `Authorization` header value for the test admin, signed with
/// [`test_jwt_config`].
pub fn admin_bearer() -> String {
    let token = JwtTokenService::new(test_jwt_config())
        .generate_access_token(TEST_ADMIN)
        .expect("test token");
    format!("Bearer {token}")
}
