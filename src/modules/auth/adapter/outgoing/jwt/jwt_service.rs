use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use std::fmt;

use crate::auth::application::ports::outgoing::token_provider::{
    AccessClaims, TokenError, TokenProvider,
};

use super::jwt_config::JwtConfig;

const ACCESS: &str = "access";

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_access_token(&self, subject: &str) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.config.access_token_expiry);

        let claims = AccessClaims {
            sub: subject.to_string(),
            iss: self.config.issuer.clone(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            token_type: ACCESS.to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }

    fn access_token_ttl(&self) -> i64 {
        self.config.access_token_expiry
    }

    fn verify_token(&self, token: &str) -> Result<AccessClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;
        validation.set_issuer(&[self.config.issuer.as_str()]);

        let decoded =
            decode::<AccessClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: Token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Token verification failed: Token not yet valid");
                        TokenError::TokenNotYetValid
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: Invalid token signature detected");
                        TokenError::InvalidSignature
                    }
                    ErrorKind::InvalidIssuer => {
                        tracing::warn!("Token verification failed: Unexpected issuer");
                        TokenError::InvalidIssuer
                    }
                    _ => {
                        tracing::warn!("Token verification failed: Malformed token");
                        TokenError::MalformedToken
                    }
                }
            })?;

        if decoded.claims.token_type != ACCESS {
            return Err(TokenError::InvalidTokenType(ACCESS.to_string()));
        }

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test_secret_key_for_testing_purposes_only";

    fn service_with(issuer: &str, secret: &str) -> JwtTokenService {
        JwtTokenService::new(JwtConfig {
            secret_key: secret.to_string(),
            issuer: issuer.to_string(),
            access_token_expiry: 3600,
        })
    }

    fn encode_claims(claims: &AccessClaims) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_generate_and_verify_access_token() {
        let service = service_with("portfolio-cms", SECRET);

        let token = service.generate_access_token("admin").unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.iss, "portfolio-cms");
        assert_eq!(claims.token_type, "access");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_wrong_secret_is_invalid_signature() {
        let issuer = service_with("portfolio-cms", SECRET);
        let verifier = service_with("portfolio-cms", "another_secret_key_that_is_long_enough");

        let token = issuer.generate_access_token("admin").unwrap();

        assert_eq!(
            verifier.verify_token(&token).unwrap_err(),
            TokenError::InvalidSignature
        );
    }

    #[test]
    fn test_wrong_issuer_rejected() {
        let token = service_with("someone-else", SECRET)
            .generate_access_token("admin")
            .unwrap();

        assert_eq!(
            service_with("portfolio-cms", SECRET)
                .verify_token(&token)
                .unwrap_err(),
            TokenError::InvalidIssuer
        );
    }

    #[test]
    fn test_expired_token() {
        let now = Utc::now();
        let token = encode_claims(&AccessClaims {
            sub: "admin".to_string(),
            iss: "portfolio-cms".to_string(),
            exp: (now - Duration::seconds(120)).timestamp(),
            iat: (now - Duration::seconds(3720)).timestamp(),
            nbf: (now - Duration::seconds(3720)).timestamp(),
            token_type: "access".to_string(),
        });

        assert_eq!(
            service_with("portfolio-cms", SECRET)
                .verify_token(&token)
                .unwrap_err(),
            TokenError::TokenExpired
        );
    }

    #[test]
    fn test_non_access_token_rejected() {
        let now = Utc::now();
        let token = encode_claims(&AccessClaims {
            sub: "admin".to_string(),
            iss: "portfolio-cms".to_string(),
            exp: (now + Duration::seconds(600)).timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            token_type: "refresh".to_string(),
        });

        assert_eq!(
            service_with("portfolio-cms", SECRET)
                .verify_token(&token)
                .unwrap_err(),
            TokenError::InvalidTokenType("access".to_string())
        );
    }

    #[test]
    fn test_garbage_is_malformed() {
        assert_eq!(
            service_with("portfolio-cms", SECRET)
                .verify_token("invalid.jwt.token")
                .unwrap_err(),
            TokenError::MalformedToken
        );
    }
}
