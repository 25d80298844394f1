//! Fixture-token support for tests.
//!
//! Production tokens come from the platform identity service; nothing in
//! this crate issues them. The builder here exists so this crate's tests,
//! and downstream crates enabling the `helpers` feature, can mint real
//! RS256-signed tokens to exercise verification end to end.

use crate::{
    crypto::RsaKeyMaterial,
    error::AuthError,
    time::now,
    token::{ClaimSet, TokenContext, TokenHeader, TokenUser},
};
use base64::Engine;

/// Assembles and signs a fixture token. The signing key must carry its
/// private half.
pub struct TokenBuilder<'a> {
    key: &'a RsaKeyMaterial,
    scopes: Vec<String>,
    expiration: Option<u64>,
    subject: Option<String>,
    user: Option<TokenUser>,
}

impl<'a> TokenBuilder<'a> {
    pub fn issued_by(key: &'a RsaKeyMaterial) -> Self {
        TokenBuilder {
            key,
            scopes: Vec::new(),
            expiration: None,
            subject: None,
            user: None,
        }
    }

    pub fn with_scope(mut self, scope: &str) -> Self {
        self.scopes.push(scope.to_string());
        self
    }

    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes.extend(scopes.into_iter().map(Into::into));
        self
    }

    /// Expire the token `seconds` from now.
    pub fn with_lifetime(self, seconds: u64) -> Self {
        let expiration = now() + seconds;
        self.with_expiration(expiration)
    }

    /// Expire the token at an absolute timestamp; a past timestamp mints
    /// an already-expired token.
    pub fn with_expiration(mut self, timestamp: u64) -> Self {
        self.expiration = Some(timestamp);
        self
    }

    pub fn for_subject(mut self, subject: &str) -> Self {
        self.subject = Some(subject.to_string());
        self
    }

    pub fn for_user(mut self, user: TokenUser) -> Self {
        self.user = Some(user);
        self
    }

    pub fn claims(&self) -> ClaimSet {
        ClaimSet {
            iat: Some(now()),
            exp: self.expiration,
            iss: Some("tessera-identity".to_string()),
            sub: self.subject.clone(),
            jti: None,
            aud: Vec::new(),
            context: TokenContext {
                scope: self.scopes.clone(),
                user: self.user.clone(),
            },
        }
    }

    /// Produce the signed, base64-encoded wire form.
    pub fn sign(self) -> Result<String, AuthError> {
        let header = TokenHeader {
            alg: self.key.jwt_algorithm().to_string(),
            typ: "JWT".to_string(),
        };
        let claims = self.claims();

        sign_token_parts(self.key, &header, &claims)
    }
}

/// Sign arbitrary header and claim structures. Exposed separately so
/// tests can mint deliberately malformed tokens (wrong `alg`, wrong
/// `typ`) that the builder refuses to describe.
pub fn sign_token_parts(
    key: &RsaKeyMaterial,
    header: &TokenHeader,
    claims: &ClaimSet,
) -> Result<String, AuthError> {
    let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
    let header_segment =
        engine.encode(serde_json::to_vec(header).map_err(|error| AuthError::Other(error.into()))?);
    let claims_segment =
        engine.encode(serde_json::to_vec(claims).map_err(|error| AuthError::Other(error.into()))?);

    let signed_data = format!("{header_segment}.{claims_segment}");
    let signature = key.sign(signed_data.as_bytes())?;

    Ok(format!("{signed_data}.{}", engine.encode(signature)))
}
