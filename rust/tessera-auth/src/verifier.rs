use crate::{
    crypto::{JwtSignatureAlgorithm, RsaKeyMaterial},
    error::AuthError,
    token::{ClaimSet, Token},
};
use std::str::FromStr;

/// Signature algorithms accepted when verifying platform tokens. The
/// identity service signs exclusively with RS256; a token naming any
/// other algorithm is rejected outright.
pub const ALLOWED_SIGNATURE_ALGORITHMS: &[JwtSignatureAlgorithm] =
    &[JwtSignatureAlgorithm::RS256];

/// Verifies identity tokens against a fixed RS256 public key and extracts
/// the permission scopes they carry.
///
/// Constructed once with the identity service's public key and shared
/// freely; every operation is a pure function of the token argument. The
/// boolean and list queries fail closed: an unverifiable token is
/// indistinguishable from a token granting nothing.
///
/// ```rust
/// use tessera_auth::TokenVerifier;
///
/// let verifier = TokenVerifier::new("not a usable key");
/// assert!(!verifier.is_valid_jwt("not.a.token"));
/// assert!(verifier.permissions_from_token("not.a.token").is_empty());
/// ```
#[derive(Clone)]
pub struct TokenVerifier {
    key: Option<RsaKeyMaterial>,
}

impl TokenVerifier {
    /// Bind a verifier to a PEM-encoded RS256 public key.
    ///
    /// An unusable key is not an immediate error: decoding operations
    /// report [`AuthError::MissingVerificationKey`] per call and the
    /// boolean queries answer `false`.
    pub fn new(verification_key_pem: &str) -> Self {
        let key = match RsaKeyMaterial::from_public_key_pem(verification_key_pem) {
            Ok(key) => Some(key),
            Err(error) => {
                tracing::warn!("Token verification disabled: {error}");
                None
            }
        };

        TokenVerifier { key }
    }

    /// Decode a token, propagating every verification failure: malformed
    /// structure, unsupported algorithm, expiry, or a bad signature.
    pub fn decode_token(&self, token: &str) -> Result<ClaimSet, AuthError> {
        let key = self.key.as_ref().ok_or(AuthError::MissingVerificationKey)?;
        let token = Token::from_str(token)?;
        token.validate(key, ALLOWED_SIGNATURE_ALGORITHMS, None)?;

        Ok(token.into_claims())
    }

    /// Whether the token verifies against the bound key. Never fails:
    /// a missing token, unusable key, or any verification error all read
    /// as "not valid".
    pub fn is_valid_jwt(&self, token: &str) -> bool {
        self.decode_token(token).is_ok()
    }

    /// The permission scopes carried by a token. Never fails: a token
    /// that cannot be verified, or that carries no scope claim, yields an
    /// empty list.
    pub fn permissions_from_token(&self, token: &str) -> Vec<String> {
        match self.decode_token(token) {
            Ok(claims) => claims.context.scope,
            Err(error) => {
                tracing::debug!("Treating unverifiable token as scopeless: {error}");
                Vec::new()
            }
        }
    }
}
