mod claims;

pub use claims::*;

use crate::{
    crypto::{JwtSignatureAlgorithm, RsaKeyMaterial},
    error::AuthError,
    time::now,
};
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct TokenHeader {
    pub alg: String,
    pub typ: String,
}

/// A signed identity token as transported on the wire: decoded header and
/// claims, plus the exact byte range the signature covers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    header: TokenHeader,
    claims: ClaimSet,
    signed_data: Vec<u8>,
    signature: Vec<u8>,
}

impl Token {
    pub fn new(header: TokenHeader, claims: ClaimSet, signed_data: Vec<u8>, signature: Vec<u8>) -> Self {
        Token {
            header,
            claims,
            signed_data,
            signature,
        }
    }

    /// Validate the token's algorithm, expiry, and signature, in that
    /// order. The header algorithm must appear in `allowed`; a token
    /// naming any other algorithm is rejected without touching its
    /// signature.
    pub fn validate(
        &self,
        key: &RsaKeyMaterial,
        allowed: &[JwtSignatureAlgorithm],
        now_time: Option<u64>,
    ) -> Result<(), AuthError> {
        if self.header.typ != "JWT" {
            return Err(AuthError::MalformedToken(format!(
                "Unexpected token type: {:?}",
                self.header.typ
            )));
        }

        let algorithm = JwtSignatureAlgorithm::from_str(&self.header.alg)
            .map_err(|_| AuthError::UnsupportedAlgorithm(self.header.alg.clone()))?;

        if !allowed.contains(&algorithm) {
            return Err(AuthError::UnsupportedAlgorithm(self.header.alg.clone()));
        }

        if self.is_expired(now_time) {
            return Err(AuthError::Expired);
        }

        self.check_signature(key)
    }

    /// Validate that the signed data was signed by the holder of `key`.
    pub fn check_signature(&self, key: &RsaKeyMaterial) -> Result<(), AuthError> {
        key.verify(&self.signed_data, &self.signature)
    }

    /// Returns true if the token is past its expiration date.
    pub fn is_expired(&self, now_time: Option<u64>) -> bool {
        if let Some(exp) = self.claims.exp {
            exp < now_time.unwrap_or_else(now)
        } else {
            false
        }
    }

    /// Produce the base64-encoded wire form of the token, suitable for
    /// transferring in a header field.
    pub fn encode(&self) -> Result<String, AuthError> {
        let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
        let header = engine.encode(
            serde_json::to_vec(&self.header).map_err(|error| AuthError::Other(error.into()))?,
        );
        let claims = engine.encode(
            serde_json::to_vec(&self.claims).map_err(|error| AuthError::Other(error.into()))?,
        );
        let signature = engine.encode(self.signature.as_slice());

        Ok(format!("{header}.{claims}.{signature}"))
    }

    pub fn algorithm(&self) -> &str {
        &self.header.alg
    }

    pub fn claims(&self) -> &ClaimSet {
        &self.claims
    }

    pub fn into_claims(self) -> ClaimSet {
        self.claims
    }

    /// Raw bytes of signed data for this token
    pub fn signed_data(&self) -> &[u8] {
        &self.signed_data
    }

    pub fn signature(&self) -> &[u8] {
        &self.signature
    }
}

impl<'a> TryFrom<&'a str> for Token {
    type Error = AuthError;

    fn try_from(token: &str) -> Result<Self, Self::Error> {
        Token::from_str(token)
    }
}

/// Deserialize an encoded token string into its decoded parts.
impl FromStr for Token {
    type Err = AuthError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut segments = token.split('.');

        let header_segment = segments
            .next()
            .ok_or_else(|| AuthError::MalformedToken("Missing header segment".to_string()))?;
        let claims_segment = segments
            .next()
            .ok_or_else(|| AuthError::MalformedToken("Missing claims segment".to_string()))?;
        let signature_segment = segments
            .next()
            .ok_or_else(|| AuthError::MalformedToken("Missing signature segment".to_string()))?;

        if segments.next().is_some() {
            return Err(AuthError::MalformedToken(
                "Too many token segments".to_string(),
            ));
        }

        // The signature covers the two encoded segments verbatim
        let signed_data = format!("{header_segment}.{claims_segment}");

        let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;

        let header: TokenHeader = engine
            .decode(header_segment)
            .map_err(|error| AuthError::MalformedToken(format!("Header base64: {error}")))
            .and_then(|bytes| {
                serde_json::from_slice(&bytes)
                    .map_err(|error| AuthError::MalformedToken(format!("Header JSON: {error}")))
            })?;

        let claims: ClaimSet = engine
            .decode(claims_segment)
            .map_err(|error| AuthError::MalformedToken(format!("Claims base64: {error}")))
            .and_then(|bytes| {
                serde_json::from_slice(&bytes)
                    .map_err(|error| AuthError::MalformedToken(format!("Claims JSON: {error}")))
            })?;

        let signature = engine
            .decode(signature_segment)
            .map_err(|error| AuthError::MalformedToken(format!("Signature base64: {error}")))?;

        Ok(Token::new(
            header,
            claims,
            signed_data.as_bytes().into(),
            signature,
        ))
    }
}
