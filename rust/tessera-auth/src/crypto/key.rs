use crate::{crypto::JwtSignatureAlgorithm, error::AuthError};
use anyhow::anyhow;
use rsa::{
    pkcs1::DecodeRsaPublicKey, pkcs8::DecodePublicKey, Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey,
};
use sha2::{Digest, Sha256};

/// RS256 key material: an RSA public key and, optionally, the private
/// half. Verification only ever needs the public key; the private half
/// exists so tests and the `helpers` token builder can produce real
/// signatures.
#[derive(Clone)]
pub struct RsaKeyMaterial(pub RsaPublicKey, pub Option<RsaPrivateKey>);

impl RsaKeyMaterial {
    /// Loads a public verification key from PEM, accepting either an SPKI
    /// (`BEGIN PUBLIC KEY`) or PKCS#1 (`BEGIN RSA PUBLIC KEY`) encoding.
    pub fn from_public_key_pem(pem: &str) -> Result<Self, AuthError> {
        let public_key = RsaPublicKey::from_public_key_pem(pem)
            .or_else(|_| RsaPublicKey::from_pkcs1_pem(pem))
            .map_err(|error| AuthError::MalformedKey(error.to_string()))?;

        Ok(RsaKeyMaterial(public_key, None))
    }

    pub fn jwt_algorithm(&self) -> JwtSignatureAlgorithm {
        JwtSignatureAlgorithm::RS256
    }

    /// Sign a payload with the private half, SHA-256 then PKCS#1 v1.5.
    pub fn sign(&self, payload: &[u8]) -> Result<Vec<u8>, AuthError> {
        let mut hasher = Sha256::new();
        hasher.update(payload);
        let hashed = hasher.finalize();

        match &self.1 {
            Some(private_key) => {
                let padding = Pkcs1v15Sign::new::<Sha256>();
                let signature = private_key
                    .sign(padding, hashed.as_ref())
                    .map_err(|error| AuthError::Other(anyhow!(error)))?;
                Ok(signature)
            }
            None => Err(AuthError::Other(anyhow!("No private key; cannot sign data"))),
        }
    }

    /// Verify the alleged signature of a payload against the public key.
    pub fn verify(&self, payload: &[u8], signature: &[u8]) -> Result<(), AuthError> {
        let mut hasher = Sha256::new();
        hasher.update(payload);
        let hashed = hasher.finalize();
        let padding = Pkcs1v15Sign::new::<Sha256>();

        self.0
            .verify(padding, hashed.as_ref(), signature)
            .map_err(|_| AuthError::InvalidSignature)
    }
}
