use crate::crypto::RsaKeyMaterial;
use rsa::{pkcs8::DecodePrivateKey, RsaPrivateKey, RsaPublicKey};

pub const ISSUER_PRIVATE_PEM: &str = include_str!("./issuer_private.pem");
pub const ISSUER_PUBLIC_PEM: &str = include_str!("./issuer_public.pem");
pub const ROGUE_PRIVATE_PEM: &str = include_str!("./rogue_private.pem");

/// Key material for the two parties every verification test needs: the
/// platform identity service and a rogue signer whose tokens must never
/// verify.
pub struct Identities {
    pub issuer_key: RsaKeyMaterial,
    pub issuer_public_pem: &'static str,
    pub rogue_key: RsaKeyMaterial,
}

impl Identities {
    pub fn new() -> Self {
        Identities {
            issuer_key: signing_key(ISSUER_PRIVATE_PEM),
            issuer_public_pem: ISSUER_PUBLIC_PEM,
            rogue_key: signing_key(ROGUE_PRIVATE_PEM),
        }
    }
}

fn signing_key(private_pem: &str) -> RsaKeyMaterial {
    let private_key =
        RsaPrivateKey::from_pkcs8_pem(private_pem).expect("Fixture key must parse");
    let public_key = RsaPublicKey::from(&private_key);

    RsaKeyMaterial(public_key, Some(private_key))
}
