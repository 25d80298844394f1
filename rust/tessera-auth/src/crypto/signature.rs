use strum_macros::{Display, EnumString};

// See: https://www.rfc-editor.org/rfc/rfc7518
//
// Tokens naming any algorithm outside the verifier's allow-list are
// rejected before their signature is examined; recognizing an algorithm
// here does not mean it is accepted.
#[derive(Clone, Copy, Debug, Display, EnumString, Eq, PartialEq)]
pub enum JwtSignatureAlgorithm {
    RS256,
    HS256,
    EdDSA,
    ES256,
}
