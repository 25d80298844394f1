//! Scope-based authorization for the Tessera research data platform.
//!
//! Tessera organizes research tenants as *programs*, each with an attached
//! *program data* resource class. The platform identity service issues
//! signed [JSON Web Tokens][JWT docs] whose `context.scope` claim carries
//! permission scopes such as `PROGRAM-PACA-AU.WRITE` or
//! `PROGRAM-DATA-PACA-AU.READ`. This crate verifies those tokens and
//! answers the authorization questions the rest of the platform asks about
//! them: can this principal read or write a given program, which programs
//! can they see at all, and do they hold one of the platform-wide roles.
//!
//! Every operation is a pure function of its inputs. Nothing here issues
//! tokens, stores decisions, or talks to the network; token verification
//! is bound to a single RS256 public key supplied at construction.
//!
//! Policy questions operate directly on a permission list, with no token
//! in sight:
//!
//! ```rust
//! use tessera_auth::{can_read_program, can_write_program, is_dcc_member};
//!
//! let permissions: Vec<String> = vec![
//!     "PROGRAM-PACA-AU.WRITE".into(),
//!     "PROGRAM-DATA-PACA-AU.READ".into(),
//! ];
//!
//! assert!(can_read_program(&permissions, "PACA-AU"));
//! assert!(can_write_program(&permissions, "PACA-AU"));
//! assert!(!is_dcc_member(&permissions));
//! ```
//!
//! To go from a raw token to a permission list, construct a
//! [`TokenVerifier`] with the identity service's public key. The verifier
//! fails closed: any token it cannot verify carries no permissions.
//!
//! ```rust
//! use tessera_auth::TokenVerifier;
//!
//! let verifier = TokenVerifier::new("not a real key");
//! assert!(!verifier.is_valid_jwt("not.a.token"));
//! assert!(verifier.permissions_from_token("not.a.token").is_empty());
//! ```
//!
//! [JWT docs]: https://jwt.io/

pub mod crypto;
pub mod error;
pub mod policy;
pub mod scope;
pub mod time;
pub mod token;
pub mod verifier;

#[cfg(any(test, feature = "helpers"))]
pub mod helpers;

pub use error::AuthError;
pub use policy::{
    can_read_program, can_read_program_data, can_read_some_program, can_read_some_program_data,
    can_write_program, can_write_program_data, can_write_some_program, can_write_some_program_data,
    is_dcc_member, is_program_admin, is_rdpc_member, readable_program_data_names,
    readable_program_data_scopes, readable_program_scopes, readable_program_short_names,
    writable_program_data_names, writable_program_data_scopes, writable_program_scopes,
    writable_program_short_names, ResourceNamespace, PROGRAM_DATA_PREFIX, PROGRAM_PREFIX,
};
pub use scope::{is_permission, parse_scope, serialize_scope, Permission, Scope};
pub use token::{ClaimSet, Token, TokenContext, TokenUser};
pub use verifier::{TokenVerifier, ALLOWED_SIGNATURE_ALGORITHMS};

#[cfg(test)]
mod tests;
