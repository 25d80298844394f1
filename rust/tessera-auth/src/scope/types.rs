use super::Permission;
use crate::error::AuthError;
use std::{fmt, str::FromStr};

/// Structured form of a `<policy>.<permission>` scope string.
///
/// The policy segment is an opaque namespaced identifier (for example
/// `PROGRAM-PACA-AU`); the permission segment must be one of the closed
/// [`Permission`] enumeration. Parsing and display are exact inverses.
///
/// ```rust
/// use tessera_auth::scope::{parse_scope, serialize_scope, Permission};
///
/// let scope = parse_scope("PROGRAM-PACA-AU.WRITE").unwrap();
/// assert_eq!(scope.policy, "PROGRAM-PACA-AU");
/// assert_eq!(scope.permission, Permission::Write);
/// assert_eq!(serialize_scope(&scope), "PROGRAM-PACA-AU.WRITE");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Scope {
    pub policy: String,
    pub permission: Permission,
}

impl Scope {
    pub fn new(policy: impl Into<String>, permission: Permission) -> Self {
        Scope {
            policy: policy.into(),
            permission,
        }
    }
}

impl FromStr for Scope {
    type Err = AuthError;

    /// Splits on the first `.`; everything to the left is the policy and
    /// the remainder must be a recognized permission token.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (policy, permission) = raw
            .split_once('.')
            .ok_or_else(|| AuthError::MalformedScope(raw.to_string()))?;

        Ok(Scope {
            policy: policy.to_string(),
            permission: permission.parse()?,
        })
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.policy, self.permission)
    }
}

/// Parse a raw scope string into its structured form.
pub fn parse_scope(raw: &str) -> Result<Scope, AuthError> {
    Scope::from_str(raw)
}

/// Inverse of [`parse_scope`]. A [`Scope`] can only hold a recognized
/// permission, so serialization cannot fail; malformed input is rejected
/// at parse time instead.
pub fn serialize_scope(scope: &Scope) -> String {
    scope.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_parses_policy_and_permission() {
        let scope = parse_scope("PROGRAM-TEST-CA.READ").unwrap();
        assert_eq!(scope, Scope::new("PROGRAM-TEST-CA", Permission::Read));
    }

    #[test]
    fn it_round_trips_every_permission() {
        for permission in [
            Permission::Read,
            Permission::Write,
            Permission::Admin,
            Permission::Deny,
        ] {
            let scope = Scope::new("PROGRAM-DATA-TEST-CA", permission);
            assert_eq!(parse_scope(&serialize_scope(&scope)).unwrap(), scope);
        }
    }

    #[test]
    fn it_splits_on_the_first_dot_only() {
        // The remainder after the first dot is not a permission token
        let result = parse_scope("PROGRAM-TEST-CA.EXTRA.WRITE");
        assert!(matches!(
            result,
            Err(AuthError::UnrecognizedPermission(value)) if value == "EXTRA.WRITE"
        ));
    }

    #[test]
    fn it_rejects_a_scope_without_a_separator() {
        assert!(matches!(
            parse_scope("PROGRAMSERVICE"),
            Err(AuthError::MalformedScope(_))
        ));
    }

    #[test]
    fn it_rejects_unknown_permission_segments() {
        assert!(matches!(
            parse_scope("PROGRAM-TEST-CA.OWNER"),
            Err(AuthError::UnrecognizedPermission(_))
        ));
    }

    #[test]
    fn it_accepts_an_empty_policy_segment() {
        // The policy is opaque at this layer; namespace rules live in the
        // policy filters
        let scope = parse_scope(".READ").unwrap();
        assert_eq!(scope.policy, "");
        assert_eq!(serialize_scope(&scope), ".READ");
    }
}
