use crate::error::AuthError;
use std::{fmt, str::FromStr};

/// Access level carried by a scope.
///
/// `Deny` is an explicit negative override: it sits outside the
/// read < write < admin ordering and never grants anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Permission {
    /// May read the resource
    Read,
    /// May modify the resource; implies read
    Write,
    /// May administer the resource; implies write
    Admin,
    /// Explicitly barred from the resource
    Deny,
}

impl Permission {
    /// Whether this level makes the resource readable. Write and admin
    /// imply read; there is no separate "has READ specifically" notion.
    pub fn grants_read(&self) -> bool {
        match self {
            Permission::Read | Permission::Write | Permission::Admin => true,
            Permission::Deny => false,
        }
    }

    /// Whether this level makes the resource writable.
    pub fn grants_write(&self) -> bool {
        match self {
            Permission::Write | Permission::Admin => true,
            Permission::Read | Permission::Deny => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::Read => "READ",
            Permission::Write => "WRITE",
            Permission::Admin => "ADMIN",
            Permission::Deny => "DENY",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Permission {
    type Err = AuthError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(match value {
            "READ" => Permission::Read,
            "WRITE" => Permission::Write,
            "ADMIN" => Permission::Admin,
            "DENY" => Permission::Deny,
            _ => return Err(AuthError::UnrecognizedPermission(value.to_string())),
        })
    }
}

/// Membership test against the closed permission enumeration.
pub fn is_permission(value: &str) -> bool {
    Permission::from_str(value).is_ok()
}
