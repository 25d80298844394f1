mod program;
mod program_data;
mod roles;

pub use program::*;
pub use program_data::*;
pub use roles::*;

use crate::scope::Scope;
use std::str::FromStr;

/// Namespace prefix for program policies.
pub const PROGRAM_PREFIX: &str = "PROGRAM-";

/// Namespace prefix for program-data policies. Note that it textually
/// extends [`PROGRAM_PREFIX`]: every program-data policy also passes a
/// bare program-prefix test.
pub const PROGRAM_DATA_PREFIX: &str = "PROGRAM-DATA-";

/// The two namespaced resource classes that scope policies refer to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceNamespace {
    Program,
    ProgramData,
}

impl ResourceNamespace {
    /// Whether a policy (or a full scope string, since the policy is its
    /// leading segment) belongs to this namespace.
    ///
    /// The program arm must exclude the program-data prefix after
    /// matching its own: program-data policies match both prefixes, and
    /// only the exclusion keeps them out of the program namespace.
    pub fn claims_policy(&self, policy: &str) -> bool {
        match self {
            ResourceNamespace::Program => {
                policy.starts_with(PROGRAM_PREFIX) && !policy.starts_with(PROGRAM_DATA_PREFIX)
            }
            ResourceNamespace::ProgramData => policy.starts_with(PROGRAM_DATA_PREFIX),
        }
    }

    pub fn prefix(&self) -> &'static str {
        match self {
            ResourceNamespace::Program => PROGRAM_PREFIX,
            ResourceNamespace::ProgramData => PROGRAM_DATA_PREFIX,
        }
    }

    /// The policy identifier with this namespace's prefix stripped.
    pub fn short_name<'a>(&self, policy: &'a str) -> &'a str {
        policy.strip_prefix(self.prefix()).unwrap_or(policy)
    }
}

/// Access being tested for. The permission hierarchy is applied here:
/// ADMIN and WRITE grant read, DENY grants neither.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AccessLevel {
    Read,
    Write,
}

impl AccessLevel {
    fn granted_by(&self, scope: &Scope) -> bool {
        match self {
            AccessLevel::Read => scope.permission.grants_read(),
            AccessLevel::Write => scope.permission.grants_write(),
        }
    }
}

/// The one scope filter every program and program-data derivation goes
/// through: namespace test on the raw entry first, then parse, then the
/// permission test. Entries that fail to parse grant nothing and are
/// skipped; the policy layer answers with lists and booleans, never
/// errors.
pub(crate) fn scopes_granting(
    permissions: &[String],
    namespace: ResourceNamespace,
    access: AccessLevel,
) -> Vec<Scope> {
    permissions
        .iter()
        .filter(|raw| namespace.claims_policy(raw))
        .filter_map(|raw| match Scope::from_str(raw) {
            Ok(scope) => Some(scope),
            Err(error) => {
                tracing::debug!("Skipping unparseable scope {raw:?}: {error}");
                None
            }
        })
        .filter(|scope| access.granted_by(scope))
        .collect()
}
