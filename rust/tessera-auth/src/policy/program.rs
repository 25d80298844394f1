use super::{is_dcc_member, scopes_granting, AccessLevel, ResourceNamespace};
use crate::scope::Scope;

/// Program scopes that make their program readable: READ, WRITE, or ADMIN
/// on a `PROGRAM-` policy. DENY entries never appear, even when the same
/// program also carries a grant; the filters apply literally and no
/// conflict resolution happens here.
pub fn readable_program_scopes(permissions: &[String]) -> Vec<Scope> {
    scopes_granting(permissions, ResourceNamespace::Program, AccessLevel::Read)
}

/// Program scopes that make their program writable: WRITE or ADMIN only.
pub fn writable_program_scopes(permissions: &[String]) -> Vec<Scope> {
    scopes_granting(permissions, ResourceNamespace::Program, AccessLevel::Write)
}

/// Readable program identifiers with the `PROGRAM-` prefix stripped.
pub fn readable_program_short_names(permissions: &[String]) -> Vec<String> {
    readable_program_scopes(permissions)
        .iter()
        .map(|scope| ResourceNamespace::Program.short_name(&scope.policy).to_string())
        .collect()
}

/// Writable program identifiers with the `PROGRAM-` prefix stripped.
pub fn writable_program_short_names(permissions: &[String]) -> Vec<String> {
    writable_program_scopes(permissions)
        .iter()
        .map(|scope| ResourceNamespace::Program.short_name(&scope.policy).to_string())
        .collect()
}

/// Whether the holder may read the named program: DCC members may read
/// every program, anyone else needs a readable scope for it.
pub fn can_read_program(permissions: &[String], program_id: &str) -> bool {
    is_dcc_member(permissions)
        || readable_program_short_names(permissions)
            .iter()
            .any(|name| name == program_id)
}

/// Whether the holder may write the named program: DCC members may write
/// every program, anyone else needs a readable scope for it that carries
/// WRITE or ADMIN.
pub fn can_write_program(permissions: &[String], program_id: &str) -> bool {
    is_dcc_member(permissions)
        || readable_program_scopes(permissions).iter().any(|scope| {
            ResourceNamespace::Program.short_name(&scope.policy) == program_id
                && scope.permission.grants_write()
        })
}

/// Whether the holder administers the named program. Administration is
/// currently indistinguishable from write access: no program operation
/// requires ADMIN specifically.
pub fn is_program_admin(permissions: &[String], program_id: &str) -> bool {
    can_write_program(permissions, program_id)
}

/// Whether the holder can read at least one program.
pub fn can_read_some_program(permissions: &[String]) -> bool {
    is_dcc_member(permissions) || !readable_program_scopes(permissions).is_empty()
}

/// Whether the holder can write at least one program.
pub fn can_write_some_program(permissions: &[String]) -> bool {
    is_dcc_member(permissions) || !writable_program_scopes(permissions).is_empty()
}
