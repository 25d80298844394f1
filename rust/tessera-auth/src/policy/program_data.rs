use super::{is_dcc_member, scopes_granting, AccessLevel, ResourceNamespace};
use crate::scope::Scope;

/// Program-data scopes that make their data readable: READ, WRITE, or
/// ADMIN on a `PROGRAM-DATA-` policy, DENY excluded.
pub fn readable_program_data_scopes(permissions: &[String]) -> Vec<Scope> {
    scopes_granting(permissions, ResourceNamespace::ProgramData, AccessLevel::Read)
}

/// Program-data scopes that make their data writable: WRITE or ADMIN.
pub fn writable_program_data_scopes(permissions: &[String]) -> Vec<Scope> {
    scopes_granting(permissions, ResourceNamespace::ProgramData, AccessLevel::Write)
}

/// Readable program-data identifiers with the `PROGRAM-DATA-` prefix
/// stripped. The short name is the owning program's identifier.
pub fn readable_program_data_names(permissions: &[String]) -> Vec<String> {
    readable_program_data_scopes(permissions)
        .iter()
        .map(|scope| {
            ResourceNamespace::ProgramData
                .short_name(&scope.policy)
                .to_string()
        })
        .collect()
}

/// Writable program-data identifiers with the `PROGRAM-DATA-` prefix
/// stripped.
pub fn writable_program_data_names(permissions: &[String]) -> Vec<String> {
    writable_program_data_scopes(permissions)
        .iter()
        .map(|scope| {
            ResourceNamespace::ProgramData
                .short_name(&scope.policy)
                .to_string()
        })
        .collect()
}

/// Whether the holder may read the named program's data. DCC members may
/// read all program data; RDPC membership grants nothing here.
pub fn can_read_program_data(permissions: &[String], program_id: &str) -> bool {
    is_dcc_member(permissions)
        || readable_program_data_names(permissions)
            .iter()
            .any(|name| name == program_id)
}

/// Whether the holder may write the named program's data: DCC members
/// always, anyone else via a readable program-data scope for it carrying
/// WRITE or ADMIN.
pub fn can_write_program_data(permissions: &[String], program_id: &str) -> bool {
    is_dcc_member(permissions)
        || readable_program_data_scopes(permissions).iter().any(|scope| {
            ResourceNamespace::ProgramData.short_name(&scope.policy) == program_id
                && scope.permission.grants_write()
        })
}

/// Whether the holder can read at least one program's data.
pub fn can_read_some_program_data(permissions: &[String]) -> bool {
    is_dcc_member(permissions) || !readable_program_data_scopes(permissions).is_empty()
}

/// Whether the holder can write at least one program's data.
pub fn can_write_some_program_data(permissions: &[String]) -> bool {
    is_dcc_member(permissions) || !writable_program_data_scopes(permissions).is_empty()
}
