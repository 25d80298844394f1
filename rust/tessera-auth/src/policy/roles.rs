/// Scopes that mark the holder as a member of the Data Coordination
/// Center. DCC members administer the platform itself; membership implies
/// read and write access to every program and every program's data, so
/// the per-resource policy checks short-circuit on it.
pub const DCC_MEMBER_SCOPES: &[&str] = &["PROGRAMSERVICE.WRITE"];

/// Scopes that mark the holder as a member of a Regional Data Processing
/// Center. Unlike DCC membership this is a plain classifier: no
/// per-resource policy check consults it.
pub const RDPC_MEMBER_SCOPES: &[&str] = &["RDPCSERVICE.WRITE"];

/// Whether the permission list carries a DCC membership indicator. Exact
/// string membership, no precedence logic.
pub fn is_dcc_member(permissions: &[String]) -> bool {
    permissions
        .iter()
        .any(|permission| DCC_MEMBER_SCOPES.contains(&permission.as_str()))
}

/// Whether the permission list carries an RDPC membership indicator.
pub fn is_rdpc_member(permissions: &[String]) -> bool {
    permissions
        .iter()
        .any(|permission| RDPC_MEMBER_SCOPES.contains(&permission.as_str()))
}
