//! Role names carried in access-token claims.

/// Full access, including purge previews.
pub const ROLE_ADMIN: &str = "admin";

/// Can create, edit, delete and restore content.
pub const ROLE_EDITOR: &str = "editor";

/// Read-only staff account.
pub const ROLE_VIEWER: &str = "viewer";

/// Returns `true` if the role may move content in and out of the trash.
pub fn can_manage_content(role: &str) -> bool {
    role == ROLE_ADMIN || role == ROLE_EDITOR
}
