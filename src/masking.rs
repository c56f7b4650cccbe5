//! Soft-delete content masking.
//!
//! Deleted comments and replies stay in the database so the nesting under
//! them survives, but their text is never shown again. The substitution
//! happens once, when the detail entity is built.

pub const DELETED_COMMENT_CONTENT: &str = "**komentar telah dihapus**";
pub const DELETED_REPLY_CONTENT: &str = "**balasan telah dihapus**";

/// Returns `placeholder` for deleted records, otherwise the content unchanged.
pub fn mask(content: String, is_deleted: bool, placeholder: &str) -> String {
    if is_deleted {
        placeholder.to_string()
    } else {
        content
    }
}
