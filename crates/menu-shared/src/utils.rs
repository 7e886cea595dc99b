//! Utility functions

use uuid::{Uuid, Variant, Version};

/// Returns `true` only for the canonical lowercase hyphenated text of a
/// random (version 4, RFC 4122 variant) UUID.
pub fn is_valid_uuid(s: &str) -> bool {
    parse_uuid(s).is_some()
}

/// Parses an identifier accepted by [`is_valid_uuid`].
pub fn parse_uuid(s: &str) -> Option<Uuid> {
    let id = Uuid::try_parse(s).ok()?;
    if id.get_version() != Some(Version::Random) || id.get_variant() != Variant::RFC4122 {
        return None;
    }
    // `try_parse` also accepts braced, simple and urn forms
    if id.hyphenated().to_string() != s {
        return None;
    }
    Some(id)
}
