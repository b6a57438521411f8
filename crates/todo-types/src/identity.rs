use uuid::Uuid;

/// Identity helpers for entries.
///
/// Entry identities are plain strings on the wire and in storage. New ones are
/// random (v4) UUIDs rendered in canonical hyphenated form, so two calls never
/// collide in practice.
pub struct EntryId;

impl EntryId {
    /// Generate a fresh, random entry identity.
    pub fn generate() -> String {
        Uuid::new_v4().to_string()
    }

    /// Returns `true` if `id` can be used as a storage key.
    ///
    /// The only requirement is that it is non-empty; identities supplied by
    /// callers are not required to be UUIDs.
    pub fn is_valid_key(id: &str) -> bool {
        !id.is_empty()
    }

    /// Returns `true` if `id` is a canonical hyphenated UUID.
    pub fn is_canonical(id: &str) -> bool {
        match Uuid::parse_str(id) {
            Ok(parsed) => parsed.hyphenated().to_string() == id,
            Err(_) => false,
        }
    }
}
