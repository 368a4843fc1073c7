//! Model name generation.

/// Prefix shared by every generated model name
pub const MODEL_NAME_PREFIX: &str = "zaza";

/// Number of characters taken from the end of the UUID
pub const MODEL_SUFFIX_LEN: usize = 12;

/// Generate a unique model name of the form `zaza-<12 chars>`.
///
/// The suffix is the tail of a fresh v4 UUID, i.e. its final hyphen-free group.
pub fn generate_model_name() -> String {
    let uuid = uuid::Uuid::new_v4().hyphenated().to_string();
    format!("{}-{}", MODEL_NAME_PREFIX, tail(&uuid, MODEL_SUFFIX_LEN))
}

fn tail(s: &str, len: usize) -> &str {
    // Hyphenated UUIDs are ASCII, so byte offsets are char boundaries
    &s[s.len().saturating_sub(len)..]
}
