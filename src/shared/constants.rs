/// Alphabet used for share codes.
///
/// Lowercase alphanumeric with the ambiguous characters (`0`, `1`, `l`, `o`)
/// removed, so codes survive being read aloud or retyped from a QR scan.
pub const CODE_ALPHABET: &[u8] = b"abcdefghijkmnpqrstuvwxyz23456789";

/// Object keys for uploaded blobs live under this prefix.
pub const OBJECT_KEY_PREFIX: &str = "shares";
