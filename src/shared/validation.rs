use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating share codes received in lookup paths.
    /// Must be lowercase alphanumeric, 6 to 64 characters
    /// - Valid: "k3mxw2p9qa", "abc123"
    /// - Invalid: "ABC", "ab", "has space", "a/b"
    pub static ref SHARE_CODE_REGEX: Regex = Regex::new(r"^[a-z0-9]{6,64}$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_code_regex_valid() {
        assert!(SHARE_CODE_REGEX.is_match("k3mxw2p9qa"));
        assert!(SHARE_CODE_REGEX.is_match("abc123"));
        assert!(SHARE_CODE_REGEX.is_match("zzzzzz"));
        assert!(SHARE_CODE_REGEX.is_match("a2b3c4d5e6f7"));
    }

    #[test]
    fn test_share_code_regex_invalid() {
        assert!(!SHARE_CODE_REGEX.is_match("ABC123")); // uppercase
        assert!(!SHARE_CODE_REGEX.is_match("abc")); // too short
        assert!(!SHARE_CODE_REGEX.is_match("")); // empty
        assert!(!SHARE_CODE_REGEX.is_match("has space")); // space
        assert!(!SHARE_CODE_REGEX.is_match("a/b/c/d/e")); // path characters
        assert!(!SHARE_CODE_REGEX.is_match(&"a".repeat(65))); // too long
    }
}
