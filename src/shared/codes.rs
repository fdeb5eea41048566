use rand::Rng;

use crate::shared::constants::CODE_ALPHABET;

/// Generate a random share code of the given length.
///
/// Codes double as access tokens: at 10 characters over a 32-character
/// alphabet the space is 32^10 (~10^15), so collisions and guessing are both
/// negligible at the expected scale. Uniqueness is still enforced by the
/// database constraint on insert.
pub fn generate_share_code(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CODE_ALPHABET.len());
            CODE_ALPHABET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_code_has_requested_length() {
        assert_eq!(generate_share_code(10).len(), 10);
        assert_eq!(generate_share_code(6).len(), 6);
        assert_eq!(generate_share_code(32).len(), 32);
    }

    #[test]
    fn test_code_uses_only_alphabet_characters() {
        let code = generate_share_code(200);
        for c in code.bytes() {
            assert!(
                CODE_ALPHABET.contains(&c),
                "unexpected character in code: {}",
                c as char
            );
        }
    }

    #[test]
    fn test_codes_do_not_collide_over_large_sample() {
        let codes: HashSet<String> = (0..1000).map(|_| generate_share_code(10)).collect();
        assert_eq!(codes.len(), 1000);
    }
}
