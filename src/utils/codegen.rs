//! Random short code generation.

use base64::Engine as _;

/// Length of random bytes before base64 encoding; 6 bytes encode to an
/// 8-character code, short enough to be the point of the service while
/// leaving ~2^48 possible aliases.
const CODE_LENGTH_BYTES: usize = 6;

/// Generates a random URL-safe short code.
///
/// Uses OS entropy and URL-safe base64 without padding, producing an
/// 8-character code over `[A-Za-z0-9_-]`.
///
/// # Errors
///
/// Returns the underlying entropy error if the system random number
/// generator fails (extremely rare); callers surface it rather than panic.
pub fn generate_code() -> Result<String, getrandom::Error> {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];
    getrandom::fill(&mut buffer)?;

    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer))
}

/// Returns true if `code` looks like a plausible short code: non-empty,
/// bounded length, URL-safe alphabet.
pub fn is_url_safe_code(code: &str) -> bool {
    !code.is_empty()
        && code.len() <= 32
        && code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        let code = generate_code().unwrap();
        assert_eq!(code.len(), 8);
    }

    #[test]
    fn test_generate_code_url_safe_characters() {
        let code = generate_code().unwrap();
        assert!(is_url_safe_code(&code));
        assert!(!code.contains('='));
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let mut codes = HashSet::new();

        for _ in 0..1000 {
            codes.insert(generate_code().unwrap());
        }

        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_is_url_safe_code() {
        assert!(is_url_safe_code("abc123"));
        assert!(is_url_safe_code("a-b_c"));
        assert!(!is_url_safe_code(""));
        assert!(!is_url_safe_code("has space"));
        assert!(!is_url_safe_code("slash/code"));
        assert!(!is_url_safe_code(&"x".repeat(33)));
    }
}
