//! API token generation and hashing.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// API token prefix.
pub const API_TOKEN_PREFIX: &str = "till_";

/// Generate a new raw API token.
#[must_use]
pub fn generate_api_token() -> String {
    format!(
        "{API_TOKEN_PREFIX}{}{}",
        Uuid::now_v7().simple(),
        Uuid::new_v4().simple()
    )
}

/// Lowercase hex SHA-256 of a raw token, as stored in `api_tokens.token_hash`.
#[must_use]
pub fn hash_api_token(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_tokens_are_prefixed_and_unique() {
        let first = generate_api_token();
        let second = generate_api_token();

        assert!(first.starts_with(API_TOKEN_PREFIX));
        assert_eq!(first.len(), API_TOKEN_PREFIX.len() + 64);
        assert_ne!(first, second);
    }

    #[test]
    fn hash_is_stable_lowercase_hex() {
        let hash = hash_api_token("till_example");

        assert_eq!(hash, hash_api_token("till_example"));
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
        assert_ne!(hash, hash_api_token("till_other"));
    }
}
