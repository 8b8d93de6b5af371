//! Password reset tokens.
//!
//! The raw token is mailed to the user; only its SHA-256 digest is stored.

use chrono::{DateTime, Duration, Utc};
use rand::RngCore;
use sha2::{Digest, Sha256};

/// Reset tokens expire one hour after issue.
pub const RESET_TOKEN_TTL_MINUTES: i64 = 60;

#[derive(Debug, Clone)]
pub struct ResetToken {
    /// Value sent to the user
    pub token: String,
    /// Value persisted alongside the user
    pub hash: String,
    pub expires_at: DateTime<Utc>,
}

/// 32 random bytes, hex encoded.
pub fn generate_reset_token() -> ResetToken {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    let token = hex::encode(bytes);

    ResetToken {
        hash: hash_reset_token(&token),
        token,
        expires_at: Utc::now() + Duration::minutes(RESET_TOKEN_TTL_MINUTES),
    }
}

pub fn hash_reset_token(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_reset_token_shape() {
        let reset = generate_reset_token();
        assert_eq!(reset.token.len(), 64);
        assert!(reset.token.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(reset.hash, hash_reset_token(&reset.token));
        assert!(reset.expires_at > Utc::now());
    }

    #[test]
    fn test_tokens_are_random() {
        assert_ne!(generate_reset_token().token, generate_reset_token().token);
    }

    #[test]
    fn test_hash_is_stable_and_differs_from_token() {
        let hash = hash_reset_token("abc");
        assert_eq!(hash, hash_reset_token("abc"));
        assert_ne!(hash, "abc");
        assert_eq!(
            hash,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
