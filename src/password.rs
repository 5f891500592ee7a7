// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Campus Services

//! Password hashing.
//!
//! Argon2 with per-password random salts. The stored string is the PHC
//! format produced by the hasher, so parameters travel with the hash.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Hash a plaintext password for storage.
pub fn hash(password: &str) -> Result<String, String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| format!("password hashing failed: {err}"))
}

/// Verify a plaintext password against a stored hash.
///
/// Any failure — unparseable hash, mismatched password — is `false`;
/// callers never learn which.
pub fn verify(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_succeeds() {
        let stored = hash("correct horse battery staple").unwrap();
        assert!(verify("correct horse battery staple", &stored));
    }

    #[test]
    fn wrong_password_fails() {
        let stored = hash("correct horse battery staple").unwrap();
        assert!(!verify("incorrect horse", &stored));
    }

    #[test]
    fn invalid_stored_hash_fails_closed() {
        assert!(!verify("anything", "not-a-phc-hash"));
        assert!(!verify("anything", ""));
    }

    #[test]
    fn salts_are_random() {
        let a = hash("same password").unwrap();
        let b = hash("same password").unwrap();
        assert_ne!(a, b);
        assert!(verify("same password", &a));
        assert!(verify("same password", &b));
    }
}
