//! Admin password hashing
//!
//! Argon2id with the crate's default parameters. Stored hashes are PHC
//! strings, so the salt and cost parameters travel with the hash and
//! verification needs no configuration of its own.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::types::{Result, VitrineError};

/// Hash an admin password into a PHC-formatted Argon2id string
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| VitrineError::Auth(format!("Password hashing failed: {e}")))
}

/// Check a candidate password against a stored PHC hash.
///
/// A malformed stored hash is an error (it means the admin record is
/// corrupt), not a failed match.
pub fn verify_password(candidate: &str, stored_hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| VitrineError::Auth(format!("Stored password hash is malformed: {e}")))?;

    Ok(Argon2::default()
        .verify_password(candidate.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_accepts_only_the_right_password() {
        let hash = hash_password("vitrine-admin-pw").unwrap();

        // PHC string carrying the argon2id identifier
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("vitrine-admin-pw", &hash).unwrap());
        assert!(!verify_password("vitrine-admin-pW", &hash).unwrap());
        assert!(!verify_password("", &hash).unwrap());
    }

    #[test]
    fn test_rehashing_salts_freshly() {
        let first = hash_password("shared-secret").unwrap();
        let second = hash_password("shared-secret").unwrap();

        // Fresh salt per hash, both still verify
        assert_ne!(first, second);
        assert!(verify_password("shared-secret", &first).unwrap());
        assert!(verify_password("shared-secret", &second).unwrap());
    }

    #[test]
    fn test_malformed_stored_hash_is_an_error_not_a_mismatch() {
        let result = verify_password("anything", "plaintext-left-in-db");
        assert!(matches!(result, Err(VitrineError::Auth(_))));
    }
}
