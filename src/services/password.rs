//! Password hashing capability.
//!
//! One-way bcrypt hash with a fixed work factor, verify by recompute. The
//! work factor matches the hashes already present in the platform's
//! credential store, so existing users keep logging in after a migration.

use anyhow::Result;

/// bcrypt work factor.
const COST: u32 = 13;

/// Hash a plaintext password. The salt is generated per call and embedded in
/// the returned hash string.
pub fn hash(plain: &str) -> Result<String> {
    Ok(bcrypt::hash(plain, COST)?)
}

/// Recompute-and-compare verification.
pub fn verify(plain: &str, hashed: &str) -> bool {
    bcrypt::verify(plain, hashed).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tests hash at the minimum cost (4) to stay fast; verify is
    // cost-agnostic since the cost is embedded in the hash string.

    #[test]
    fn test_hash_round_trip() {
        let hashed = bcrypt::hash("s3nha-forte", 4).unwrap();
        assert!(verify("s3nha-forte", &hashed));
        assert!(!verify("outra-senha", &hashed));
    }

    #[test]
    fn test_hash_never_stores_plaintext() {
        let hashed = bcrypt::hash("minha-senha", 4).unwrap();
        assert!(!hashed.contains("minha-senha"));
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(!verify("qualquer", "not-a-bcrypt-hash"));
    }
}
