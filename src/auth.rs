use sha2::{Digest, Sha256}; // SHA-256 for the stored password digest

/*------------------------ Hashing ---------------------*/

// Hash a plaintext password as lowercase hex SHA-256.
// Single pass, no salt.
pub fn hash_password(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    hex::encode(digest)
}

// Verify a plaintext password against a stored hex digest
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    hash_password(password).eq_ignore_ascii_case(stored_hash.trim())
}
