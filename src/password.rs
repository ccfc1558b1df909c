use sha2::Digest;
use sha2::Sha256;

/// Hashes a plaintext password into the digest stored in `users.password`.
///
/// Hex-encoded SHA-256 without a salt, so the same password always maps to the
/// same digest and can be matched directly in SQL.
pub fn hash(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}
