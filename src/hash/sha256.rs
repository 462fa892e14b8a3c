use sha2::{Digest, Sha256};

/// Size in bytes of a SHA-256 digest.
pub const DIGEST_SIZE: usize = 32;

/// Hashes the concatenation of `parts` with SHA-256.
///
/// The parts are fed to a single incremental hasher in order, so
/// `sha256(&[a, b])` equals `sha256(&[&[a, b].concat()])` without the copy.
pub fn sha256(parts: &[&[u8]]) -> [u8; DIGEST_SIZE] {
    let mut hasher = Sha256::new();

    for part in parts {
        hasher.update(part);
    }

    hasher.finalize().into()
}
