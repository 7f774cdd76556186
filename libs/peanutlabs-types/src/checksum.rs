use md5::{Digest, Md5};

/// Computes the keyed checksum shared with the Peanut Labs network.
///
/// The fragments are concatenated in the given order and hashed with MD5.
/// The 128-bit digest is returned as 32 lowercase hex characters.
///
/// The remote network computes the same digest on its side, so the
/// algorithm, concatenation order and encoding must not change.
///
/// # Example
/// ```
/// use peanutlabs_types::keyed_checksum;
///
/// let sum = keyed_checksum(&["123", "123"]);
/// assert_eq!(sum, "4297f44b13955235245b2497399d7a93");
/// ```
pub fn keyed_checksum(parts: &[&str]) -> String {
    let mut hasher = Md5::new();
    for part in parts {
        hasher.update(part.as_bytes());
    }
    hex::encode(hasher.finalize())
}

/// Compares two digests without short-circuiting on the first mismatch.
pub(crate) fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }
    result == 0
}
