use std::hash::Hasher;

use twox_hash::XxHash64;

/// Hashes a sequence of string parts; each part is length-prefixed so that
/// `["ab", "c"]` and `["a", "bc"]` differ.
pub fn hash64<'a>(parts: impl IntoIterator<Item = &'a str>) -> u64 {
    let mut hasher = XxHash64::with_seed(0);
    for part in parts {
        hasher.write_usize(part.len());
        hasher.write(part.as_bytes());
    }
    hasher.finish()
}
