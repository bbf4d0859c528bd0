//! Content hash - a placeholder fingerprint of the question text
//!
//! This is a 32-bit rolling polynomial hash widened to 64 hex characters.
//! It is NOT cryptographic and collisions are expected; treat it as a display
//! token, never as a content-integrity guarantee.

use std::fmt;

/// Number of hex characters in a rendered content hash
pub const CONTENT_HASH_LEN: usize = 64;

/// A 64-character lowercase hexadecimal content hash
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(String);

impl ContentHash {
    /// Borrow the hex string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the hash and return the hex string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hash `input` with `h = h * 31 + c` over its UTF-16 code units
///
/// Arithmetic wraps at 32 bits; the absolute value of the final signed
/// result is rendered as zero-padded lowercase hex.
///
/// # Examples
///
/// ```
/// use veritas_domain::content_hash;
///
/// let hash = content_hash("ab");
/// assert_eq!(hash.as_str().len(), 64);
/// assert!(hash.as_str().ends_with("c21"));
/// ```
pub fn content_hash(input: &str) -> ContentHash {
    let hash = input.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    });

    // Widen before taking the absolute value so i32::MIN stays positive.
    ContentHash(format!(
        "{:0width$x}",
        i64::from(hash).unsigned_abs(),
        width = CONTENT_HASH_LEN
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(content_hash("").as_str(), "0".repeat(64));
    }

    #[test]
    fn test_known_values() {
        assert!(content_hash("a").as_str().ends_with("61"));
        // 97 * 31 + 98 = 3105 = 0xc21
        assert_eq!(
            content_hash("ab").as_str().trim_start_matches('0'),
            "c21"
        );
    }

    #[test]
    fn test_negative_hash_uses_absolute_value() {
        // Long enough to overflow 32 bits several times
        let hash = content_hash("Is Berlin the capital of Germany?");
        let value = u64::from_str_radix(hash.as_str(), 16).unwrap();
        assert!(value <= 1 << 31);
    }

    #[test]
    fn test_utf16_code_units() {
        // U+1F600 is a surrogate pair: two code units, not one char
        let emoji = content_hash("\u{1F600}");
        let expected = 0xD83Di64 * 31 + 0xDE00;
        assert_eq!(
            u64::from_str_radix(emoji.as_str(), 16).unwrap(),
            expected as u64
        );
    }
}
