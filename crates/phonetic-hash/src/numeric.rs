// Salted digest to numeric state conversion
//
// The numeric state is the sum of the four little-endian 32-bit words of
// the digest of `input ++ SALT`. The sum is kept in a 64-bit accumulator:
// it can exceed `u32::MAX` (at most 4 * (2^32 - 1)), and every downstream
// modulo operates on the full, untruncated value.

use crate::digest::{Digest128, Md5Digest};
use crate::{DIGEST_LEN, HashError};

/// The numeric state type.
pub type Numeric = u64;

/// Literal appended to every hash input.
pub const SALT: &str = "-Phonetic";

/// Converts text into numeric state through an injected digest primitive.
#[derive(Debug, Clone, Default)]
pub struct NumericHasher<D = Md5Digest> {
    digest: D,
}

impl NumericHasher {
    /// A hasher over the default MD5 primitive.
    pub fn md5() -> Self {
        Self { digest: Md5Digest }
    }
}

impl<D: Digest128> NumericHasher<D> {
    pub fn new(digest: D) -> Self {
        Self { digest }
    }

    /// Hash an arbitrary string into numeric state.
    pub fn hash_str(&self, input: &str) -> Result<Numeric, HashError> {
        let mut salted = Vec::with_capacity(input.len() + SALT.len());
        salted.extend_from_slice(input.as_bytes());
        salted.extend_from_slice(SALT.as_bytes());
        sum_words(&self.digest.digest(&salted))
    }

    /// Hash a number into numeric state, using its decimal text form.
    pub fn hash_numeric(&self, input: Numeric) -> Result<Numeric, HashError> {
        self.hash_str(&input.to_string())
    }

    /// Advance the state: hash the decimal form of `numeric` followed by
    /// `word`.
    pub fn advance(&self, numeric: Numeric, word: &str) -> Result<Numeric, HashError> {
        self.hash_str(&format!("{numeric}{word}"))
    }
}

/// Sum the four little-endian 32-bit words at offsets 0, 4, 8 and 12.
fn sum_words(digest: &[u8]) -> Result<Numeric, HashError> {
    let bytes: &[u8; DIGEST_LEN] = digest.try_into().map_err(|_| HashError::DigestLength {
        expected: DIGEST_LEN,
        actual: digest.len(),
    })?;

    Ok(bytes
        .chunks_exact(4)
        .map(|word| Numeric::from(u32::from_le_bytes([word[0], word[1], word[2], word[3]])))
        .sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// A digest primitive that returns a fixed byte string.
    struct FixedDigest(Vec<u8>);

    impl Digest128 for FixedDigest {
        fn digest(&self, _input: &[u8]) -> Vec<u8> {
            self.0.clone()
        }
    }

    // -- hash_str tests --

    #[rstest]
    #[case("Tom", 7_814_207_390)]
    #[case("", 8_261_844_537)]
    #[case("0", 7_232_836_953)]
    #[case("Quiprose", 11_630_609_669)]
    fn md5_known_values(#[case] input: &str, #[case] expected: Numeric) {
        let hasher = NumericHasher::md5();
        assert_eq!(hasher.hash_str(input).unwrap(), expected);
    }

    #[test]
    fn sum_is_not_truncated_to_32_bits() {
        let hasher = NumericHasher::md5();
        assert!(hasher.hash_str("Tom").unwrap() > Numeric::from(u32::MAX));
    }

    #[test]
    fn words_are_little_endian() {
        let mut bytes = vec![0u8; DIGEST_LEN];
        bytes[0] = 1; // word 0 = 1
        bytes[5] = 1; // word 1 = 256
        bytes[10] = 1; // word 2 = 65536
        bytes[15] = 1; // word 3 = 16777216
        let hasher = NumericHasher::new(FixedDigest(bytes));
        assert_eq!(hasher.hash_str("anything").unwrap(), 1 + 256 + 65_536 + 16_777_216);
    }

    #[test]
    fn all_ones_digest_keeps_full_sum() {
        let hasher = NumericHasher::new(FixedDigest(vec![0xFF; DIGEST_LEN]));
        assert_eq!(hasher.hash_str("x").unwrap(), 4 * Numeric::from(u32::MAX));
    }

    #[test]
    fn salt_is_appended() {
        struct Echo;
        impl Digest128 for Echo {
            fn digest(&self, input: &[u8]) -> Vec<u8> {
                assert_eq!(input, b"abc-Phonetic");
                vec![0; DIGEST_LEN]
            }
        }
        assert_eq!(NumericHasher::new(Echo).hash_str("abc").unwrap(), 0);
    }

    // -- advance / hash_numeric tests --

    #[test]
    fn advance_concatenates_decimal_state_and_word() {
        let hasher = NumericHasher::md5();
        assert_eq!(
            hasher.advance(12_345, "hay").unwrap(),
            hasher.hash_str("12345hay").unwrap()
        );
        assert_eq!(hasher.advance(12_345, "hay").unwrap(), 11_214_837_546);
    }

    #[test]
    fn hash_numeric_matches_text_form() {
        let hasher = NumericHasher::md5();
        assert_eq!(hasher.hash_numeric(0).unwrap(), hasher.hash_str("0").unwrap());
    }

    // -- contract violations --

    #[rstest]
    #[case(0)]
    #[case(15)]
    #[case(17)]
    #[case(32)]
    fn wrong_digest_length_fails(#[case] len: usize) {
        let hasher = NumericHasher::new(FixedDigest(vec![0; len]));
        assert_eq!(
            hasher.hash_str("Tom"),
            Err(HashError::DigestLength {
                expected: DIGEST_LEN,
                actual: len
            })
        );
    }
}
