// Entropy collaborator for unseeded generation

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use phonetic_core::options::SEED_ENTROPY_BYTES;
use rand::RngCore;
use rand::rngs::OsRng;

/// Error type for entropy source failures.
#[derive(Debug, thiserror::Error)]
#[error("entropy source failed: {0}")]
pub struct EntropyError(pub String);

/// A source of secure random bytes. Only consulted when no seed is given.
///
/// Implementations shared between threads must be thread-safe themselves.
pub trait EntropySource {
    fn fill(&self, buf: &mut [u8]) -> Result<(), EntropyError>;
}

/// The operating system's secure random number generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, buf: &mut [u8]) -> Result<(), EntropyError> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| EntropyError(e.to_string()))
    }
}

impl<E: EntropySource + ?Sized> EntropySource for &E {
    fn fill(&self, buf: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill(buf)
    }
}

/// Draw [`SEED_ENTROPY_BYTES`] random bytes and encode them as a padded
/// standard base64 seed string.
pub fn random_seed<E: EntropySource + ?Sized>(source: &E) -> Result<String, EntropyError> {
    let mut bytes = [0u8; SEED_ENTROPY_BYTES];
    source.fill(&mut bytes)?;
    Ok(STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counting;

    impl EntropySource for Counting {
        fn fill(&self, buf: &mut [u8]) -> Result<(), EntropyError> {
            for (i, b) in buf.iter_mut().enumerate() {
                *b = i as u8;
            }
            Ok(())
        }
    }

    struct Broken;

    impl EntropySource for Broken {
        fn fill(&self, _buf: &mut [u8]) -> Result<(), EntropyError> {
            Err(EntropyError("device unavailable".to_string()))
        }
    }

    #[test]
    fn seed_is_base64_of_sixteen_bytes() {
        assert_eq!(random_seed(&Counting).unwrap(), "AAECAwQFBgcICQoLDA0ODw==");
    }

    #[test]
    fn os_seed_has_expected_shape() {
        let seed = random_seed(&OsEntropy).unwrap();
        assert_eq!(seed.len(), 24);
        assert!(seed.ends_with("=="));
        assert_eq!(STANDARD.decode(&seed).unwrap().len(), SEED_ENTROPY_BYTES);
    }

    #[test]
    fn os_seeds_differ() {
        assert_ne!(random_seed(&OsEntropy).unwrap(), random_seed(&OsEntropy).unwrap());
    }

    #[test]
    fn failure_is_propagated() {
        let err = random_seed(&Broken).unwrap_err();
        assert_eq!(err.to_string(), "entropy source failed: device unavailable");
    }
}
