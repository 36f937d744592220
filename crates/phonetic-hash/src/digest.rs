// Injected 128-bit digest primitive

use md5::{Digest, Md5};

/// A 128-bit digest primitive with MD5 semantics.
///
/// Implementations must return exactly [`DIGEST_LEN`](crate::DIGEST_LEN)
/// bytes. The return type is a plain vector so that a misbehaving primitive
/// is detected by [`NumericHasher`](crate::NumericHasher) instead of being
/// hidden by the type system at the call site.
pub trait Digest128 {
    fn digest(&self, input: &[u8]) -> Vec<u8>;
}

/// MD5 via the RustCrypto `md-5` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Md5Digest;

impl Digest128 for Md5Digest {
    fn digest(&self, input: &[u8]) -> Vec<u8> {
        Md5::digest(input).to_vec()
    }
}

impl<D: Digest128 + ?Sized> Digest128 for &D {
    fn digest(&self, input: &[u8]) -> Vec<u8> {
        (**self).digest(input)
    }
}

impl<D: Digest128 + ?Sized> Digest128 for Box<D> {
    fn digest(&self, input: &[u8]) -> Vec<u8> {
        (**self).digest(input)
    }
}
