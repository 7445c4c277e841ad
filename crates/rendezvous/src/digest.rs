//! Streaming FNV-1a digests.
//!
//! These are the constructions behind [`DefaultStrategy`] and the usual
//! choices for [`Hash32`] / [`Hash64`]. Both are byte-exact FNV-1a, so
//! tables built on them route identically to any other FNV-1a implementation
//! fed the same key and digest bytes.
//!
//! [`DefaultStrategy`]: crate::DefaultStrategy
//! [`Hash32`]: crate::Hash32
//! [`Hash64`]: crate::Hash64

use std::hash::Hasher;

const FNV32_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV32_PRIME: u32 = 0x0100_0193;

const FNV64_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV64_PRIME: u64 = 0x0000_0100_0000_01b3;

/// A [`Hasher`] whose native output is 32 bits wide.
///
/// [`Hash32`](crate::Hash32) widens `finish32` to a 64-bit score.
pub trait Hasher32: Hasher {
    /// Return the 32-bit digest of everything written so far.
    fn finish32(&self) -> u32;
}

/// 32-bit FNV-1a.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fnv1a32(u32);

impl Fnv1a32 {
    /// Create a hasher at the FNV-1a 32 offset basis.
    pub const fn new() -> Self {
        Self(FNV32_OFFSET_BASIS)
    }
}

impl Default for Fnv1a32 {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for Fnv1a32 {
    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.0 ^= u32::from(*byte);
            self.0 = self.0.wrapping_mul(FNV32_PRIME);
        }
    }

    fn finish(&self) -> u64 {
        u64::from(self.0)
    }
}

impl Hasher32 for Fnv1a32 {
    fn finish32(&self) -> u32 {
        self.0
    }
}

/// 64-bit FNV-1a.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fnv1a64(u64);

impl Fnv1a64 {
    /// Create a hasher at the FNV-1a 64 offset basis.
    pub const fn new() -> Self {
        Self(FNV64_OFFSET_BASIS)
    }
}

impl Default for Fnv1a64 {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for Fnv1a64 {
    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.0 ^= u64::from(*byte);
            self.0 = self.0.wrapping_mul(FNV64_PRIME);
        }
    }

    fn finish(&self) -> u64 {
        self.0
    }
}
