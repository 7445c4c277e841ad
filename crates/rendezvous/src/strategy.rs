//! Scoring strategies.
//!
//! A [`Strategy`] maps `(key, member digest)` to a `u64` score; the member
//! with the highest score owns the key. The key is always fed first and the
//! digest second, so every strategy here is equivalent to hashing the
//! concatenation `key ++ digest`.

use std::fmt;
use std::hash::Hasher;

use crate::digest::{Fnv1a64, Hasher32};

/// Scores a member digest against a lookup key.
///
/// Implementations must be pure: the same inputs always give the same score,
/// independent of process state, and `score` may be called from any number
/// of threads at once. Empty keys and empty digests are valid input.
///
/// Any `Fn(&[u8], &[u8]) -> u64 + Send + Sync` is a strategy.
pub trait Strategy: Send + Sync {
    /// Score `digest` for `key`.
    fn score(&self, key: &[u8], digest: &[u8]) -> u64;
}

impl<F> Strategy for F
where
    F: Fn(&[u8], &[u8]) -> u64 + Send + Sync,
{
    fn score(&self, key: &[u8], digest: &[u8]) -> u64 {
        self(key, digest)
    }
}

/// FNV-1a 64 over `key ++ digest`. Used whenever no strategy is configured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultStrategy;

impl Strategy for DefaultStrategy {
    fn score(&self, key: &[u8], digest: &[u8]) -> u64 {
        let mut h = Fnv1a64::new();
        h.write(key);
        h.write(digest);
        h.finish()
    }
}

/// Adapts a 32-bit digest construction into a [`Strategy`].
///
/// `new_hasher` is called once per score; the key and then the digest are
/// written into the fresh hasher and its 32-bit result is widened to `u64`.
///
/// ```
/// use rendezvous::{Fnv1a32, Hash32, Strategy};
///
/// let strategy = Hash32::new(Fnv1a32::new);
/// assert!(strategy.score(b"key", b"member") <= u64::from(u32::MAX));
/// ```
#[derive(Clone, Copy)]
pub struct Hash32<F> {
    new_hasher: F,
}

impl<F> Hash32<F> {
    /// Wrap a hasher constructor, e.g. `Fnv1a32::new`.
    pub const fn new(new_hasher: F) -> Self {
        Self { new_hasher }
    }
}

impl<F, H> Strategy for Hash32<F>
where
    F: Fn() -> H + Send + Sync,
    H: Hasher32,
{
    fn score(&self, key: &[u8], digest: &[u8]) -> u64 {
        let mut h = (self.new_hasher)();
        h.write(key);
        h.write(digest);
        u64::from(h.finish32())
    }
}

impl<F> fmt::Debug for Hash32<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hash32").finish_non_exhaustive()
    }
}

/// Adapts a 64-bit digest construction (any [`Hasher`]) into a [`Strategy`].
///
/// Same feed pattern as [`Hash32`]; the hasher's `finish` is the score.
#[derive(Clone, Copy)]
pub struct Hash64<F> {
    new_hasher: F,
}

impl<F> Hash64<F> {
    /// Wrap a hasher constructor, e.g. `Fnv1a64::new`.
    pub const fn new(new_hasher: F) -> Self {
        Self { new_hasher }
    }
}

impl<F, H> Strategy for Hash64<F>
where
    F: Fn() -> H + Send + Sync,
    H: Hasher,
{
    fn score(&self, key: &[u8], digest: &[u8]) -> u64 {
        let mut h = (self.new_hasher)();
        h.write(key);
        h.write(digest);
        h.finish()
    }
}

impl<F> fmt::Debug for Hash64<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hash64").finish_non_exhaustive()
    }
}
