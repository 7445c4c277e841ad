//! Table entries: a member paired with its digest.

use bytes::Bytes;

/// A member together with the digest that represents it in scoring.
///
/// The member is opaque: lookups only ever hand it back. The digest is what
/// the table's [`Strategy`](crate::Strategy) scores against each key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry<M> {
    /// The value returned by a lookup that this entry wins.
    pub member: M,
    /// Bytes fed to the strategy after the key.
    pub digest: Bytes,
}

impl<M> Entry<M> {
    /// Pair a member with an explicit digest.
    pub fn new(member: M, digest: impl Into<Bytes>) -> Self {
        Self {
            member,
            digest: digest.into(),
        }
    }

    /// A string member that is its own digest: the digest is the label's
    /// UTF-8 bytes.
    pub fn from_label(label: impl Into<String>) -> Self
    where
        M: From<String>,
    {
        let label = label.into();
        let digest = Bytes::copy_from_slice(label.as_bytes());
        Self {
            member: M::from(label),
            digest,
        }
    }
}
