//! Fluent, reusable builder for [`Table`]s.

use std::fmt;
use std::hash::Hasher;
use std::sync::Arc;

use bytes::Bytes;
use tracing::debug;

use crate::digest::Hasher32;
use crate::entry::Entry;
use crate::strategy::{Hash32, Hash64, Strategy};
use crate::table::{Scorer, Table};

/// Accumulates entries and a strategy, then produces an immutable [`Table`].
///
/// `build` moves the accumulated entries into the table and resets the
/// builder, so a freshly created builder and one that has just built are
/// indistinguishable. Tables already built never observe later changes.
///
/// ```
/// use rendezvous::Builder;
///
/// let mut builder = Builder::new();
/// let first = builder.add_member("n1", "n1").build();
/// let second = builder.add_member("n2", "n2").build();
///
/// assert_eq!(first.len(), 1);
/// assert_eq!(second.members().collect::<Vec<_>>(), [&"n2"]);
/// ```
pub struct Builder<M> {
    entries: Vec<Entry<M>>,
    strategy: Option<Arc<dyn Strategy>>,
}

impl<M> Builder<M> {
    /// Create an empty builder using the default strategy.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            strategy: None,
        }
    }

    /// Set the strategy for the next table built.
    pub fn strategy<S>(&mut self, strategy: S) -> &mut Self
    where
        S: Strategy + 'static,
    {
        self.shared_strategy(Arc::new(strategy))
    }

    /// Set an already shared strategy for the next table built.
    pub fn shared_strategy(&mut self, strategy: Arc<dyn Strategy>) -> &mut Self {
        self.strategy = Some(strategy);
        self
    }

    /// Score with a 32-bit digest construction, e.g. `Fnv1a32::new`.
    pub fn hash32<F, H>(&mut self, new_hasher: F) -> &mut Self
    where
        F: Fn() -> H + Send + Sync + 'static,
        H: Hasher32,
    {
        self.strategy(Hash32::new(new_hasher))
    }

    /// Score with a 64-bit digest construction, e.g. `Fnv1a64::new`.
    pub fn hash64<F, H>(&mut self, new_hasher: F) -> &mut Self
    where
        F: Fn() -> H + Send + Sync + 'static,
        H: Hasher,
    {
        self.strategy(Hash64::new(new_hasher))
    }

    /// Append entries, preserving their order.
    pub fn add<I>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = Entry<M>>,
    {
        self.entries.extend(entries);
        self
    }

    /// Append a single member with its digest.
    pub fn add_member(&mut self, member: M, digest: impl Into<Bytes>) -> &mut Self {
        self.entries.push(Entry::new(member, digest));
        self
    }

    /// Append string members that double as their own digests.
    pub fn add_string_members<I, S>(&mut self, labels: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        M: From<String>,
    {
        self.entries.extend(labels.into_iter().map(Entry::from_label));
        self
    }

    /// Number of entries accumulated so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no entries have been added since the last build.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Produce a table from the current state and reset the builder.
    ///
    /// With no entries this returns [`Table::EMPTY`] regardless of the
    /// configured strategy.
    pub fn build(&mut self) -> Table<M> {
        let strategy = self.strategy.take();
        let entries = std::mem::take(&mut self.entries);

        if entries.is_empty() {
            debug!("no entries added, returning the empty table");
            return Table::EMPTY;
        }

        let scorer = match strategy {
            Some(strategy) => Scorer::Custom(strategy),
            None => Scorer::Default,
        };
        debug!(
            entries = entries.len(),
            default_strategy = matches!(scorer, Scorer::Default),
            "built rendezvous table"
        );
        Table::from_parts(entries, scorer)
    }
}

impl<M> Default for Builder<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: fmt::Debug> fmt::Debug for Builder<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("entries", &self.entries)
            .field("custom_strategy", &self.strategy.is_some())
            .finish()
    }
}
