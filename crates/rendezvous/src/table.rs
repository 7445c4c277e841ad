//! Immutable rendezvous lookup table.

use std::fmt;
use std::sync::Arc;

use crate::entry::Entry;
use crate::strategy::{DefaultStrategy, Strategy};

/// The strategy bound into a table.
///
/// The default variant carries no allocation so the empty table can be a
/// `const`.
#[derive(Clone)]
pub(crate) enum Scorer {
    Default,
    Custom(Arc<dyn Strategy>),
}

impl Scorer {
    fn as_strategy(&self) -> &dyn Strategy {
        match self {
            Scorer::Default => &DefaultStrategy,
            Scorer::Custom(strategy) => strategy.as_ref(),
        }
    }
}

impl fmt::Debug for Scorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scorer::Default => f.write_str("Default"),
            Scorer::Custom(_) => f.write_str("Custom"),
        }
    }
}

/// A key whose winning member differs between two tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reassignment<'a, M> {
    /// The key that moves.
    pub key: &'a [u8],
    /// Owner in the old table, `None` if it was empty.
    pub from: Option<&'a M>,
    /// Owner in the new table, `None` if it is empty.
    pub to: Option<&'a M>,
}

/// An immutable highest-random-weight table.
///
/// For a key, every entry's digest is scored with the table's strategy and
/// the entry with the strictly greatest score wins. Equal scores never
/// displace an earlier entry, so entry order only matters for exact ties.
///
/// Tables are never mutated after [`Builder::build`](crate::Builder::build)
/// and can be shared across threads freely.
///
/// ```
/// use rendezvous::{Builder, Fnv1a32};
///
/// let table = Builder::<String>::new()
///     .hash32(Fnv1a32::new)
///     .add_string_members(["foo.com", "bar.net"])
///     .build();
///
/// assert_eq!(table.get_str("mac:112233445566").map(String::as_str), Some("bar.net"));
/// ```
#[derive(Clone)]
pub struct Table<M> {
    entries: Vec<Entry<M>>,
    scorer: Scorer,
}

impl<M> Table<M> {
    /// The canonical empty table: no entries, default strategy, no allocation.
    pub const EMPTY: Self = Self {
        entries: Vec::new(),
        scorer: Scorer::Default,
    };

    /// Return the canonical empty table.
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    pub(crate) fn from_parts(entries: Vec<Entry<M>>, scorer: Scorer) -> Self {
        Self { entries, scorer }
    }

    /// Number of entries. Zero means every lookup returns `None`.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return the member that owns `key`, or `None` for an empty table.
    pub fn get(&self, key: &[u8]) -> Option<&M> {
        self.champion(key).map(|entry| &entry.member)
    }

    /// Same as [`get`](Self::get) for a string key.
    pub fn get_str(&self, key: &str) -> Option<&M> {
        if self.entries.is_empty() {
            return None;
        }
        self.get(key.as_bytes())
    }

    /// Return up to `n` members for `key`, highest score first.
    ///
    /// Ties keep entry order, so the first element always agrees with
    /// [`get`](Self::get). If `n` exceeds the entry count every member is
    /// returned.
    pub fn get_n(&self, key: &[u8], n: usize) -> Vec<&M> {
        if n == 0 || self.entries.is_empty() {
            return Vec::new();
        }

        let strategy = self.scorer.as_strategy();
        let mut scored: Vec<(u64, &Entry<M>)> = self
            .entries
            .iter()
            .map(|entry| (strategy.score(key, &entry.digest), entry))
            .collect();

        // Stable sort: equal scores stay in entry order.
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored
            .into_iter()
            .take(n)
            .map(|(_, entry)| &entry.member)
            .collect()
    }

    /// All entries, in the order they were added.
    pub fn entries(&self) -> &[Entry<M>] {
        &self.entries
    }

    /// All members, in entry order.
    pub fn members(&self) -> impl Iterator<Item = &M> {
        self.entries.iter().map(|entry| &entry.member)
    }

    /// The strategy this table scores with.
    pub fn strategy(&self) -> &dyn Strategy {
        self.scorer.as_strategy()
    }

    /// True if this table scores with [`DefaultStrategy`].
    pub fn has_default_strategy(&self) -> bool {
        matches!(self.scorer, Scorer::Default)
    }

    /// Compute which keys change owner between two tables.
    ///
    /// For each key in `keys`, the winning member is looked up in both `old`
    /// and `new`; a [`Reassignment`] is produced whenever they differ.
    pub fn diff<'a, K>(
        old: &'a Table<M>,
        new: &'a Table<M>,
        keys: &'a [K],
    ) -> Vec<Reassignment<'a, M>>
    where
        K: AsRef<[u8]>,
        M: PartialEq,
    {
        keys.iter()
            .filter_map(|key| {
                let key = key.as_ref();
                let from = old.get(key);
                let to = new.get(key);
                (from != to).then_some(Reassignment { key, from, to })
            })
            .collect()
    }

    fn champion(&self, key: &[u8]) -> Option<&Entry<M>> {
        let strategy = self.scorer.as_strategy();
        let mut entries = self.entries.iter();

        let mut champion = entries.next()?;
        let mut best = strategy.score(key, &champion.digest);

        for entry in entries {
            let score = strategy.score(key, &entry.digest);
            if score > best {
                champion = entry;
                best = score;
            }
        }

        Some(champion)
    }
}

impl<M> Default for Table<M> {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl<M: fmt::Debug> fmt::Debug for Table<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("entries", &self.entries)
            .field("strategy", &self.scorer)
            .finish()
    }
}
