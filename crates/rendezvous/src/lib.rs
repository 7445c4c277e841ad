//! Weighted rendezvous (highest-random-weight) hashing.
//!
//! A [`Table`] routes a key to exactly one of a fixed set of members: every
//! member's digest is scored against the key with a [`Strategy`] and the
//! highest score wins. The same key always lands on the same member, and a
//! membership change only moves the keys whose winner actually changed:
//!
//! - adding a member moves a key only if the new member outscores the key's
//!   current owner;
//! - removing a member moves only the keys that member owned.
//!
//! This crate provides:
//! - [`Strategy`] — the scoring function, with [`DefaultStrategy`] (FNV-1a 64)
//!   and the [`Hash32`] / [`Hash64`] adapters over digest constructions.
//! - [`Fnv1a32`] / [`Fnv1a64`] — streaming FNV-1a digests.
//! - [`Entry`] — a member paired with its digest.
//! - [`Table`] — the immutable lookup table, plus [`Table::diff`] for
//!   planning key movement between two tables.
//! - [`Builder`] — a reusable fluent builder that resets after each build.
//! - [`TableConfig`] — TOML configuration for string-membered tables.

mod builder;
mod config;
mod digest;
mod entry;
mod error;
mod strategy;
mod table;

pub use builder::Builder;
pub use config::{MemberConfig, StrategyKind, TableConfig};
pub use digest::{Fnv1a32, Fnv1a64, Hasher32};
pub use entry::Entry;
pub use error::ConfigError;
pub use strategy::{DefaultStrategy, Hash32, Hash64, Strategy};
pub use table::{Reassignment, Table};
