//! chain-hashmap: a separate-chaining hash map over a fixed-size bucket
//! array, with stable entry storage and position cursors.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: map semantics (unique keys, in-place mutable values) where the
//!   interesting machinery is the bucket/chain layout and an iterator that
//!   walks a sparse bucket array in both shared and mutable flavors.
//! - Layout:
//!   - A fixed-length `Vec` of buckets, each an intrusive singly-linked
//!     chain of slot keys with head/tail; chains append at the tail so a
//!     bucket preserves insertion order.
//!   - Entries live in a `slotmap::SlotMap` arena. Slots never move while
//!     an entry is live, so references handed out by lookup or
//!     `or_insert_*` alias stable storage, and the generational keys keep
//!     stale cursors from resolving to unrelated entries.
//!   - `Cursor`: a detached `(bucket, index-in-chain)` position with a
//!     canonical end sentinel one past the last bucket. Equality is
//!     structural over `(bucket, index)`, which makes `find(&k) == end()`
//!     the absence test and `begin() == end()` the emptiness test.
//!
//! Constraints
//! - The bucket count is fixed at construction (default 1000) and never
//!   changes; there is no rehashing, so an entry's bucket index is stable
//!   for its whole lifetime and load is absorbed by chain length.
//! - Insert policy is insert-or-overwrite: a present key keeps its entry
//!   and position, only the value changes. Overwrites are non-structural.
//! - Single-threaded semantics; `&mut self` exclusivity is the only
//!   synchronization. The container is plain data and stays `Send`/`Sync`
//!   when its parameters are.
//!
//! Invalidation
//! - Structural mutations (an insert that adds an entry, removal, clear)
//!   bump an internal epoch. Cursors carry the epoch they were minted
//!   under: stale cursors dereference to `None` and panic on advance,
//!   never silently land on another entry.
//!
//! Hasher
//! - Pluggable via `S: BuildHasher` (default `RandomState`); the bucket is
//!   `hash_one(key) % bucket_count` and collisions resolve by `Eq` along
//!   the chain.
//!
//! Non-goals
//! - No resizing or load-factor management, no thread-safety machinery,
//!   no persistence, no custom allocators.

mod chain_hash_map;
mod chain_hash_map_proptest;

// Public surface
pub use chain_hash_map::{
    ChainHashMap, Cursor, IntoIter, Iter, IterMut, KeyNotFound, DEFAULT_BUCKET_COUNT,
};
