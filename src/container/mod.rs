//! Container Module
//!
//! The sorted keyed store: a fixed number of slots holding converted keys in
//! ascending order, a parallel value array and a live element count.
//!
//! ## Responsibilities
//! - Convert float keys into the integer key domain
//! - Keep keys sorted on insert by shifting (O(n), no allocation)
//! - Nearest-key lookup for `get`/`set`
//! - Police inserts into a full container via `OverflowPolicy`
//!
//! ## Data Layout
//! ```text
//!            0        1        2            len         N-1
//! keys   [ k0  |   k1   |   k2   | ... |  stale | ... | stale ]
//! values [ v0  |   v1   |   v2   | ... |  stale | ... | stale ]
//!          └────── live, k0 <= k1 <= k2 ──┘
//! ```

mod search;
mod table;

pub use search::nearest_index;
pub use table::FloatKeyContainer;

/// Result of a successful `insert`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome<K, V> {
    /// The pair was stored at `index`
    Inserted { index: usize },

    /// The pair was stored at `index` and the displaced pair was dropped
    Evicted { index: usize, key: K, value: V },

    /// The container was full and the new pair itself was the one dropped
    Discarded,
}
