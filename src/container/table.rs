//! FloatKeyContainer implementation
//!
//! Fixed arrays plus a live count; inserts shift, lookups snap to the
//! nearest stored key.

use tracing::{trace, warn};

use crate::config::{Config, OverflowPolicy};
use crate::domain::{KeyDomain, ValueDomain};
use crate::error::{FloatKvError, Result};

use super::search::{lower_bound, nearest_index};
use super::InsertOutcome;

/// Fixed-capacity table mapping float keys to values.
///
/// - `K`: integer domain converted keys are stored in
/// - `V`: value domain
/// - `N`: capacity
/// - `SCALE`: multiplier applied to a float key before truncation into `K`
///
/// Pick `SCALE` and `K` so the scaled key range fits `K`; out-of-range keys
/// saturate silently.
///
/// ## Concurrency
/// Single owner only. Mutation takes `&mut self` and nothing is locked, so a
/// container shared with an interrupt handler needs external exclusion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloatKeyContainer<K, V, const N: usize, const SCALE: i32> {
    /// Number of populated slots, always `<= N`
    pub(crate) len: usize,
    /// Converted keys, ascending over `[0, len)`
    pub(crate) keys: [K; N],
    /// Values, index-aligned with `keys`
    pub(crate) values: [V; N],
    config: Config,
}

impl<K, V, const N: usize, const SCALE: i32> FloatKeyContainer<K, V, N, SCALE>
where
    K: KeyDomain,
    V: ValueDomain,
{
    const PARAMS_OK: () = {
        assert!(N > 0, "capacity must be positive");
        assert!(N <= u32::MAX as usize, "capacity must fit the image count field");
        assert!(SCALE > 0, "scale coefficient must be positive");
    };

    /// Create an empty, zero-filled container with the default config
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create an empty, zero-filled container
    pub fn with_config(config: Config) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::PARAMS_OK;

        Self {
            len: 0,
            keys: [K::default(); N],
            values: [V::default(); N],
            config,
        }
    }

    /// Convert a float key into the stored key domain
    #[inline]
    pub fn convert(key: f64) -> K {
        K::from_scaled(key * f64::from(SCALE))
    }

    /// Insert a pair, keeping keys sorted.
    ///
    /// A new key equal to stored keys is placed before them. When the
    /// container is full the configured `OverflowPolicy` decides the outcome.
    pub fn insert(&mut self, key: f64, value: V) -> Result<InsertOutcome<K, V>> {
        let key = Self::convert(key);
        let index = lower_bound(&self.keys[..self.len], key);

        if self.len < N {
            self.keys.copy_within(index..self.len, index + 1);
            self.values.copy_within(index..self.len, index + 1);
            self.keys[index] = key;
            self.values[index] = value;
            self.len += 1;

            trace!(?key, index, len = self.len, "inserted");
            return Ok(InsertOutcome::Inserted { index });
        }

        match self.config.overflow_policy {
            OverflowPolicy::Reject => {
                warn!(?key, capacity = N, "insert rejected, container full");
                Err(FloatKvError::CapacityExceeded { capacity: N })
            }
            OverflowPolicy::EvictHighest => {
                if index == N {
                    warn!(?key, "new key is highest, discarded");
                    return Ok(InsertOutcome::Discarded);
                }
                let evicted = (self.keys[N - 1], self.values[N - 1]);
                self.keys.copy_within(index..N - 1, index + 1);
                self.values.copy_within(index..N - 1, index + 1);
                self.keys[index] = key;
                self.values[index] = value;

                warn!(?key, evicted = ?evicted.0, "highest entry evicted");
                Ok(InsertOutcome::Evicted {
                    index,
                    key: evicted.0,
                    value: evicted.1,
                })
            }
            OverflowPolicy::EvictLowest => {
                if index == 0 {
                    warn!(?key, "new key is lowest, discarded");
                    return Ok(InsertOutcome::Discarded);
                }
                let evicted = (self.keys[0], self.values[0]);
                self.keys.copy_within(1..index, 0);
                self.values.copy_within(1..index, 0);
                self.keys[index - 1] = key;
                self.values[index - 1] = value;

                warn!(?key, evicted = ?evicted.0, "lowest entry evicted");
                Ok(InsertOutcome::Evicted {
                    index: index - 1,
                    key: evicted.0,
                    value: evicted.1,
                })
            }
        }
    }

    /// Index of the stored key nearest to `key`
    pub fn find_index(&self, key: f64) -> Result<usize> {
        let target = Self::convert(key);
        let index = nearest_index(self.keys(), target).ok_or(FloatKvError::Empty)?;
        trace!(?target, index, "nearest key");
        Ok(index)
    }

    /// Index, stored key and value of the nearest entry
    pub fn nearest(&self, key: f64) -> Result<(usize, K, V)> {
        let index = self.find_index(key)?;
        Ok((index, self.keys[index], self.values[index]))
    }

    /// Value of the nearest entry
    pub fn get(&self, key: f64) -> Result<V> {
        let index = self.find_index(key)?;
        Ok(self.values[index])
    }

    /// Overwrite the value of the nearest entry, returning its index.
    ///
    /// Never inserts and never reorders.
    pub fn set(&mut self, key: f64, value: V) -> Result<usize> {
        let index = self.find_index(key)?;
        self.values[index] = value;
        Ok(index)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of populated slots
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Maximum number of pairs
    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Live keys in ascending order
    pub fn keys(&self) -> &[K] {
        &self.keys[..self.len]
    }

    /// Live values, aligned with `keys()`
    pub fn values(&self) -> &[V] {
        &self.values[..self.len]
    }

    /// Pair stored at `index`, if populated
    pub fn entry(&self, index: usize) -> Option<(K, V)> {
        (index < self.len).then(|| (self.keys[index], self.values[index]))
    }

    /// Live pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (K, V)> + '_ {
        self.keys().iter().copied().zip(self.values().iter().copied())
    }

    /// Every key slot, including stale ones past `len()`
    pub fn raw_keys(&self) -> &[K; N] {
        &self.keys
    }

    /// Every value slot, including stale ones past `len()`
    pub fn raw_values(&self) -> &[V; N] {
        &self.values
    }
}

impl<K, V, const N: usize, const SCALE: i32> Default for FloatKeyContainer<K, V, N, SCALE>
where
    K: KeyDomain,
    V: ValueDomain,
{
    fn default() -> Self {
        Self::new()
    }
}
