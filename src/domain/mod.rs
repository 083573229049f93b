//! Domain Module
//!
//! Integer domains for stored keys and values.
//!
//! ## Responsibilities
//! - Map floating-point keys into an integer key domain (lossy, one-way)
//! - Measure key distance for nearest-key lookup
//! - Fixed-width little-endian encoding for the persisted image
//!
//! Keys and values are never stored as floats: the target hardware has no
//! FPU, so every comparison after conversion is an integer comparison.

mod width;

use std::fmt::Debug;

pub use width::FixedWidth;

/// A key type the container can order and search
pub trait KeyDomain: FixedWidth + Copy + Ord + Default + Debug {
    /// Truncate an already-scaled float into this domain.
    ///
    /// Follows `as` semantics: rounds toward zero, saturates at the type
    /// bounds, NaN becomes zero. No overflow is reported.
    fn from_scaled(scaled: f64) -> Self;

    /// Absolute difference between two keys
    fn distance(self, other: Self) -> u64;
}

/// A value type the container can store
pub trait ValueDomain: FixedWidth + Copy + Default + Debug {}

impl<T: FixedWidth + Copy + Default + Debug> ValueDomain for T {}

macro_rules! impl_key_domain {
    ($($ty:ty),* $(,)?) => {
        $(
            impl KeyDomain for $ty {
                #[inline]
                fn from_scaled(scaled: f64) -> Self {
                    scaled as $ty
                }

                #[inline]
                fn distance(self, other: Self) -> u64 {
                    self.abs_diff(other) as u64
                }
            }
        )*
    };
}

impl_key_domain!(i8, i16, i32, i64, u8, u16, u32, u64);
