//! Image layout arithmetic

use crate::domain::FixedWidth;
use crate::error::{FloatKvError, Result};

use super::COUNT_WIDTH;

/// Byte offsets of each region of an image, relative to its base address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageLayout {
    pub count_offset: usize,
    pub keys_offset: usize,
    pub values_offset: usize,
    /// Total image size in bytes
    pub len: usize,
}

impl ImageLayout {
    /// Layout for a container of capacity `N` over `K` keys and `V` values
    pub const fn of<K: FixedWidth, V: FixedWidth, const N: usize>() -> Self {
        let keys_offset = COUNT_WIDTH;
        let values_offset = keys_offset + N * K::WIDTH;
        Self {
            count_offset: 0,
            keys_offset,
            values_offset,
            len: values_offset + N * V::WIDTH,
        }
    }

    /// Address one past the last image byte when placed at `base`
    pub fn end(&self, base: usize) -> Result<usize> {
        base.checked_add(self.len)
            .ok_or(FloatKvError::AddressOverflow { base, len: self.len })
    }
}
