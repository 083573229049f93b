//! Image encode/decode and byte-store transfer

use bytes::{Bytes, BytesMut};
use tracing::{debug, warn};

use crate::container::FloatKeyContainer;
use crate::domain::{FixedWidth, KeyDomain, ValueDomain};
use crate::error::{FloatKvError, Result};
use crate::store::ByteStore;

use super::ImageLayout;

impl<K, V, const N: usize, const SCALE: i32> FloatKeyContainer<K, V, N, SCALE>
where
    K: KeyDomain,
    V: ValueDomain,
{
    /// Layout of this container's image
    pub const LAYOUT: ImageLayout = ImageLayout::of::<K, V, N>();

    /// Encode the whole state, stale slots included
    pub fn encode_image(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(Self::LAYOUT.len);

        // len <= N <= u32::MAX, checked when the container was built
        (self.len as u32).put_le(&mut buf);
        for key in &self.keys {
            key.put_le(&mut buf);
        }
        for value in &self.values {
            value.put_le(&mut buf);
        }

        buf.freeze()
    }

    /// Replace the whole state with a decoded image.
    ///
    /// On error the container is left unchanged.
    pub fn decode_image(&mut self, image: &[u8]) -> Result<()> {
        if image.len() != Self::LAYOUT.len {
            return Err(FloatKvError::CorruptImage(format!(
                "expected {} bytes, got {}",
                Self::LAYOUT.len,
                image.len()
            )));
        }

        let mut buf = image;
        let len = u32::get_le(&mut buf) as usize;
        if len > N {
            return Err(FloatKvError::CorruptImage(format!(
                "count {} exceeds capacity {}",
                len, N
            )));
        }

        let mut keys = [K::default(); N];
        for slot in keys.iter_mut() {
            *slot = K::get_le(&mut buf);
        }
        let mut values = [V::default(); N];
        for slot in values.iter_mut() {
            *slot = V::get_le(&mut buf);
        }

        self.len = len;
        self.keys = keys;
        self.values = values;
        Ok(())
    }

    /// Write the image to `store` starting at `base`.
    ///
    /// Bytes go out one at a time in image order. If a write fails, bytes
    /// before the failing address have already been written and the rest of
    /// the region is untouched; the error carries the failing address and
    /// how many bytes were written.
    pub fn save<S: ByteStore>(&self, mut store: S, base: usize) -> Result<()> {
        let total = Self::LAYOUT.len;
        Self::LAYOUT.end(base)?;

        debug!(base, len = total, count = self.len, "saving image");

        let image = self.encode_image();
        for (offset, &byte) in image.iter().enumerate() {
            let address = base + offset;
            store.write(address, byte).map_err(|e| {
                warn!(address, completed = offset, "store write failed");
                FloatKvError::StoreWrite {
                    address,
                    completed: offset,
                    total,
                    source: Box::new(e),
                }
            })?;
        }

        debug!(base, len = total, "image saved");
        Ok(())
    }

    /// Replace the whole state with the image found at `base` in `store`.
    ///
    /// Every byte is read before anything is decoded, so a failed read or a
    /// rejected image leaves the container unchanged.
    pub fn load<S: ByteStore>(&mut self, mut store: S, base: usize) -> Result<()> {
        let total = Self::LAYOUT.len;
        Self::LAYOUT.end(base)?;

        debug!(base, len = total, "loading image");

        let mut image = Vec::with_capacity(total);
        for offset in 0..total {
            let address = base + offset;
            let byte = store.read(address).map_err(|e| {
                warn!(address, completed = offset, "store read failed");
                FloatKvError::StoreRead {
                    address,
                    completed: offset,
                    total,
                    source: Box::new(e),
                }
            })?;
            image.push(byte);
        }

        self.decode_image(&image)?;

        debug!(base, len = total, count = self.len, "image loaded");
        Ok(())
    }
}
