//! Codec Module
//!
//! Raw image of a container's whole state, written to and read from a
//! `ByteStore` at a caller-chosen base address.
//!
//! ## Image Format
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Count (4 bytes)                                         │
//! │   populated slots, u32 LE                               │
//! ├─────────────────────────────────────────────────────────┤
//! │ Keys (N * K::WIDTH bytes)                               │
//! │   every key slot, stale ones included, LE               │
//! ├─────────────────────────────────────────────────────────┤
//! │ Values (N * V::WIDTH bytes)                             │
//! │   every value slot, stale ones included, LE             │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The image is always full size regardless of how many slots are live, so
//! every field sits at an address computable from the type parameters alone.
//! There is no magic, version or checksum: loading an image written by a
//! container with a different capacity or key/value types is the caller's
//! mistake and is not detected, apart from a count larger than the capacity.

mod image;
mod layout;

pub use layout::ImageLayout;

/// Width of the element count field
pub(crate) const COUNT_WIDTH: usize = 4;
