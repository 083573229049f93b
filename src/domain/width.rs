//! Fixed-width byte encoding
//!
//! Every domain type occupies exactly `WIDTH` bytes in the image, written
//! little-endian with no padding.

use bytes::{Buf, BufMut};

/// A type with a fixed little-endian byte representation
pub trait FixedWidth: Sized {
    /// Encoded size in bytes
    const WIDTH: usize;

    /// Append the little-endian bytes of `self`
    fn put_le<B: BufMut>(&self, buf: &mut B);

    /// Consume `WIDTH` bytes and decode them.
    ///
    /// Panics if fewer than `WIDTH` bytes remain; callers check lengths first.
    fn get_le<B: Buf>(buf: &mut B) -> Self;
}

macro_rules! impl_fixed_width {
    ($($ty:ty => $put:ident, $get:ident);* $(;)?) => {
        $(
            impl FixedWidth for $ty {
                const WIDTH: usize = std::mem::size_of::<$ty>();

                #[inline]
                fn put_le<B: BufMut>(&self, buf: &mut B) {
                    buf.$put(*self);
                }

                #[inline]
                fn get_le<B: Buf>(buf: &mut B) -> Self {
                    buf.$get()
                }
            }
        )*
    };
}

impl_fixed_width! {
    u8 => put_u8, get_u8;
    i8 => put_i8, get_i8;
    u16 => put_u16_le, get_u16_le;
    i16 => put_i16_le, get_i16_le;
    u32 => put_u32_le, get_u32_le;
    i32 => put_i32_le, get_i32_le;
    u64 => put_u64_le, get_u64_le;
    i64 => put_i64_le, get_i64_le;
}
