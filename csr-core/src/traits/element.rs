//! Numeric element constraints for CSR storage
//!
//! Index and value types are chosen at compile time. Their byte widths are
//! compared against the widths recorded in stored metadata at the load
//! boundary; buffers are never reinterpreted under a different width.

use bytemuck::Pod;
use core::fmt::Debug;
use core::ops::Sub;

/// Trait for types usable as row pointers and column indices
///
/// All index types must be plain old data so store buffers can be decoded
/// without per-element parsing, totally ordered so index pointer
/// monotonicity can be checked, and subtractable so borrowed pointers can be
/// rebased to zero.
pub trait IndexType: Pod + Ord + Sub<Output = Self> + Debug + Send + Sync + 'static {
    /// Width in bytes as recorded in `bytes_per_ind`
    const WIDTH: u32 = core::mem::size_of::<Self>() as u32;

    /// Get the size in bytes of this index type
    fn size_bytes() -> usize {
        core::mem::size_of::<Self>()
    }

    /// Convert a count or offset into this type, `None` if it does not fit
    fn from_usize(value: usize) -> Option<Self>;

    /// Convert to an offset, `None` if negative or too large for `usize`
    fn try_index(self) -> Option<usize>;

    /// Convert to an offset
    ///
    /// Only meaningful for values already checked with [`try_index`]; every
    /// index in a validated matrix qualifies.
    ///
    /// [`try_index`]: IndexType::try_index
    fn index(self) -> usize;
}

/// Trait for types that can be stored as nonzero values
pub trait ValueType: Pod + PartialEq + Debug + Send + Sync + 'static {
    /// Width in bytes as recorded in `bytes_per_val`
    const WIDTH: u32 = core::mem::size_of::<Self>() as u32;

    /// Get the size in bytes of this value type
    fn size_bytes() -> usize {
        core::mem::size_of::<Self>()
    }

    /// The literal one used for identity entries
    fn one() -> Self;

    /// Numeric cast from a count, truncating or rounding like `as`
    ///
    /// Used for placeholder fills where only the sequence matters.
    fn from_usize(value: usize) -> Self;
}

macro_rules! impl_index_type {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IndexType for $ty {
                #[inline]
                fn from_usize(value: usize) -> Option<Self> {
                    <$ty>::try_from(value).ok()
                }

                #[inline]
                fn try_index(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }

                #[inline]
                fn index(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

impl_index_type!(u16, u32, u64, usize, i32, i64);

macro_rules! impl_value_type {
    ($one:expr => $($ty:ty),* $(,)?) => {
        $(
            impl ValueType for $ty {
                #[inline]
                fn one() -> Self {
                    $one
                }

                #[inline]
                fn from_usize(value: usize) -> Self {
                    value as $ty
                }
            }
        )*
    };
}

impl_value_type!(1.0 => f32, f64);
impl_value_type!(1 => i8, i16, i32, i64, u8, u16, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_widths() {
        assert_eq!(<u16 as IndexType>::WIDTH, 2);
        assert_eq!(<u32 as IndexType>::WIDTH, 4);
        assert_eq!(<i64 as IndexType>::WIDTH, 8);
        assert_eq!(<u64 as IndexType>::size_bytes(), 8);
    }

    #[test]
    fn test_index_conversions() {
        assert_eq!(<u16 as IndexType>::from_usize(65_535), Some(u16::MAX));
        assert_eq!(<u16 as IndexType>::from_usize(65_536), None);
        assert_eq!(<i32 as IndexType>::from_usize(7), Some(7));
        assert_eq!((-1i32).try_index(), None);
        assert_eq!(42u32.try_index(), Some(42));
        assert_eq!(42u64.index(), 42);
    }

    #[test]
    fn test_value_literals() {
        assert_eq!(<f64 as ValueType>::one(), 1.0);
        assert_eq!(<u8 as ValueType>::one(), 1);
        assert_eq!(<f32 as ValueType>::WIDTH, 4);
        assert_eq!(<f32 as ValueType>::from_usize(9), 9.0);
        // Placeholder fills wrap like a C cast
        assert_eq!(<u8 as ValueType>::from_usize(257), 1);
    }
}
