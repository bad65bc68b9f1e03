// element types a range can be built over

use crate::range::Range;
use core::fmt::{Debug, Display};
use core::hash::Hash;
use core::str::FromStr;

mod sealed {
    pub trait Sealed {}
}

/// primitive integer usable as a range element.
///
/// sealed: implemented for every signed and unsigned primitive integer. the
/// methods mirror the `const fn` inherent methods on `Range<T>` so generic
/// code (the iterator, the macro expander) shares one implementation.
pub trait Integral:
    sealed::Sealed + Copy + Ord + Hash + Debug + Display + FromStr + Send + Sync + 'static
{
    /// primitive type name, e.g. `"i8"`.
    const NAME: &'static str;

    /// additive identity.
    const ZERO: Self;

    /// number of elements in `[begin, end)`, `None` if it exceeds `usize`.
    fn distance(begin: Self, end: Self) -> Option<usize>;

    /// element at `pos` of the range `[begin, end)`.
    ///
    /// # panics
    ///
    /// if `pos` is not below the range length.
    fn step(begin: Self, end: Self, pos: usize) -> Self;
}

macro_rules! impl_integral {
    ($($t:ident)*) => {$(
        impl sealed::Sealed for $t {}

        impl Integral for $t {
            const NAME: &'static str = stringify!($t);
            const ZERO: Self = 0;

            #[inline]
            fn distance(begin: Self, end: Self) -> Option<usize> {
                Range::<$t>::new(begin, end).try_len()
            }

            #[inline]
            fn step(begin: Self, end: Self, pos: usize) -> Self {
                Range::<$t>::new(begin, end).nth(pos)
            }
        }

        impl Range<$t> {
            /// true when the range counts upwards.
            #[inline]
            pub const fn is_ascending(&self) -> bool {
                self.begin < self.end
            }

            /// true when begin equals end.
            #[inline]
            pub const fn is_empty(&self) -> bool {
                self.begin == self.end
            }

            /// element count, `None` if it does not fit in `usize`.
            #[inline]
            pub const fn try_len(&self) -> Option<usize> {
                let distance = self.begin.abs_diff(self.end);
                if distance as u128 > usize::MAX as u128 {
                    None
                } else {
                    Some(distance as usize)
                }
            }

            /// element count: `|end - begin|`.
            ///
            /// # panics
            ///
            /// if the count does not fit in `usize` (a compile error when
            /// evaluated in const context).
            #[inline]
            pub const fn len(&self) -> usize {
                match self.try_len() {
                    Some(len) => len,
                    None => panic!("range length does not fit in usize"),
                }
            }

            /// element at `pos`.
            ///
            /// # panics
            ///
            /// if `pos >= self.len()`.
            #[inline]
            pub const fn nth(&self, pos: usize) -> $t {
                assert!(pos < self.len(), "position is outside the range");
                // pos < len <= 2^BITS, so the truncating cast is exact modulo 2^BITS
                // and the wrapping offset lands on the in-range result.
                let offset = pos as $t;
                if self.is_ascending() {
                    self.begin.wrapping_add(offset)
                } else {
                    self.begin.wrapping_sub(offset)
                }
            }

            /// element at `pos`, `None` past the end.
            #[inline]
            pub const fn get(&self, pos: usize) -> Option<$t> {
                match self.try_len() {
                    Some(len) if pos < len => Some(self.nth(pos)),
                    _ => None,
                }
            }

            /// materialize the range as an array.
            ///
            /// # panics
            ///
            /// if `LEN` differs from `self.len()` (a compile error when
            /// evaluated in const context).
            pub const fn sequence<const LEN: usize>(&self) -> [$t; LEN] {
                assert!(LEN == self.len(), "sequence length must equal the range length");

                let mut out = [0; LEN];
                let mut pos = 0;
                while pos < LEN {
                    out[pos] = self.nth(pos);
                    pos += 1;
                }
                out
            }
        }
    )*};
}

impl_integral!(u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize);
