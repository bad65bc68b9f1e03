//! half-open ranges and their iterator
//!
//! `Range<T>` only stores the two bounds. direction and length are derived:
//! - `begin < end`: `begin, begin + 1, ..., end - 1`
//! - `begin > end`: `begin, begin - 1, ..., end + 1`
//! - `begin == end`: nothing

use crate::integral::Integral;
use core::iter::FusedIterator;

/// half-open range `[begin, end)` counting towards `end` in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range<T> {
    pub(crate) begin: T,
    pub(crate) end: T,
}

impl<T: Integral> Range<T> {
    /// create a range from its bounds.
    #[inline]
    pub const fn new(begin: T, end: T) -> Self {
        Self { begin, end }
    }

    /// first element (always included unless the range is empty).
    #[inline]
    pub const fn begin(&self) -> T {
        self.begin
    }

    /// excluded bound.
    #[inline]
    pub const fn end(&self) -> T {
        self.end
    }

    /// iterate the elements in range order.
    ///
    /// # panics
    ///
    /// if the range length does not fit in `usize`.
    #[inline]
    pub fn iter(&self) -> RangeIter<T> {
        RangeIter::new(*self)
    }
}

impl<T: Integral> IntoIterator for Range<T> {
    type Item = T;
    type IntoIter = RangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        RangeIter::new(self)
    }
}

impl<T: Integral> IntoIterator for &Range<T> {
    type Item = T;
    type IntoIter = RangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        RangeIter::new(*self)
    }
}

/// iterator over a [`Range`], exact-size and double-ended.
#[derive(Debug, Clone)]
pub struct RangeIter<T> {
    range: Range<T>,
    front: usize,
    back: usize,
}

impl<T: Integral> RangeIter<T> {
    fn new(range: Range<T>) -> Self {
        let len = match T::distance(range.begin, range.end) {
            Some(len) => len,
            None => panic!(
                "range {}..{} of {} is longer than usize::MAX",
                range.begin,
                range.end,
                T::NAME
            ),
        };
        Self {
            range,
            front: 0,
            back: len,
        }
    }
}

impl<T: Integral> Iterator for RangeIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let value = T::step(self.range.begin, self.range.end, self.front);
        self.front += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T: Integral> DoubleEndedIterator for RangeIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(T::step(self.range.begin, self.range.end, self.back))
    }
}

impl<T: Integral> ExactSizeIterator for RangeIter<T> {}

impl<T: Integral> FusedIterator for RangeIter<T> {}

/// range `[begin, end)` over an explicit element type.
#[inline]
pub const fn integer_range<T: Integral>(begin: T, end: T) -> Range<T> {
    Range::new(begin, end)
}

/// range `[begin, end)` over `usize`.
#[inline]
pub const fn index_range(begin: usize, end: usize) -> Range<usize> {
    Range::new(begin, end)
}

/// the first `count` naturals `0..count` over an explicit element type.
#[inline]
pub const fn naturals<T: Integral>(count: T) -> Range<T> {
    Range::new(T::ZERO, count)
}

/// the first `count` indices `0..count`.
#[inline]
pub const fn indices(count: usize) -> Range<usize> {
    Range::new(0, count)
}
