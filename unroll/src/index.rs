//! compile-time index marker

use core::fmt;

/// an index known at compile time, carried in the type.
///
/// zero-sized. `Index<2>` and `Index<3>` are different types, so code
/// generic over `I` is instantiated separately for every index it is called
/// with.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index<const I: usize>;

impl<const I: usize> Index<I> {
    /// the index value.
    pub const VALUE: usize = I;

    /// the index value.
    #[inline(always)]
    pub const fn value(self) -> usize {
        I
    }
}

impl<const I: usize> From<Index<I>> for usize {
    #[inline(always)]
    fn from(_: Index<I>) -> usize {
        I
    }
}

impl<const I: usize> fmt::Debug for Index<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Index<{}>", I)
    }
}

impl<const I: usize> fmt::Display for Index<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", I)
    }
}
