//! const-generic unroll table
//!
//! `Count<N>: Unroll` calls a [`UnitOfWork`] once per index `0..N`, each call
//! a separate monomorphization `call::<I>`. the impls cover every count up to
//! 4096, the same limit `unroll!` expands, and are generated by the macro
//! crate: `Count<N + 1>` runs `Count<N>` and then calls `Index<N>`.

use crate::index::Index;

/// callable specialized per compile-time index.
///
/// the `unroll_count` counterpart of an `unroll!` body.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be called with a compile-time index",
    label = "expected a unit of work taking a single `Index<I>` argument",
    note = "closures cannot be generic over a const; implement `UnitOfWork` with `fn call<const I: usize>(&mut self, index: Index<I>)`"
)]
pub trait UnitOfWork {
    /// run iteration `I`.
    fn call<const I: usize>(&mut self, index: Index<I>);
}

impl<W: UnitOfWork + ?Sized> UnitOfWork for &mut W {
    #[inline(always)]
    fn call<const I: usize>(&mut self, index: Index<I>) {
        (**self).call(index)
    }
}

/// iteration count as a type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Count<const N: usize>;

/// fully unrolled iteration over `0..COUNT`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no unrolled expansion",
    label = "unsupported unroll count",
    note = "supported counts are 0 through 4096"
)]
pub trait Unroll {
    /// number of iterations.
    const COUNT: usize;

    /// call `work` with `Index<0>`, `Index<1>`, ..., in order.
    fn unroll<W: UnitOfWork + ?Sized>(work: &mut W);
}

/// call `work` once per index `0..N`, in order, each with its own
/// `Index<I>`.
#[inline(always)]
pub fn unroll_count<const N: usize, W>(work: &mut W)
where
    W: UnitOfWork + ?Sized,
    Count<N>: Unroll,
{
    <Count<N> as Unroll>::unroll(work)
}

spatial_unroll_macros::count_table!(4096);
