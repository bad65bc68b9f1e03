//! # spatial unroll - compile-time loop unrolling
//!
//! every iteration of an unrolled loop gets its index as a compile-time
//! constant, so the body can use it where only constants are allowed:
//! const generic arguments, array lengths, `match` on types. nothing is left
//! for the optimizer to decide; the expansion is straight-line code.
//!
//! two entry points:
//!
//! | entry point | element type | index is |
//! |-------------|--------------|----------|
//! | [`unroll!`] | any primitive integer | a `const` item in the body |
//! | [`unroll_count`] | `usize` | the const generic of [`Index<I>`] |
//!
//! ## unroll! forms
//!
//! ```rust
//! use spatial_unroll::unroll;
//!
//! let mut seen = Vec::new();
//! unroll!(5, |i| seen.push(i));
//! assert_eq!(seen, [0, 1, 2, 3, 4]);
//!
//! // explicit element type, half-open range, counting down
//! let mut down = Vec::new();
//! unroll!(i8, 10..1, |i| down.push(i));
//! assert_eq!(down, [10, 9, 8, 7, 6, 5, 4, 3, 2]);
//!
//! // usize range
//! let mut sum = 0;
//! unroll!(3..6, |i| sum += i);
//! assert_eq!(sum, 12);
//!
//! // explicit sequence
//! let mut picked = Vec::new();
//! unroll!(u16, [4, 1, 3], |i| picked.push(i));
//! assert_eq!(picked, [4, 1, 3]);
//! ```
//!
//! ## the index is a constant
//!
//! ```rust
//! use spatial_unroll::unroll;
//!
//! struct Lane<const N: usize>;
//!
//! impl<const N: usize> Lane<N> {
//!     fn width(&self) -> usize {
//!         [0u8; N].len()
//!     }
//! }
//!
//! let mut widths = 0;
//! unroll!(4, |i| widths += Lane::<i>.width());
//! assert_eq!(widths, 0 + 1 + 2 + 3);
//! ```
//!
//! ## trait form
//!
//! closures cannot be generic over a const, so per-index specialization
//! through a function call goes through [`UnitOfWork`]:
//!
//! ```rust
//! use spatial_unroll::{unroll_count, Index, UnitOfWork};
//!
//! struct Squares(Vec<usize>);
//!
//! impl UnitOfWork for Squares {
//!     fn call<const I: usize>(&mut self, _index: Index<I>) {
//!         const fn square(n: usize) -> usize { n * n }
//!         self.0.push(square(I));
//!     }
//! }
//!
//! let mut squares = Squares(Vec::new());
//! unroll_count::<4, _>(&mut squares);
//! assert_eq!(squares.0, [0, 1, 4, 9]);
//! ```
//!
//! ## compile-time contract
//!
//! bounds must be literals. a runtime value is rejected at compile time:
//!
//! ```rust,compile_fail
//! use spatial_unroll::unroll;
//!
//! let n = 4;
//! unroll!(n, |i| { let _ = i; });
//! ```
//!
//! so is a literal that does not fit the element type:
//!
//! ```rust,compile_fail
//! use spatial_unroll::unroll;
//!
//! unroll!(u8, 0..300, |i| { let _ = i; });
//! ```
//!
//! and a count past the 4096 iterations the table covers:
//!
//! ```rust,compile_fail
//! use spatial_unroll::{unroll_count, Index, UnitOfWork};
//!
//! struct Nop;
//! impl UnitOfWork for Nop {
//!     fn call<const I: usize>(&mut self, _index: Index<I>) {}
//! }
//!
//! unroll_count::<4097, _>(&mut Nop);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

mod index;

// core unroll table
mod unroll;


pub use index::Index;
pub use spatial_range::{
    index_range, indices, integer_range, naturals, Integral, Range, RangeIter,
};
pub use spatial_unroll_macros::unroll;
pub use unroll::{unroll_count, Count, UnitOfWork, Unroll};
