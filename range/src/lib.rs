//! # spatial range - compile-time integer ranges
//!
//! half-open ranges over any primitive integer type, evaluated entirely by
//! `const fn`. the begin bound is always included and the end bound always
//! excluded, in both directions:
//!
//! ```rust
//! use spatial_range::Range;
//!
//! const UP: [i8; 9] = Range::<i8>::new(1, 10).sequence();
//! const DOWN: [i8; 9] = Range::<i8>::new(10, 1).sequence();
//!
//! assert_eq!(UP, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
//! assert_eq!(DOWN, [10, 9, 8, 7, 6, 5, 4, 3, 2]);
//! ```
//!
//! equal bounds give an empty range, not an error:
//!
//! ```rust
//! use spatial_range::index_range;
//!
//! const EMPTY: [usize; 0] = index_range(7, 7).sequence();
//! assert!(EMPTY.is_empty());
//! ```
//!
//! asking for a sequence of the wrong length is rejected during const
//! evaluation:
//!
//! ```rust,compile_fail
//! use spatial_range::Range;
//!
//! const BAD: [u8; 4] = Range::<u8>::new(0, 5).sequence();
//! ```
//!
//! the macro crate uses the same arithmetic through [`Integral`] to expand
//! `unroll!` invocations, so a range expanded at compile time and a range
//! inspected at run time always agree.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

mod integral;
mod range;

pub use integral::Integral;
pub use range::{index_range, indices, integer_range, naturals, Range, RangeIter};
