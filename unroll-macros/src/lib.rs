//! proc-macro expansion for `spatial_unroll`.
//!
//! use the re-export `spatial_unroll::unroll!`, not this crate directly.
//!
//! the expander replicates the loop body once per element of the requested
//! sequence. each copy sits in its own block with the loop variable bound as
//! a `const`, so no loop construct survives expansion and every iteration
//! sees a distinct compile-time constant:
//!
//! ```text
//! unroll!(i8, 3..0, |i| body)
//!
//! {
//!     { const i: i8 = 3; body; }
//!     { const i: i8 = 2; body; }
//!     { const i: i8 = 1; body; }
//! }
//! ```
//!
//! sequences are computed with `spatial_range`, the same arithmetic the
//! runtime `Range<T>` uses.

use proc_macro::TokenStream;
use syn::{parse_macro_input, LitInt};

mod expand;
mod parser;

#[cfg(test)]
mod tests;

use expand::{expand_count_table, expand_unroll};
use parser::UnrollInput;

/// unroll a loop body over a compile-time sequence.
///
/// # syntax
///
/// ```text
/// unroll!(N, |i| body)                // usize, 0..N
/// unroll!(T, N, |i| body)             // T, 0..N
/// unroll!(T, S..E, |i| body)          // T, S..E (ascending or descending)
/// unroll!(S..E, |i| body)             // usize, S..E
/// unroll!([a, b, c], |i| body)        // explicit sequence
/// unroll!(T, [a, b, c], |i| body)     // explicit sequence over T
/// ```
///
/// bounds are integer literals (optionally negative). without an explicit
/// element type, a literal suffix (`1i8..10`) selects it, otherwise `usize`.
/// at most 4096 iterations are expanded.
#[proc_macro]
pub fn unroll(input: TokenStream) -> TokenStream {
    let invocation = parse_macro_input!(input as UnrollInput);

    match expand_unroll(&invocation) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

/// `Unroll` impls for every `Count<N>` with `N` up to the given literal.
///
/// used once by `spatial_unroll` to build its count table.
#[doc(hidden)]
#[proc_macro]
pub fn count_table(input: TokenStream) -> TokenStream {
    let max = parse_macro_input!(input as LitInt);

    match expand_count_table(&max) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
