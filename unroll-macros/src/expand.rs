//! `unroll!` expansion.

use crate::parser::{Bound, Domain, UnrollInput};
use proc_macro2::{Literal, Span, TokenStream};
use quote::quote;
use spatial_range::{integer_range, naturals, Integral, Range};
use syn::{Error, Ident, LitInt, Result};

/// upper bound on replicated bodies per invocation.
pub const MAX_ITERATIONS: usize = 4096;

/// expand an invocation into one block per sequence element.
pub fn expand_unroll(input: &UnrollInput) -> Result<TokenStream> {
    let ty = element_type(input);
    let values = match ty.to_string().as_str() {
        "u8" => sequence::<u8>(&input.domain)?,
        "u16" => sequence::<u16>(&input.domain)?,
        "u32" => sequence::<u32>(&input.domain)?,
        "u64" => sequence::<u64>(&input.domain)?,
        "u128" => sequence::<u128>(&input.domain)?,
        "usize" => sequence::<usize>(&input.domain)?,
        "i8" => sequence::<i8>(&input.domain)?,
        "i16" => sequence::<i16>(&input.domain)?,
        "i32" => sequence::<i32>(&input.domain)?,
        "i64" => sequence::<i64>(&input.domain)?,
        "i128" => sequence::<i128>(&input.domain)?,
        "isize" => sequence::<isize>(&input.domain)?,
        other => {
            return Err(Error::new(
                ty.span(),
                format!(
                    "expected a primitive integer type or an integer literal count, found `{}`",
                    other
                ),
            ))
        }
    };

    let binding = &input.binding;
    let body = &input.body;

    let steps = values.iter().map(|value| {
        let value = literal(value, binding.span());
        quote! {
            {
                #[allow(non_upper_case_globals, dead_code)]
                const #binding: ::core::primitive::#ty = #value;
                #body;
            }
        }
    });

    Ok(quote! {
        {
            #(#steps)*
        }
    })
}

/// explicit type, else the first literal suffix, else `usize`.
fn element_type(input: &UnrollInput) -> Ident {
    if let Some(ty) = &input.elem {
        return ty.clone();
    }

    match input.domain.bounds().into_iter().find(|b| !b.suffix().is_empty()) {
        Some(bound) => Ident::new(bound.suffix(), bound.span()),
        None => Ident::new("usize", Span::call_site()),
    }
}

/// decimal text of every value the loop variable takes, in order.
fn sequence<T: Integral>(domain: &Domain) -> Result<Vec<String>> {
    let values: Vec<T> = match domain {
        Domain::Count(count) => {
            let n = parse_bound::<T>(count)?;
            if n < T::ZERO {
                return Err(Error::new(count.span(), "unroll count must not be negative"));
            }
            bounded(naturals(n), count.span())?
        }
        Domain::Range(begin, end) => {
            let range = integer_range(parse_bound::<T>(begin)?, parse_bound::<T>(end)?);
            bounded(range, begin.span())?
        }
        Domain::List(items) => {
            if items.len() > MAX_ITERATIONS {
                return Err(Error::new(
                    Span::call_site(),
                    format!(
                        "sequence has {} elements, unroll! expands at most {}",
                        items.len(),
                        MAX_ITERATIONS
                    ),
                ));
            }
            items.iter().map(parse_bound::<T>).collect::<Result<_>>()?
        }
    };

    Ok(values.iter().map(ToString::to_string).collect())
}

fn bounded<T: Integral>(range: Range<T>, span: Span) -> Result<Vec<T>> {
    match T::distance(range.begin(), range.end()) {
        Some(len) if len <= MAX_ITERATIONS => Ok(range.iter().collect()),
        _ => Err(Error::new(
            span,
            format!(
                "range {}..{} of {} is longer than the {} iterations unroll! expands",
                range.begin(),
                range.end(),
                T::NAME,
                MAX_ITERATIONS
            ),
        )),
    }
}

fn parse_bound<T: Integral>(bound: &Bound) -> Result<T> {
    let suffix = bound.suffix();
    if !suffix.is_empty() && suffix != T::NAME {
        return Err(Error::new(
            bound.span(),
            format!(
                "literal suffix `{}` does not match element type `{}`",
                suffix,
                T::NAME
            ),
        ));
    }

    bound.text().parse::<T>().map_err(|_| {
        Error::new(
            bound.span(),
            format!("`{}` does not fit in `{}`", bound.text(), T::NAME),
        )
    })
}

fn literal(text: &str, span: Span) -> TokenStream {
    match text.strip_prefix('-') {
        Some(digits) => {
            let lit = LitInt::new(digits, span);
            quote!(-#lit)
        }
        None => {
            let lit = LitInt::new(text, span);
            quote!(#lit)
        }
    }
}

/// `Unroll` impls for `Count<0>` through `Count<max>`.
///
/// `Count<n + 1>` runs `Count<n>` and then calls index `n`, so the table
/// grows linearly with `max`. paths resolve at the call site, which must
/// have `Count`, `Unroll`, `UnitOfWork` and `Index` in scope.
pub fn expand_count_table(max: &LitInt) -> Result<TokenStream> {
    let limit: usize = max.base10_parse()?;
    if limit > MAX_ITERATIONS {
        return Err(Error::new(
            max.span(),
            format!(
                "count table up to {} exceeds the {} iterations unroll! expands",
                limit, MAX_ITERATIONS
            ),
        ));
    }

    let steps = (0..limit).map(|n| {
        let prev = Literal::usize_unsuffixed(n);
        let next = Literal::usize_unsuffixed(n + 1);
        quote! {
            impl Unroll for Count<#next> {
                const COUNT: usize = #next;

                #[inline(always)]
                fn unroll<W: UnitOfWork + ?Sized>(work: &mut W) {
                    <Count<#prev> as Unroll>::unroll::<W>(&mut *work);
                    work.call(Index::<#prev>);
                }
            }
        }
    });

    Ok(quote! {
        impl Unroll for Count<0> {
            const COUNT: usize = 0;

            #[inline(always)]
            fn unroll<W: UnitOfWork + ?Sized>(_work: &mut W) {}
        }

        #(#steps)*
    })
}
