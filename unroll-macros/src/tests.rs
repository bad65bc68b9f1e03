use crate::expand::{expand_count_table, expand_unroll, MAX_ITERATIONS};
use crate::parser::{Domain, UnrollInput};
use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use syn::{Block, Expr, File, Item, LitInt, Stmt};

/// expand and return (element type, loop values) read back from the output.
fn expand(tokens: TokenStream) -> syn::Result<(String, Vec<String>)> {
    let input: UnrollInput = syn::parse2(tokens)?;
    let output = expand_unroll(&input)?;
    let block: Block = syn::parse2(output).expect("expansion is a block");

    let mut ty = String::new();
    let mut values = Vec::new();
    for stmt in block.stmts {
        let Stmt::Expr(Expr::Block(step), None) = stmt else {
            panic!("expected one block per iteration");
        };
        let Stmt::Item(Item::Const(item)) = &step.block.stmts[0] else {
            panic!("expected the loop variable const first");
        };
        ty = item.ty.to_token_stream().to_string().replace(' ', "");
        values.push(item.expr.to_token_stream().to_string().replace(' ', ""));
    }
    Ok((ty, values))
}

fn values(tokens: TokenStream) -> Vec<String> {
    expand(tokens).expect("valid invocation").1
}

fn strings(range: impl IntoIterator<Item = i64>) -> Vec<String> {
    range.into_iter().map(|v| v.to_string()).collect()
}

fn error(tokens: TokenStream) -> String {
    match syn::parse2::<UnrollInput>(tokens) {
        Ok(input) => match expand_unroll(&input) {
            Ok(_) => panic!("expected an expansion error"),
            Err(e) => e.to_string(),
        },
        Err(e) => e.to_string(),
    }
}

#[test]
fn test_parse_count() {
    let input: UnrollInput = syn::parse_quote!(5, |i| sum += i);
    assert!(input.elem.is_none());
    assert!(matches!(input.domain, Domain::Count(_)));
    assert_eq!(input.binding, "i");
}

#[test]
fn test_parse_typed_range() {
    let input: UnrollInput = syn::parse_quote!(i16, -4..4, |k| { total += k; });
    assert_eq!(input.elem.as_ref().map(ToString::to_string), Some("i16".to_string()));
    let Domain::Range(begin, end) = &input.domain else {
        panic!("expected a range");
    };
    assert_eq!(begin.text(), "-4");
    assert_eq!(end.text(), "4");
}

#[test]
fn test_parse_list_trailing_comma() {
    let input: UnrollInput = syn::parse_quote!([3, 1, 4,], |i| f(i),);
    let Domain::List(items) = &input.domain else {
        panic!("expected a list");
    };
    assert_eq!(items.len(), 3);
}

#[test]
fn test_count_defaults_to_usize() {
    let (ty, vals) = expand(quote!(5, |i| f(i))).unwrap();
    assert_eq!(ty, "::core::primitive::usize");
    assert_eq!(vals, strings(0..5));
}

#[test]
fn test_typed_count() {
    let (ty, vals) = expand(quote!(u16, 3, |i| f(i))).unwrap();
    assert_eq!(ty, "::core::primitive::u16");
    assert_eq!(vals, strings(0..3));
}

#[test]
fn test_ascending_range() {
    assert_eq!(values(quote!(i8, 1..10, |i| f(i))), strings(1..10));
}

#[test]
fn test_descending_range_excludes_end() {
    assert_eq!(values(quote!(i8, 10..1, |i| f(i))), strings((2..=10).rev()));
}

#[test]
fn test_untyped_range() {
    let (ty, vals) = expand(quote!(2..6, |i| f(i))).unwrap();
    assert_eq!(ty, "::core::primitive::usize");
    assert_eq!(vals, strings(2..6));
}

#[test]
fn test_equal_bounds_expand_to_nothing() {
    assert!(values(quote!(u8, 7..7, |i| f(i))).is_empty());
    assert!(values(quote!(0, |i| f(i))).is_empty());
}

#[test]
fn test_negative_bounds() {
    assert_eq!(values(quote!(i32, -2..3, |i| f(i))), strings(-2..3));
    assert_eq!(values(quote!(i8, -126..-128, |i| f(i))), strings([-126, -127]));
}

#[test]
fn test_extreme_values() {
    assert_eq!(
        values(quote!(i8, 127..125, |i| f(i))),
        strings([127, 126])
    );
    assert_eq!(
        values(quote!(u64, 18446744073709551615..18446744073709551613, |i| f(i))),
        vec!["18446744073709551615".to_string(), "18446744073709551614".to_string()]
    );
}

#[test]
fn test_suffix_selects_element_type() {
    let (ty, vals) = expand(quote!(1i8..4, |i| f(i))).unwrap();
    assert_eq!(ty, "::core::primitive::i8");
    assert_eq!(vals, strings(1..4));
}

#[test]
fn test_explicit_sequence() {
    let (ty, vals) = expand(quote!(u32, [9, 2, 7], |i| f(i))).unwrap();
    assert_eq!(ty, "::core::primitive::u32");
    assert_eq!(vals, strings([9, 2, 7]));
}

#[test]
fn test_forms_agree_with_base_form() {
    let base = values(quote!([0, 1, 2, 3], |i| f(i)));
    assert_eq!(values(quote!(4, |i| f(i))), base);
    assert_eq!(values(quote!(usize, 4, |i| f(i))), base);
    assert_eq!(values(quote!(usize, 0..4, |i| f(i))), base);
    assert_eq!(values(quote!(0..4, |i| f(i))), base);
}

#[test]
fn test_body_replicated_per_iteration() {
    let input: UnrollInput = syn::parse_quote!(3, |i| acc.push(i));
    let output = expand_unroll(&input).unwrap().to_string();
    assert_eq!(output.matches("acc . push (i)").count(), 3);
    assert!(!output.contains("for "));
    assert!(!output.contains("while "));
}

#[test]
fn test_error_runtime_bound() {
    let message = error(quote!(n, |i| f(i)));
    assert!(message.contains("found `n`"), "{message}");
    assert!(message.contains("must be literals"), "{message}");

    let message = error(quote!(u8, 0..n, |i| f(i)));
    assert!(message.contains("must be literals"), "{message}");
    assert!(message.contains("unroll_count"), "{message}");
}

#[test]
fn test_error_named_constant_points_to_unroll_count() {
    let message = error(quote!(STAGES, |i| f(i)));
    assert!(message.contains("found `STAGES`"), "{message}");
    assert!(message.contains("`unroll_count::<STAGES, _>`"), "{message}");
}

#[test]
fn test_error_literal_out_of_range() {
    let message = error(quote!(u8, 0..300, |i| f(i)));
    assert!(message.contains("`300` does not fit in `u8`"), "{message}");

    let message = error(quote!(u16, -1..3, |i| f(i)));
    assert!(message.contains("`-1` does not fit in `u16`"), "{message}");
}

#[test]
fn test_error_suffix_mismatch() {
    let message = error(quote!(u8, 0..4u16, |i| f(i)));
    assert!(message.contains("suffix `u16` does not match element type `u8`"), "{message}");
}

#[test]
fn test_error_negative_count() {
    let message = error(quote!(i32, -3, |i| f(i)));
    assert!(message.contains("must not be negative"), "{message}");
}

#[test]
fn test_error_inclusive_range() {
    let message = error(quote!(0..=4, |i| f(i)));
    assert!(message.contains("inclusive ranges are not supported"), "{message}");
}

#[test]
fn test_error_too_long() {
    let limit = proc_macro2::Literal::usize_unsuffixed(MAX_ITERATIONS + 1);
    let message = error(quote!(#limit, |i| f(i)));
    assert!(message.contains("longer than the 4096 iterations"), "{message}");
}

#[test]
fn test_error_not_an_integer_type() {
    let message = error(quote!(f32, 4, |i| f(i)));
    assert!(message.contains("found `f32`"), "{message}");
}

#[test]
fn test_error_missing_body() {
    let message = error(quote!(4, i));
    assert!(message.contains("`|i| body`"), "{message}");
}

#[test]
fn test_count_table_one_impl_per_count() {
    let max: LitInt = syn::parse_quote!(100);
    let table: File = syn::parse2(expand_count_table(&max).unwrap()).unwrap();
    assert_eq!(table.items.len(), 101);

    let counts: Vec<String> = table
        .items
        .iter()
        .map(|item| {
            let Item::Impl(imp) = item else {
                panic!("expected an impl");
            };
            imp.self_ty.to_token_stream().to_string().replace(' ', "")
        })
        .collect();
    assert_eq!(counts[0], "Count<0>");
    assert_eq!(counts[100], "Count<100>");
}

#[test]
fn test_count_table_builds_on_previous_count() {
    let max: LitInt = syn::parse_quote!(3);
    let output = expand_count_table(&max).unwrap().to_string().replace(' ', "");
    assert!(output.contains("<Count<2>asUnroll>::unroll::<W>(&mut*work);work.call(Index::<2>);"));
    assert!(!output.contains("Count<4>"));
}

#[test]
fn test_count_table_limit() {
    let max = LitInt::new(&(MAX_ITERATIONS + 1).to_string(), proc_macro2::Span::call_site());
    let message = expand_count_table(&max).unwrap_err().to_string();
    assert!(message.contains("exceeds the 4096 iterations"), "{message}");
}
