//! `unroll!` invocation parser.

use proc_macro2::Span;
use syn::{
    bracketed,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    token, Expr, Ident, LitInt, Result, Token,
};

/// a parsed `unroll!(...)` invocation.
#[derive(Debug)]
pub struct UnrollInput {
    /// explicit element type, e.g. `i8` in `unroll!(i8, 1..10, |i| ..)`.
    pub elem: Option<Ident>,
    /// which values the loop variable takes.
    pub domain: Domain,
    /// loop variable name.
    pub binding: Ident,
    /// loop body, replicated once per value.
    pub body: Expr,
}

/// the value source of an unrolled loop.
#[derive(Debug)]
pub enum Domain {
    /// `N`: the naturals `0..N`.
    Count(Bound),
    /// `S..E`: half-open range in either direction.
    Range(Bound, Bound),
    /// `[a, b, c]`: explicit sequence.
    List(Vec<Bound>),
}

/// an integer literal with an optional leading minus.
#[derive(Debug, Clone)]
pub struct Bound {
    pub negative: bool,
    pub lit: LitInt,
}

impl Bound {
    /// decimal text including the sign, without suffix.
    pub fn text(&self) -> String {
        if self.negative {
            format!("-{}", self.lit.base10_digits())
        } else {
            self.lit.base10_digits().to_string()
        }
    }

    /// literal suffix, empty if none.
    pub fn suffix(&self) -> &str {
        self.lit.suffix()
    }

    pub fn span(&self) -> Span {
        self.lit.span()
    }
}

impl Domain {
    /// every bound in source order.
    pub fn bounds(&self) -> Vec<&Bound> {
        match self {
            Domain::Count(n) => vec![n],
            Domain::Range(begin, end) => vec![begin, end],
            Domain::List(items) => items.iter().collect(),
        }
    }
}

impl Parse for Bound {
    fn parse(input: ParseStream) -> Result<Self> {
        let negative = if input.peek(Token![-]) {
            input.parse::<Token![-]>()?;
            true
        } else {
            false
        };

        if !input.peek(LitInt) {
            return Err(input.error(
                "expected an integer literal: unroll! bounds must be literals; \
                 use `unroll_count::<N, _>` for named or generic constants",
            ));
        }

        Ok(Bound {
            negative,
            lit: input.parse()?,
        })
    }
}

impl Parse for Domain {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.peek(token::Bracket) {
            let content;
            bracketed!(content in input);
            let items: Punctuated<Bound, Token![,]> = Punctuated::parse_terminated(&content)?;
            return Ok(Domain::List(items.into_iter().collect()));
        }

        let first: Bound = input.parse()?;

        // `..` also matches the head of `..=`
        if input.peek(Token![..=]) {
            return Err(input.error(
                "inclusive ranges are not supported: the end bound is always excluded",
            ));
        }

        if input.peek(Token![..]) {
            input.parse::<Token![..]>()?;
            let end: Bound = input.parse()?;
            Ok(Domain::Range(first, end))
        } else {
            Ok(Domain::Count(first))
        }
    }
}

impl Parse for UnrollInput {
    fn parse(input: ParseStream) -> Result<Self> {
        // leading `T,` names the element type
        let elem = if input.peek(Ident) && input.peek2(Token![,]) {
            let ty: Ident = input.parse()?;
            input.parse::<Token![,]>()?;

            // `unroll!(n, |i| ..)` with a runtime count
            if input.peek(Token![|]) {
                return Err(syn::Error::new(
                    ty.span(),
                    format!(
                        "expected an integer literal count, found `{}`: unroll! bounds must be literals; \
                         use `unroll_count::<{}, _>` for named or generic constants",
                        ty,
                        ty
                    ),
                ));
            }
            Some(ty)
        } else {
            None
        };

        let domain: Domain = input.parse()?;
        input.parse::<Token![,]>()?;

        if !input.peek(Token![|]) {
            return Err(input.error("expected the loop body as `|i| body`"));
        }
        input.parse::<Token![|]>()?;
        let binding: Ident = input.parse()?;
        input.parse::<Token![|]>()?;
        let body: Expr = input.parse()?;

        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
        }
        if !input.is_empty() {
            return Err(input.error("unexpected tokens after the loop body"));
        }

        Ok(UnrollInput {
            elem,
            domain,
            binding,
            body,
        })
    }
}
