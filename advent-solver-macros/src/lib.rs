//! Procedural macros for the advent-solver library

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{DeriveInput, LitInt, parse_macro_input};

/// Derive macro generating the `Solver` impl for a type whose parts are
/// implemented as `PartSolver<1>`, `PartSolver<2>`, ...
///
/// # Attributes
///
/// - `max_parts`: Required. Number of parts; each `1..=max_parts` must have a
///   `PartSolver<N>` impl.
///
/// # Requirements
///
/// The type must implement `AocParser`. A missing `PartSolver<N>` impl shows
/// up as an unsatisfied trait bound on the generated dispatch arm.
///
/// # Example
///
/// ```ignore
/// use advent_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};
///
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 2)]
/// struct Day1;
///
/// impl AocParser for Day1 { /* ... */ }
/// impl PartSolver<1> for Day1 { /* ... */ }
/// impl PartSolver<2> for Day1 { /* ... */ }
/// ```
#[proc_macro_derive(AocSolver, attributes(aoc_solver))]
pub fn derive_aoc_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let max_parts = parse_max_parts(input)?;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let arms = (1..=max_parts).map(|part| {
        quote! {
            #part => <Self as ::advent_solver::PartSolver<#part>>::solve(shared),
        }
    });

    Ok(quote! {
        impl #impl_generics ::advent_solver::Solver for #name #ty_generics #where_clause {
            const PARTS: u8 = #max_parts;

            fn solve_part(
                shared: &mut <Self as ::advent_solver::AocParser>::SharedData<'_>,
                part: u8,
            ) -> ::std::result::Result<::std::string::String, ::advent_solver::SolveError> {
                match part {
                    #(#arms)*
                    _ => ::std::result::Result::Err(
                        ::advent_solver::SolveError::PartNotImplemented(part),
                    ),
                }
            }
        }
    })
}

fn parse_max_parts(input: &DeriveInput) -> syn::Result<u8> {
    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc_solver"))
        .ok_or_else(|| {
            syn::Error::new(
                Span::call_site(),
                "AocSolver derive requires #[aoc_solver(max_parts = N)]",
            )
        })?;

    let mut max_parts: Option<u8> = None;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("max_parts") {
            let lit: LitInt = meta.value()?.parse()?;
            let value: u8 = lit.base10_parse()?;
            if value == 0 {
                return Err(syn::Error::new(lit.span(), "max_parts must be at least 1"));
            }
            max_parts = Some(value);
            Ok(())
        } else {
            Err(meta.error("unsupported aoc_solver attribute, expected `max_parts`"))
        }
    })?;

    max_parts.ok_or_else(|| syn::Error::new_spanned(attr, "missing required `max_parts`"))
}
