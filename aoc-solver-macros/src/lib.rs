//! Procedural macros for the aoc-solver library

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput};

/// Derive macro for automatically registering solutions with the plugin system
///
/// The year and day come from the type's `Solution::YEAR` / `Solution::DAY`
/// constants, so the derive takes no attributes. The generated code submits a
/// `SolutionPlugin` to `inventory`; `register_all_plugins` picks it up.
///
/// # Requirements
///
/// The type must implement `Solution` and `Default`. If `Solution` is not
/// implemented you get a compile-time error naming it:
///
/// ```text
/// error[E0277]: the trait bound `Day01: Solution` is not satisfied
///   |
///   | struct Day01;
///   |        ^^^^^ unsatisfied trait bound
/// ```
///
/// # Example
///
/// ```ignore
/// use aoc_solver::{AutoRegisterSolution, Context, Solution, StepResult};
///
/// #[derive(Default, AutoRegisterSolution)]
/// struct Day01;
///
/// impl Solution for Day01 {
///     const YEAR: Option<u16> = Some(2023);
///     const DAY: Option<u8> = Some(1);
///     type Input = Vec<String>;
///     // ...
/// }
/// ```
#[proc_macro_derive(AutoRegisterSolution)]
pub fn derive_auto_register_solution(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(
            &input.generics,
            "AutoRegisterSolution cannot be derived for generic types",
        )
        .to_compile_error()
        .into();
    }

    if let Data::Union(data) = &input.data {
        return syn::Error::new_spanned(
            data.union_token,
            "AutoRegisterSolution can only be derived for structs and enums",
        )
        .to_compile_error()
        .into();
    }

    let expanded = quote! {
        const _: () = {
            trait MustImplementSolution: ::aoc_solver::Solution {}
            impl MustImplementSolution for #name {}

            static SOLUTION: ::aoc_solver::SolutionType<#name> = ::aoc_solver::SolutionType::NEW;

            ::aoc_solver::inventory::submit! {
                ::aoc_solver::SolutionPlugin {
                    solution: &SOLUTION,
                }
            }
        };
    };

    TokenStream::from(expanded)
}
