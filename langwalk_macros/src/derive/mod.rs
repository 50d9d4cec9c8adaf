//! Implementation of `#[derive(Localize)]`.

use proc_macro2::TokenStream;
use syn::DeriveInput;

mod crate_path;
mod emit;
mod parse;

/// Expands the derive, returning a compile error on invalid input.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = parse::parse_input(input)?;
    Ok(emit::emit(&parsed))
}
