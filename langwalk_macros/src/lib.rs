//! Procedural macros for `langwalk`.
//!
//! `#[derive(Localize)]` lets a struct or enum take part in the analyzer's
//! walk. The generated code reports the value as a record and lists each
//! field with the raw annotation collected from its `#[localize]` attribute:
//!
//! - `#[localize = "mod=template"]` passes the text through verbatim.
//! - `#[localize(mod = "line" | "template")]` selects a built-in mode.
//! - `#[localize(block)]` opts the field and its subtree out.
//! - `#[localize(skip)]` hides the field from the walk altogether.
//!
//! Type parameters receive a `Localize` bound. `#[localize(crate = "path")]` on
//! the container points generated paths at a renamed dependency.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `langwalk::shape::Localize` and `langwalk::shape::Record`.
#[proc_macro_derive(Localize, attributes(localize))]
pub fn derive_localize(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
