//! Crate path used by generated code.
//!
//! `#[localize(crate = "...")]` lets callers that rename the `langwalk`
//! dependency point the generated impls at the alias.

use proc_macro2::TokenStream;
use quote::quote;

/// Resolves the container's crate override, defaulting to `langwalk`.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { langwalk }, |path| quote! { #path })
}
