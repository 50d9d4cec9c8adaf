//! Token generation for the `Localize` and `Record` impls.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Generics, Member, parse_quote};

use super::crate_path;
use super::parse::{Body, FieldInfo, LocalizeInput, Style, VariantInfo};

/// Emits both impls for a parsed input.
pub(crate) fn emit(input: &LocalizeInput) -> TokenStream {
    let krate = crate_path::resolve(input.attrs.crate_path.as_ref());
    let ident = &input.ident;
    let generics = bounded_generics(&input.generics, &krate);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let has_fields = match &input.body {
        Body::Struct(fields) => !fields.is_empty(),
        Body::Enum(variants) => variants.iter().any(|variant| !variant.fields.is_empty()),
    };
    let visit = if has_fields {
        format_ident!("visit")
    } else {
        format_ident!("_visit")
    };
    let body = match &input.body {
        Body::Struct(fields) => struct_body(fields, &krate, &visit),
        Body::Enum(variants) => enum_body(variants, &krate, &visit),
    };

    quote! {
        impl #impl_generics #krate::shape::Localize for #ident #ty_generics #where_clause {
            fn shape(&mut self) -> #krate::shape::Shape<'_> {
                #krate::shape::Shape::Record(self)
            }
        }

        impl #impl_generics #krate::shape::Record for #ident #ty_generics #where_clause {
            fn for_each_field(
                &mut self,
                #visit: &mut dyn ::core::ops::FnMut(#krate::shape::FieldMut<'_>),
            ) {
                #body
            }
        }
    }
}

/// Adds a `Localize` bound to every type parameter.
fn bounded_generics(generics: &Generics, krate: &TokenStream) -> Generics {
    let mut bounded = generics.clone();
    for param in bounded.type_params_mut() {
        param.bounds.push(parse_quote!(#krate::shape::Localize));
    }
    bounded
}

fn visit_call(
    field: &FieldInfo,
    value: &TokenStream,
    krate: &TokenStream,
    visit: &syn::Ident,
) -> TokenStream {
    let name = &field.name;
    let annotation = &field.annotation;
    quote! {
        #visit(#krate::shape::FieldMut::new(#name, #annotation, #value));
    }
}

fn struct_body(fields: &[FieldInfo], krate: &TokenStream, visit: &syn::Ident) -> TokenStream {
    let calls = fields.iter().map(|field| {
        let member = &field.member;
        visit_call(field, &quote! { &mut self.#member }, krate, visit)
    });
    quote! { #(#calls)* }
}

fn enum_body(variants: &[VariantInfo], krate: &TokenStream, visit: &syn::Ident) -> TokenStream {
    if variants.is_empty() {
        return quote! { match *self {} };
    }
    let arms = variants.iter().map(|variant| {
        let ident = &variant.ident;
        let bindings: Vec<_> = (0..variant.fields.len())
            .map(|index| format_ident!("__lang_field_{}", index))
            .collect();
        let calls = variant
            .fields
            .iter()
            .zip(&bindings)
            .map(|(field, binding)| visit_call(field, &quote! { #binding }, krate, visit));
        let pattern = variant_pattern(variant, &bindings);
        quote! {
            Self::#ident #pattern => { #(#calls)* }
        }
    });
    quote! {
        match self {
            #(#arms)*
        }
    }
}

fn variant_pattern(variant: &VariantInfo, bindings: &[syn::Ident]) -> TokenStream {
    match variant.style {
        Style::Unit => TokenStream::new(),
        Style::Named => {
            let pairs = variant.fields.iter().zip(bindings).map(|(field, binding)| {
                let member = &field.member;
                quote! { #member: #binding }
            });
            quote! { { #(#pairs,)* .. } }
        }
        Style::Tuple => {
            let slots = (0..variant.arity).map(|position| {
                variant
                    .fields
                    .iter()
                    .zip(bindings)
                    .find(|(field, _)| {
                        matches!(&field.member, Member::Unnamed(index)
                            if usize::try_from(index.index).is_ok_and(|i| i == position))
                    })
                    .map_or_else(|| quote! { _ }, |(_, binding)| quote! { #binding })
            });
            quote! { ( #(#slots),* ) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::parse::parse_input;
    use anyhow::{Result, anyhow, ensure};
    use rstest::rstest;
    use syn::DeriveInput;

    fn expand(input: &DeriveInput) -> Result<String> {
        let parsed = parse_input(input).map_err(|err| anyhow!(err))?;
        Ok(emit(&parsed).to_string())
    }

    #[rstest]
    fn struct_fields_carry_names_and_annotations() -> Result<()> {
        let input: DeriveInput = parse_quote! {
            struct Report {
                #[localize(mod = "template")]
                title: String,
                #[localize(skip)]
                id: u64,
                body: String,
            }
        };
        let tokens = expand(&input)?;
        ensure!(
            tokens.contains("FieldMut :: new (\"title\" , \"mod=template\" , & mut self . title)"),
            "title field missing: {tokens}"
        );
        ensure!(
            tokens.contains("FieldMut :: new (\"body\" , \"\" , & mut self . body)"),
            "body field missing: {tokens}"
        );
        ensure!(!tokens.contains("self . id"), "skipped field emitted");
        Ok(())
    }

    #[rstest]
    fn tuple_struct_uses_positions() -> Result<()> {
        let input: DeriveInput = parse_quote! {
            struct Pair(#[localize(block)] String, String);
        };
        let tokens = expand(&input)?;
        ensure!(tokens.contains("\"0\" , \"-\" , & mut self . 0"), "{tokens}");
        ensure!(tokens.contains("\"1\" , \"\" , & mut self . 1"), "{tokens}");
        Ok(())
    }

    #[rstest]
    fn unit_struct_ignores_visitor() -> Result<()> {
        let input: DeriveInput = parse_quote! { struct Marker; };
        let tokens = expand(&input)?;
        ensure!(tokens.contains("_visit"), "{tokens}");
        Ok(())
    }

    #[rstest]
    fn type_parameters_gain_localize_bound() -> Result<()> {
        let input: DeriveInput = parse_quote! {
            struct Page<T> { items: Vec<T> }
        };
        let tokens = expand(&input)?;
        ensure!(tokens.contains("T : langwalk :: shape :: Localize"), "{tokens}");
        Ok(())
    }

    #[rstest]
    fn crate_override_changes_paths() -> Result<()> {
        let input: DeriveInput = parse_quote! {
            #[localize(crate = "i18n")]
            struct Note { text: String }
        };
        let tokens = expand(&input)?;
        ensure!(tokens.contains("i18n :: shape :: Record"), "{tokens}");
        ensure!(!tokens.contains("langwalk ::"), "{tokens}");
        Ok(())
    }

    #[rstest]
    fn enum_arms_bind_kept_fields() -> Result<()> {
        let input: DeriveInput = parse_quote! {
            enum Message {
                Text { #[localize(mod = "line")] body: String, #[localize(skip)] raw: String },
                Pair(#[localize(skip)] u8, String),
                Empty,
            }
        };
        let tokens = expand(&input)?;
        ensure!(
            tokens.contains("Self :: Text { body : __lang_field_0 , .. }"),
            "{tokens}"
        );
        ensure!(tokens.contains("Self :: Pair (_ , __lang_field_0)"), "{tokens}");
        ensure!(tokens.contains("Self :: Empty =>"), "{tokens}");
        Ok(())
    }

    #[rstest]
    fn empty_enum_matches_nothing() -> Result<()> {
        let input: DeriveInput = parse_quote! { enum Never {} };
        let tokens = expand(&input)?;
        ensure!(tokens.contains("match * self { }"), "{tokens}");
        Ok(())
    }
}
