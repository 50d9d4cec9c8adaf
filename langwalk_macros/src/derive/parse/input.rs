//! Input gathering for the `Localize` derive.
//!
//! Collects the type's generics, container attributes and every field with
//! its parsed annotation in one pass so expansion can fail fast.

use proc_macro2::Span;
use syn::{Data, DeriveInput, Fields, Generics, Ident, Index, Member};

use super::{ContainerAttrs, FieldAttrs, parse_container_attrs, parse_field_attrs};

/// A field that takes part in the record.
pub(crate) struct FieldInfo {
    /// How the field is reached: by name or by position.
    pub member: Member,
    /// Name reported to the walker.
    pub name: String,
    /// Raw annotation text.
    pub annotation: String,
}

/// One enum variant and the fields it exposes.
pub(crate) struct VariantInfo {
    pub ident: Ident,
    pub style: Style,
    pub fields: Vec<FieldInfo>,
    /// Number of positional fields, used to pad tuple patterns.
    pub arity: usize,
}

/// Field syntax of a struct or variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Style {
    Named,
    Tuple,
    Unit,
}

pub(crate) enum Body {
    Struct(Vec<FieldInfo>),
    Enum(Vec<VariantInfo>),
}

pub(crate) struct LocalizeInput {
    pub ident: Ident,
    pub generics: Generics,
    pub attrs: ContainerAttrs,
    pub body: Body,
}

/// Parses a derive input into the pieces code generation needs.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<LocalizeInput> {
    let attrs = parse_container_attrs(&input.attrs)?;
    let body = match &input.data {
        Data::Struct(data) => Body::Struct(collect_fields(&data.fields)?),
        Data::Enum(data) => Body::Enum(
            data.variants
                .iter()
                .map(|variant| {
                    Ok(VariantInfo {
                        ident: variant.ident.clone(),
                        style: style_of(&variant.fields),
                        fields: collect_fields(&variant.fields)?,
                        arity: variant.fields.len(),
                    })
                })
                .collect::<syn::Result<_>>()?,
        ),
        Data::Union(data) => {
            return Err(syn::Error::new_spanned(
                data.union_token,
                "Localize cannot be derived for unions",
            ));
        }
    };
    Ok(LocalizeInput {
        ident: input.ident.clone(),
        generics: input.generics.clone(),
        attrs,
        body,
    })
}

const fn style_of(fields: &Fields) -> Style {
    match fields {
        Fields::Named(_) => Style::Named,
        Fields::Unnamed(_) => Style::Tuple,
        Fields::Unit => Style::Unit,
    }
}

fn collect_fields(fields: &Fields) -> syn::Result<Vec<FieldInfo>> {
    let mut out = Vec::new();
    for (position, field) in fields.iter().enumerate() {
        let FieldAttrs { annotation, skip } = parse_field_attrs(&field.attrs)?;
        if skip {
            continue;
        }
        let (member, name) = field.ident.as_ref().map_or_else(
            || {
                let index = Index {
                    index: u32::try_from(position).unwrap_or(u32::MAX),
                    span: Span::call_site(),
                };
                (Member::Unnamed(index), position.to_string())
            },
            |ident| (Member::Named(ident.clone()), unraw(ident)),
        );
        out.push(FieldInfo {
            member,
            name,
            annotation,
        });
    }
    Ok(out)
}

fn unraw(ident: &Ident) -> String {
    let text = ident.to_string();
    text.strip_prefix("r#").map_or_else(|| text.clone(), ToOwned::to_owned)
}
