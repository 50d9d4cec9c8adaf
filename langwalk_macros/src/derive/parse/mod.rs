//! Attribute and input parsing for `#[derive(Localize)]`.
//!
//! Field annotations collapse to the raw text the runtime tag resolver reads,
//! so `#[localize(mod = "template")]` and `#[localize = "mod=template"]`
//! produce the same field view.

use syn::meta::ParseNestedMeta;
use syn::{Attribute, Meta};

mod input;
mod literals;
#[cfg(test)]
mod tests;

pub(crate) use input::{Body, FieldInfo, LocalizeInput, Style, VariantInfo, parse_input};
use literals::{expr_str, lit_str};

/// Marker understood by the runtime resolver as "do not translate".
const BLOCK: &str = "-";

/// Modes accepted by the list form of the attribute.
const MODES: &[&str] = &["line", "template"];

/// Container-level attributes.
#[derive(Default, Clone)]
pub(crate) struct ContainerAttrs {
    /// Overrides the crate path used by generated code.
    pub crate_path: Option<syn::Path>,
}

/// Field-level attributes.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub(crate) struct FieldAttrs {
    /// Raw annotation handed to the tag resolver; empty when absent.
    pub annotation: String,
    /// Leaves the field out of the record entirely.
    pub skip: bool,
}

fn localize_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident("localize"))
}

pub(crate) fn parse_container_attrs(attrs: &[Attribute]) -> syn::Result<ContainerAttrs> {
    let mut out = ContainerAttrs::default();
    for attr in localize_attrs(attrs) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("crate") {
                let path = lit_str(&meta, "crate")?.parse::<syn::Path>()?;
                out.crate_path = Some(path);
                Ok(())
            } else {
                Err(meta.error("unsupported container attribute; expected `crate`"))
            }
        })?;
    }
    Ok(out)
}

pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    let mut seen = false;
    for attr in localize_attrs(attrs) {
        if seen {
            return Err(syn::Error::new_spanned(
                attr,
                "duplicate `localize` attribute on field",
            ));
        }
        seen = true;
        match &attr.meta {
            Meta::NameValue(pair) => out.annotation = expr_str(&pair.value)?.value(),
            Meta::List(_) => attr.parse_nested_meta(|meta| apply_field_meta(&meta, &mut out))?,
            Meta::Path(_) => {
                return Err(syn::Error::new_spanned(
                    attr,
                    "expected `#[localize = \"...\"]` or `#[localize(...)]`",
                ));
            }
        }
    }
    Ok(out)
}

fn apply_field_meta(meta: &ParseNestedMeta, out: &mut FieldAttrs) -> syn::Result<()> {
    if meta.path.is_ident("skip") {
        out.skip = true;
        return Ok(());
    }
    if !out.annotation.is_empty() {
        return Err(meta.error("`block` and `mod` are mutually exclusive"));
    }
    if meta.path.is_ident("block") {
        BLOCK.clone_into(&mut out.annotation);
        Ok(())
    } else if meta.path.is_ident("mod") {
        let lit = lit_str(meta, "mod")?;
        let mode = lit.value();
        if !MODES.contains(&mode.as_str()) {
            return Err(syn::Error::new(
                lit.span(),
                format!("unknown mod '{mode}'; expected \"line\" or \"template\""),
            ));
        }
        out.annotation = format!("mod={mode}");
        Ok(())
    } else {
        Err(meta.error("unsupported field attribute; expected `mod`, `block` or `skip`"))
    }
}
