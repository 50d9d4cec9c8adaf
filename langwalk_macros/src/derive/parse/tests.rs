//! Tests for `#[localize(...)]` parsing behaviour.

use super::*;
use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use syn::{DeriveInput, parse_quote};

fn field_attrs(attr: Attribute) -> syn::Result<FieldAttrs> {
    parse_field_attrs(&[attr])
}

#[rstest]
#[case::raw(parse_quote!(#[localize = "mod=template"]), "mod=template")]
#[case::raw_block(parse_quote!(#[localize = "-"]), "-")]
#[case::raw_passthrough(parse_quote!(#[localize = "mod=word"]), "mod=word")]
#[case::list_mode(parse_quote!(#[localize(mod = "line")]), "mod=line")]
#[case::list_block(parse_quote!(#[localize(block)]), "-")]
fn annotations_collapse_to_raw_text(#[case] attr: Attribute, #[case] expected: &str) -> Result<()> {
    let attrs = field_attrs(attr).map_err(|err| anyhow!(err))?;
    ensure!(attrs.annotation == expected, "got {:?}", attrs.annotation);
    ensure!(!attrs.skip, "unexpected skip");
    Ok(())
}

#[rstest]
fn unannotated_field_inherits() -> Result<()> {
    let attrs = parse_field_attrs(&[]).map_err(|err| anyhow!(err))?;
    ensure!(attrs == FieldAttrs::default(), "expected defaults");
    Ok(())
}

#[rstest]
fn skip_is_recorded() -> Result<()> {
    let attrs = field_attrs(parse_quote!(#[localize(skip)])).map_err(|err| anyhow!(err))?;
    ensure!(attrs.skip, "skip not parsed");
    Ok(())
}

#[rstest]
#[case::serde(parse_quote!(#[serde(default)]))]
#[case::doc(parse_quote!(#[doc = "x"]))]
#[case::builtin_lang(parse_quote!(#[lang = "mod=line"]))]
fn other_attributes_are_ignored(#[case] attr: Attribute) -> Result<()> {
    let attrs = field_attrs(attr).map_err(|err| anyhow!(err))?;
    ensure!(attrs == FieldAttrs::default(), "foreign attribute parsed");
    Ok(())
}

#[rstest]
#[case::unknown_mode(parse_quote!(#[localize(mod = "word")]), "unknown mod 'word'")]
#[case::non_string_mode(parse_quote!(#[localize(mod = 3)]), "mod must be a string")]
#[case::block_and_mode(parse_quote!(#[localize(block, mod = "line")]), "mutually exclusive")]
#[case::unknown_key(parse_quote!(#[localize(rename = "x")]), "unsupported field attribute")]
#[case::bare_path(parse_quote!(#[localize]), "expected `#[localize")]
#[case::non_string_raw(parse_quote!(#[localize = 1]), "string literal")]
fn invalid_field_attributes_are_rejected(#[case] attr: Attribute, #[case] message: &str) -> Result<()> {
    let Err(err) = field_attrs(attr) else {
        return Err(anyhow!("expected an error mentioning {message}"));
    };
    ensure!(err.to_string().contains(message), "unexpected error: {err}");
    Ok(())
}

#[rstest]
fn duplicate_attributes_are_rejected() {
    let result = parse_field_attrs(&[
        parse_quote!(#[localize(block)]),
        parse_quote!(#[localize(mod = "line")]),
    ]);
    assert!(result.is_err());
}

#[rstest]
fn crate_attribute_sets_path() -> Result<()> {
    let attrs = parse_container_attrs(&[parse_quote!(#[localize(crate = "deps::langwalk")])])
        .map_err(|err| anyhow!(err))?;
    let path = attrs.crate_path.ok_or_else(|| anyhow!("missing crate path"))?;
    ensure!(path.segments.len() == 2, "unexpected path shape");
    Ok(())
}

#[rstest]
fn unknown_container_attribute_is_rejected() {
    assert!(parse_container_attrs(&[parse_quote!(#[localize(prefix = "x")])]).is_err());
}

#[rstest]
fn unions_are_rejected() {
    let input: DeriveInput = parse_quote! {
        union Bits { a: u32, b: f32 }
    };
    assert!(parse_input(&input).is_err());
}

#[rstest]
fn enum_variants_keep_style_and_arity() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        enum Event {
            Named { #[localize(skip)] id: u64, title: String },
            Tuple(String, #[localize(block)] String),
            Unit,
        }
    };
    let parsed = parse_input(&input).map_err(|err| anyhow!(err))?;
    let Body::Enum(variants) = parsed.body else {
        return Err(anyhow!("expected enum body"));
    };
    let summary: Vec<_> = variants
        .iter()
        .map(|v| (v.ident.to_string(), v.style, v.arity, v.fields.len()))
        .collect();
    ensure!(
        summary
            == [
                (String::from("Named"), Style::Named, 2, 1),
                (String::from("Tuple"), Style::Tuple, 2, 2),
                (String::from("Unit"), Style::Unit, 0, 0),
            ],
        "unexpected variants: {summary:?}"
    );
    Ok(())
}

#[rstest]
fn raw_identifiers_are_reported_without_prefix() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Keyword { r#type: String }
    };
    let parsed = parse_input(&input).map_err(|err| anyhow!(err))?;
    let Body::Struct(fields) = parsed.body else {
        return Err(anyhow!("expected struct body"));
    };
    let name = fields.first().map(|field: &FieldInfo| field.name.as_str());
    ensure!(name == Some("type"), "unexpected name {name:?}");
    Ok(())
}
