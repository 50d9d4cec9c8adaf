//! Unit tests for the built-in shape implementations.

use super::*;
use rstest::rstest;
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::path::PathBuf;

fn kind_of(value: &mut dyn Localize) -> &'static str {
    value.shape().kind()
}

#[rstest]
fn strings_are_text() {
    assert_eq!(kind_of(&mut String::from("x")), "text");
    assert_eq!(kind_of(&mut Cow::<str>::Borrowed("x")), "text");
}

#[rstest]
fn containers_report_their_shape() {
    assert_eq!(kind_of(&mut vec![String::new()]), "sequence");
    assert_eq!(kind_of(&mut VecDeque::from([String::new()])), "sequence");
    assert_eq!(kind_of(&mut [String::new(), String::new()]), "sequence");
    assert_eq!(kind_of(&mut HashMap::from([(1_u8, String::new())])), "mapping");
    assert_eq!(kind_of(&mut BTreeMap::from([("k", String::new())])), "mapping");
    assert_eq!(kind_of(&mut (String::new(), 1_u32)), "record");
    assert_eq!(kind_of(&mut Some(String::new())), "reference");
}

#[rstest]
fn scalars_and_slices_are_opaque() {
    assert_eq!(kind_of(&mut 7_i64), "opaque");
    assert_eq!(kind_of(&mut true), "opaque");
    assert_eq!(kind_of(&mut PathBuf::from("/tmp")), "opaque");
    assert_eq!(kind_of(&mut "borrowed"), "opaque");
}

#[rstest]
fn boxes_delegate_to_their_contents() {
    let mut boxed: Box<dyn Localize> = Box::new(String::from("x"));
    assert_eq!(kind_of(&mut boxed), "text");
}

#[rstest]
fn cow_becomes_owned_when_walked() {
    let mut text: Cow<'_, str> = Cow::Borrowed("翻译");
    if let Shape::Text(owned) = text.shape() {
        owned.push('!');
    }
    assert!(matches!(text, Cow::Owned(ref s) if s == "翻译!"));
}

#[rstest]
fn absent_option_exposes_no_target() {
    let mut value: Option<String> = None;
    assert!(matches!(value.shape(), Shape::Reference(None)));
}

#[rstest]
fn tuples_list_indexed_fields_without_annotations() {
    let mut value = (String::from("a"), 1_u8, String::from("b"));
    let mut seen = Vec::new();
    if let Shape::Record(record) = value.shape() {
        record.for_each_field(&mut |field: FieldMut<'_>| {
            seen.push((field.name, field.annotation, field.value.shape().kind()));
        });
    }
    assert_eq!(
        seen,
        [("0", "", "text"), ("1", "", "opaque"), ("2", "", "text")]
    );
}

#[rstest]
fn mappings_visit_values_only() {
    let mut value = BTreeMap::from([("a", String::from("x")), ("b", String::from("y"))]);
    let mut count = 0;
    if let Shape::Mapping(elements) = value.shape() {
        elements.for_each_element(&mut |element: &mut dyn Localize| {
            if let Shape::Text(text) = element.shape() {
                text.make_ascii_uppercase();
                count += 1;
            }
        });
    }
    assert_eq!(count, 2);
    assert_eq!(value.get("a").map(String::as_str), Some("X"));
}

#[cfg(feature = "serde_json")]
#[rstest]
#[case::string(serde_json::json!("x"), "text")]
#[case::array(serde_json::json!(["x"]), "sequence")]
#[case::object(serde_json::json!({"k": "x"}), "mapping")]
#[case::number(serde_json::json!(1), "opaque")]
#[case::null(serde_json::Value::Null, "opaque")]
fn json_values_map_onto_shapes(#[case] mut value: serde_json::Value, #[case] kind: &str) {
    assert_eq!(kind_of(&mut value), kind);
}
