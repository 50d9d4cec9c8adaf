//! Dynamic shapes for `serde_json::Value`.
//!
//! JSON documents have no field annotations: objects are walked as mappings
//! and arrays as sequences, both inheriting the strategy already in effect.

use serde_json::{Map, Value};

use super::{Elements, Localize, Shape};

impl Localize for Value {
    fn shape(&mut self) -> Shape<'_> {
        match self {
            Self::String(text) => Shape::Text(text),
            Self::Array(items) => Shape::Sequence(items),
            Self::Object(members) => Shape::Mapping(members),
            Self::Null | Self::Bool(_) | Self::Number(_) => Shape::Opaque,
        }
    }
}

impl Elements for Map<String, Value> {
    fn for_each_element(&mut self, visit: &mut dyn FnMut(&mut dyn Localize)) {
        for value in self.values_mut() {
            visit(value);
        }
    }
}
