//! The value-shape alphabet walked by the analyzer.
//!
//! Any type taking part in localisation implements [`Localize`] and reports
//! which [`Shape`] it has. Structured shapes hand the walker an enumeration
//! capability: records list their fields with annotations, sequences list
//! their elements and mappings list their values. `#[derive(Localize)]`
//! generates the record enumeration at compile time.

mod impls;
#[cfg(feature = "serde_json")]
mod json;

/// A value whose nested strings can be localised.
pub trait Localize {
    /// Exposes the value's shape for one step of the walk.
    fn shape(&mut self) -> Shape<'_>;
}

/// One step of structure reported by a [`Localize`] value.
pub enum Shape<'a> {
    /// A string leaf that can be rewritten in place.
    Text(&'a mut String),
    /// Named fields carrying annotations.
    Record(&'a mut dyn Record),
    /// Ordered elements, fixed or variable length.
    Sequence(&'a mut dyn Elements),
    /// Keyed values; keys are never visited.
    Mapping(&'a mut dyn Elements),
    /// Nullable indirection; transparent to the depth budget.
    Reference(Option<&'a mut dyn Localize>),
    /// Anything else. Left untouched.
    Opaque,
}

impl Shape<'_> {
    /// Short name of the shape, used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Record(_) => "record",
            Self::Sequence(_) => "sequence",
            Self::Mapping(_) => "mapping",
            Self::Reference(_) => "reference",
            Self::Opaque => "opaque",
        }
    }
}

/// A record field handed to the walker.
pub struct FieldMut<'a> {
    /// Field name, or its index for tuple fields.
    pub name: &'static str,
    /// Raw annotation text; empty when the field carries none.
    pub annotation: &'static str,
    /// The field's value.
    pub value: &'a mut dyn Localize,
}

impl<'a> FieldMut<'a> {
    /// Creates a field view.
    #[must_use]
    pub const fn new(
        name: &'static str,
        annotation: &'static str,
        value: &'a mut dyn Localize,
    ) -> Self {
        Self {
            name,
            annotation,
            value,
        }
    }
}

/// Named-field enumeration for record shapes.
pub trait Record {
    /// Calls `visit` once per field, in declaration order.
    fn for_each_field(&mut self, visit: &mut dyn FnMut(FieldMut<'_>));
}

/// Element enumeration for sequence and mapping shapes.
pub trait Elements {
    /// Calls `visit` once per element (or mapping value).
    fn for_each_element(&mut self, visit: &mut dyn FnMut(&mut dyn Localize));
}

#[cfg(test)]
mod tests;
