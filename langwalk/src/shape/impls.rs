//! `Localize` implementations for standard library types.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::marker::PhantomData;
use std::path::PathBuf;
use std::time::Duration;

use super::{Elements, FieldMut, Localize, Record, Shape};

impl Localize for String {
    fn shape(&mut self) -> Shape<'_> {
        Shape::Text(self)
    }
}

/// Borrowed text becomes owned the first time it is walked.
impl Localize for Cow<'_, str> {
    fn shape(&mut self) -> Shape<'_> {
        Shape::Text(self.to_mut())
    }
}

impl<T: Localize> Localize for Option<T> {
    fn shape(&mut self) -> Shape<'_> {
        Shape::Reference(self.as_mut().map(|value| value as &mut dyn Localize))
    }
}

impl<T: Localize + ?Sized> Localize for Box<T> {
    fn shape(&mut self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Localize + ?Sized> Localize for &mut T {
    fn shape(&mut self) -> Shape<'_> {
        (**self).shape()
    }
}

macro_rules! sequence {
    ($($ty:ty => [$($generics:tt)*]),+ $(,)?) => {
        $(
            impl<$($generics)*> Localize for $ty {
                fn shape(&mut self) -> Shape<'_> {
                    Shape::Sequence(self)
                }
            }

            impl<$($generics)*> Elements for $ty {
                fn for_each_element(&mut self, visit: &mut dyn FnMut(&mut dyn Localize)) {
                    for element in self.iter_mut() {
                        visit(element);
                    }
                }
            }
        )+
    };
}

sequence! {
    Vec<T> => [T: Localize],
    VecDeque<T> => [T: Localize],
    [T; N] => [T: Localize, const N: usize],
}

macro_rules! mapping {
    ($($ty:ty => [$($generics:tt)*]),+ $(,)?) => {
        $(
            impl<$($generics)*> Localize for $ty {
                fn shape(&mut self) -> Shape<'_> {
                    Shape::Mapping(self)
                }
            }

            impl<$($generics)*> Elements for $ty {
                fn for_each_element(&mut self, visit: &mut dyn FnMut(&mut dyn Localize)) {
                    for value in self.values_mut() {
                        visit(value);
                    }
                }
            }
        )+
    };
}

mapping! {
    HashMap<K, V, S> => [K, V: Localize, S],
    BTreeMap<K, V> => [K, V: Localize],
}

macro_rules! opaque {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Localize for $ty {
                fn shape(&mut self) -> Shape<'_> {
                    Shape::Opaque
                }
            }
        )+
    };
}

opaque!(
    bool, char, (), i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    PathBuf, Duration,
);

/// String slices cannot be rewritten in place.
impl Localize for &str {
    fn shape(&mut self) -> Shape<'_> {
        Shape::Opaque
    }
}

impl<T: ?Sized> Localize for PhantomData<T> {
    fn shape(&mut self) -> Shape<'_> {
        Shape::Opaque
    }
}

macro_rules! tuple {
    ($(($($name:ident $index:tt),+)),+ $(,)?) => {
        $(
            impl<$($name: Localize),+> Localize for ($($name,)+) {
                fn shape(&mut self) -> Shape<'_> {
                    Shape::Record(self)
                }
            }

            impl<$($name: Localize),+> Record for ($($name,)+) {
                fn for_each_field(&mut self, visit: &mut dyn FnMut(FieldMut<'_>)) {
                    $(visit(FieldMut::new(stringify!($index), "", &mut self.$index));)+
                }
            }
        )+
    };
}

tuple! {
    (A 0),
    (A 0, B 1),
    (A 0, B 1, C 2),
    (A 0, B 1, C 2, D 3),
}
