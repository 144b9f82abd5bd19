//! `EnvTag` for std scalars and containers

use crate::de;
use crate::describe;
use crate::error::EnvError;
use crate::key::Field;
use crate::kind::{Kind, ScalarKind};
use crate::source::Source;
use crate::EnvTag;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::BuildHasher;

macro_rules! impl_from_str {
    ($($ty:ty => $kind:expr),* $(,)?) => {
        $(
            impl EnvTag for $ty {
                const KIND: Kind = Kind::Scalar($kind);

                fn decode(&mut self, field: &Field<'_>, source: &dyn Source) -> Result<(), EnvError> {
                    *self = de::decode_scalar(field, source, str::parse::<$ty>)?;
                    Ok(())
                }
            }
        )*
    };
}

impl_from_str! {
    i8 => ScalarKind::Signed(8),
    i16 => ScalarKind::Signed(16),
    i32 => ScalarKind::Signed(32),
    i64 => ScalarKind::Signed(64),
    i128 => ScalarKind::Signed(128),
    isize => ScalarKind::Signed(isize::BITS),
    u8 => ScalarKind::Unsigned(8),
    u16 => ScalarKind::Unsigned(16),
    u32 => ScalarKind::Unsigned(32),
    u64 => ScalarKind::Unsigned(64),
    u128 => ScalarKind::Unsigned(128),
    usize => ScalarKind::Unsigned(usize::BITS),
    String => ScalarKind::String,
}

macro_rules! impl_float {
    ($($ty:ty => $kind:expr),* $(,)?) => {
        $(
            impl EnvTag for $ty {
                const KIND: Kind = Kind::Scalar($kind);

                fn decode(&mut self, field: &Field<'_>, source: &dyn Source) -> Result<(), EnvError> {
                    *self = de::decode_scalar(field, source, |value| de::parse_float(value, <$ty>::is_finite))?;
                    Ok(())
                }
            }
        )*
    };
}

impl_float! {
    f32 => ScalarKind::Float(32),
    f64 => ScalarKind::Float(64),
}

impl EnvTag for bool {
    const KIND: Kind = Kind::Scalar(ScalarKind::Bool);

    fn decode(&mut self, field: &Field<'_>, source: &dyn Source) -> Result<(), EnvError> {
        *self = de::decode_scalar(field, source, de::parse_bool)?;
        Ok(())
    }
}

/// Pointers render their own line when they carry documentation of their
/// own or point at a hook type, and otherwise document the pointee.
fn describe_pointee<T: EnvTag>(field: &Field<'_>) -> Result<String, EnvError> {
    if !field.description().is_empty() || !field.default().is_empty() || T::KIND == Kind::Hook {
        return Ok(describe::line(field));
    }
    T::describe(field)
}

impl<T: EnvTag + Default> EnvTag for Option<T> {
    const KIND: Kind = Kind::Pointer;

    fn decode(&mut self, field: &Field<'_>, source: &dyn Source) -> Result<(), EnvError> {
        tracing::trace!(key = field.key(), allocated = self.is_some(), "decoding pointer");
        self.get_or_insert_with(T::default).decode(field, source)
    }

    fn describe(field: &Field<'_>) -> Result<String, EnvError> {
        describe_pointee::<T>(field)
    }
}

impl<T: EnvTag> EnvTag for Box<T> {
    const KIND: Kind = Kind::Pointer;

    fn decode(&mut self, field: &Field<'_>, source: &dyn Source) -> Result<(), EnvError> {
        (**self).decode(field, source)
    }

    fn describe(field: &Field<'_>) -> Result<String, EnvError> {
        describe_pointee::<T>(field)
    }
}

/// Decode each comma separated segment into a fresh element.
fn decode_elements<T, F>(field: &Field<'_>, source: &dyn Source, mut push: F) -> Result<(), EnvError>
where
    T: EnvTag + Default,
    F: FnMut(T),
{
    let Some(value) = de::resolve(field, source)? else {
        return Ok(());
    };
    tracing::trace!(key = field.key(), kind = ?T::KIND, "decoding sequence");

    for segment in de::split_sequence(&value) {
        let mut element = T::default();
        element.decode(&field.element(segment), source)?;
        push(element);
    }
    Ok(())
}

impl<T: EnvTag + Default> EnvTag for Vec<T> {
    const KIND: Kind = Kind::Sequence;

    fn decode(&mut self, field: &Field<'_>, source: &dyn Source) -> Result<(), EnvError> {
        self.clear();
        decode_elements(field, source, |element| self.push(element))
    }
}

impl<T: EnvTag + Default> EnvTag for VecDeque<T> {
    const KIND: Kind = Kind::Sequence;

    fn decode(&mut self, field: &Field<'_>, source: &dyn Source) -> Result<(), EnvError> {
        self.clear();
        decode_elements(field, source, |element| self.push_back(element))
    }
}

/// Decode each `key:value` entry, inserting values under their raw key.
fn decode_entries<M, V, F>(field: &Field<'_>, source: &dyn Source, mut insert: F) -> Result<(), EnvError>
where
    V: EnvTag + Default,
    F: FnMut(String, V),
{
    let Some(value) = de::resolve(field, source)? else {
        return Ok(());
    };
    tracing::trace!(key = field.key(), kind = ?V::KIND, "decoding mapping");

    for (key, text) in de::split_mapping::<M>(field, &value)? {
        let mut element = V::default();
        element.decode(&field.element(text), source)?;
        insert(key.to_string(), element);
    }
    Ok(())
}

impl<V, S> EnvTag for HashMap<String, V, S>
where
    V: EnvTag + Default,
    S: BuildHasher,
{
    const KIND: Kind = Kind::Mapping;

    fn decode(&mut self, field: &Field<'_>, source: &dyn Source) -> Result<(), EnvError> {
        self.clear();
        decode_entries::<Self, V, _>(field, source, |key, value| {
            self.insert(key, value);
        })
    }
}

impl<V: EnvTag + Default> EnvTag for BTreeMap<String, V> {
    const KIND: Kind = Kind::Mapping;

    fn decode(&mut self, field: &Field<'_>, source: &dyn Source) -> Result<(), EnvError> {
        self.clear();
        decode_entries::<Self, V, _>(field, source, |key, value| {
            self.insert(key, value);
        })
    }
}
