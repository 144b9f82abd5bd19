//! Populate nested structs from environment variables using per-field tags
//!
//! `envtag` walks an arbitrarily nested configuration struct, derives an
//! environment variable name for every field from the tags along its path,
//! and writes the converted value back into the struct in place. The same
//! tags drive a second walk that renders human-readable documentation of
//! every variable the struct understands.
//!
//! # Features
//!
//! - **Nested naming**: `STRUCT` + `STRING` becomes `STRUCT_STRING`
//! - **String defaults**: Fallback literals declared next to the field
//! - **Collections**: `Vec<T>` from `a,b,c`, `HashMap<String, T>` from `a:1,b:2`
//! - **Optional values**: `Option<T>` and `Box<T>` are allocated on demand
//! - **Custom parsing**: Types implementing [`UnmarshalText`] consume the raw string
//! - **Documentation**: [`describe`] renders `KEY - DESCRIPTION (default: DEFAULT)` lines
//!
//! # Value Parsing
//!
//! - Integers: decimal, range checked against the declared width
//! - Floats: `1.5`, `-1e10`, `inf`; finite literals beyond the declared width are rejected
//! - Booleans: `1`, `t`, `true`, `0`, `f`, `false` (case-insensitive)
//! - Strings: used verbatim
//!
//! A variable that is unset or empty falls back to the declared default.
//! Without a default, scalars decode to their zero value and collections to
//! an empty collection.
//!
//! # Example
//!
//! ```rust
//! use envtag::EnvTag;
//!
//! #[derive(Debug, Default, EnvTag)]
//! struct Config {
//!     #[env(name = "STRING", default = "test_string", description = "this is description")]
//!     pub string: String,
//!
//!     #[env(name = "ARRAY_INT", default = "-1,0,1")]
//!     pub array_int: Vec<i32>,
//!
//!     #[env(name = "STRUCT")]
//!     pub nested: Nested,
//! }
//!
//! #[derive(Debug, Default, EnvTag)]
//! struct Nested {
//!     #[env(name = "STRING")]
//!     pub string: String,
//! }
//!
//! # fn main() -> Result<(), envtag::EnvError> {
//! #     std::env::remove_var("STRING");
//! #     std::env::remove_var("ARRAY_INT");
//! #     std::env::set_var("STRUCT_STRING", "bar");
//! let config = Config::from_env()?;
//! assert_eq!(config.string, "test_string");
//! assert_eq!(config.array_int, vec![-1, 0, 1]);
//! assert_eq!(config.nested.string, "bar");
//!
//! assert_eq!(
//!     Config::describe_env()?,
//!     "STRING - this is description (default: test_string)\nARRAY_INT - (default: -1,0,1)\nSTRUCT_STRING",
//! );
//! # std::env::remove_var("STRUCT_STRING");
//! #     Ok(())
//! # }
//! ```
//!
//! # Attributes
//!
//! ## `#[env(name = "FRAGMENT")]`
//!
//! Key fragment joined to the parent's key with `_`. A field without a name
//! contributes nothing, so its children are named directly under the parent.
//!
//! ## `#[env(default = "value")]` and `#[env(description = "text")]`
//!
//! String fallback used when the variable is unset or empty, and the text
//! shown by [`describe`].
//!
//! ## `#[env(skip)]`
//!
//! The field gets no variable of its own and is left out of [`describe`].
//! Fields nested inside it are still decoded under the parent's key, so
//! `#[env(name = "PAS_STRING")]` inside a skipped field of `STRUCT` reads
//! `STRUCT_PAS_STRING`. `#[env(name = "-")]` is an alias.
//!
//! ## `#[env(from_file)]`
//!
//! When the variable is unset or empty, read the value from the file named
//! by `{KEY}_FILE` (Kubernetes and Docker secrets).
//!
//! ## `#[env(deserializer = "path::to::fn")]`
//!
//! Parse the resolved string with a function `fn(&str) -> Result<T, E>`
//! instead of the built-in traversal.
//!
//! ## Container attributes
//!
//! - `#[env(prefix = "APP")]`: root key used when the type is the top-level target
//! - `#[env(text)]`: the type implements [`UnmarshalText`] and is decoded through it

pub mod de;
pub mod describe;

mod error;
mod hook;
mod impls;
mod key;
mod kind;
mod source;

pub use envtag_derive::EnvTag;
pub use error::{BoxError, EnvError};
pub use hook::UnmarshalText;
// Used by macro-generated code for `#[env(text)]` types
#[doc(hidden)]
pub use hook::decode_text;
pub use key::{join_key, Annotation, Field, SKIP};
pub use kind::{Kind, ScalarKind};
pub use source::{Environment, Source};

/// A type whose shape `envtag` knows how to walk.
///
/// Implementations exist for the integer, float, `bool` and `String`
/// scalars, for `Option<T>` and `Box<T>`, for `Vec<T>` and `VecDeque<T>`,
/// and for string-keyed `HashMap` and `BTreeMap`. Structs get theirs from
/// `#[derive(EnvTag)]`.
pub trait EnvTag {
    /// Shape of the type, consulted by containers before recursing.
    const KIND: Kind;

    /// Root key fragment used when the type is the top-level target.
    const PREFIX: &'static str = "";

    /// Decode the value named by `field` into `self`.
    ///
    /// # Errors
    ///
    /// - A resolved string does not match the target type's grammar
    /// - A field type has no supported shape
    /// - An [`UnmarshalText`] implementation rejects its input
    /// - A `{KEY}_FILE` path cannot be read
    fn decode(&mut self, field: &Field<'_>, source: &dyn Source) -> Result<(), EnvError>;

    /// Render the documentation lines for the value named by `field`.
    ///
    /// Leaves render a single line; structs join the lines of their fields.
    fn describe(field: &Field<'_>) -> Result<String, EnvError>
    where
        Self: Sized,
    {
        Ok(describe::line(field))
    }

    /// Build a value from `Default` and populate it from the process environment.
    fn from_env() -> Result<Self, EnvError>
    where
        Self: Default + Sized,
    {
        let mut value = Self::default();
        populate(&mut value)?;
        Ok(value)
    }

    /// Documentation for every variable the type reads.
    fn describe_env() -> Result<String, EnvError>
    where
        Self: Sized,
    {
        Self::describe(&Field::root(Self::PREFIX))
    }
}

/// Populate `target` in place from the process environment.
///
/// The first failure aborts the walk. Fields visited before it keep their
/// new values, so a target whose population failed should be discarded.
pub fn populate<T: EnvTag>(target: &mut T) -> Result<(), EnvError> {
    populate_from(target, &Environment)
}

/// Populate `target` in place, reading variables from `source`.
pub fn populate_from<T: EnvTag>(target: &mut T, source: &dyn Source) -> Result<(), EnvError> {
    tracing::debug!(
        target_type = std::any::type_name::<T>(),
        prefix = T::PREFIX,
        "populating from environment"
    );
    target.decode(&Field::root(T::PREFIX), source)
}

/// Render the documentation of every variable `target` reads, one per line.
///
/// Only the type of `target` is consulted; its current values and the
/// environment are ignored.
pub fn describe<T: EnvTag>(_target: &T) -> Result<String, EnvError> {
    T::describe_env()
}
