//! The closed set of shapes the traversal understands.

/// Shape of a type implementing [`EnvTag`](crate::EnvTag).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// A single value parsed from one string.
    Scalar(ScalarKind),
    /// `Option<T>` or `Box<T>`, allocated on demand and decoded in place.
    Pointer,
    /// A struct whose fields are walked in declaration order.
    Record,
    /// An ordered collection parsed from `a,b,c`.
    Sequence,
    /// A string-keyed collection parsed from `a:1,b:2`.
    Mapping,
    /// A type that consumes its resolved string through [`UnmarshalText`](crate::UnmarshalText).
    Hook,
}

/// Scalar grammars, with integer and float widths in bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    /// Signed integer of the given width, range checked on decode.
    Signed(u32),
    /// Unsigned integer of the given width, range checked on decode.
    Unsigned(u32),
    /// IEEE float of the given width; finite literals that overflow it are rejected.
    Float(u32),
    /// `1`, `t`, `true`, `0`, `f` or `false`, ignoring ASCII case.
    Bool,
    /// The resolved string, used verbatim.
    String,
}
