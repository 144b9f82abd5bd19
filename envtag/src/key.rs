//! Naming context: key fragments joined along the path to a field.

/// Reserved fragment that excludes a field from naming and documentation.
pub const SKIP: &str = "-";

/// Join a parent key and a child fragment.
///
/// An empty side yields the other side unchanged; two non-empty sides are
/// joined with `_`. Keys are opaque and used verbatim as variable names.
///
/// ```
/// use envtag::join_key;
///
/// assert_eq!(join_key("STRUCT", "STRING"), "STRUCT_STRING");
/// assert_eq!(join_key("", "STRING"), "STRING");
/// assert_eq!(join_key("STRUCT", ""), "STRUCT");
/// assert_eq!(join_key("", ""), "");
/// ```
pub fn join_key(parent: &str, child: &str) -> String {
    match (parent.is_empty(), child.is_empty()) {
        (true, _) => child.to_string(),
        (false, true) => parent.to_string(),
        (false, false) => format!("{parent}_{child}"),
    }
}

/// Per-field tags, declared once with the type.
///
/// `#[derive(EnvTag)]` emits one of these for every struct field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Annotation {
    /// Key fragment; empty contributes nothing to the key.
    pub name: &'static str,
    /// Fallback used when the variable is unset or empty.
    pub default: &'static str,
    /// Documentation fragment.
    pub description: &'static str,
    /// The field has no variable of its own and is not documented.
    pub skip: bool,
    /// Fall back to reading `{KEY}_FILE` when the variable is unset or empty.
    pub from_file: bool,
}

impl Annotation {
    /// Whether the field is excluded from its own lookup and from documentation.
    pub fn is_skipped(&self) -> bool {
        self.skip || self.name == SKIP
    }
}

/// Which lookups a field and its descendants may perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lookup {
    /// The field's own key and its children's keys are consulted.
    Full,
    /// Skipped field: only its children consult the environment.
    Children,
    /// Collection element: determined entirely by its literal default.
    Literal,
}

/// A position in the traversal: its key, default and description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field<'a> {
    key: String,
    default: &'a str,
    description: &'a str,
    from_file: bool,
    lookup: Lookup,
}

impl Field<'static> {
    /// The top-level target, named by `prefix`.
    pub fn root(prefix: &str) -> Self {
        Self {
            key: prefix.to_string(),
            default: "",
            description: "",
            from_file: false,
            lookup: Lookup::Full,
        }
    }
}

impl<'a> Field<'a> {
    /// The member of this field described by `annotation`.
    ///
    /// A skipped member keeps this field's key so that its own children
    /// are named directly under it.
    pub fn child(&self, annotation: &Annotation) -> Field<'static> {
        let skipped = annotation.is_skipped();
        let key = if skipped {
            self.key.clone()
        } else {
            join_key(&self.key, annotation.name)
        };
        let lookup = match self.lookup {
            Lookup::Literal => Lookup::Literal,
            Lookup::Full | Lookup::Children if skipped => Lookup::Children,
            Lookup::Full | Lookup::Children => Lookup::Full,
        };

        Field {
            key,
            default: annotation.default,
            description: annotation.description,
            from_file: annotation.from_file,
            lookup,
        }
    }

    /// A collection element whose value is the literal `text`.
    ///
    /// The element keeps this field's key for error reporting only; it and
    /// its descendants never consult the environment.
    pub fn element<'t>(&self, text: &'t str) -> Field<'t> {
        Field {
            key: self.key.clone(),
            default: text,
            description: "",
            from_file: false,
            lookup: Lookup::Literal,
        }
    }

    /// The joined key, used verbatim as the variable name.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The declared fallback.
    pub fn default(&self) -> &'a str {
        self.default
    }

    /// The declared documentation fragment.
    pub fn description(&self) -> &'a str {
        self.description
    }

    /// Whether `{KEY}_FILE` is consulted after the variable itself.
    pub fn from_file(&self) -> bool {
        self.from_file
    }

    /// Whether this field's own key is looked up in the source.
    pub fn looks_up(&self) -> bool {
        self.lookup == Lookup::Full && !self.key.is_empty()
    }
}
