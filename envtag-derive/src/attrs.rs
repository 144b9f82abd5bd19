//! Attribute parsing for `#[env(...)]` annotations.
//!
//! This module extracts and validates tags from struct fields and from the
//! deriving type itself during macro expansion.

use syn::meta::ParseNestedMeta;
use syn::{Attribute, Field, LitStr};

/// Reserved name that marks a field as skipped.
const SKIP_SENTINEL: &str = "-";

/// Parsed `#[env(...)]` attributes from a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Key fragment joined to the parent's key.
    ///
    /// `None` contributes no fragment.
    pub name: Option<String>,

    /// No variable of its own and no documentation; children are still decoded.
    pub skip: bool,

    /// String fallback when the variable is unset or empty.
    pub default: Option<String>,

    /// Documentation fragment rendered by `describe`.
    pub description: Option<String>,

    /// Enable `{VAR}_FILE` pattern for reading secrets from mounted files.
    pub from_file: bool,

    /// Custom deserializer function path (e.g., `"serde_json::from_str"`).
    ///
    /// When specified, bypasses the built-in traversal and uses this function instead.
    pub deserializer: Option<String>,
}

/// Parsed `#[env(...)]` attributes from the deriving type.
#[derive(Debug, Default)]
pub struct ContainerAttrs {
    /// Root key fragment when the type is the top-level target.
    pub prefix: Option<String>,

    /// Decode through `UnmarshalText` instead of walking fields.
    pub text: bool,
}

fn string_value(meta: &ParseNestedMeta<'_>) -> syn::Result<String> {
    let lit: LitStr = meta.value()?.parse()?;
    Ok(lit.value())
}

impl FieldAttrs {
    /// Extract and parse `#[env(...)]` attributes from a struct field.
    ///
    /// Attributes other than `env` are ignored so other macros can process them.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("env") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                // name = "..."
                if meta.path.is_ident("name") {
                    let name = string_value(&meta)?;
                    if name == SKIP_SENTINEL {
                        attrs.skip = true;
                    } else {
                        attrs.name = Some(name);
                    }
                    return Ok(());
                }

                // skip
                if meta.path.is_ident("skip") {
                    attrs.skip = true;
                    return Ok(());
                }

                // default = "..."
                if meta.path.is_ident("default") {
                    attrs.default = Some(string_value(&meta)?);
                    return Ok(());
                }

                // description = "..."
                if meta.path.is_ident("description") {
                    attrs.description = Some(string_value(&meta)?);
                    return Ok(());
                }

                // from_file
                if meta.path.is_ident("from_file") {
                    attrs.from_file = true;
                    return Ok(());
                }

                // deserializer = "function::path"
                if meta.path.is_ident("deserializer") {
                    attrs.deserializer = Some(string_value(&meta)?);
                    return Ok(());
                }

                Err(meta.error("unsupported env attribute"))
            })?;
        }

        if attrs.skip && attrs.name.is_some() {
            return Err(syn::Error::new_spanned(
                field,
                "a skipped field has no variable of its own; remove `name`",
            ));
        }

        Ok(attrs)
    }
}

impl ContainerAttrs {
    /// Extract and parse `#[env(...)]` attributes from the deriving type.
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut container = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("env") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("prefix") {
                    container.prefix = Some(string_value(&meta)?);
                    return Ok(());
                }

                if meta.path.is_ident("text") {
                    container.text = true;
                    return Ok(());
                }

                Err(meta.error("unsupported type-level env attribute"))
            })?;
        }

        Ok(container)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_parse_name_attribute() {
        let field: Field = parse_quote! {
            #[env(name = "STRING")]
            pub string: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.name, Some("STRING".to_string()));
        assert!(!attrs.skip);
    }

    #[test]
    fn test_parse_without_attribute() {
        let field: Field = parse_quote! {
            pub nested: Nested
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.name, None);
        assert_eq!(attrs.default, None);
    }

    #[test]
    fn test_parse_default_and_description() {
        let field: Field = parse_quote! {
            #[env(name = "STRING", default = "test_string", description = "this is description")]
            pub string: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.default, Some("test_string".to_string()));
        assert_eq!(attrs.description, Some("this is description".to_string()));
    }

    #[test]
    fn test_parse_skip_sentinel() {
        let field: Field = parse_quote! {
            #[env(name = "-", description = "ignored")]
            pub pas_struct: Nested
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert!(attrs.skip);
        assert_eq!(attrs.name, None);
    }

    #[test]
    fn test_parse_skip_flag() {
        let field: Field = parse_quote! {
            #[env(skip)]
            pub pas_struct: Nested
        };

        assert!(FieldAttrs::from_field(&field).unwrap().skip);
    }

    #[test]
    fn test_skip_with_name_is_rejected() {
        let field: Field = parse_quote! {
            #[env(skip, name = "NESTED")]
            pub nested: Nested
        };

        assert!(FieldAttrs::from_field(&field).is_err());
    }

    #[test]
    fn test_parse_multiple_attributes() {
        let field: Field = parse_quote! {
            #[env(name = "DB_URL", from_file)]
            pub database_url: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.name, Some("DB_URL".to_string()));
        assert!(attrs.from_file);
    }

    #[test]
    fn test_parse_deserializer() {
        let field: Field = parse_quote! {
            #[env(name = "TAGS", deserializer = "serde_json::from_str")]
            pub tags: Vec<String>
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.deserializer, Some("serde_json::from_str".to_string()));
    }

    #[test]
    fn test_unknown_attribute_is_rejected() {
        let field: Field = parse_quote! {
            #[env(nmae = "TYPO")]
            pub field_name: String
        };

        assert!(FieldAttrs::from_field(&field).is_err());
    }

    #[test]
    fn test_non_string_default_is_rejected() {
        let field: Field = parse_quote! {
            #[env(default = 42)]
            pub port: u16
        };

        assert!(FieldAttrs::from_field(&field).is_err());
    }

    #[test]
    fn test_other_attributes_are_ignored() {
        let field: Field = parse_quote! {
            #[serde(rename = "x")]
            #[env(name = "X")]
            pub x: String
        };

        assert_eq!(FieldAttrs::from_field(&field).unwrap().name, Some("X".to_string()));
    }

    #[test]
    fn test_parse_container_attributes() {
        let input: syn::DeriveInput = parse_quote! {
            #[env(prefix = "APP")]
            #[env(text)]
            struct Config;
        };

        let attrs = ContainerAttrs::from_attrs(&input.attrs).unwrap();
        assert_eq!(attrs.prefix, Some("APP".to_string()));
        assert!(attrs.text);
    }
}
