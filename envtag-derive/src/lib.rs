//! Derive macro implementation for envtag

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::{parse_macro_input, Data, DeriveInput, Fields, GenericArgument, PathArguments, Type};

mod attrs;

use attrs::{ContainerAttrs, FieldAttrs};

/// Type names that are unsupported wherever they appear.
const UNSUPPORTED_IDENTS: &[&str] = &["Complex32", "Complex64"];

/// Smart pointers that are unsupported when they hold a trait object.
const POINTER_IDENTS: &[&str] = &["Box", "Rc", "Arc"];

/// Check whether a field type has no shape that can be populated from a string.
///
/// Covers function pointers, references, raw pointers, trait objects,
/// tuples, fixed-size arrays, slices, channels and complex numbers.
fn is_unsupported(ty: &Type) -> bool {
    match ty {
        Type::BareFn(_)
        | Type::Reference(_)
        | Type::Ptr(_)
        | Type::TraitObject(_)
        | Type::ImplTrait(_)
        | Type::Never(_)
        | Type::Tuple(_)
        | Type::Array(_)
        | Type::Slice(_) => true,
        Type::Paren(paren) => is_unsupported(&paren.elem),
        Type::Group(group) => is_unsupported(&group.elem),
        Type::Path(type_path) => {
            let segments = &type_path.path.segments;
            let Some(last) = segments.last() else {
                return false;
            };

            // std::sync::mpsc::{Sender, SyncSender, Receiver}
            let is_channel = segments.iter().any(|seg| seg.ident == "mpsc")
                && ["Sender", "SyncSender", "Receiver"]
                    .iter()
                    .any(|name| last.ident == name);

            let is_complex = UNSUPPORTED_IDENTS.iter().any(|name| last.ident == name);

            let is_boxed_trait_object = POINTER_IDENTS.iter().any(|name| last.ident == name)
                && match &last.arguments {
                    PathArguments::AngleBracketed(args) => matches!(
                        args.args.first(),
                        Some(GenericArgument::Type(Type::TraitObject(_)))
                    ),
                    _ => false,
                };

            is_channel || is_complex || is_boxed_trait_object
        }
        _ => false,
    }
}

/// `EnvTag` derive macro
///
/// Implements `envtag::EnvTag` for a struct so it can be populated from
/// environment variables and documented.
///
/// # Supported Attributes
///
/// **Type-level**:
/// - `#[env(prefix = "APP")]`: Root key fragment when the type is the top-level target
/// - `#[env(text)]`: Decode through the type's `UnmarshalText` implementation
///
/// **Field-level**:
/// - `#[env(name = "FRAGMENT")]`: Key fragment joined to the parent's key
/// - `#[env(default = "value")]`: Fallback when the variable is unset or empty
/// - `#[env(description = "text")]`: Documentation rendered by `describe`
/// - `#[env(skip)]` or `#[env(name = "-")]`: No own variable, left out of `describe`
/// - `#[env(from_file)]`: Support `{VAR}_FILE` pattern
/// - `#[env(deserializer = "func")]`: Use custom deserializer function
///
/// # Example
///
/// See the `envtag` crate documentation for usage examples.
#[proc_macro_derive(EnvTag, attributes(env))]
pub fn derive_env_tag(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let container = ContainerAttrs::from_attrs(&input.attrs)?;
    if container.text {
        return Ok(expand_text(input, &container));
    }

    // Extract fields
    let empty = Punctuated::new();
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            Fields::Unit => &empty,
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    input,
                    "EnvTag only supports structs with named fields; use #[env(text)] for newtypes",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "EnvTag only supports structs; use #[env(text)] with UnmarshalText for other types",
            ));
        }
    };

    let mut decoders = Vec::with_capacity(fields.len());
    let mut describers = Vec::with_capacity(fields.len());

    for field in fields {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
        let field_type = &field.ty;

        // Parse attributes
        let attrs = FieldAttrs::from_field(field)?;

        let name = attrs.name.unwrap_or_default();
        let default = attrs.default.unwrap_or_default();
        let description = attrs.description.unwrap_or_default();
        let skip = attrs.skip;
        let from_file = attrs.from_file;

        let annotation = quote! {
            ::envtag::Annotation {
                name: #name,
                default: #default,
                description: #description,
                skip: #skip,
                from_file: #from_file,
            }
        };

        let unsupported = is_unsupported(field_type);

        // Generate decoding statement
        let decode = if unsupported {
            quote! {
                ::core::result::Result::<(), ::envtag::EnvError>::Err(
                    ::envtag::EnvError::unsupported::<#field_type>(__field.key())
                )?;
            }
        } else if let Some(func_path) = &attrs.deserializer {
            let func: syn::Path = syn::parse_str(func_path).map_err(|e| {
                syn::Error::new_spanned(field, format!("invalid deserializer path: {e}"))
            })?;

            quote! {
                self.#field_name = match ::envtag::de::resolve(&__field, __source)? {
                    ::core::option::Option::Some(__value) => #func(&__value).map_err(|e| {
                        ::envtag::EnvError::parse_error::<#field_type>(__field.key(), __value.as_str(), e)
                    })?,
                    ::core::option::Option::None => ::core::default::Default::default(),
                };
            }
        } else {
            quote! {
                ::envtag::EnvTag::decode(&mut self.#field_name, &__field, __source)?;
            }
        };

        decoders.push(quote! {
            {
                let __field = __parent.child(&#annotation);
                #decode
            }
        });

        // Skipped fields and everything below them are left out of the documentation
        if skip {
            continue;
        }

        let describe = if unsupported {
            quote! {
                ::core::result::Result::<::std::string::String, ::envtag::EnvError>::Err(
                    ::envtag::EnvError::unsupported::<#field_type>(__field.key())
                )?
            }
        } else if attrs.deserializer.is_some() {
            quote! { ::envtag::describe::line(&__field) }
        } else {
            quote! { <#field_type as ::envtag::EnvTag>::describe(&__field)? }
        };

        describers.push(quote! {
            {
                let __field = __parent.child(&#annotation);
                __lines.push(#describe);
            }
        });
    }

    let type_name = &input.ident;
    let prefix = container.prefix.unwrap_or_default();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::envtag::EnvTag for #type_name #ty_generics #where_clause {
            const KIND: ::envtag::Kind = ::envtag::Kind::Record;
            const PREFIX: &'static str = #prefix;

            fn decode(
                &mut self,
                __parent: &::envtag::Field<'_>,
                __source: &dyn ::envtag::Source,
            ) -> ::core::result::Result<(), ::envtag::EnvError> {
                #(#decoders)*
                ::core::result::Result::Ok(())
            }

            fn describe(
                __parent: &::envtag::Field<'_>,
            ) -> ::core::result::Result<::std::string::String, ::envtag::EnvError> {
                #[allow(unused_mut)]
                let mut __lines = ::envtag::describe::Lines::new(__parent.description());
                #(#describers)*
                ::core::result::Result::Ok(__lines.finish())
            }
        }
    })
}

/// Generate an implementation that hands the resolved string to `UnmarshalText`.
fn expand_text(input: &DeriveInput, container: &ContainerAttrs) -> TokenStream2 {
    let type_name = &input.ident;
    let prefix = container.prefix.clone().unwrap_or_default();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        impl #impl_generics ::envtag::EnvTag for #type_name #ty_generics #where_clause {
            const KIND: ::envtag::Kind = ::envtag::Kind::Hook;
            const PREFIX: &'static str = #prefix;

            fn decode(
                &mut self,
                __field: &::envtag::Field<'_>,
                __source: &dyn ::envtag::Source,
            ) -> ::core::result::Result<(), ::envtag::EnvError> {
                ::envtag::decode_text(self, __field, __source)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_supported_types() {
        let types: Vec<Type> = vec![
            parse_quote!(String),
            parse_quote!(u8),
            parse_quote!(Option<Box<Nested>>),
            parse_quote!(Vec<i32>),
            parse_quote!(std::collections::HashMap<String, bool>),
            parse_quote!(Sender),
        ];
        for ty in &types {
            assert!(!is_unsupported(ty), "{}", quote!(#ty));
        }
    }

    #[test]
    fn test_unsupported_types() {
        let types: Vec<Type> = vec![
            parse_quote!(fn(u8) -> u8),
            parse_quote!(&'static str),
            parse_quote!(*const u8),
            parse_quote!((u8, u8)),
            parse_quote!(()),
            parse_quote!([u8; 4]),
            parse_quote!(Box<dyn Fn()>),
            parse_quote!(std::sync::Arc<dyn Send>),
            parse_quote!(std::sync::mpsc::Receiver<u8>),
            parse_quote!(mpsc::Sender<String>),
            parse_quote!(num_complex::Complex64),
        ];
        for ty in &types {
            assert!(is_unsupported(ty), "{}", quote!(#ty));
        }
    }

    #[test]
    fn test_tuple_struct_without_text_is_rejected() {
        let input: DeriveInput = parse_quote! {
            struct Seconds(u64);
        };
        assert!(expand(&input).is_err());
    }

    #[test]
    fn test_enum_with_text_is_accepted() {
        let input: DeriveInput = parse_quote! {
            #[env(text)]
            enum Level { Debug, Info }
        };
        let tokens = expand(&input).unwrap().to_string();
        assert!(tokens.contains("decode_text"));
    }

    #[test]
    fn test_skipped_field_is_decoded_but_not_described() {
        let input: DeriveInput = parse_quote! {
            struct Config {
                #[env(skip)]
                pas: Nested,
            }
        };
        let tokens = expand(&input).unwrap().to_string();
        assert!(tokens.contains("EnvTag :: decode"));
        assert!(!tokens.contains("as :: envtag :: EnvTag > :: describe"));
    }
}
