//! Resolution and conversion of variable values

use crate::error::EnvError;
use crate::key::Field;
use crate::source::Source;
use std::fmt::Display;
use std::fs;
use std::str::FromStr;

/// Where a resolved string came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// The variable itself
    Env,
    /// The file named by `{KEY}_FILE`
    File,
    /// The field's declared default
    Default,
}

/// Resolve the string for `field`.
///
/// Priority order:
/// 1. Variable `key`, if set and non-empty
/// 2. Trimmed content of the file named by `{key}_FILE`, if the field is `from_file`
/// 3. The declared default, if non-empty
/// 4. `None`
///
/// Skipped fields and collection elements skip the first two steps.
pub fn resolve(field: &Field<'_>, source: &dyn Source) -> Result<Option<String>, EnvError> {
    let resolved = resolve_with_origin(field, source)?;
    match &resolved {
        Some((_, origin)) => tracing::debug!(key = field.key(), ?origin, "resolved value"),
        None if field.looks_up() => tracing::debug!(key = field.key(), "no value set"),
        None => {}
    }
    Ok(resolved.map(|(value, _)| value))
}

/// Resolve the string for `field`, reporting where it came from.
pub fn resolve_with_origin(
    field: &Field<'_>,
    source: &dyn Source,
) -> Result<Option<(String, Origin)>, EnvError> {
    if field.looks_up() {
        let key = field.key();
        if let Some(value) = source.get(key).filter(|v| !v.is_empty()) {
            return Ok(Some((value, Origin::Env)));
        }

        if field.from_file() {
            let file_var_name = format!("{}_FILE", key);
            if let Some(file_path) = source.get(&file_var_name).filter(|p| !p.is_empty()) {
                let value = fs::read_to_string(&file_path)
                    .map(|s| s.trim().to_string())
                    .map_err(|e| EnvError::FileRead {
                        name: file_var_name,
                        path: file_path,
                        source: e,
                    })?;
                return Ok(Some((value, Origin::File)));
            }
        }
    }

    if field.default().is_empty() {
        return Ok(None);
    }
    Ok(Some((field.default().to_string(), Origin::Default)))
}

/// Resolve and parse a scalar, falling back to `T::default()` when nothing resolves.
///
/// No conversion is attempted on the fallback path.
pub fn decode_scalar<T, E, F>(field: &Field<'_>, source: &dyn Source, parse: F) -> Result<T, EnvError>
where
    T: Default,
    E: Display,
    F: FnOnce(&str) -> Result<T, E>,
{
    match resolve(field, source)? {
        Some(value) => parse(&value).map_err(|e| EnvError::parse_error::<T>(field.key(), value, e)),
        None => Ok(T::default()),
    }
}

/// Parse a boolean the way environment switches are usually written.
///
/// Accepts `1`, `t`, `true`, `0`, `f` and `false`, ignoring ASCII case.
pub fn parse_bool(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "t" | "true" => Ok(true),
        "0" | "f" | "false" => Ok(false),
        _ => Err("expected one of 1, t, true, 0, f, false".to_string()),
    }
}

/// Parse a float, rejecting finite literals that overflow the target width.
///
/// `inf`, `infinity` and `nan` (any sign, any case) are still accepted.
pub fn parse_float<T>(value: &str, is_finite: fn(T) -> bool) -> Result<T, String>
where
    T: FromStr + Copy,
    T::Err: Display,
{
    let parsed = value.parse::<T>().map_err(|e| e.to_string())?;
    if !is_finite(parsed) && !is_non_finite_literal(value) {
        return Err("value out of range".to_string());
    }
    Ok(parsed)
}

fn is_non_finite_literal(value: &str) -> bool {
    let unsigned = value.trim().trim_start_matches(['+', '-']);
    ["inf", "infinity", "nan"]
        .iter()
        .any(|token| unsigned.eq_ignore_ascii_case(token))
}

/// Split a sequence literal into its comma separated segments.
pub(crate) fn split_sequence(value: &str) -> impl Iterator<Item = &str> {
    value.split(',')
}

/// Split a mapping literal into `(key, value)` pairs.
///
/// Entries are comma separated and split on their first `:`. An entry
/// without a `:` is reported against `field`.
pub(crate) fn split_mapping<'v, T>(
    field: &Field<'_>,
    value: &'v str,
) -> Result<Vec<(&'v str, &'v str)>, EnvError> {
    value
        .split(',')
        .map(|entry| {
            entry.split_once(':').ok_or_else(|| {
                EnvError::parse_error::<T>(field.key(), entry, "expected `key:value` entry")
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Annotation;
    use std::collections::HashMap;

    fn source(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn field(name: &'static str, default: &'static str) -> Field<'static> {
        Field::root("").child(&Annotation {
            name,
            default,
            ..Annotation::default()
        })
    }

    #[test]
    fn test_resolve_prefers_env() {
        let env = source(&[("STRING", "foo")]);
        let resolved = resolve_with_origin(&field("STRING", "test_string"), &env).unwrap();
        assert_eq!(resolved, Some(("foo".to_string(), Origin::Env)));
    }

    #[test]
    fn test_resolve_empty_env_uses_default() {
        let env = source(&[("STRING", "")]);
        let resolved = resolve_with_origin(&field("STRING", "test_string"), &env).unwrap();
        assert_eq!(resolved, Some(("test_string".to_string(), Origin::Default)));
    }

    #[test]
    fn test_resolve_absent() {
        let env = source(&[]);
        assert_eq!(resolve(&field("STRING", ""), &env).unwrap(), None);
    }

    #[test]
    fn test_resolve_empty_key_ignores_source() {
        let env = source(&[("", "from_env")]);
        assert_eq!(resolve(&field("", ""), &env).unwrap(), None);
        assert_eq!(
            resolve(&field("", "fallback"), &env).unwrap(),
            Some("fallback".to_string())
        );
    }

    #[test]
    fn test_resolve_element_ignores_source() {
        let env = source(&[("LIST", "from_env")]);
        let list = field("LIST", "");
        let element = list.element("literal");
        assert_eq!(resolve(&element, &env).unwrap(), Some("literal".to_string()));
    }

    #[test]
    fn test_resolve_from_file() {
        use std::io::Write;
        use tempfile::NamedTempFile;

        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "secret_value").unwrap();
        let path = temp_file.path().to_string_lossy().to_string();

        let env = source(&[("API_KEY_FILE", path.as_str())]);
        let api_key = Field::root("").child(&Annotation {
            name: "API_KEY",
            from_file: true,
            ..Annotation::default()
        });
        let resolved = resolve_with_origin(&api_key, &env).unwrap();
        assert_eq!(resolved, Some(("secret_value".to_string(), Origin::File)));

        // Without from_file the file variable is not consulted
        assert_eq!(resolve(&field("API_KEY", ""), &env).unwrap(), None);
    }

    #[test]
    fn test_resolve_file_not_found() {
        let env = source(&[("API_KEY_FILE", "/nonexistent/file/path")]);
        let api_key = Field::root("").child(&Annotation {
            name: "API_KEY",
            from_file: true,
            ..Annotation::default()
        });
        let result = resolve(&api_key, &env);
        assert!(matches!(result, Err(EnvError::FileRead { .. })));
    }

    #[test]
    fn test_parse_bool_tokens() {
        for token in ["1", "t", "T", "TRUE", "true", "True", "tRuE"] {
            assert_eq!(parse_bool(token), Ok(true), "{token}");
        }
        for token in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool(token), Ok(false), "{token}");
        }
        assert!(parse_bool("yes").is_err());
        assert!(parse_bool("").is_err());
    }

    #[test]
    fn test_decode_scalar_zero_value_without_conversion() {
        let env = source(&[]);
        let value: u16 = decode_scalar(&field("PORT", ""), &env, |_| Err("not called")).unwrap();
        assert_eq!(value, 0);
    }

    #[test]
    fn test_decode_scalar_reports_key_and_value() {
        let env = source(&[("PORT", "not_a_number")]);
        let result = decode_scalar(&field("PORT", ""), &env, str::parse::<u16>);
        match result {
            Err(EnvError::Parse {
                name,
                value,
                type_name,
                ..
            }) => {
                assert_eq!(name, "PORT");
                assert_eq!(value, "not_a_number");
                assert!(type_name.contains("u16"));
            }
            other => panic!("Expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_float_overflow() {
        assert_eq!(parse_float::<f32>("1e39", f32::is_finite), Err("value out of range".to_string()));
        assert_eq!(parse_float::<f64>("1e309", f64::is_finite), Err("value out of range".to_string()));
        assert_eq!(parse_float::<f64>("-1e10", f64::is_finite), Ok(-1e10));
        assert!(parse_float::<f64>("abc", f64::is_finite).is_err());
    }

    #[test]
    fn test_parse_float_non_finite_tokens() {
        for token in ["inf", "+Infinity", "-INF"] {
            let value = parse_float::<f32>(token, f32::is_finite).unwrap();
            assert!(value.is_infinite(), "{token}");
        }
        assert!(parse_float::<f64>("NaN", f64::is_finite).unwrap().is_nan());
    }

    #[test]
    fn test_split_mapping_on_first_colon() {
        let map = field("HASH", "");
        let pairs = split_mapping::<()>(&map, "a:1,url:http://x").unwrap();
        assert_eq!(pairs, vec![("a", "1"), ("url", "http://x")]);
    }

    #[test]
    fn test_split_mapping_missing_colon() {
        let map = field("HASH", "");
        let result = split_mapping::<()>(&map, "a:1,b");
        assert!(matches!(result, Err(EnvError::Parse { ref value, .. }) if value == "b"));
    }
}
