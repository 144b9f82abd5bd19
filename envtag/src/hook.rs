//! Types that parse their own resolved string.

use crate::de;
use crate::error::{BoxError, EnvError};
use crate::key::Field;
use crate::source::Source;

/// Consume the resolved string directly instead of being walked field by field.
///
/// Enable it with `#[derive(EnvTag)]` and `#[env(text)]` on the type. The
/// hook receives the variable's value, else the field's default, else an
/// empty string, and is solely responsible for parsing it.
///
/// ```rust
/// use envtag::{EnvTag, UnmarshalText};
/// use std::time::Duration;
///
/// #[derive(Debug, Default, EnvTag)]
/// #[env(text)]
/// struct Seconds(Duration);
///
/// impl UnmarshalText for Seconds {
///     fn unmarshal_text(&mut self, raw: &str) -> Result<(), envtag::BoxError> {
///         let secs = raw.trim_end_matches('s').parse()?;
///         self.0 = Duration::from_secs(secs);
///         Ok(())
///     }
/// }
///
/// #[derive(Debug, Default, EnvTag)]
/// struct Config {
///     #[env(name = "ENVTAG_DOC_TIMEOUT", default = "30s")]
///     timeout: Option<Seconds>,
/// }
///
/// let config = Config::from_env().unwrap();
/// assert_eq!(config.timeout.unwrap().0, Duration::from_secs(30));
/// ```
pub trait UnmarshalText {
    fn unmarshal_text(&mut self, raw: &str) -> Result<(), BoxError>;
}

/// Hand the env-or-default string for `field` to `target`'s hook.
#[doc(hidden)]
pub fn decode_text<T: UnmarshalText>(
    target: &mut T,
    field: &Field<'_>,
    source: &dyn Source,
) -> Result<(), EnvError> {
    let raw = de::resolve(field, source)?.unwrap_or_default();
    target
        .unmarshal_text(&raw)
        .map_err(|source| EnvError::Unmarshal {
            name: field.key().to_string(),
            source,
        })
}
