//! # errorrepo
//!
//! Localized error-message registry.
//!
//! Error ids map to message templates kept in per-locale catalogs. Building an
//! error picks a locale (explicit, then the environment, then `en`), renders
//! the template with positional arguments and returns a [`LocalizedError`]
//! carrying the id, the message and an optional cause.
//!
//! Catalogs are plain text, one `id=template` entry per line. Placeholders are
//! `{0}` to `{9}` and take arguments in order of appearance.
//!
//! # Example
//!
//! ```rust
//! use errorrepo::{new_error_locale, register_message};
//!
//! # fn example() -> Result<(), errorrepo::RegistryError> {
//! register_message("en", "APP00001=Cannot open {0}")?;
//!
//! let error = new_error_locale!("en", "APP00001", "config.toml");
//! assert_eq!(error.to_string(), "APP00001: Cannot open config.toml");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod catalog;
pub mod config;
pub mod embedded;
pub mod error;
pub mod locale;
mod macros;
pub mod registry;
pub mod render;
pub mod value;

pub use catalog::{CatalogStore, MessageTemplate};
pub use config::RegistryConfig;
pub use error::{RegistryError, RegistryResult};
pub use locale::{current_locale, LocaleResolver, DEFAULT_LOCALE, DEFAULT_LOCALE_ENV};
pub use registry::{default_registry, Registry};
pub use render::{render, Arg, SharedError};
pub use value::LocalizedError;

/// Register catalog text for a locale in the default registry
pub fn register_message(locale: &str, raw: &str) -> RegistryResult<usize> {
    default_registry().register_catalog(locale, raw)
}

/// Construct an error from the default registry in the current locale
pub fn new_error(id: &str, args: &[Arg]) -> LocalizedError {
    default_registry().new_error(id, args)
}

/// Construct an error from the default registry in `locale`
pub fn new_error_locale(locale: &str, id: &str, args: &[Arg]) -> LocalizedError {
    default_registry().new_error_locale(locale, id, args)
}
