//! Locale detection from the process environment

use tracing::debug;

/// Locale used when nothing else resolves
pub const DEFAULT_LOCALE: &str = "en";

/// Environment variable holding the ambient locale
pub const DEFAULT_LOCALE_ENV: &str = "LANG";

/// Resolves the effective locale of a rendering request.
///
/// The environment is read on every call; nothing is cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleResolver {
    env_var: String,
    default_locale: String,
}

impl Default for LocaleResolver {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE_ENV, DEFAULT_LOCALE)
    }
}

impl LocaleResolver {
    /// Create a resolver reading `env_var` and falling back to `default_locale`
    pub fn new(env_var: impl Into<String>, default_locale: impl Into<String>) -> Self {
        Self {
            env_var: env_var.into(),
            default_locale: default_locale.into(),
        }
    }

    /// Name of the environment variable consulted
    pub fn env_var(&self) -> &str {
        &self.env_var
    }

    /// The last-resort locale
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Current locale derived from the environment.
    ///
    /// Unset, non-unicode, empty or single-character values give the default
    /// locale; anything longer is cut to its first two characters, case kept.
    pub fn current_locale(&self) -> String {
        let value = std::env::var(&self.env_var).ok();
        let locale = locale_from_env_value(value.as_deref(), &self.default_locale);
        debug!("Current {}: {}", self.env_var, locale);
        locale
    }

    /// Fallback chain for an explicitly requested locale
    pub fn chain(&self, requested: &str) -> [String; 3] {
        [
            requested.to_string(),
            self.current_locale(),
            self.default_locale.clone(),
        ]
    }
}

/// Derive a locale code from a raw environment value
pub fn locale_from_env_value(value: Option<&str>, default_locale: &str) -> String {
    match value {
        Some(value) if value.chars().count() >= 2 => value.chars().take(2).collect(),
        _ => default_locale.to_string(),
    }
}

/// Current locale using `LANG` and the `en` default
pub fn current_locale() -> String {
    LocaleResolver::default().current_locale()
}
