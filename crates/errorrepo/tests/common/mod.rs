//! Shared helpers for integration tests.

#![allow(dead_code)]

use errorrepo::{LocaleResolver, Registry};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Initialize logging for tests. Safe to call multiple times.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Registry with the built-in catalogs whose resolver reads an unset variable,
/// so the current locale is always `en`.
pub fn builtin_registry() -> Registry {
    let registry = Registry::new(LocaleResolver::new("ERRORREPO_TEST_LOCALE_UNSET", "en"));
    registry
        .register_builtin()
        .expect("built-in catalogs should load");
    registry
}
