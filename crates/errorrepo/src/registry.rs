//! Message registry: catalogs, locale resolution and error construction

use crate::catalog::{CatalogStore, MessageTemplate};
use crate::config::RegistryConfig;
use crate::embedded::{builtin_resources, locale_from_resource_name, CatalogResource};
use crate::error::{RegistryError, RegistryResult};
use crate::locale::LocaleResolver;
use crate::render::{Arg, SharedError};
use crate::value::LocalizedError;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::backtrace::Backtrace;
use std::path::Path;
use tracing::{debug, error, info, trace, Level};

/// Process-wide registry holding the built-in catalogs.
static DEFAULT_REGISTRY: Lazy<Registry> = Lazy::new(|| bootstrap(builtin_resources()));

/// Build the process-wide registry from startup resources, aborting on any failure.
fn bootstrap(resources: RegistryResult<Vec<CatalogResource>>) -> Registry {
    let registry = Registry::default();
    if let Err(e) = resources.and_then(|resources| registry.register_resources(&resources)) {
        error!("Internal catalog load error: {}", e);
        panic!("Internal catalog load error: {}", e);
    }
    registry
}

/// The process-wide registry, loaded with the built-in catalogs on first use.
///
/// # Panics
///
/// Panics if a built-in catalog cannot be loaded.
pub fn default_registry() -> &'static Registry {
    &DEFAULT_REGISTRY
}

/// Registry of localized message catalogs.
///
/// All operations take `&self`; the catalogs sit behind a read/write lock so a
/// registry can be shared freely between threads.
#[derive(Debug, Default)]
pub struct Registry {
    store: RwLock<CatalogStore>,
    resolver: LocaleResolver,
}

impl Registry {
    /// Create an empty registry
    pub fn new(resolver: LocaleResolver) -> Self {
        Self {
            store: RwLock::new(CatalogStore::new()),
            resolver,
        }
    }

    /// Create a registry with the default resolver and every built-in catalog
    pub fn with_builtin() -> RegistryResult<Self> {
        let registry = Self::default();
        registry.register_builtin()?;
        Ok(registry)
    }

    /// Build a registry from configuration
    pub fn from_config(config: &RegistryConfig) -> RegistryResult<Self> {
        let registry = Self::new(config.resolver());

        if config.load_builtin {
            registry.register_builtin()?;
        }
        for dir in &config.catalog_dirs {
            registry.register_directory(dir)?;
        }

        info!("Registry initialized with locales {:?}", registry.locales());
        Ok(registry)
    }

    /// The locale resolver in use
    pub fn resolver(&self) -> &LocaleResolver {
        &self.resolver
    }

    /// Register `id=template` lines for a locale.
    ///
    /// Stops at the first malformed line; lines before it stay registered.
    pub fn register_catalog(&self, locale: &str, raw: &str) -> RegistryResult<usize> {
        let result = self.store.write().register(locale, raw);
        if let Err(e) = &result {
            error!("Failed to register catalog for locale {}: {}", locale, e);
        }
        result
    }

    /// Register every compiled-in catalog
    pub fn register_builtin(&self) -> RegistryResult<usize> {
        self.register_resources(&builtin_resources()?)
    }

    /// Register catalog resources in order, stopping at the first failure
    pub fn register_resources(&self, resources: &[CatalogResource]) -> RegistryResult<usize> {
        for resource in resources {
            debug!("Loading catalog resource {}", resource.name);
            self.register_catalog(&resource.locale, &resource.content)?;
        }
        Ok(resources.len())
    }

    /// Register every regular `<name>.<locale>` file in a directory.
    ///
    /// Files are loaded in name order. Returns the number of catalogs registered.
    pub fn register_directory(&self, dir: impl AsRef<Path>) -> RegistryResult<usize> {
        let dir = dir.as_ref();
        debug!("Loading catalog directory: {:?}", dir);

        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                files.push(entry.path());
            }
        }
        files.sort();

        for path in &files {
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            let locale = locale_from_resource_name(&name)?;
            let bytes = std::fs::read(path)?;
            let content = String::from_utf8(bytes)
                .map_err(|_| RegistryError::InvalidEncoding { name: name.clone() })?;
            self.register_catalog(&locale, &content)?;
        }

        info!("Loaded {} catalogs from {:?}", files.len(), dir);
        Ok(files.len())
    }

    /// Template registered for exactly `(locale, id)`
    pub fn lookup(&self, locale: &str, id: &str) -> Option<MessageTemplate> {
        self.store.read().lookup(locale, id).cloned()
    }

    /// Check if a catalog exists for the locale
    pub fn has_locale(&self, locale: &str) -> bool {
        self.store.read().has_locale(locale)
    }

    /// All registered locales, sorted
    pub fn locales(&self) -> Vec<String> {
        self.store.read().locales()
    }

    /// Resolve the template for `id`, walking the locale fallback chain.
    ///
    /// The first locale in the chain that has a catalog decides; a catalog
    /// without the id does not fall through to the next locale.
    pub fn resolve(&self, locale: &str, id: &str) -> Option<MessageTemplate> {
        let store = self.store.read();
        let chain = self.resolver.chain(locale);
        let selected = chain.iter().find(|candidate| store.has_locale(candidate))?;
        debug!("Resolved locale {} for {} (requested {})", selected, id, locale);
        store.lookup(selected, id).cloned()
    }

    /// Render the message for `id` in `locale`, degrading to a placeholder
    /// text when the id is unknown.
    pub fn message(&self, locale: &str, id: &str, args: &[Arg]) -> String {
        match self.resolve(locale, id) {
            Some(template) => {
                debug!("Search {}: {}", id, template.text());
                template.render(args)
            }
            None => format!("Unknown error ...{}", id),
        }
    }

    /// Construct an error for `id` in `locale`.
    ///
    /// A trailing [`Arg::Cause`] becomes the wrapped cause and is still used
    /// for substitution.
    pub fn new_error_locale(&self, locale: &str, id: &str, args: &[Arg]) -> LocalizedError {
        let cause: Option<SharedError> = args.last().and_then(Arg::as_cause).cloned();
        let message = self.message(locale, id, args);

        debug!("Error {} created: {:?}", id, cause.as_ref().map(ToString::to_string));
        debug!("Error message created:[{}] {}", id, message);
        if tracing::enabled!(Level::TRACE) {
            trace!("Stack trace:\n{}", Backtrace::force_capture());
        }

        LocalizedError::new(id, message, cause)
    }

    /// Construct an error for `id` in the current locale
    pub fn new_error(&self, id: &str, args: &[Arg]) -> LocalizedError {
        let locale = self.resolver.current_locale();
        self.new_error_locale(&locale, id, args)
    }
}
