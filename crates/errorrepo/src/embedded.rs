//! Catalogs compiled into the binary

use crate::error::{RegistryError, RegistryResult};
use rust_embed::RustEmbed;
use std::path::Path;

/// Built-in catalog files, one per locale, named `<name>.<locale>`
#[derive(RustEmbed)]
#[folder = "messages/"]
pub struct BuiltinCatalogs;

/// A built-in catalog ready for registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogResource {
    /// Resource file name
    pub name: String,
    /// Locale taken from the file extension
    pub locale: String,
    /// Raw `id=template` lines
    pub content: String,
}

/// Locale encoded in a catalog file name, e.g. `messages.de` -> `de`
pub fn locale_from_resource_name(name: &str) -> RegistryResult<String> {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(str::to_string)
        .ok_or_else(|| RegistryError::InvalidResourceName {
            name: name.to_string(),
        })
}

/// Read every built-in catalog, sorted by resource name
pub fn builtin_resources() -> RegistryResult<Vec<CatalogResource>> {
    let mut names: Vec<String> = BuiltinCatalogs::iter().map(|name| name.into_owned()).collect();
    names.sort();

    names
        .into_iter()
        .map(|name| {
            let locale = locale_from_resource_name(&name)?;
            let file = BuiltinCatalogs::get(&name).ok_or_else(|| RegistryError::MissingResource {
                name: name.clone(),
            })?;
            let content = std::str::from_utf8(file.data.as_ref())
                .map_err(|_| RegistryError::InvalidEncoding { name: name.clone() })?
                .to_string();

            Ok(CatalogResource {
                name,
                locale,
                content,
            })
        })
        .collect()
}
