use serde::Deserialize;
use std::path::Path;

use crate::error::{InputError, Result};
use crate::import::{has_extension, ImportFormat};
use crate::models::Package;

/// Accepted shapes for a single JSON package
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PackageEntry {
    Object(Package),
    Pair(String, Vec<f64>),
}

impl From<PackageEntry> for Package {
    fn from(entry: PackageEntry) -> Self {
        match entry {
            PackageEntry::Object(package) => package,
            PackageEntry::Pair(label, data) => Package::new(label, data),
        }
    }
}

/// JSON importer for arrays of packages
pub struct JsonImporter;

impl JsonImporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonImporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportFormat for JsonImporter {
    fn can_import(&self, file_path: &Path) -> bool {
        has_extension(file_path, &["json"])
    }

    fn parse_packages(&self, content: &str) -> Result<Vec<Package>> {
        let entries: Vec<PackageEntry> =
            serde_json::from_str(content).map_err(InputError::from)?;
        Ok(entries.into_iter().map(Package::from).collect())
    }

    fn get_format_name(&self) -> &'static str {
        "json"
    }
}
