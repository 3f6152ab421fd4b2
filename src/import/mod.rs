//! Loading package batches from files
//!
//! Supported formats are CSV (`label,v1,v2,...` per row) and JSON (an array of
//! `{"label": ..., "data": [...]}` objects or `[label, [...]]` pairs).

use std::path::Path;
use tracing::debug;

use crate::error::{InputError, Result};
use crate::models::Package;

pub mod csv;
pub mod json;

/// Trait for reading packages from different file formats
pub trait ImportFormat: Send + Sync {
    /// Check if this importer can handle the given file
    fn can_import(&self, file_path: &Path) -> bool;

    /// Parse packages from file content, preserving their order
    fn parse_packages(&self, content: &str) -> Result<Vec<Package>>;

    /// Get the format name for this importer
    fn get_format_name(&self) -> &'static str;
}

/// Manager for coordinating the available import formats
pub struct ImportManager {
    importers: Vec<Box<dyn ImportFormat>>,
}

impl ImportManager {
    /// Create a new import manager with all available importers
    pub fn new() -> Self {
        let importers: Vec<Box<dyn ImportFormat>> = vec![
            Box::new(csv::CsvImporter::new()),
            Box::new(json::JsonImporter::new()),
        ];

        Self { importers }
    }

    /// Import a file, auto-detecting the format unless one is given
    pub fn import_file(&self, file_path: &Path, format: Option<&str>) -> Result<Vec<Package>> {
        if !file_path.is_file() {
            return Err(InputError::FileNotFound {
                path: file_path.to_path_buf(),
            }
            .into());
        }

        let importer = match format {
            Some(name) => self.importer_by_name(name)?,
            None => self.detect_importer(file_path)?,
        };

        let content = std::fs::read_to_string(file_path)?;
        let packages = importer.parse_packages(&content)?;

        debug!(
            file = %file_path.display(),
            format = importer.get_format_name(),
            packages = packages.len(),
            "Imported packages"
        );
        Ok(packages)
    }

    fn importer_by_name(&self, name: &str) -> Result<&dyn ImportFormat> {
        self.importers
            .iter()
            .find(|importer| importer.get_format_name().eq_ignore_ascii_case(name))
            .map(|importer| importer.as_ref())
            .ok_or_else(|| {
                InputError::UnsupportedFormat {
                    format: name.to_string(),
                }
                .into()
            })
    }

    fn detect_importer(&self, file_path: &Path) -> Result<&dyn ImportFormat> {
        self.importers
            .iter()
            .find(|importer| importer.can_import(file_path))
            .map(|importer| importer.as_ref())
            .ok_or_else(|| {
                InputError::UnsupportedFormat {
                    format: file_path
                        .extension()
                        .and_then(|ext| ext.to_str())
                        .unwrap_or("<none>")
                        .to_string(),
                }
                .into()
            })
    }
}

impl Default for ImportManager {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn has_extension(file_path: &Path, extensions: &[&str]) -> bool {
    file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.iter().any(|known| ext.eq_ignore_ascii_case(known)))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FitCalcError;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_import_detects_format_from_extension() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "RUN,15000,1,75").unwrap();
        writeln!(file, "WLK,9000,1,75,180").unwrap();

        let packages = ImportManager::new().import_file(file.path(), None).unwrap();
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[1], Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]));
    }

    #[test]
    fn test_import_with_explicit_format() {
        let mut file = Builder::new().suffix(".txt").tempfile().unwrap();
        write!(file, r#"[{{"label": "RUN", "data": [15000, 1, 75]}}]"#).unwrap();

        let manager = ImportManager::new();
        assert!(manager.import_file(file.path(), None).is_err());

        let packages = manager.import_file(file.path(), Some("JSON")).unwrap();
        assert_eq!(packages, vec![Package::new("RUN", vec![15000.0, 1.0, 75.0])]);
    }

    #[test]
    fn test_import_missing_file() {
        let err = ImportManager::new()
            .import_file(Path::new("/nonexistent/packages.csv"), None)
            .unwrap_err();
        assert!(matches!(err, FitCalcError::Input(InputError::FileNotFound { .. })));
    }

    #[test]
    fn test_unknown_format_name() {
        let file = Builder::new().suffix(".csv").tempfile().unwrap();
        let err = ImportManager::new()
            .import_file(file.path(), Some("xml"))
            .unwrap_err();
        assert!(matches!(err, FitCalcError::Input(InputError::UnsupportedFormat { .. })));
    }
}
