use csv::{ReaderBuilder, Trim};
use std::path::Path;

use crate::error::{InputError, Result};
use crate::import::{has_extension, ImportFormat};
use crate::models::Package;

/// CSV importer: one package per row, label first, readings after.
///
/// Rows may have different lengths. Blank lines and `#` comments are skipped.
pub struct CsvImporter;

impl CsvImporter {
    pub fn new() -> Self {
        Self
    }

    fn parse_value(line: usize, field: &str) -> std::result::Result<f64, InputError> {
        field.parse::<f64>().map_err(|_| InputError::Parse {
            line,
            reason: format!("invalid number '{}'", field),
        })
    }
}

impl Default for CsvImporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportFormat for CsvImporter {
    fn can_import(&self, file_path: &Path) -> bool {
        has_extension(file_path, &["csv"])
    }

    fn parse_packages(&self, content: &str) -> Result<Vec<Package>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .comment(Some(b'#'))
            .from_reader(content.as_bytes());

        let mut packages = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(InputError::from)?;
            let line = record
                .position()
                .map(|pos| pos.line() as usize)
                .unwrap_or(index + 1);

            let label = match record.get(0) {
                Some(label) if !label.is_empty() => label,
                _ => {
                    return Err(InputError::Parse {
                        line,
                        reason: "missing workout label".to_string(),
                    }
                    .into())
                }
            };

            let data = record
                .iter()
                .skip(1)
                .map(|field| Self::parse_value(line, field))
                .collect::<std::result::Result<Vec<f64>, InputError>>()?;

            packages.push(Package::new(label, data));
        }

        Ok(packages)
    }

    fn get_format_name(&self) -> &'static str {
        "csv"
    }
}
