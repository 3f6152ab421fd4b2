//! Rendering of computed training reports
//!
//! A [`TrainingReport`] is the read-only result of interpreting one sensor
//! package. It renders either to the fixed human-readable summary line or to a
//! single-line JSON object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod json;
pub mod text;

/// Output format for rendered reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed-template summary line
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

/// Computed metrics for one workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingReport {
    /// Workout type name (`Running`, `SportsWalking`, `Swimming`)
    pub training_type: String,

    /// Duration in hours
    pub duration: f64,

    /// Distance in kilometers
    pub distance: f64,

    /// Mean speed in km/h
    pub speed: f64,

    /// Spent kilocalories
    pub calories: f64,
}

impl TrainingReport {
    /// Summary line in the fixed report template
    pub fn message(&self) -> String {
        text::render_message(self)
    }

    /// Render in the requested output format
    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Text => Ok(self.message()),
            OutputFormat::Json => json::render_line(self),
        }
    }
}

impl fmt::Display for TrainingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        text::write_message(f, self)
    }
}
