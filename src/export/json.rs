use super::TrainingReport;

/// Serialize a report as a single-line JSON object
pub fn render_line(report: &TrainingReport) -> Result<String, serde_json::Error> {
    serde_json::to_string(report)
}
