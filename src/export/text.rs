use super::TrainingReport;
use std::fmt::{self, Write};

/// Write the summary line for a report. Every number gets exactly three
/// fixed-point decimals.
pub fn write_message<W: Write>(out: &mut W, report: &TrainingReport) -> fmt::Result {
    write!(
        out,
        "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
        report.training_type, report.duration, report.distance, report.speed, report.calories
    )
}

/// Render the summary line for a report
pub fn render_message(report: &TrainingReport) -> String {
    let mut message = String::new();
    // Writing into a String cannot fail
    let _ = write_message(&mut message, report);
    message
}
