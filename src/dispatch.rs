//! Label-based dispatch from raw sensor packages to formula sets

use tracing::debug;

use crate::error::{FitCalcError, Result};
use crate::export::TrainingReport;
use crate::models::WorkoutKind;
use crate::workouts::{Running, SportsWalking, Swimming, Training};

/// Build the formula set for a labelled package.
///
/// Unknown labels and malformed data come back as skippable errors; the
/// caller decides how to report them.
pub fn read_package(label: &str, data: &[f64]) -> Result<Box<dyn Training>> {
    let Some(kind) = WorkoutKind::from_label(label) else {
        debug!(label, "Unknown workout type");
        return Err(FitCalcError::UnknownWorkoutType {
            label: label.to_string(),
        });
    };

    build_training(kind, data).map_err(|err| {
        debug!(label, values = data.len(), error = %err, "Invalid record");
        err
    })
}

/// Construct a formula set for a known workout variant
pub fn build_training(kind: WorkoutKind, data: &[f64]) -> Result<Box<dyn Training>> {
    let training: Box<dyn Training> = match kind {
        WorkoutKind::Swimming => Box::new(Swimming::from_values(data)?),
        WorkoutKind::Running => Box::new(Running::from_values(data)?),
        WorkoutKind::SportsWalking => Box::new(SportsWalking::from_values(data)?),
    };
    Ok(training)
}

/// Interpret one package into a report
pub fn interpret(label: &str, data: &[f64]) -> Result<TrainingReport> {
    let report = read_package(label, data)?.show_training_info();
    debug!(
        label,
        training_type = %report.training_type,
        distance = report.distance,
        speed = report.speed,
        calories = report.calories,
        "Interpreted package"
    );
    Ok(report)
}
