use super::Training;
use crate::error::RecordError;
use crate::models::{Measurement, WorkoutKind, MIN_IN_HOUR, M_IN_KM};

const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
const CALORIES_MEAN_SPEED_SHIFT: f64 = 20.0;

/// Running workout
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    measurement: Measurement,
}

impl Running {
    pub fn new(measurement: Measurement) -> Self {
        Self { measurement }
    }

    /// Build from positional values `[action, duration, weight]`
    pub fn from_values(values: &[f64]) -> Result<Self, RecordError> {
        let &[action, duration, weight] = values else {
            return Err(WorkoutKind::Running.arity_mismatch(values.len()));
        };
        Ok(Self::new(Measurement::new(action, duration, weight)?))
    }
}

impl Training for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn measurement(&self) -> &Measurement {
        &self.measurement
    }

    fn spent_calories(&self) -> f64 {
        let duration_min = self.measurement.duration * MIN_IN_HOUR;
        (CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed() - CALORIES_MEAN_SPEED_SHIFT)
            * self.measurement.weight
            / M_IN_KM
            * duration_min
    }
}
