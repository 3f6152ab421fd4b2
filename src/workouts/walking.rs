use super::{floor_div, Training};
use crate::error::RecordError;
use crate::models::{positive_field, Measurement, WorkoutKind, MIN_IN_HOUR};

const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
const CALORIES_MEAN_SPEED_EXPONENT: i32 = 2;
const CALORIES_LOCAL_MULTIPLIER_WALK: f64 = 0.029;

/// Sports walking workout
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    measurement: Measurement,
    /// Athlete height in centimeters
    height: f64,
}

impl SportsWalking {
    pub fn new(measurement: Measurement, height: f64) -> Self {
        Self {
            measurement,
            height,
        }
    }

    /// Build from positional values `[action, duration, weight, height]`
    pub fn from_values(values: &[f64]) -> Result<Self, RecordError> {
        let &[action, duration, weight, height] = values else {
            return Err(WorkoutKind::SportsWalking.arity_mismatch(values.len()));
        };
        Ok(Self::new(
            Measurement::new(action, duration, weight)?,
            positive_field("height", height)?,
        ))
    }
}

impl Training for SportsWalking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
    }

    fn measurement(&self) -> &Measurement {
        &self.measurement
    }

    fn spent_calories(&self) -> f64 {
        let weight = self.measurement.weight;
        let duration_min = self.measurement.duration * MIN_IN_HOUR;
        // The speed term is floor-divided by height, not truly divided.
        let speed_term = floor_div(
            self.mean_speed().powi(CALORIES_MEAN_SPEED_EXPONENT),
            self.height,
        );
        (CALORIES_WEIGHT_MULTIPLIER * weight
            + speed_term * CALORIES_LOCAL_MULTIPLIER_WALK * weight)
            * duration_min
    }
}
