use super::Training;
use crate::error::RecordError;
use crate::models::{count_field, finite_field, Measurement, WorkoutKind, M_IN_KM};

/// Stroke length in meters
const LEN_STEP_SWIM: f64 = 1.38;
const CALORIES_MEAN_SPEED_ADDEND: f64 = 1.1;
const CALORIES_LOCAL_MULTIPLIER_SWIM: f64 = 2.0;

/// Pool swimming workout
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    measurement: Measurement,
    /// Pool length in meters
    length_pool: f64,
    /// Number of pool lengths swum
    count_pool: u32,
}

impl Swimming {
    pub fn new(measurement: Measurement, length_pool: f64, count_pool: u32) -> Self {
        Self {
            measurement,
            length_pool,
            count_pool,
        }
    }

    /// Build from positional values `[action, duration, weight, length_pool, count_pool]`
    pub fn from_values(values: &[f64]) -> Result<Self, RecordError> {
        let &[action, duration, weight, length_pool, count_pool] = values else {
            return Err(WorkoutKind::Swimming.arity_mismatch(values.len()));
        };
        Ok(Self::new(
            Measurement::new(action, duration, weight)?,
            finite_field("length_pool", length_pool)?,
            count_field("count_pool", count_pool)?,
        ))
    }
}

impl Training for Swimming {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn measurement(&self) -> &Measurement {
        &self.measurement
    }

    fn step_length(&self) -> f64 {
        LEN_STEP_SWIM
    }

    /// Speed comes from pool laps, not strokes
    fn mean_speed(&self) -> f64 {
        self.length_pool * f64::from(self.count_pool) / M_IN_KM / self.measurement.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + CALORIES_MEAN_SPEED_ADDEND)
            * CALORIES_LOCAL_MULTIPLIER_SWIM
            * self.measurement.weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_swimming_metrics() {
        let swimming = Swimming::from_values(&[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();

        assert!((swimming.distance() - 0.9936).abs() < EPSILON);
        assert!((swimming.mean_speed() - 1.0).abs() < EPSILON);
        assert!((swimming.spent_calories() - 336.0).abs() < EPSILON);
    }

    #[test]
    fn test_swimming_speed_ignores_strokes() {
        let few = Swimming::from_values(&[100.0, 2.0, 70.0, 50.0, 60.0]).unwrap();
        let many = Swimming::from_values(&[5000.0, 2.0, 70.0, 50.0, 60.0]).unwrap();

        assert!((few.mean_speed() - 1.5).abs() < EPSILON);
        assert_eq!(few.mean_speed(), many.mean_speed());
        assert_eq!(few.spent_calories(), many.spent_calories());
        assert!(few.distance() < many.distance());
    }

    #[test]
    fn test_swimming_rejects_fractional_laps() {
        let err = Swimming::from_values(&[720.0, 1.0, 80.0, 25.0, 40.5]).unwrap_err();
        assert_eq!(
            err,
            RecordError::InvalidCount {
                field: "count_pool",
                value: 40.5
            }
        );
    }
}
