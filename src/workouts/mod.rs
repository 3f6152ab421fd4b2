//! Formula sets for the supported workout types
//!
//! Every workout shares the step-based distance and speed formulas through the
//! provided methods on [`Training`]. Each type supplies its own calorie
//! formula, and swimming also replaces the speed formula and step length.

mod running;
mod swimming;
mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use crate::export::TrainingReport;
use crate::models::{Measurement, WorkoutKind, M_IN_KM};

/// Step length in meters for running and walking
pub const LEN_STEP: f64 = 0.65;

/// Distance, speed and calorie formulas for one workout
pub trait Training: Send + Sync {
    /// Workout variant this formula set belongs to
    fn kind(&self) -> WorkoutKind;

    /// Readings shared by all workout types
    fn measurement(&self) -> &Measurement;

    /// Distance covered per action, in meters
    fn step_length(&self) -> f64 {
        LEN_STEP
    }

    /// Distance in kilometers
    fn distance(&self) -> f64 {
        f64::from(self.measurement().action) * self.step_length() / M_IN_KM
    }

    /// Mean speed in km/h
    fn mean_speed(&self) -> f64 {
        self.distance() / self.measurement().duration
    }

    /// Spent kilocalories
    fn spent_calories(&self) -> f64;

    /// Compute all metrics into a report
    fn show_training_info(&self) -> TrainingReport {
        TrainingReport {
            training_type: self.kind().training_type().to_string(),
            duration: self.measurement().duration,
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}

/// Floor division on floats: the quotient rounded toward negative infinity.
///
/// Computed from the remainder rather than `(a / b).floor()` so that results
/// sitting just below an integer boundary are not rounded up by the division.
pub fn floor_div(dividend: f64, divisor: f64) -> f64 {
    let remainder = dividend % divisor;
    let mut quotient = (dividend - remainder) / divisor;
    // `%` keeps the dividend's sign; step down when the signs disagree
    if remainder != 0.0 && ((divisor < 0.0) != (remainder < 0.0)) {
        quotient -= 1.0;
    }

    if quotient == 0.0 {
        return 0.0_f64.copysign(dividend / divisor);
    }
    let mut floored = quotient.floor();
    if quotient - floored > 0.5 {
        floored += 1.0;
    }
    floored
}
