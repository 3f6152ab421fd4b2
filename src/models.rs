use serde::{Deserialize, Serialize};

use crate::error::RecordError;

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
pub const MIN_IN_HOUR: f64 = 60.0;

/// Workout variants known to the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutKind {
    Swimming,
    Running,
    SportsWalking,
}

/// Sensor label to workout variant, in registry order
pub const WORKOUT_REGISTRY: [(&str, WorkoutKind); 3] = [
    ("SWM", WorkoutKind::Swimming),
    ("RUN", WorkoutKind::Running),
    ("WLK", WorkoutKind::SportsWalking),
];

impl WorkoutKind {
    /// Look up a sensor label in the registry
    pub fn from_label(label: &str) -> Option<Self> {
        WORKOUT_REGISTRY
            .iter()
            .find(|(known, _)| *known == label)
            .map(|(_, kind)| *kind)
    }

    /// Sensor label used in input packages
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Swimming => "SWM",
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
        }
    }

    /// Name shown as the training type in reports
    pub fn training_type(&self) -> &'static str {
        match self {
            WorkoutKind::Swimming => "Swimming",
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
        }
    }

    /// Positional field names expected in a package's data
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            WorkoutKind::Swimming => &["action", "duration", "weight", "length_pool", "count_pool"],
            WorkoutKind::Running => &["action", "duration", "weight"],
            WorkoutKind::SportsWalking => &["action", "duration", "weight", "height"],
        }
    }

    /// Number of values a package must carry
    pub fn arity(&self) -> usize {
        self.fields().len()
    }

    pub(crate) fn arity_mismatch(&self, actual: usize) -> RecordError {
        RecordError::ArityMismatch {
            label: self.label().to_string(),
            expected: self.arity(),
            actual,
        }
    }
}

/// Readings shared by every workout type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Steps taken or strokes made
    pub action: u32,

    /// Workout duration in hours
    pub duration: f64,

    /// Athlete weight in kilograms
    pub weight: f64,
}

impl Measurement {
    /// Validate the three common readings
    pub fn new(action: f64, duration: f64, weight: f64) -> Result<Self, RecordError> {
        Ok(Self {
            action: count_field("action", action)?,
            duration: positive_field("duration", duration)?,
            weight: finite_field("weight", weight)?,
        })
    }
}

pub(crate) fn finite_field(field: &'static str, value: f64) -> Result<f64, RecordError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RecordError::NonFinite { field })
    }
}

pub(crate) fn positive_field(field: &'static str, value: f64) -> Result<f64, RecordError> {
    let value = finite_field(field, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(RecordError::NonPositive { field, value })
    }
}

pub(crate) fn count_field(field: &'static str, value: f64) -> Result<u32, RecordError> {
    let value = finite_field(field, value)?;
    if value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(RecordError::InvalidCount { field, value });
    }
    Ok(value as u32)
}

/// One raw sensor package: a workout label and its positional readings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub label: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(label: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            data,
        }
    }
}

/// Built-in packages processed by the `demo` command
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}
