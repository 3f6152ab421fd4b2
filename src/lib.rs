// Library interface for fitcalc
// The binary and integration tests drive everything through these modules

pub mod config;
pub mod dispatch;
pub mod driver;
pub mod error;
pub mod export;
pub mod import;
pub mod logging;
pub mod models;
pub mod workouts;

// Re-export commonly used types for convenience
pub use config::{AppConfig, OutputSettings};
pub use dispatch::{interpret, read_package};
pub use driver::{process_packages, BatchSummary, Driver};
pub use error::{FitCalcError, InputError, RecordError, Result};
pub use export::{OutputFormat, TrainingReport};
pub use import::ImportManager;
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use models::{sample_packages, Measurement, Package, WorkoutKind, WORKOUT_REGISTRY};
pub use workouts::{Running, SportsWalking, Swimming, Training};
