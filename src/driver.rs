//! Batch processing of sensor packages
//!
//! Each package is dispatched independently. Successful reports and
//! diagnostics for skipped packages are written to the same output stream, in
//! input order, one line per package.

use rayon::prelude::*;
use std::io::Write;
use tracing::{info, info_span};

use crate::dispatch::interpret;
use crate::error::Result;
use crate::export::{OutputFormat, TrainingReport};
use crate::models::Package;

/// Outcome counts for one processed batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Packages that produced a report
    pub processed: usize,

    /// Packages skipped with a diagnostic
    pub skipped: usize,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.processed + self.skipped
    }
}

/// Runs batches of packages through the dispatcher
#[derive(Debug, Clone, Default)]
pub struct Driver {
    format: OutputFormat,
    parallel: bool,
}

impl Driver {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            parallel: false,
        }
    }

    /// Compute packages on the rayon pool. Output order is unchanged.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Process every package and write one line per package to `out`.
    ///
    /// Record-level errors become diagnostic lines; only output failures
    /// abort the batch.
    pub fn run<W: Write>(&self, packages: &[Package], out: &mut W) -> Result<BatchSummary> {
        let _span = info_span!("batch", packages = packages.len(), parallel = self.parallel).entered();

        let outcomes = self.evaluate(packages);
        let mut summary = BatchSummary::default();

        for outcome in outcomes {
            match outcome {
                Ok(report) => {
                    let line = report.render(self.format).map_err(std::io::Error::from)?;
                    writeln!(out, "{}", line)?;
                    summary.processed += 1;
                }
                Err(err) if err.is_skippable() => {
                    writeln!(out, "{}", err.user_message())?;
                    summary.skipped += 1;
                }
                Err(err) => return Err(err),
            }
        }

        info!(
            processed = summary.processed,
            skipped = summary.skipped,
            "Batch complete"
        );
        Ok(summary)
    }

    fn evaluate(&self, packages: &[Package]) -> Vec<Result<TrainingReport>> {
        if self.parallel {
            packages
                .par_iter()
                .map(|package| interpret(&package.label, &package.data))
                .collect()
        } else {
            packages
                .iter()
                .map(|package| interpret(&package.label, &package.data))
                .collect()
        }
    }
}

/// Process packages sequentially with the text output format
pub fn process_packages<W: Write>(packages: &[Package], out: &mut W) -> Result<BatchSummary> {
    Driver::default().run(packages, out)
}
