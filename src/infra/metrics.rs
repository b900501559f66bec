// ============================================================
// Layer 6 — Metrics Logger
// ============================================================
// Appends per-epoch training metrics to checkpoints/metrics.csv
// so learning curves survive across refinement runs.
//
// Example:
//   epoch,train_loss,train_accuracy,val_loss,val_accuracy
//   1,0.693100,0.500000,0.690200,0.500000
//   2,0.681400,0.625000,0.684900,0.500000
//
// Empty val_* cells mean the run had no validation split.

use anyhow::{Context, Result};
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use crate::domain::training::{EpochMetrics, FitReport};

const HEADER: &str = "epoch,train_loss,train_accuracy,val_loss,val_accuracy";

pub struct MetricsLogger {
    csv_path: PathBuf,
}

impl MetricsLogger {
    /// Writes the CSV header if the file doesn't exist yet.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)
            .with_context(|| format!("Cannot create metrics directory '{}'", dir.display()))?;

        let csv_path = dir.join("metrics.csv");
        if !csv_path.exists() {
            let mut f = fs::File::create(&csv_path)?;
            writeln!(f, "{HEADER}")?;
            tracing::debug!("Created metrics CSV: '{}'", csv_path.display());
        }

        Ok(Self { csv_path })
    }

    pub fn log(&self, m: &EpochMetrics) -> Result<()> {
        let mut f = OpenOptions::new()
            .append(true)
            .open(&self.csv_path)
            .with_context(|| format!("Cannot open '{}'", self.csv_path.display()))?;

        let opt = |v: Option<f64>| v.map(|v| format!("{v:.6}")).unwrap_or_default();
        writeln!(
            f,
            "{},{:.6},{:.6},{},{}",
            m.epoch,
            m.train_loss,
            m.train_accuracy,
            opt(m.val_loss),
            opt(m.val_accuracy),
        )?;
        Ok(())
    }

    /// Append every epoch of a fit.
    pub fn log_report(&self, report: &FitReport) -> Result<()> {
        for m in &report.epochs {
            self.log(m)?;
        }
        tracing::debug!("Logged {} epochs to '{}'", report.epochs.len(), self.csv_path.display());
        Ok(())
    }

    pub fn csv_path(&self) -> &PathBuf {
        &self.csv_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(epoch: usize, val: Option<f64>) -> EpochMetrics {
        EpochMetrics {
            epoch,
            train_loss: 0.5,
            train_accuracy: 0.75,
            val_loss: val,
            val_accuracy: val.map(|_| 1.0),
        }
    }

    #[test]
    fn test_writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let logger = MetricsLogger::new(dir.path()).unwrap();
        let report = FitReport {
            epochs: vec![metrics(1, Some(0.25)), metrics(2, None)],
            stopped_early: false,
        };
        logger.log_report(&report).unwrap();

        let csv = fs::read_to_string(logger.csv_path()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], HEADER);
        assert_eq!(lines[1], "1,0.500000,0.750000,0.250000,1.000000");
        assert_eq!(lines[2], "2,0.500000,0.750000,,");
    }

    #[test]
    fn test_appends_across_loggers() {
        let dir = tempfile::tempdir().unwrap();
        MetricsLogger::new(dir.path()).unwrap().log(&metrics(1, None)).unwrap();
        let logger = MetricsLogger::new(dir.path()).unwrap();
        logger.log(&metrics(1, None)).unwrap();

        let csv = fs::read_to_string(logger.csv_path()).unwrap();
        assert_eq!(csv.lines().count(), 3);
    }
}
