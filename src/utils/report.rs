use std::{fs::File, path::Path};

use anyhow::Result;
use csv::WriterBuilder;
use serde::Serialize;

/// Outcome of one pipeline step.
#[derive(Debug, Serialize)]
pub struct StepRecord {
    pub step: String,
    pub ok: bool,
    pub elapsed_sec: f64,
}

#[derive(Debug, Serialize)]
pub struct PipelineSummary {
    pub steps_total: usize,
    pub steps_failed: usize,
    pub total_sec: f64,
}

pub fn write_step_report(path: &Path, steps: &[StepRecord]) -> Result<()> {
    let mut output = WriterBuilder::new().from_path(path)?;
    for step in steps {
        output.serialize(step)?;
    }
    output.flush()?;
    Ok(())
}

pub fn write_summary(path: &Path, summary: &PipelineSummary) -> Result<()> {
    serde_json::to_writer_pretty(File::create(path)?, summary)?;
    Ok(())
}
