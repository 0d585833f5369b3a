use crate::errors::ReportError;
use crate::policies::arm::ArmSummary;

use serde::Serialize;
use std::{fs::File, io::BufWriter, path::Path};
use uuid::Uuid;

/// Per-step averages over all runs of a simulation.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub run_id: Uuid,
    pub policy: String,
    pub num_sims: usize,
    pub horizon: usize,
    pub best_arms: Vec<usize>,
    pub average_reward: Vec<f64>,
    pub best_arm_rate: Vec<f64>,
    pub cumulative_reward: Vec<f64>,
    pub final_arms: Vec<ArmSummary>,
}

impl SimulationReport {
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json(&self, path: &Path) -> Result<(), ReportError> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}
