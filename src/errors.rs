use crate::policies::errors::PolicyError;

use config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Policy(#[from] PolicyError),
    #[error("Simulation needs at least one arm")]
    NoArms,
    #[error("Arm {arm} is invalid: {reason}")]
    InvalidArm { arm: usize, reason: String },
    #[error("Horizon must be positive")]
    InvalidHorizon,
    #[error("Number of simulations must be positive")]
    InvalidNumSims,
    #[error("Bandit has {bandit} arms but the environment has {environment}")]
    ArmCountMismatch { bandit: usize, environment: usize },
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error while writing report: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize report to JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cannot read config: {0}")]
    Config(#[from] ConfigError),
    #[error("Cannot initialize logging: {0}")]
    Logging(String),
    #[error(transparent)]
    Policy(#[from] PolicyError),
    #[error(transparent)]
    Simulation(#[from] SimulationError),
    #[error(transparent)]
    Report(#[from] ReportError),
}
