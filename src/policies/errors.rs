use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PolicyError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("A bandit needs at least one arm")]
    NoArms,
    #[error("Arm {0} not found")]
    ArmNotFound(usize),
    #[error("Got {counts} counts for {values} values")]
    LengthMismatch { counts: usize, values: usize },
}
