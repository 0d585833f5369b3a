use super::arm::ArmStatistics;
use super::errors::PolicyError;
use super::policy::ArmSelector;
use super::rng::{MaybeSeededRng, UniformSource};

use std::fmt;
use tracing::trace;

/// Explores a uniformly random arm with probability `epsilon`, exploits the best known arm
/// otherwise.
#[derive(Debug, Clone)]
pub struct EpsilonGreedy<R = MaybeSeededRng> {
    epsilon: f64,
    rng: R,
}

impl EpsilonGreedy {
    pub fn with_seed(epsilon: f64, seed: Option<u64>) -> Result<Self, PolicyError> {
        Self::new(epsilon, MaybeSeededRng::new(seed))
    }
}

impl<R: UniformSource> EpsilonGreedy<R> {
    pub fn new(epsilon: f64, rng: R) -> Result<Self, PolicyError> {
        if !(0.0..=1.0).contains(&epsilon) {
            return Err(PolicyError::InvalidArgument(format!(
                "epsilon must be between 0 and 1, got {epsilon}"
            )));
        }

        Ok(Self { epsilon, rng })
    }

    fn best_arm(&mut self, values: &[f64]) -> usize {
        let arms = best_arms(values);
        arms[self.rng.next_index(arms.len())]
    }
}

// Arms tie on exact equality with the running maximum.
fn best_arms(values: &[f64]) -> Vec<usize> {
    let mut arms = Vec::with_capacity(values.len());
    arms.push(0);

    let mut max_value = values[0];
    for (arm, &value) in values.iter().enumerate().skip(1) {
        if value > max_value {
            arms.clear();
            arms.push(arm);
            max_value = value;
        } else if value == max_value {
            arms.push(arm);
        }
    }

    arms
}

impl<R: UniformSource + Send> ArmSelector for EpsilonGreedy<R> {
    fn select_arm(&mut self, stats: &ArmStatistics) -> usize {
        if self.rng.next_f64() > self.epsilon {
            let arm = self.best_arm(stats.values());
            trace!(arm, "exploit");
            arm
        } else {
            let arm = self.rng.next_index(stats.num_arms());
            trace!(arm, "explore");
            arm
        }
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl<R> fmt::Display for EpsilonGreedy<R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "EpsilonGreedy {{epsilon={:?}}}", self.epsilon)
    }
}
