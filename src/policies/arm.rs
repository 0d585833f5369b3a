use super::errors::PolicyError;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArmSummary {
    pub arm: usize,
    pub pulls: u64,
    pub mean_reward: f64,
}

/// Pull counts and running mean reward estimates of a fixed set of arms.
#[derive(Debug, Clone, PartialEq)]
pub struct ArmStatistics {
    counts: Vec<u64>,
    values: Vec<f64>,
}

impl ArmStatistics {
    pub fn new(num_arms: usize) -> Result<Self, PolicyError> {
        if num_arms == 0 {
            return Err(PolicyError::NoArms);
        }

        Ok(Self {
            counts: vec![0; num_arms],
            values: vec![0.0; num_arms],
        })
    }

    pub fn from_parts(counts: Vec<u64>, values: Vec<f64>) -> Result<Self, PolicyError> {
        if counts.len() != values.len() {
            return Err(PolicyError::LengthMismatch {
                counts: counts.len(),
                values: values.len(),
            });
        }
        if counts.is_empty() {
            return Err(PolicyError::NoArms);
        }

        Ok(Self { counts, values })
    }

    pub fn num_arms(&self) -> usize {
        self.values.len()
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn update(&mut self, arm: usize, reward: f64) -> Result<(), PolicyError> {
        let (count, value) = self
            .counts
            .get_mut(arm)
            .zip(self.values.get_mut(arm))
            .ok_or(PolicyError::ArmNotFound(arm))?;

        *count += 1;
        *value += (reward - *value) / (*count as f64);

        Ok(())
    }

    pub fn reset(&mut self) {
        self.counts.iter_mut().for_each(|count| *count = 0);
        self.values.iter_mut().for_each(|value| *value = 0.0);
    }

    pub fn summary(&self) -> Vec<ArmSummary> {
        self.counts
            .iter()
            .zip(&self.values)
            .enumerate()
            .map(|(arm, (&pulls, &mean_reward))| ArmSummary {
                arm,
                pulls,
                mean_reward,
            })
            .collect()
    }
}
