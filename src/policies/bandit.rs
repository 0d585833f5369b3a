use super::arm::ArmStatistics;
use super::errors::PolicyError;
use super::policy::{ArmSelector, PolicyType};

/// Arm statistics driven by a selection policy.
pub struct Bandit {
    stats: ArmStatistics,
    selector: Box<dyn ArmSelector>,
}

impl Bandit {
    pub fn new(num_arms: usize, policy_type: PolicyType) -> Result<Self, PolicyError> {
        Ok(Self {
            stats: ArmStatistics::new(num_arms)?,
            selector: policy_type.into_selector()?,
        })
    }

    pub fn epsilon_greedy(
        num_arms: usize,
        epsilon: f64,
        seed: Option<u64>,
    ) -> Result<Self, PolicyError> {
        Self::new(num_arms, PolicyType::EpsilonGreedy { epsilon, seed })
    }

    pub fn select_arm(&mut self) -> usize {
        self.selector.select_arm(&self.stats)
    }

    pub fn update(&mut self, arm: usize, reward: f64) -> Result<(), PolicyError> {
        self.stats.update(arm, reward)
    }

    pub fn reset(&mut self) {
        self.stats.reset();
    }

    pub fn stats(&self) -> &ArmStatistics {
        &self.stats
    }

    pub fn describe(&self) -> String {
        self.selector.describe()
    }
}
