//! Repeated experiments of a bandit against simulated reward arms.
mod arm;
mod report;

pub use arm::RewardArm;
pub use report::SimulationReport;

use arm::RewardSampler;

use crate::config::SimulationConfig;
use crate::errors::SimulationError;
use crate::policies::{errors::PolicyError, Bandit, MaybeSeededRng};

use tracing::{debug, info};
use uuid::Uuid;

pub struct Simulation {
    arms: Vec<RewardArm>,
    samplers: Vec<RewardSampler>,
    num_sims: usize,
    horizon: usize,
    rng: MaybeSeededRng,
}

impl Simulation {
    pub fn new(
        arms: Vec<RewardArm>,
        num_sims: usize,
        horizon: usize,
        seed: Option<u64>,
    ) -> Result<Self, SimulationError> {
        if arms.is_empty() {
            return Err(SimulationError::NoArms);
        }
        if num_sims == 0 {
            return Err(SimulationError::InvalidNumSims);
        }
        if horizon == 0 {
            return Err(SimulationError::InvalidHorizon);
        }

        let samplers = arms
            .iter()
            .enumerate()
            .map(|(arm_id, arm)| arm.sampler(arm_id))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            arms,
            samplers,
            num_sims,
            horizon,
            rng: MaybeSeededRng::new(seed),
        })
    }

    pub fn from_config(config: &SimulationConfig) -> Result<Self, SimulationError> {
        Self::new(
            config.arms.clone(),
            config.num_sims,
            config.horizon,
            config.seed,
        )
    }

    pub fn num_arms(&self) -> usize {
        self.arms.len()
    }

    /// Arms sharing the highest expected reward.
    pub fn best_arms(&self) -> Vec<usize> {
        let max_reward = self
            .arms
            .iter()
            .map(RewardArm::expected_reward)
            .fold(f64::NEG_INFINITY, f64::max);

        self.arms
            .iter()
            .enumerate()
            .filter(|(_, arm)| arm.expected_reward() == max_reward)
            .map(|(arm_id, _)| arm_id)
            .collect()
    }

    pub fn run(&mut self, bandit: &mut Bandit) -> Result<SimulationReport, SimulationError> {
        if bandit.stats().num_arms() != self.num_arms() {
            return Err(SimulationError::ArmCountMismatch {
                bandit: bandit.stats().num_arms(),
                environment: self.num_arms(),
            });
        }

        let run_id = Uuid::new_v4();
        let policy = bandit.describe();
        let best_arms = self.best_arms();
        info!(
            %run_id,
            %policy,
            num_sims = self.num_sims,
            horizon = self.horizon,
            ?best_arms,
            seed = ?self.rng.seed(),
            "Starting simulation"
        );

        let mut reward_sums = vec![0.0; self.horizon];
        let mut cumulative_sums = vec![0.0; self.horizon];
        let mut best_pulls = vec![0_usize; self.horizon];

        for sim in 0..self.num_sims {
            bandit.reset();

            let mut cumulative = 0.0;
            for step in 0..self.horizon {
                let arm_id = bandit.select_arm();
                let reward = self
                    .samplers
                    .get(arm_id)
                    .ok_or(PolicyError::ArmNotFound(arm_id))?
                    .sample(self.rng.get_rng());
                bandit.update(arm_id, reward)?;

                cumulative += reward;
                reward_sums[step] += reward;
                cumulative_sums[step] += cumulative;
                if best_arms.contains(&arm_id) {
                    best_pulls[step] += 1;
                }
            }

            debug!(%run_id, sim, cumulative, "Finished simulation run");
        }

        let num_sims = self.num_sims as f64;
        let report = SimulationReport {
            run_id,
            policy,
            num_sims: self.num_sims,
            horizon: self.horizon,
            best_arms,
            average_reward: reward_sums.iter().map(|sum| sum / num_sims).collect(),
            best_arm_rate: best_pulls
                .iter()
                .map(|&pulls| pulls as f64 / num_sims)
                .collect(),
            cumulative_reward: cumulative_sums.iter().map(|sum| sum / num_sims).collect(),
            final_arms: bandit.stats().summary(),
        };

        info!(
            %run_id,
            final_cumulative_reward = report.cumulative_reward.last().copied().unwrap_or_default(),
            final_best_arm_rate = report.best_arm_rate.last().copied().unwrap_or_default(),
            "Finished simulation"
        );

        Ok(report)
    }
}
