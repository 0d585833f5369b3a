use crate::errors::SimulationError;

use rand::Rng;
use rand_distr::{Bernoulli, Distribution, Normal};
use serde::{Deserialize, Serialize};

/// Simulated reward distribution of an arm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RewardArm {
    Bernoulli { probability: f64 },
    Normal { mean: f64, std_dev: f64 },
}

impl RewardArm {
    pub fn expected_reward(&self) -> f64 {
        match *self {
            RewardArm::Bernoulli { probability } => probability,
            RewardArm::Normal { mean, .. } => mean,
        }
    }

    pub(super) fn sampler(&self, arm: usize) -> Result<RewardSampler, SimulationError> {
        let invalid = |reason: String| SimulationError::InvalidArm { arm, reason };

        match *self {
            RewardArm::Bernoulli { probability } => Bernoulli::new(probability)
                .map(RewardSampler::Bernoulli)
                .map_err(|e| invalid(e.to_string())),
            RewardArm::Normal { mean, .. } if !mean.is_finite() => {
                Err(invalid(format!("mean must be finite, got {mean}")))
            }
            RewardArm::Normal { std_dev, .. } if !(std_dev >= 0.0) => Err(invalid(format!(
                "standard deviation must be non-negative, got {std_dev}"
            ))),
            RewardArm::Normal { mean, std_dev } => Normal::new(mean, std_dev)
                .map(RewardSampler::Normal)
                .map_err(|e| invalid(e.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub(super) enum RewardSampler {
    Bernoulli(Bernoulli),
    Normal(Normal<f64>),
}

impl RewardSampler {
    pub(super) fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            RewardSampler::Bernoulli(distribution) => {
                if distribution.sample(rng) {
                    1.0
                } else {
                    0.0
                }
            }
            RewardSampler::Normal(distribution) => distribution.sample(rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    const SEED: u64 = 1234;

    #[test]
    fn deserialize() {
        let arms: Vec<RewardArm> = serde_json::from_str(
            r#"[
                {"type": "bernoulli", "probability": 0.3},
                {"type": "normal", "mean": 1.5, "std_dev": 0.5}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            arms,
            vec![
                RewardArm::Bernoulli { probability: 0.3 },
                RewardArm::Normal {
                    mean: 1.5,
                    std_dev: 0.5
                }
            ]
        );
        assert_eq!(arms[1].expected_reward(), 1.5);
    }

    #[test]
    fn invalid_parameters() {
        let arm = RewardArm::Bernoulli { probability: 1.2 };
        assert!(matches!(
            arm.sampler(3),
            Err(SimulationError::InvalidArm { arm: 3, .. })
        ));

        let arm = RewardArm::Normal {
            mean: 0.0,
            std_dev: -1.0,
        };
        assert!(matches!(
            arm.sampler(0),
            Err(SimulationError::InvalidArm { arm: 0, .. })
        ));

        for mean in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let arm = RewardArm::Normal { mean, std_dev: 1.0 };
            assert!(matches!(
                arm.sampler(2),
                Err(SimulationError::InvalidArm { arm: 2, .. })
            ));
        }

        let arm = RewardArm::Normal {
            mean: 1.0,
            std_dev: f64::NAN,
        };
        assert!(arm.sampler(0).is_err());
    }

    #[test]
    fn zero_std_dev() {
        let mut rng = SmallRng::seed_from_u64(SEED);
        let sampler = RewardArm::Normal {
            mean: 0.5,
            std_dev: 0.0,
        }
        .sampler(0)
        .unwrap();

        assert!((0..100).all(|_| sampler.sample(&mut rng) == 0.5));
    }

    #[test]
    fn bernoulli_rewards() {
        let mut rng = SmallRng::seed_from_u64(SEED);
        let sampler = RewardArm::Bernoulli { probability: 0.7 }
            .sampler(0)
            .unwrap();

        let rewards: Vec<f64> = (0..10_000).map(|_| sampler.sample(&mut rng)).collect();
        assert!(rewards.iter().all(|&reward| reward == 0.0 || reward == 1.0));

        let mean = rewards.iter().sum::<f64>() / rewards.len() as f64;
        assert!((mean - 0.7).abs() < 0.03, "mean {mean}");
    }

    #[test]
    fn normal_rewards() {
        let mut rng = SmallRng::seed_from_u64(SEED);
        let sampler = RewardArm::Normal {
            mean: 2.0,
            std_dev: 0.5,
        }
        .sampler(0)
        .unwrap();

        let mean = (0..10_000).map(|_| sampler.sample(&mut rng)).sum::<f64>() / 10_000.0;
        assert!((mean - 2.0).abs() < 0.05, "mean {mean}");
    }
}
