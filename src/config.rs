use crate::policies::PolicyType;
use crate::simulation::RewardArm;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct LogConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    pub num_sims: usize,
    pub horizon: usize,
    pub seed: Option<u64>,
    pub output: Option<PathBuf>,
    pub arms: Vec<RewardArm>,
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub log: LogConfig,
    pub policy: PolicyType,
    pub simulation: SimulationConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        builder.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    const CONFIG: &str = r#"
        [log]
        level = "debug"

        [policy.epsilon_greedy]
        epsilon = 0.2
        seed = 42

        [simulation]
        num_sims = 10
        horizon = 50

        [[simulation.arms]]
        type = "bernoulli"
        probability = 0.25

        [[simulation.arms]]
        type = "normal"
        mean = 1.0
        std_dev = 0.5
    "#;

    #[test]
    fn deserialize() {
        let config: AppConfig = Config::builder()
            .add_source(File::from_str(CONFIG, FileFormat::Toml))
            .build()
            .and_then(Config::try_deserialize)
            .unwrap();

        assert_eq!(config.log.level, "debug");
        assert!(matches!(
            config.policy,
            PolicyType::EpsilonGreedy {
                epsilon,
                seed: Some(42)
            } if epsilon == 0.2
        ));
        assert_eq!(config.simulation.num_sims, 10);
        assert_eq!(config.simulation.horizon, 50);
        assert_eq!(config.simulation.seed, None);
        assert_eq!(config.simulation.output, None);
        assert_eq!(
            config.simulation.arms,
            vec![
                RewardArm::Bernoulli { probability: 0.25 },
                RewardArm::Normal {
                    mean: 1.0,
                    std_dev: 0.5
                }
            ]
        );
    }
}
