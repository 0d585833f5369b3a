use super::arm::ArmStatistics;
use super::epsilon_greedy::EpsilonGreedy;
use super::errors::PolicyError;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyType {
    EpsilonGreedy { epsilon: f64, seed: Option<u64> },
}

impl PolicyType {
    pub fn into_selector(self) -> Result<Box<dyn ArmSelector>, PolicyError> {
        match self {
            PolicyType::EpsilonGreedy { epsilon, seed } => {
                Ok(Box::new(EpsilonGreedy::with_seed(epsilon, seed)?))
            }
        }
    }
}

/// Decision rule picking the next arm to pull from the current statistics.
pub trait ArmSelector: Send {
    fn select_arm(&mut self, stats: &ArmStatistics) -> usize;
    fn describe(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_epsilon_greedy() {
        let policy_type: PolicyType =
            serde_json::from_str(r#"{"epsilon_greedy": {"epsilon": 0.25, "seed": 7}}"#).unwrap();
        let selector = policy_type.into_selector().unwrap();
        assert_eq!(selector.describe(), "EpsilonGreedy {epsilon=0.25}");
    }

    #[test]
    fn invalid_epsilon() {
        let policy_type = PolicyType::EpsilonGreedy {
            epsilon: 1.5,
            seed: None,
        };
        assert!(matches!(
            policy_type.into_selector(),
            Err(PolicyError::InvalidArgument(_))
        ));
    }
}
