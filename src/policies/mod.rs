pub mod arm;
mod bandit;
mod epsilon_greedy;
pub mod errors;
mod policy;
mod rng;

pub use bandit::Bandit;
pub use epsilon_greedy::EpsilonGreedy;
pub use policy::{ArmSelector, PolicyType};
pub use rng::{MaybeSeededRng, UniformSource};
