use greedy_bandits::config::AppConfig;
use greedy_bandits::errors::AppError;
use greedy_bandits::policies::Bandit;
use greedy_bandits::simulation::Simulation;

use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), AppError> {
    let config = AppConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log.level))
        .map_err(|e| AppError::Logging(e.to_string()))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;

    let mut simulation = Simulation::from_config(&config.simulation)?;
    let mut bandit = Bandit::new(simulation.num_arms(), config.policy)?;
    info!(policy = %bandit.describe(), arms = simulation.num_arms(), "Created bandit");

    let report = simulation.run(&mut bandit)?;

    if let Some(path) = &config.simulation.output {
        report.write_json(path)?;
        info!("Wrote report to '{}'", path.display());
    } else {
        println!("{}", report.to_json()?);
    }

    Ok(())
}
