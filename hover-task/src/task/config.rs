//! Configuration of [`EpisodicTask`](super::EpisodicTask).
use crate::{error::TaskError, ActionCheck, InitialConditions, RewardConfig, TargetState};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`EpisodicTask`](super::EpisodicTask).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
#[serde(default)]
pub struct EpisodicTaskConfig {
    /// Initial conditions forwarded to the simulator.
    pub init: InitialConditions,

    /// Goal position of every episode.
    pub target: TargetState,

    /// Simulator steps per agent step.
    pub action_repeat: usize,

    /// Reward strategy.
    pub reward: RewardConfig,

    /// Treatment of out-of-range rotor commands.
    pub action_check: ActionCheck,
}

impl Default for EpisodicTaskConfig {
    fn default() -> Self {
        Self {
            init: InitialConditions::default(),
            target: TargetState::default(),
            action_repeat: 3,
            reward: RewardConfig::default(),
            action_check: ActionCheck::default(),
        }
    }
}

impl EpisodicTaskConfig {
    /// Sets the initial conditions.
    pub fn init(mut self, v: InitialConditions) -> Self {
        self.init = v;
        self
    }

    /// Sets the target position.
    pub fn target(mut self, v: TargetState) -> Self {
        self.target = v;
        self
    }

    /// Sets the number of simulator steps per agent step.
    pub fn action_repeat(mut self, v: usize) -> Self {
        self.action_repeat = v;
        self
    }

    /// Sets the reward strategy.
    pub fn reward(mut self, v: RewardConfig) -> Self {
        self.reward = v;
        self
    }

    /// Sets the treatment of out-of-range rotor commands.
    pub fn action_check(mut self, v: ActionCheck) -> Self {
        self.action_check = v;
        self
    }

    /// Checks the invariants the task relies on.
    pub fn validate(&self) -> Result<(), TaskError> {
        if self.action_repeat == 0 {
            return Err(TaskError::InvalidConfiguration(
                "action_repeat must be at least 1".to_string(),
            ));
        }
        let [x, y, z] = self.target.position();
        TargetState::new(x, y, z)?;
        Ok(())
    }

    /// Constructs [`EpisodicTaskConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`EpisodicTaskConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{reward::BoundedShaping, Pose};
    use tempdir::TempDir;

    #[test]
    fn test_serde_task_config() -> Result<()> {
        let config = EpisodicTaskConfig::default()
            .init(
                InitialConditions::default()
                    .init_pose(Pose::at(0.0, 0.0, 10.0))
                    .runtime(10.0),
            )
            .target(TargetState::new(1.0, 2.0, 20.0)?)
            .action_repeat(4)
            .reward(RewardConfig::BoundedShaping(BoundedShaping::default()))
            .action_check(ActionCheck::PassThrough);

        let dir = TempDir::new("task_config")?;
        let path = dir.path().join("task_config.yaml");

        config.save(&path)?;
        let config_ = EpisodicTaskConfig::load(&path)?;
        assert_eq!(config, config_);
        Ok(())
    }

    #[test]
    fn test_partial_yaml_uses_defaults() -> Result<()> {
        let config: EpisodicTaskConfig = serde_yaml::from_str("action_repeat: 5\n")?;
        assert_eq!(config.action_repeat, 5);
        assert_eq!(config.target, TargetState::default());
        assert_eq!(config.reward, RewardConfig::default());
        assert_eq!(config.init.runtime, 5.0);
        Ok(())
    }

    #[test]
    fn test_validate() {
        assert!(EpisodicTaskConfig::default().validate().is_ok());
        assert!(matches!(
            EpisodicTaskConfig::default().action_repeat(0).validate(),
            Err(TaskError::InvalidConfiguration(_))
        ));
        assert!(serde_yaml::from_str::<EpisodicTaskConfig>("target: [0.0, 0.0, 0.0]\n").is_err());
    }
}
