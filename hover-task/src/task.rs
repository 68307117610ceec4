//! Episodic hover task.
mod config;
use crate::{
    reward::RewardFn, ActionCheck, PoseWindow, RotorCommand, Simulator, TargetState, ACTION_HIGH,
    ACTION_LOW, N_ROTORS,
};
use anyhow::Result;
pub use config::EpisodicTaskConfig;
use hover_core::{
    record::{Record, RecordValue},
    Env, Info, Step,
};
use log::{debug, info, trace, warn};

/// Information attached to every [`Step`] of an [`EpisodicTask`].
#[derive(Debug, Clone, PartialEq)]
pub struct HoverInfo {
    /// Reward of each sub-step, oldest first. Sums to [`Step::reward`].
    pub sub_step_rewards: Vec<f64>,
}

impl Info for HoverInfo {}

/// Turns a rigid-body simulator into an episodic environment that rewards
/// reaching and holding a target position.
///
/// Each agent step runs the simulator for `action_repeat` sub-steps under the
/// same rotor command. The observation is the concatenation of the poses after
/// each sub-step, the reward is the sum of the per-sub-step rewards and the
/// episode is terminated if the last sub-step says so. Terminal reports of
/// earlier sub-steps are ignored and never cut the sub-step loop short.
///
/// Stepping after termination keeps driving the simulator; call
/// [`Env::reset`] to start a new episode.
///
/// ```
/// use hover_core::Env;
/// use hover_task::{dummy::ScriptedSim, EpisodicTask, EpisodicTaskConfig, RotorCommand};
///
/// let config = EpisodicTaskConfig::default();
/// let mut task = EpisodicTask::<ScriptedSim>::build(&config, 0).unwrap();
///
/// let obs = task.reset().unwrap();
/// assert_eq!(obs.as_slice(), &[0.0; 18][..]);
///
/// let (step, _record) = task.step(&RotorCommand::uniform(450.0)).unwrap();
/// assert_eq!(step.obs.as_slice().len(), task.state_size());
/// assert!(step.reward.is_finite());
/// ```
pub struct EpisodicTask<S: Simulator> {
    sim: S,
    target: TargetState,
    action_repeat: usize,
    action_check: ActionCheck,
    reward_fn: Box<dyn RewardFn>,
}

impl<S: Simulator> EpisodicTask<S> {
    /// Wraps an already built simulator.
    ///
    /// `config.init` is not used; the simulator carries its own initial
    /// conditions.
    pub fn new(config: &EpisodicTaskConfig, sim: S) -> Result<Self> {
        config.validate()?;
        let reward_fn = config.reward.build();
        info!(
            "Build EpisodicTask: target = {:?}, action_repeat = {}, reward = {}",
            config.target.position(),
            config.action_repeat,
            reward_fn.name()
        );

        Ok(Self {
            sim,
            target: config.target,
            action_repeat: config.action_repeat,
            action_check: config.action_check,
            reward_fn,
        })
    }

    /// Replaces the reward strategy.
    pub fn with_reward(mut self, reward_fn: Box<dyn RewardFn>) -> Self {
        info!("EpisodicTask reward strategy: {}", reward_fn.name());
        self.reward_fn = reward_fn;
        self
    }

    /// Dimension of the observation, `action_repeat * 6`.
    pub fn state_size(&self) -> usize {
        self.action_repeat * crate::POSE_SIZE
    }

    /// Dimension of the action.
    pub fn action_size(&self) -> usize {
        N_ROTORS
    }

    /// Lower bound of every rotor command.
    pub fn action_low(&self) -> f64 {
        ACTION_LOW
    }

    /// Upper bound of every rotor command.
    pub fn action_high(&self) -> f64 {
        ACTION_HIGH
    }

    /// Simulator steps per agent step.
    pub fn action_repeat(&self) -> usize {
        self.action_repeat
    }

    /// Goal position.
    pub fn target(&self) -> &TargetState {
        &self.target
    }

    /// The wrapped simulator.
    pub fn simulator(&self) -> &S {
        &self.sim
    }

    fn check_action(&self, a: &RotorCommand) -> Result<()> {
        match self.action_check {
            ActionCheck::Reject => a.check()?,
            ActionCheck::PassThrough => {
                if let Err(e) = a.check() {
                    warn!("Forwarding rotor command as is: {}", e);
                }
            }
        }
        Ok(())
    }
}

impl<S: Simulator> Env for EpisodicTask<S> {
    type Config = EpisodicTaskConfig;
    type Obs = PoseWindow;
    type Act = RotorCommand;
    type Info = HoverInfo;

    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        config.validate()?;
        let sim = S::build(&config.init, seed)?;
        Self::new(config, sim)
    }

    /// Restarts the simulator and returns its pose repeated `action_repeat` times.
    fn reset(&mut self) -> Result<PoseWindow> {
        trace!("EpisodicTask::reset()");
        self.sim.reset()?;
        Ok(PoseWindow::repeat(&self.sim.pose(), self.action_repeat))
    }

    fn step(&mut self, a: &RotorCommand) -> Result<(Step<Self>, Record)> {
        trace!("EpisodicTask::step()");
        self.check_action(a)?;

        let mut poses = Vec::with_capacity(self.action_repeat);
        let mut sub_step_rewards = Vec::with_capacity(self.action_repeat);
        let mut terminal_sub_steps = 0;
        let mut done = false;

        for _ in 0..self.action_repeat {
            done = self.sim.advance(a.speeds())?;
            if done {
                terminal_sub_steps += 1;
            }
            let pose = self.sim.pose();
            let velocity = self.sim.velocity();
            sub_step_rewards.push(self.reward_fn.reward(&pose, &velocity, &self.target));
            poses.push(pose);
        }

        let reward: f64 = sub_step_rewards.iter().sum();
        let obs = PoseWindow::from_poses(&poses);
        debug!("reward = {}, terminated = {}", reward, done);

        let mut record = Record::from_scalar("reward", reward);
        if let Some(last) = poses.last() {
            record.insert("altitude", RecordValue::Scalar(last.z));
            record.insert(
                "distance_to_target",
                RecordValue::Scalar(self.target.distance(last)),
            );
        }
        record.insert(
            "terminal_sub_steps",
            RecordValue::Scalar(terminal_sub_steps as f64),
        );
        record.insert("obs", RecordValue::Array1(obs.as_slice().to_vec()));

        let info = HoverInfo { sub_step_rewards };
        Ok((Step::new(obs, *a, reward, done, info), record))
    }
}
