#![warn(missing_docs)]
//! An episodic hover task for reinforcement learning on a quadcopter.
//!
//! [`EpisodicTask`] wraps a rigid-body [`Simulator`] and implements
//! [`hover_core::Env`]: every agent step repeats the rotor command for a few
//! simulator steps, returns the poses seen along the way as a [`PoseWindow`],
//! and sums a shaped reward that pulls the vehicle towards a [`TargetState`].
//!
//! The reward is pluggable. [`RewardConfig`] selects one of the built-in
//! strategies from configuration, and [`EpisodicTask::with_reward`] accepts any
//! [`RewardFn`], closures included.
//!
//! ```
//! use hover_core::Env;
//! use hover_task::{
//!     dummy::ScriptedSim, reward::BoundedShaping, EpisodicTask, EpisodicTaskConfig,
//!     RewardConfig, RotorCommand, TargetState,
//! };
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = EpisodicTaskConfig::default()
//!     .target(TargetState::new(0.0, 0.0, 20.0)?)
//!     .reward(RewardConfig::BoundedShaping(BoundedShaping::default()));
//! let mut task = EpisodicTask::<ScriptedSim>::build(&config, 42)?;
//!
//! task.reset()?;
//! let obs = loop {
//!     let (step, _) = task.step(&RotorCommand::uniform(400.0))?;
//!     if step.is_done() {
//!         break step.obs;
//!     }
//! };
//! assert_eq!(obs.as_slice().len(), task.state_size());
//! # Ok(())
//! # }
//! ```
mod act;
pub mod dummy;
pub mod error;
mod obs;
pub mod reward;
mod sim;
mod target;
mod task;
pub use act::{ActionCheck, RotorCommand, ACTION_HIGH, ACTION_LOW, N_ROTORS};
pub use obs::PoseWindow;
pub use reward::{RewardConfig, RewardFn};
pub use sim::{InitialConditions, Pose, Simulator, Velocity, POSE_SIZE};
pub use target::TargetState;
pub use task::{EpisodicTask, EpisodicTaskConfig, HoverInfo};
