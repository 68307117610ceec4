//! Reward strategies.
//!
//! A reward strategy maps the pose and velocity after a simulator step, and the
//! target of the task, to a scalar. The task sums it over the sub-steps of an
//! agent step. Strategies are chosen at construction through [`RewardConfig`]
//! or supplied directly as a boxed [`RewardFn`]; any
//! `Fn(&Pose, &Velocity, &TargetState) -> f64` closure qualifies.
mod abs_distance_tanh;
mod bounded_shaping;
mod distance_penalty;
use crate::{Pose, TargetState, Velocity};
pub use abs_distance_tanh::AbsDistanceTanh;
pub use bounded_shaping::{BoundedShaping, ShapingTerms};
pub use distance_penalty::DistancePenalty;
use serde::{Deserialize, Serialize};

/// Maps the state after a simulator step to a scalar reward.
pub trait RewardFn: Send {
    /// Reward of a single sub-step.
    fn reward(&self, pose: &Pose, velocity: &Velocity, target: &TargetState) -> f64;

    /// Name used in logs.
    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> RewardFn for F
where
    F: Fn(&Pose, &Velocity, &TargetState) -> f64 + Send,
{
    fn reward(&self, pose: &Pose, velocity: &Velocity, target: &TargetState) -> f64 {
        self(pose, velocity, target)
    }
}

/// Selects one of the built-in reward strategies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RewardConfig {
    /// See [`DistancePenalty`].
    DistancePenalty(DistancePenalty),

    /// See [`BoundedShaping`].
    BoundedShaping(BoundedShaping),

    /// See [`AbsDistanceTanh`].
    AbsDistanceTanh(AbsDistanceTanh),
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self::DistancePenalty(DistancePenalty::default())
    }
}

impl RewardConfig {
    /// Builds the selected strategy.
    pub fn build(&self) -> Box<dyn RewardFn> {
        match self {
            Self::DistancePenalty(r) => Box::new(r.clone()),
            Self::BoundedShaping(r) => Box::new(r.clone()),
            Self::AbsDistanceTanh(r) => Box::new(r.clone()),
        }
    }
}
