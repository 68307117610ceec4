use super::RewardFn;
use crate::{Pose, TargetState, Velocity};
use serde::{Deserialize, Serialize};

/// `base - distance_to_target`, plus `climb_bonus` while climbing and minus it otherwise.
///
/// Unbounded: strongly negative far from the target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistancePenalty {
    /// Reward at the target before the climb term.
    pub base: f64,

    /// Magnitude of the climb term.
    pub climb_bonus: f64,
}

impl Default for DistancePenalty {
    fn default() -> Self {
        Self {
            base: 150.0,
            climb_bonus: 25.0,
        }
    }
}

impl DistancePenalty {
    /// Sets the reward at the target.
    pub fn base(mut self, v: f64) -> Self {
        self.base = v;
        self
    }

    /// Sets the magnitude of the climb term.
    pub fn climb_bonus(mut self, v: f64) -> Self {
        self.climb_bonus = v;
        self
    }
}

impl RewardFn for DistancePenalty {
    fn reward(&self, pose: &Pose, velocity: &Velocity, target: &TargetState) -> f64 {
        let climb = if velocity.vz > 0.0 {
            self.climb_bonus
        } else {
            -self.climb_bonus
        };
        self.base - target.distance(pose) + climb
    }

    fn name(&self) -> &str {
        "distance_penalty"
    }
}
