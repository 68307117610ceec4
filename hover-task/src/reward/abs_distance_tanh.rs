use super::RewardFn;
use crate::{Pose, TargetState, Velocity};
use serde::{Deserialize, Serialize};

/// `tanh(1 - scale * sum_i |p_i - target_i|)`, normalized to `[-1, 1]`.
///
/// Ignores velocity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbsDistanceTanh {
    /// Weight of the L1 distance to the target.
    pub scale: f64,
}

impl Default for AbsDistanceTanh {
    fn default() -> Self {
        Self { scale: 0.3 }
    }
}

impl AbsDistanceTanh {
    /// Sets the weight of the distance.
    pub fn scale(mut self, v: f64) -> Self {
        self.scale = v;
        self
    }
}

impl RewardFn for AbsDistanceTanh {
    fn reward(&self, pose: &Pose, _velocity: &Velocity, target: &TargetState) -> f64 {
        (1.0 - self.scale * target.abs_distance(pose)).tanh()
    }

    fn name(&self) -> &str {
        "abs_distance_tanh"
    }
}
