use super::RewardFn;
use crate::{Pose, TargetState, Velocity};
use serde::{Deserialize, Serialize};

/// Sum of saturated terms, each confined to a small range.
///
/// | term        | formula                         | range        |
/// |-------------|---------------------------------|--------------|
/// | closeness   | `1.5 tanh(1 - d / target_z)`    | [-1.5, 1.5]  |
/// | climb       | `0.5 tanh(vz)`                  | [-0.5, 0.5]  |
/// | drift x     | `-0.5 tanh(0.1 \|x\|)`          | [-0.5, 0]    |
/// | drift y     | `-0.5 tanh(0.1 \|y\|)`          | [-0.5, 0]    |
/// | altitude    | `tanh(z / target_z)`            | [-1, 1]      |
/// | threshold   | `±0.5` around `altitude_threshold` | {-0.5, 0.5} |
///
/// `d` is the euclidean distance to the target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundedShaping {
    /// Altitude above which the threshold term is positive.
    pub altitude_threshold: f64,
}

impl Default for BoundedShaping {
    fn default() -> Self {
        Self {
            altitude_threshold: 5.0,
        }
    }
}

/// Individual terms of [`BoundedShaping`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapingTerms {
    /// Decreasing in the distance to the target.
    pub closeness: f64,
    /// Increasing in vertical velocity.
    pub climb: f64,
    /// Penalty for drifting along x.
    pub drift_x: f64,
    /// Penalty for drifting along y.
    pub drift_y: f64,
    /// Increasing in altitude.
    pub altitude: f64,
    /// Bonus above the altitude threshold, penalty below.
    pub threshold: f64,
}

impl ShapingTerms {
    /// Sum of the terms.
    pub fn total(&self) -> f64 {
        self.closeness + self.climb + self.drift_x + self.drift_y + self.altitude + self.threshold
    }
}

impl BoundedShaping {
    /// Sets the altitude threshold.
    pub fn altitude_threshold(mut self, v: f64) -> Self {
        self.altitude_threshold = v;
        self
    }

    /// Computes every term separately.
    pub fn terms(&self, pose: &Pose, velocity: &Velocity, target: &TargetState) -> ShapingTerms {
        let target_z = target.z();
        ShapingTerms {
            closeness: 1.5 * (1.0 - target.distance(pose) / target_z).tanh(),
            climb: 0.5 * velocity.vz.tanh(),
            drift_x: -0.5 * (0.1 * pose.x.abs()).tanh(),
            drift_y: -0.5 * (0.1 * pose.y.abs()).tanh(),
            altitude: (pose.z / target_z).tanh(),
            threshold: if pose.z > self.altitude_threshold {
                0.5
            } else {
                -0.5
            },
        }
    }
}

impl RewardFn for BoundedShaping {
    fn reward(&self, pose: &Pose, velocity: &Velocity, target: &TargetState) -> f64 {
        self.terms(pose, velocity, target).total()
    }

    fn name(&self) -> &str {
        "bounded_shaping"
    }
}
