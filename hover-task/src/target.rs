//! Goal position of an episode.
use crate::{error::TaskError, Pose};
use serde::{Deserialize, Serialize};

/// A fixed position the reward steers the vehicle to.
///
/// The altitude must be strictly positive, since reward strategies divide by
/// it. [`TargetState::new`] enforces this.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 3]", into = "[f64; 3]")]
pub struct TargetState {
    position: [f64; 3],
}

impl TargetState {
    /// Creates a target at `(x, y, z)`.
    ///
    /// # Errors
    ///
    /// Fails with [`TaskError::InvalidConfiguration`] if a component is not
    /// finite or `z <= 0`.
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self, TaskError> {
        if !(x.is_finite() && y.is_finite() && z.is_finite()) {
            return Err(TaskError::InvalidConfiguration(format!(
                "target position must be finite, got ({}, {}, {})",
                x, y, z
            )));
        }
        if z <= 0.0 {
            return Err(TaskError::InvalidConfiguration(format!(
                "target altitude must be positive, got {}",
                z
            )));
        }
        Ok(Self {
            position: [x, y, z],
        })
    }

    /// Returns `(x, y, z)`.
    pub fn position(&self) -> [f64; 3] {
        self.position
    }

    /// Target altitude, always positive.
    pub fn z(&self) -> f64 {
        self.position[2]
    }

    /// Euclidean distance between the position of `pose` and the target.
    pub fn distance(&self, pose: &Pose) -> f64 {
        pose.position()
            .iter()
            .zip(self.position.iter())
            .map(|(p, t)| (p - t).powi(2))
            .sum::<f64>()
            .sqrt()
    }

    /// Sum of absolute per-axis differences between `pose` and the target.
    pub fn abs_distance(&self, pose: &Pose) -> f64 {
        pose.position()
            .iter()
            .zip(self.position.iter())
            .map(|(p, t)| (p - t).abs())
            .sum()
    }
}

impl Default for TargetState {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 10.0],
        }
    }
}

impl TryFrom<[f64; 3]> for TargetState {
    type Error = TaskError;

    fn try_from(v: [f64; 3]) -> Result<Self, Self::Error> {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<TargetState> for [f64; 3] {
    fn from(t: TargetState) -> Self {
        t.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_altitude() {
        assert!(matches!(
            TargetState::new(0.0, 0.0, 0.0),
            Err(TaskError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            TargetState::new(1.0, 1.0, -3.0),
            Err(TaskError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            TargetState::new(f64::NAN, 0.0, 10.0),
            Err(TaskError::InvalidConfiguration(_))
        ));
        assert!(TargetState::new(0.0, 0.0, 1e-3).is_ok());
    }

    #[test]
    fn test_distances() {
        let target = TargetState::default();
        let pose = Pose::at(3.0, 0.0, 6.0);
        assert!((target.distance(&pose) - 5.0).abs() < 1e-12);
        assert!((target.abs_distance(&pose) - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_deserialize_validates() {
        let t: TargetState = serde_yaml::from_str("[1.0, 2.0, 3.0]").unwrap();
        assert_eq!(t.position(), [1.0, 2.0, 3.0]);
        assert!(serde_yaml::from_str::<TargetState>("[1.0, 2.0, 0.0]").is_err());
    }
}
