//! Observation of the hover task.
use crate::sim::{Pose, POSE_SIZE};
use hover_core::Obs;

/// Raw poses of the sub-steps of one agent step, oldest first, flattened.
///
/// The window stands in for velocity information: the agent acts once per
/// several simulator steps and sees how the pose moved in between.
#[derive(Debug, Clone, PartialEq)]
pub struct PoseWindow(Vec<f64>);

impl PoseWindow {
    /// A window filled with `n` copies of the same pose.
    pub fn repeat(pose: &Pose, n: usize) -> Self {
        Self(pose.to_array().repeat(n))
    }

    /// Concatenates the poses in the given order.
    pub fn from_poses(poses: &[Pose]) -> Self {
        Self(poses.iter().flat_map(|p| p.to_array()).collect())
    }

    /// Number of poses in the window.
    pub fn n_poses(&self) -> usize {
        self.0.len() / POSE_SIZE
    }

    /// The `ix`-th pose, `0` being the oldest.
    pub fn pose(&self, ix: usize) -> Option<Pose> {
        let chunk = self.0.chunks_exact(POSE_SIZE).nth(ix)?;
        let mut v = [0.0; POSE_SIZE];
        v.copy_from_slice(chunk);
        Some(Pose::from(v))
    }

    /// The most recent pose.
    pub fn last(&self) -> Option<Pose> {
        self.n_poses().checked_sub(1).and_then(|ix| self.pose(ix))
    }

    /// Flattened components.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl Obs for PoseWindow {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<PoseWindow> for Vec<f64> {
    fn from(obs: PoseWindow) -> Self {
        obs.0
    }
}
