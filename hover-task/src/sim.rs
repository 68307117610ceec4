//! Interface of the rigid-body simulator driven by the task.
//!
//! The physics itself lives outside this crate. A simulator is an opaque
//! stateful object that can be reset to its initial conditions, advanced by one
//! integration step under a rotor command, and inspected through its current
//! [`Pose`] and linear [`Velocity`].
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Number of components in a [`Pose`].
pub const POSE_SIZE: usize = 6;

/// Position and Euler orientation of the vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    /// Position along x.
    pub x: f64,
    /// Position along y.
    pub y: f64,
    /// Altitude.
    pub z: f64,
    /// Roll angle in radians.
    pub phi: f64,
    /// Pitch angle in radians.
    pub theta: f64,
    /// Yaw angle in radians.
    pub psi: f64,
}

impl Pose {
    /// Pose at the given position with zero orientation.
    pub fn at(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            ..Self::default()
        }
    }

    /// Returns `(x, y, z)`.
    pub fn position(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Returns `(x, y, z, phi, theta, psi)`.
    pub fn to_array(&self) -> [f64; POSE_SIZE] {
        [self.x, self.y, self.z, self.phi, self.theta, self.psi]
    }
}

impl From<[f64; POSE_SIZE]> for Pose {
    fn from(v: [f64; POSE_SIZE]) -> Self {
        Self {
            x: v[0],
            y: v[1],
            z: v[2],
            phi: v[3],
            theta: v[4],
            psi: v[5],
        }
    }
}

/// Linear velocity of the vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Velocity {
    /// Velocity along x.
    pub vx: f64,
    /// Velocity along y.
    pub vy: f64,
    /// Vertical velocity.
    pub vz: f64,
}

impl Velocity {
    /// Constructs a velocity.
    pub fn new(vx: f64, vy: f64, vz: f64) -> Self {
        Self { vx, vy, vz }
    }
}

impl From<[f64; 3]> for Velocity {
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

/// Initial conditions of an episode, forwarded to the simulator unmodified.
///
/// `None` leaves the choice to the simulator, which typically starts at rest
/// on the ground.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitialConditions {
    /// Initial pose.
    pub init_pose: Option<Pose>,

    /// Initial linear velocity.
    pub init_velocities: Option<Velocity>,

    /// Initial angular velocity of the three Euler angles in radians per second.
    pub init_angle_velocities: Option<[f64; 3]>,

    /// Time limit of an episode in seconds.
    pub runtime: f64,
}

impl Default for InitialConditions {
    fn default() -> Self {
        Self {
            init_pose: None,
            init_velocities: None,
            init_angle_velocities: None,
            runtime: 5.0,
        }
    }
}

impl InitialConditions {
    /// Sets the initial pose.
    pub fn init_pose(mut self, v: Pose) -> Self {
        self.init_pose = Some(v);
        self
    }

    /// Sets the initial linear velocity.
    pub fn init_velocities(mut self, v: Velocity) -> Self {
        self.init_velocities = Some(v);
        self
    }

    /// Sets the initial angular velocity.
    pub fn init_angle_velocities(mut self, v: [f64; 3]) -> Self {
        self.init_angle_velocities = Some(v);
        self
    }

    /// Sets the time limit of an episode.
    pub fn runtime(mut self, v: f64) -> Self {
        self.runtime = v;
        self
    }
}

/// A rigid-body simulator of a four-rotor vehicle.
///
/// [`pose`](Simulator::pose) and [`velocity`](Simulator::velocity) must be
/// valid right after [`build`](Simulator::build) and after every call to
/// [`reset`](Simulator::reset) or [`advance`](Simulator::advance).
pub trait Simulator {
    /// Builds a simulator from initial conditions and a random seed.
    ///
    /// Deterministic simulators may ignore the seed.
    fn build(init: &InitialConditions, seed: i64) -> Result<Self>
    where
        Self: Sized;

    /// Restores the configured initial pose, velocities and elapsed time.
    fn reset(&mut self) -> Result<()>;

    /// Integrates one step under the given rotor speeds.
    ///
    /// Returns `true` if the episode has ended, e.g. the vehicle left the
    /// bounds of the world or the runtime elapsed.
    fn advance(&mut self, rotor_speeds: &[f64; 4]) -> Result<bool>;

    /// Current pose.
    fn pose(&self) -> Pose;

    /// Current linear velocity.
    fn velocity(&self) -> Velocity;
}
