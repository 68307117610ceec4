//! This module is used for tests.
//!
//! [`ScriptedSim`] is a deterministic stand-in for a physics simulator. It
//! replays a fixed sequence of states, one per call to `advance`, and counts
//! how it was driven.
use crate::{InitialConditions, Pose, Simulator, Velocity};
use anyhow::{bail, Result};

/// Simulated time of one `advance` call, in seconds.
pub const DT: f64 = 0.02;

/// State reported by [`ScriptedSim`] after one `advance` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptedState {
    /// Pose after the call.
    pub pose: Pose,
    /// Velocity after the call.
    pub velocity: Velocity,
    /// Terminal flag returned by the call.
    pub terminal: bool,
}

impl ScriptedState {
    /// Non-terminal state.
    pub fn new(pose: Pose, velocity: Velocity) -> Self {
        Self {
            pose,
            velocity,
            terminal: false,
        }
    }

    /// Marks the state as terminal.
    pub fn terminal(mut self) -> Self {
        self.terminal = true;
        self
    }
}

/// Replays scripted states.
///
/// Once the script is exhausted, or if there is none, the vehicle stays where
/// it is and the episode ends when the runtime has elapsed.
#[derive(Debug, Clone)]
pub struct ScriptedSim {
    init_pose: Pose,
    init_velocity: Velocity,
    runtime: f64,
    pose: Pose,
    velocity: Velocity,
    time: f64,
    script: Vec<ScriptedState>,
    cursor: usize,
    fail_on_advance: Option<usize>,
    n_advance: usize,
    n_reset: usize,
    commands: Vec<[f64; 4]>,
}

impl ScriptedSim {
    /// Sets the states replayed after each reset.
    pub fn with_script(mut self, script: Vec<ScriptedState>) -> Self {
        self.script = script;
        self
    }

    /// Makes the `n`-th call to `advance` (1-based, counted over the whole
    /// lifetime) return an error.
    pub fn fail_on_advance(mut self, n: usize) -> Self {
        self.fail_on_advance = Some(n);
        self
    }

    /// Number of `advance` calls so far.
    pub fn n_advance(&self) -> usize {
        self.n_advance
    }

    /// Number of `reset` calls so far.
    pub fn n_reset(&self) -> usize {
        self.n_reset
    }

    /// Rotor commands received, in order.
    pub fn commands(&self) -> &[[f64; 4]] {
        &self.commands
    }

    /// Elapsed simulated time in the current episode.
    pub fn time(&self) -> f64 {
        self.time
    }
}

impl Simulator for ScriptedSim {
    fn build(init: &InitialConditions, _seed: i64) -> Result<Self> {
        let init_pose = init.init_pose.unwrap_or_default();
        let init_velocity = init.init_velocities.unwrap_or_default();
        Ok(Self {
            init_pose,
            init_velocity,
            runtime: init.runtime,
            pose: init_pose,
            velocity: init_velocity,
            time: 0.0,
            script: Vec::new(),
            cursor: 0,
            fail_on_advance: None,
            n_advance: 0,
            n_reset: 0,
            commands: Vec::new(),
        })
    }

    fn reset(&mut self) -> Result<()> {
        self.n_reset += 1;
        self.pose = self.init_pose;
        self.velocity = self.init_velocity;
        self.time = 0.0;
        self.cursor = 0;
        Ok(())
    }

    fn advance(&mut self, rotor_speeds: &[f64; 4]) -> Result<bool> {
        self.n_advance += 1;
        if self.fail_on_advance == Some(self.n_advance) {
            bail!("scripted failure at advance #{}", self.n_advance);
        }
        self.commands.push(*rotor_speeds);
        self.time += DT;

        match self.script.get(self.cursor) {
            Some(state) => {
                self.cursor += 1;
                self.pose = state.pose;
                self.velocity = state.velocity;
                Ok(state.terminal)
            }
            None => Ok(self.time >= self.runtime),
        }
    }

    fn pose(&self) -> Pose {
        self.pose
    }

    fn velocity(&self) -> Velocity {
        self.velocity
    }
}
