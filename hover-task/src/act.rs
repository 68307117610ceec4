//! Rotor commands.
use crate::error::TaskError;
use hover_core::Act;
use serde::{Deserialize, Serialize};

/// Number of rotors, i.e. the dimension of a [`RotorCommand`].
pub const N_ROTORS: usize = 4;

/// Lower bound of every rotor command.
pub const ACTION_LOW: f64 = 0.0;

/// Upper bound of every rotor command.
pub const ACTION_HIGH: f64 = 900.0;

/// How the task treats rotor commands outside `[ACTION_LOW, ACTION_HIGH]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ActionCheck {
    /// Fail the step with [`TaskError::InvalidAction`].
    #[default]
    Reject,

    /// Forward the command to the simulator uncapped.
    PassThrough,
}

/// Speeds of the four rotors, applied for every sub-step of an agent step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotorCommand(pub [f64; N_ROTORS]);

impl RotorCommand {
    /// The same speed on every rotor.
    pub fn uniform(v: f64) -> Self {
        Self([v; N_ROTORS])
    }

    /// Rotor speeds.
    pub fn speeds(&self) -> &[f64; N_ROTORS] {
        &self.0
    }

    /// Returns `true` if every speed is finite and within the action bounds.
    pub fn in_bounds(&self) -> bool {
        self.check().is_ok()
    }

    /// Checks the command against the action bounds.
    ///
    /// # Errors
    ///
    /// Fails with [`TaskError::InvalidAction`] naming the first offending rotor.
    pub fn check(&self) -> Result<(), TaskError> {
        match self
            .0
            .iter()
            .position(|v| !(v.is_finite() && (ACTION_LOW..=ACTION_HIGH).contains(v)))
        {
            None => Ok(()),
            Some(ix) => Err(TaskError::InvalidAction(format!(
                "rotor {} speed {} outside [{}, {}]",
                ix, self.0[ix], ACTION_LOW, ACTION_HIGH
            ))),
        }
    }
}

impl Act for RotorCommand {
    fn len(&self) -> usize {
        N_ROTORS
    }
}

impl From<[f64; N_ROTORS]> for RotorCommand {
    fn from(v: [f64; N_ROTORS]) -> Self {
        Self(v)
    }
}

impl TryFrom<&[f64]> for RotorCommand {
    type Error = TaskError;

    fn try_from(v: &[f64]) -> Result<Self, Self::Error> {
        let speeds: [f64; N_ROTORS] = v.try_into().map_err(|_| {
            TaskError::InvalidAction(format!(
                "expected {} rotor speeds, got {}",
                N_ROTORS,
                v.len()
            ))
        })?;
        Ok(Self(speeds))
    }
}

impl TryFrom<Vec<f64>> for RotorCommand {
    type Error = TaskError;

    fn try_from(v: Vec<f64>) -> Result<Self, Self::Error> {
        Self::try_from(v.as_slice())
    }
}
