//! Core functionalities.
mod env;
mod step;
pub use env::Env;
use std::fmt::Debug;
pub use step::{Info, Step};

/// An observation of an environment.
///
/// Environments in this crate are not vectorized, so an observation always
/// belongs to a single environment.
pub trait Obs: Clone + Debug {
    /// Returns the number of scalar components in the observation.
    fn len(&self) -> usize;

    /// Returns `true` if the observation has no components.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An action of an environment.
pub trait Act: Clone + Debug {
    /// Returns the number of scalar components in the action.
    fn len(&self) -> usize;

    /// Returns `true` if the action has no components.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
