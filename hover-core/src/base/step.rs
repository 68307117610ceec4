//! Environment step.
use super::Env;

/// Additional information to `Obs` and `Act`.
pub trait Info {}

impl Info for () {}

/// Represents an action, observation and reward tuple `(a_t, o_t+1, r_t)`
/// with some additional information.
///
/// An environment emits [`Step`] object at every interaction steps.
pub struct Step<E: Env> {
    /// Action.
    pub act: E::Act,

    /// Observation.
    pub obs: E::Obs,

    /// Reward.
    pub reward: f64,

    /// Flag denoting if episode is terminated.
    pub is_terminated: bool,

    /// Information defined by user.
    pub info: E::Info,

    /// Initial observation of the next episode.
    ///
    /// Only set by [`Env::step_with_reset`] when the episode has ended.
    pub init_obs: Option<E::Obs>,
}

impl<E: Env> Step<E> {
    /// Constructs a [`Step`] object.
    pub fn new(obs: E::Obs, act: E::Act, reward: f64, is_terminated: bool, info: E::Info) -> Self {
        Step {
            act,
            obs,
            reward,
            is_terminated,
            info,
            init_obs: None,
        }
    }

    #[inline]
    /// Terminated.
    pub fn is_done(&self) -> bool {
        self.is_terminated
    }
}
