#![warn(missing_docs)]
//! Core traits for episodic control tasks.
//!
//! An environment ([`Env`]) receives an action ([`Act`]) and emits a [`Step`]
//! holding the next observation ([`Obs`]), the reward and the termination flag,
//! together with a [`Record`](record::Record) of per-step diagnostics.
pub mod error;
pub mod record;

mod base;
pub use base::{Act, Env, Info, Obs, Step};
