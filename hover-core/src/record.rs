//! Per-step diagnostics.
//!
//! Every call to [`Env::step`](crate::Env::step) returns a [`Record`] next to the
//! [`Step`](crate::Step). A record is a bag of named values the caller may log,
//! aggregate or discard; the environment never reads it back.
//!
//! ```rust
//! use hover_core::record::{Record, RecordValue};
//!
//! // following values are obtained with some process in reality
//! let step = 1;
//! let obs = vec![1f64, 2.0, 3.0, 4.0, 5.0];
//! let reward = -1f64;
//!
//! let mut record = Record::empty();
//! record.insert("step", RecordValue::Scalar(step as f64));
//! record.insert("reward", RecordValue::Scalar(reward));
//! record.insert("obs", RecordValue::Array1(obs));
//! assert_eq!(record.get_scalar("reward").unwrap(), -1.0);
//! ```
mod base;

pub use base::{Record, RecordValue};
