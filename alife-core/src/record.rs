//! Types and traits for recording what happens during a simulation.
//!
//! Agents and environments return a [`Record`] for interesting events, e.g.
//! an environment step or a gradient update. A [`Recorder`] decides where
//! the records go.
//!
//! ```rust
//! use alife_core::record::{Record, RecordValue};
//!
//! let mut record = Record::empty();
//! record.insert("step", RecordValue::Scalar(1.0));
//! record.insert("obs", RecordValue::Array1(vec![1f32, 2.0, 3.0]));
//! assert_eq!(record.get_scalar("step").unwrap(), 1.0);
//! ```
mod base;
mod buffered_recorder;
mod null_recorder;
mod recorder;

pub use base::{Record, RecordValue};
pub use buffered_recorder::BufferedRecorder;
pub use null_recorder::NullRecorder;
pub use recorder::Recorder;
