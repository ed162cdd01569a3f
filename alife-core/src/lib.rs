#![warn(missing_docs)]
//! Core abstractions for agents living in an artificial life simulation.
//!
//! The simulation itself is an external collaborator; this crate only fixes
//! the seams between it and the agents: [`Env`], [`Policy`], [`Agent`], the
//! observation/action [`Space`]s and the [`record`] module used to report
//! what happened at each step.
pub mod error;
pub mod record;
pub mod util;

mod base;
pub use base::{Act, Agent, Env, Obs, Policy, Step};

mod space;
pub use space::{BoxSpace, Space};
