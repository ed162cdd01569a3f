//! Environment.
use super::{Act, Obs, Step};
use crate::{record::Record, BoxSpace};
use anyhow::Result;

/// Represents the simulation an agent lives in.
///
/// Agents never own their environment. The environment, or a driver like
/// [`run_with_recorder`](crate::util::run_with_recorder), feeds observations
/// and rewards to the agent and applies the actions it returns.
pub trait Env {
    /// Configurations.
    type Config: Clone;

    /// Observation of the environment.
    type Obs: Obs;

    /// Action of the environment.
    type Act: Act;

    /// Builds an environment with a given random seed.
    fn build(config: &Self::Config, seed: i64) -> Result<Self>
    where
        Self: Sized;

    /// Space of the observations emitted by this environment.
    fn observation_space(&self) -> BoxSpace;

    /// Space of the actions accepted by this environment.
    fn action_space(&self) -> BoxSpace;

    /// Resets the environment and returns the initial observation.
    fn reset(&mut self) -> Result<Self::Obs>;

    /// Performs an environment step.
    fn step(&mut self, a: &Self::Act) -> (Step<Self>, Record)
    where
        Self: Sized;
}
