//! Agent.
use super::{Env, Policy};
use anyhow::Result;

/// Represents a policy that learns online while it acts.
///
/// The agent is called once per simulation step with the current
/// observation and the reward obtained since the previous call. When and
/// how it updates its parameters is up to the implementation.
pub trait Agent<E: Env>: Policy<E> {
    /// Records the reward, decides the next action and learns when an
    /// episode is complete.
    ///
    /// `is_done` is the termination flag of the environment.
    fn act(&mut self, obs: &E::Obs, reward: f32, is_done: bool) -> Result<E::Act>;

    /// Short human-readable label of the agent, e.g. for display in a
    /// simulation viewer.
    fn describe(&self) -> String;

    /// Creates a child agent for the same environment.
    fn spawn_copy(&mut self) -> Self
    where
        Self: Sized;
}
