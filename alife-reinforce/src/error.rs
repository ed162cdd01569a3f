//! Errors of the REINFORCE agent.
use thiserror::Error;

/// Errors raised by [`Reinforce`](crate::Reinforce) and its components.
#[derive(Error, Debug, PartialEq)]
pub enum ReinforceError {
    /// The observation length differs from the dimension fixed at construction.
    #[error("Observation shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch {
        /// Dimension of the observation space.
        expected: usize,
        /// Length of the given observation.
        actual: usize,
    },

    /// An observation element or a reward is infinite or NaN.
    #[error("Non-finite input: {0}")]
    NonFiniteInput(String),

    /// A policy needs at least the bias weight.
    #[error("Empty weight vector")]
    EmptyWeights,

    /// A discrete action outside the action table. Never raised by a
    /// correctly sampled action.
    #[error("Invalid action index: {0}")]
    InvalidActionIndex(usize),

    /// The observation space has no dimension to build the policy on.
    #[error("Observation space has an empty shape")]
    EmptyObservationSpace,

    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
