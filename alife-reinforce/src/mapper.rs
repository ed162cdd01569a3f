//! Discrete to continuous action mapping.
use crate::ReinforceError;
use std::f32::consts::FRAC_PI_4;

/// Number of discrete actions of the agent.
pub const N_ACTIONS: usize = 2;

/// Maps a discrete action to a continuous `(direction, speed)` pair.
///
/// Action `0` turns left (`+pi/4`) and action `1` turns right (`-pi/4`),
/// both moving at the same speed.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionTable {
    rows: [[f32; 2]; N_ACTIONS],
}

impl ActionTable {
    /// Constructs the table for the given speed.
    pub fn new(speed: f32) -> Self {
        Self {
            rows: [[FRAC_PI_4, speed], [-FRAC_PI_4, speed]],
        }
    }

    /// Looks up the continuous action of `a`.
    pub fn map(&self, a: usize) -> Result<[f32; 2], ReinforceError> {
        self.rows
            .get(a)
            .copied()
            .ok_or(ReinforceError::InvalidActionIndex(a))
    }

    /// Number of rows, always [`N_ACTIONS`].
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always `false`.
    pub fn is_empty(&self) -> bool {
        false
    }
}
