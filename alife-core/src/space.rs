//! Observation and action spaces.
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Shape of the observations or actions of an environment.
pub trait Space: Clone + Debug {
    /// Returns the shape of the space.
    fn shape(&self) -> &[usize];

    /// Returns the first dimension of the shape, if any.
    fn dim(&self) -> Option<usize> {
        self.shape().first().copied()
    }
}

/// A box in `R^n`, only its shape is tracked.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct BoxSpace {
    shape: Vec<usize>,
}

impl BoxSpace {
    /// Constructs a space with the given shape.
    pub fn new(shape: impl Into<Vec<usize>>) -> Self {
        Self {
            shape: shape.into(),
        }
    }
}

impl Space for BoxSpace {
    fn shape(&self) -> &[usize] {
        &self.shape
    }
}
