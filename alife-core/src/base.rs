//! Core functionalities.
mod agent;
mod env;
mod policy;
mod step;
pub use agent::Agent;
pub use env::Env;
pub use policy::Policy;
use std::fmt::Debug;
pub use step::Step;

/// An observation of an environment.
pub trait Obs: Clone + Debug {
    /// Returns the number of elements in the observation.
    fn len(&self) -> usize;
}

/// An action applied to an environment.
pub trait Act: Clone + Debug {
    /// Returns the number of elements in the action.
    fn len(&self) -> usize;
}

impl Obs for Vec<f32> {
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl Act for Vec<f32> {
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

/// Continuous `(direction, speed)` pair.
impl Act for [f32; 2] {
    fn len(&self) -> usize {
        2
    }
}
