#![warn(missing_docs)]
//! REINFORCE agent with a linear-sigmoid policy over two discrete actions.
//!
//! [`Reinforce`] decides between "turn left and move" and "turn right and
//! move" by sampling from `sigmoid(clip(w . [1, x], -3, 3))`. Transitions are
//! kept in a fixed-length [`EpisodeBuffer`](buffer::EpisodeBuffer); when it
//! wraps, the weights ascend the Monte-Carlo policy gradient of the episode.
//!
//! ```no_run
//! use alife_core::BoxSpace;
//! use alife_reinforce::{Reinforce, ReinforceConfig};
//!
//! let config = ReinforceConfig::default().episode_len(4).seed(42);
//! let mut agent = Reinforce::build(&BoxSpace::new([3]), &BoxSpace::new([2]), config)?;
//! let [direction, speed] = agent.act(&[0.1, 0.2, 0.3], 0.0, false)?;
//! println!("{}: {} {}", agent, direction, speed);
//! # Ok::<(), alife_reinforce::ReinforceError>(())
//! ```
pub mod buffer;
pub mod mapper;
pub mod model;

mod error;
pub use error::ReinforceError;

mod reinforce;
pub use reinforce::{Baseline, Reinforce, ReinforceConfig};
