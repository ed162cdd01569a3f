//! Configuration of REINFORCE agent.
use crate::ReinforceError;
use anyhow::Result;
use log::info;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Baseline subtracted from the returns-to-go in the gradient update.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub enum Baseline {
    /// A fixed value. `Constant(0.0)` is plain REINFORCE.
    Constant(f32),

    /// Mean of the returns-to-go of the episode.
    Mean,
}

impl Default for Baseline {
    fn default() -> Self {
        Self::Constant(0.0)
    }
}

/// Configuration of [`Reinforce`](super::Reinforce) agent.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct ReinforceConfig {
    /// Step size of the gradient ascent.
    pub alpha: f32,

    /// Number of decisions per episode.
    pub episode_len: usize,

    /// Speed of both continuous actions.
    pub speed: f32,

    /// Standard deviation of the initial weights.
    pub init_std: f32,

    /// Discount factor of the returns-to-go.
    pub discount: f32,

    /// Baseline of the returns-to-go.
    pub baseline: Baseline,

    /// Prefix of the label returned by [`Reinforce::describe`](super::Reinforce::describe).
    pub label: String,

    /// Seed of the random number generator, from entropy if `None`.
    pub seed: Option<u64>,
}

impl Default for ReinforceConfig {
    fn default() -> Self {
        Self {
            alpha: 0.1,
            episode_len: 20,
            speed: 3.0,
            init_std: 0.1,
            discount: 1.0,
            baseline: Baseline::default(),
            label: "RF".to_string(),
            seed: None,
        }
    }
}

impl ReinforceConfig {
    /// Sets the step size.
    pub fn alpha(mut self, v: f32) -> Self {
        self.alpha = v;
        self
    }

    /// Sets the episode length.
    pub fn episode_len(mut self, v: usize) -> Self {
        self.episode_len = v;
        self
    }

    /// Sets the speed of the continuous actions.
    pub fn speed(mut self, v: f32) -> Self {
        self.speed = v;
        self
    }

    /// Sets the standard deviation of the initial weights.
    pub fn init_std(mut self, v: f32) -> Self {
        self.init_std = v;
        self
    }

    /// Sets the discount factor.
    pub fn discount(mut self, v: f32) -> Self {
        self.discount = v;
        self
    }

    /// Sets the baseline.
    pub fn baseline(mut self, v: Baseline) -> Self {
        self.baseline = v;
        self
    }

    /// Sets the label prefix.
    pub fn label(mut self, v: impl Into<String>) -> Self {
        self.label = v.into();
        self
    }

    /// Sets the random seed.
    pub fn seed(mut self, v: u64) -> Self {
        self.seed = Some(v);
        self
    }

    /// Checks the ranges of the values.
    pub fn validate(&self) -> Result<(), ReinforceError> {
        let err = |msg: &str| Err(ReinforceError::InvalidConfig(msg.to_string()));
        if self.episode_len == 0 {
            return err("episode_len must be positive");
        }
        if !(self.speed > 0.0) {
            return err("speed must be positive");
        }
        if !(self.init_std >= 0.0) {
            return err("init_std must be non-negative");
        }
        if !(0.0..=1.0).contains(&self.discount) {
            return err("discount must be in [0, 1]");
        }
        if !self.alpha.is_finite() {
            return err("alpha must be finite");
        }
        Ok(())
    }

    /// Loads [`ReinforceConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path_ = path.as_ref().to_owned();
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        info!("Load config of REINFORCE agent from {}", path_.display());
        Ok(b)
    }

    /// Saves [`ReinforceConfig`] to YAML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path_ = path.as_ref().to_owned();
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        info!("Save config of REINFORCE agent into {}", path_.display());
        Ok(())
    }
}
