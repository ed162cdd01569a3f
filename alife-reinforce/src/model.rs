//! Linear-sigmoid policy model.
use crate::ReinforceError;
use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

/// Scores are clipped to `[-SCORE_CLIP, SCORE_CLIP]` before the sigmoid.
///
/// This keeps the probability of either action above `sigmoid(-3) ~ 0.047`,
/// so the agent never stops exploring.
pub const SCORE_CLIP: f32 = 3.0;

/// The sigmoid activation function.
pub fn sigmoid(a: f32) -> f32 {
    1.0 / (1.0 + (-a).exp())
}

/// Prepends the constant bias input to an observation.
pub fn augment(x: &[f32]) -> impl Iterator<Item = f32> + '_ {
    std::iter::once(1.0).chain(x.iter().copied())
}

/// Draws action `1` with probability `p1`, action `0` otherwise.
pub fn sample_action<R: Rng + ?Sized>(p1: f32, rng: &mut R) -> u8 {
    (rng.gen::<f32>() < p1) as u8
}

/// Probability of action `1` given an observation, `sigmoid(w . [1, x])`.
///
/// `w[0]` is the bias.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct LinearSigmoid {
    w: Vec<f32>,
}

impl LinearSigmoid {
    /// Constructs the model with given weights, the bias first.
    pub fn from_weights(w: Vec<f32>) -> Result<Self, ReinforceError> {
        if w.is_empty() {
            return Err(ReinforceError::EmptyWeights);
        }
        if !w.iter().all(|w| w.is_finite()) {
            return Err(ReinforceError::NonFiniteInput("weights".to_string()));
        }
        Ok(Self { w })
    }

    /// Draws `obs_dim + 1` weights from `N(0, init_std^2)`.
    pub fn random<R: Rng + ?Sized>(obs_dim: usize, init_std: f32, rng: &mut R) -> Self {
        let w = (0..=obs_dim)
            .map(|_| rng.sample::<f32, _>(StandardNormal) * init_std)
            .collect();
        Self { w }
    }

    /// Dimension of the observations the model accepts.
    pub fn obs_dim(&self) -> usize {
        self.w.len() - 1
    }

    /// Weights, the bias first.
    pub fn weights(&self) -> &[f32] {
        &self.w
    }

    /// `w . [1, x]`.
    pub fn score(&self, x: &[f32]) -> f32 {
        debug_assert_eq!(x.len(), self.obs_dim());
        self.w.iter().zip(augment(x)).map(|(w, x)| w * x).sum()
    }

    /// Probability of taking action `1`.
    ///
    /// Always in `[sigmoid(-SCORE_CLIP), sigmoid(SCORE_CLIP)]`. A NaN score,
    /// from opposite infinite products of huge inputs, counts as zero.
    pub fn probability(&self, x: &[f32]) -> f32 {
        let s = self.score(x);
        let s = if s.is_nan() { 0.0 } else { s };
        sigmoid(s.clamp(-SCORE_CLIP, SCORE_CLIP))
    }

    /// Gradient of `log pi(a | x)` w.r.t. the weights, `(a - p) * [1, x]`.
    pub fn grad_log_prob(&self, x: &[f32], a: u8) -> Vec<f32> {
        let c = a as f32 - self.probability(x);
        augment(x).map(|v| c * v).collect()
    }

    /// `w <- w + alpha * g`.
    ///
    /// Returns `false` and keeps the weights if any updated weight would
    /// not be finite.
    pub fn ascend(&mut self, g: &[f32], alpha: f32) -> bool {
        debug_assert_eq!(g.len(), self.w.len());
        let w: Vec<f32> = self.w.iter().zip(g).map(|(w, g)| w + alpha * g).collect();
        if !w.iter().all(|w| w.is_finite()) {
            return false;
        }
        self.w = w;
        true
    }
}
