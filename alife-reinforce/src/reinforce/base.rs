//! REINFORCE agent with a linear-sigmoid policy.
use super::{Baseline, ReinforceConfig};
use crate::{
    buffer::EpisodeBuffer,
    mapper::ActionTable,
    model::{augment, sample_action, LinearSigmoid},
    ReinforceError,
};
use alife_core::{
    record::{Record, RecordValue},
    Agent, BoxSpace, Env, Policy, Space,
};
use anyhow::Result;
use log::{debug, info, trace, warn};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::fmt;

/// REINFORCE agent.
///
/// Every call to [`act`](Reinforce::act) writes one row of the episode
/// buffer. When the step counter wraps, the weights ascend the Monte-Carlo
/// policy gradient
/// `g = 1/T * sum_t (a_t - p_t) * [1, x_t] * (R_t - b)`,
/// where `R_t` is the return-to-go of row `t` and `b` the baseline.
///
/// The agent is driven by a single caller; `act` takes `&mut self`.
pub struct Reinforce {
    obs_space: BoxSpace,
    act_space: BoxSpace,
    obs_dim: usize,
    model: LinearSigmoid,
    table: ActionTable,
    buffer: EpisodeBuffer,
    t: usize,
    alpha: f32,
    n_updates: usize,
    last_record: Option<Record>,
    config: ReinforceConfig,
    rng: StdRng,
}

impl Reinforce {
    /// Constructs the agent.
    ///
    /// The first dimension of `obs_space` is the observation dimension.
    /// `act_space` is kept for spawned copies only, the agent always has
    /// the two actions of [`ActionTable`].
    pub fn build(
        obs_space: &impl Space,
        act_space: &impl Space,
        config: ReinforceConfig,
    ) -> Result<Self, ReinforceError> {
        config.validate()?;
        let obs_space = BoxSpace::new(obs_space.shape());
        let act_space = BoxSpace::new(act_space.shape());
        if obs_space.dim().is_none() {
            return Err(ReinforceError::EmptyObservationSpace);
        }
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let agent = Self::with_rng(obs_space, act_space, config, rng);
        info!(
            "Build REINFORCE agent, obs_dim = {}, episode_len = {}, alpha = {}",
            agent.obs_dim,
            agent.buffer.capacity(),
            agent.alpha
        );
        Ok(agent)
    }

    fn with_rng(
        obs_space: BoxSpace,
        act_space: BoxSpace,
        config: ReinforceConfig,
        mut rng: StdRng,
    ) -> Self {
        let obs_dim = obs_space.dim().unwrap_or_default();
        let model = LinearSigmoid::random(obs_dim, config.init_std, &mut rng);

        Self {
            obs_space,
            act_space,
            obs_dim,
            model,
            table: ActionTable::new(config.speed),
            buffer: EpisodeBuffer::new(config.episode_len, obs_dim),
            t: 0,
            alpha: config.alpha,
            n_updates: 0,
            last_record: None,
            config,
            rng,
        }
    }

    fn check_obs(&self, obs: &[f32]) -> Result<(), ReinforceError> {
        if obs.len() != self.obs_dim {
            return Err(ReinforceError::ShapeMismatch {
                expected: self.obs_dim,
                actual: obs.len(),
            });
        }
        if let Some(i) = obs.iter().position(|x| !x.is_finite()) {
            return Err(ReinforceError::NonFiniteInput(format!(
                "observation[{}] = {}",
                i, obs[i]
            )));
        }
        Ok(())
    }

    /// Records `(obs, reward)`, samples an action and returns its
    /// `(direction, speed)` pair.
    ///
    /// `reward` is the reward obtained on arriving at `obs`. The gradient
    /// update runs on the call that completes an episode. `is_done` is
    /// accepted for interface compatibility; episodes have a fixed length.
    ///
    /// On [`ReinforceError::ShapeMismatch`] and
    /// [`ReinforceError::NonFiniteInput`] nothing is recorded.
    pub fn act(
        &mut self,
        obs: &[f32],
        reward: f32,
        _is_done: bool,
    ) -> Result<[f32; 2], ReinforceError> {
        self.check_obs(obs)?;
        if !reward.is_finite() {
            return Err(ReinforceError::NonFiniteInput(format!("reward = {}", reward)));
        }
        self.buffer.write(obs, reward, self.t);

        let p1 = self.model.probability(obs);
        let a = sample_action(p1, &mut self.rng);
        self.buffer.write_action(a, self.t);
        trace!("t = {}, p1 = {}, a = {}", self.t, p1, a);

        let is_boundary = self.buffer.is_full(self.t);
        self.t = (self.t + 1) % self.buffer.capacity();
        if is_boundary {
            let record = self.update();
            self.last_record = Some(record);
        }

        self.table.map(a as usize)
    }

    /// Samples an action without recording anything.
    pub fn sample(&mut self, obs: &[f32]) -> Result<[f32; 2], ReinforceError> {
        self.check_obs(obs)?;
        let a = sample_action(self.model.probability(obs), &mut self.rng);
        self.table.map(a as usize)
    }

    /// Probability of action `1` under the current weights.
    pub fn probability(&self, obs: &[f32]) -> Result<f32, ReinforceError> {
        self.check_obs(obs)?;
        Ok(self.model.probability(obs))
    }

    /// Ascends the policy gradient of the episode in the buffer.
    ///
    /// The weights are kept if the ascent would make any of them non-finite.
    fn update(&mut self) -> Record {
        let returns = self.buffer.returns_to_go(self.config.discount);
        let b = match self.config.baseline {
            Baseline::Constant(b) => b,
            Baseline::Mean => returns.iter().sum::<f32>() / returns.len() as f32,
        };
        let advantages: Vec<f32> = returns.iter().map(|r| r - b).collect();
        let (g, mean_prob) = policy_gradient(&self.model, &self.buffer, &advantages);
        if !self.model.ascend(&g, self.alpha) {
            warn!(
                "Update {} skipped, non-finite weights after ascent, gradient = {:?}",
                self.n_updates + 1,
                g
            );
        }
        self.n_updates += 1;

        let grad_norm = g.iter().map(|v| v * v).sum::<f32>().sqrt();
        let episode_return = self.buffer.episode_return();
        debug!(
            "Update {}: episode return = {}, grad norm = {}, mean prob = {}",
            self.n_updates, episode_return, grad_norm, mean_prob
        );

        Record::from_slice(&[
            ("episode_return", RecordValue::Scalar(episode_return)),
            ("grad_norm", RecordValue::Scalar(grad_norm)),
            ("mean_prob", RecordValue::Scalar(mean_prob)),
            ("n_updates", RecordValue::Scalar(self.n_updates as _)),
            ("weights", RecordValue::Array1(self.model.weights().to_vec())),
        ])
    }

    /// Creates a child agent with fresh random weights and the same `alpha`.
    ///
    /// The weights of the parent are not inherited, so a population of
    /// spawned agents starts from diverse policies. The random number
    /// generator of the child is seeded from the one of the parent.
    pub fn spawn_copy(&mut self) -> Self {
        let rng = StdRng::seed_from_u64(self.rng.gen());
        let mut child = Self::with_rng(
            self.obs_space.clone(),
            self.act_space.clone(),
            self.config.clone(),
            rng,
        );
        child.alpha = self.alpha;
        child
    }

    /// Label of the agent with its step size, e.g. `RF. alpha=0.10`.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Weights of the policy, the bias first.
    pub fn weights(&self) -> &[f32] {
        self.model.weights()
    }

    /// Replaces the weights of the policy, the bias first.
    pub fn set_weights(&mut self, w: Vec<f32>) -> Result<(), ReinforceError> {
        if w.len() != self.obs_dim + 1 {
            return Err(ReinforceError::ShapeMismatch {
                expected: self.obs_dim + 1,
                actual: w.len(),
            });
        }
        self.model = LinearSigmoid::from_weights(w)?;
        Ok(())
    }

    /// Step size of the gradient ascent.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Sets the step size of the gradient ascent.
    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
    }

    /// Row of the episode buffer written by the next call to `act`.
    pub fn step_counter(&self) -> usize {
        self.t
    }

    /// Number of gradient updates so far.
    pub fn n_updates(&self) -> usize {
        self.n_updates
    }

    /// Number of decisions per episode.
    pub fn episode_len(&self) -> usize {
        self.buffer.capacity()
    }

    /// Dimension of the observations.
    pub fn obs_dim(&self) -> usize {
        self.obs_dim
    }

    /// Episode buffer. Rows from the step counter on are stale.
    pub fn buffer(&self) -> &EpisodeBuffer {
        &self.buffer
    }

    /// Record of the latest gradient update.
    pub fn last_record(&self) -> Option<&Record> {
        self.last_record.as_ref()
    }
}

/// Returns `1/T * sum_t (a_t - p_t) * [1, x_t] * advantages[t]` and the mean of `p_t`.
///
/// All `p_t` are computed with the current weights before anything changes.
fn policy_gradient(
    model: &LinearSigmoid,
    buffer: &EpisodeBuffer,
    advantages: &[f32],
) -> (Vec<f32>, f32) {
    let n = buffer.capacity();
    let probs: Vec<f32> = (0..n).map(|t| model.probability(buffer.obs(t))).collect();
    let mut g = vec![0f32; buffer.obs_dim() + 1];

    for t in 0..n {
        let c = (buffer.act(t) as f32 - probs[t]) * advantages[t] / n as f32;
        for (g, x) in g.iter_mut().zip(augment(buffer.obs(t))) {
            *g += c * x;
        }
    }

    (g, probs.iter().sum::<f32>() / n as f32)
}

impl fmt::Display for Reinforce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. alpha={:3.2}", self.config.label, self.alpha)
    }
}

impl<E> Policy<E> for Reinforce
where
    E: Env,
    E::Obs: AsRef<[f32]>,
    E::Act: From<[f32; 2]>,
{
    fn sample(&mut self, obs: &E::Obs) -> Result<E::Act> {
        Ok(Reinforce::sample(self, obs.as_ref())?.into())
    }
}

impl<E> Agent<E> for Reinforce
where
    E: Env,
    E::Obs: AsRef<[f32]>,
    E::Act: From<[f32; 2]>,
{
    fn act(&mut self, obs: &E::Obs, reward: f32, is_done: bool) -> Result<E::Act> {
        Ok(Reinforce::act(self, obs.as_ref(), reward, is_done)?.into())
    }

    fn describe(&self) -> String {
        Reinforce::describe(self)
    }

    fn spawn_copy(&mut self) -> Self {
        Reinforce::spawn_copy(self)
    }
}
