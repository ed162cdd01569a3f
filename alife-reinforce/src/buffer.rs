//! Fixed-length episode buffer.

/// Observations, actions and rewards of one episode.
///
/// Rows are addressed by the step counter of the agent and overwritten in
/// place every episode. A row is written in two phases: [`write`] stores the
/// observation and the reward received on entering it, [`write_action`]
/// stores the action sampled for it. Rows after the current step counter
/// still hold the previous episode.
///
/// [`write`]: EpisodeBuffer::write
/// [`write_action`]: EpisodeBuffer::write_action
#[derive(Clone, Debug)]
pub struct EpisodeBuffer {
    capacity: usize,
    obs_dim: usize,
    obs: Vec<f32>,
    act: Vec<u8>,
    reward: Vec<f32>,
}

impl EpisodeBuffer {
    /// Allocates a buffer of `capacity` rows of observations of `obs_dim` elements.
    pub fn new(capacity: usize, obs_dim: usize) -> Self {
        Self {
            capacity,
            obs_dim,
            obs: vec![0.; capacity * obs_dim],
            act: vec![0; capacity],
            reward: vec![0.; capacity],
        }
    }

    /// Number of rows, the episode length.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Dimension of the stored observations.
    pub fn obs_dim(&self) -> usize {
        self.obs_dim
    }

    /// Stores an observation and its reward in row `i`.
    pub fn write(&mut self, obs: &[f32], reward: f32, i: usize) {
        debug_assert_eq!(obs.len(), self.obs_dim);
        let j = i * self.obs_dim;
        self.obs[j..j + self.obs_dim].copy_from_slice(obs);
        self.reward[i] = reward;
    }

    /// Stores the action sampled for row `i`.
    pub fn write_action(&mut self, act: u8, i: usize) {
        self.act[i] = act;
    }

    /// `true` if the step following `counter` wraps to the first row.
    #[inline]
    pub fn is_full(&self, counter: usize) -> bool {
        counter + 1 == self.capacity
    }

    /// Observation of row `i`.
    pub fn obs(&self, i: usize) -> &[f32] {
        let j = i * self.obs_dim;
        &self.obs[j..j + self.obs_dim]
    }

    /// Action of row `i`.
    pub fn act(&self, i: usize) -> u8 {
        self.act[i]
    }

    /// Reward of row `i`.
    pub fn reward(&self, i: usize) -> f32 {
        self.reward[i]
    }

    /// Discounted return-to-go of every row, `R_t = sum_{k >= t} discount^(k - t) * r_k`.
    pub fn returns_to_go(&self, discount: f32) -> Vec<f32> {
        let mut rs = vec![0.; self.capacity];
        let mut acc = 0.;
        for t in (0..self.capacity).rev() {
            acc = self.reward[t] + discount * acc;
            rs[t] = acc;
        }
        rs
    }

    /// Undiscounted sum of the rewards of all rows.
    pub fn episode_return(&self) -> f32 {
        self.reward.iter().sum()
    }
}
