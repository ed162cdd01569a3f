//! Utilities for interaction of agents and environments.
use crate::{
    record::{RecordValue, Recorder},
    base::{Act, Obs},
    Agent, Env, Space,
};
use anyhow::{bail, Result};
use log::info;

fn check_len(what: &str, len: usize, dim: Option<usize>) -> Result<()> {
    match dim {
        Some(dim) if dim != len => bail!("{} has {} elements, the space has {}", what, len, dim),
        _ => Ok(()),
    }
}

/// Steps `env` for `n_steps` with a learning `agent` and writes one record
/// per step to `recorder`.
///
/// At every step the agent receives the current observation together with
/// the reward of the previous step, so the first call gets a reward of zero.
/// The environment is reset when an episode ends. Returns the sum of rewards
/// of every completed environment episode.
///
/// Fails if an observation or an action does not match the first dimension
/// of the observation or action space of `env`.
pub fn run_with_recorder<E, A, R>(
    env: &mut E,
    agent: &mut A,
    n_steps: usize,
    recorder: &mut R,
) -> Result<Vec<f32>>
where
    E: Env,
    A: Agent<E>,
    R: Recorder,
{
    let obs_dim = env.observation_space().dim();
    let act_dim = env.action_space().dim();
    let mut rs = Vec::new();
    let mut obs = env.reset()?;
    let mut reward = 0.0;
    let mut is_done = false;
    let mut r_total = 0.0;
    let mut episode = 0;

    for count_step in 0..n_steps {
        check_len("Observation", obs.len(), obs_dim)?;
        let act = agent.act(&obs, reward, is_done)?;
        check_len("Action", act.len(), act_dim)?;
        let (step, mut record) = env.step(&act);
        r_total += step.reward;

        record.insert("reward", RecordValue::Scalar(step.reward));
        record.insert("episode", RecordValue::Scalar(episode as _));
        record.insert("step", RecordValue::Scalar(count_step as _));
        recorder.write(record);

        reward = step.reward;
        is_done = step.is_done();
        if is_done {
            info!("Episode {}, {} steps, reward = {}", episode, count_step + 1, r_total);
            rs.push(r_total);
            r_total = 0.0;
            episode += 1;
            obs = env.reset()?;
        } else {
            obs = step.obs;
        }
    }

    Ok(rs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        record::{BufferedRecorder, Record},
        BoxSpace, Policy, Step,
    };

    /// Counts steps and terminates every `len` steps, rewarding action `[1.0]`.
    struct CountingEnv {
        len: usize,
        t: usize,
        act_dim: usize,
    }

    impl Env for CountingEnv {
        type Config = usize;
        type Obs = Vec<f32>;
        type Act = Vec<f32>;

        fn build(config: &Self::Config, _seed: i64) -> Result<Self> {
            Ok(Self {
                len: *config,
                t: 0,
                act_dim: 1,
            })
        }

        fn observation_space(&self) -> BoxSpace {
            BoxSpace::new([1])
        }

        fn action_space(&self) -> BoxSpace {
            BoxSpace::new([self.act_dim])
        }

        fn reset(&mut self) -> Result<Self::Obs> {
            self.t = 0;
            Ok(vec![0.0])
        }

        fn step(&mut self, a: &Self::Act) -> (Step<Self>, Record) {
            self.t += 1;
            let step = Step::new(
                vec![self.t as f32],
                a.clone(),
                a[0],
                self.t == self.len,
                false,
            );
            (step, Record::empty())
        }
    }

    /// Always returns `[1.0]` and remembers the rewards it was given.
    #[derive(Default)]
    struct EchoAgent {
        rewards: Vec<f32>,
        dones: usize,
    }

    impl Policy<CountingEnv> for EchoAgent {
        fn sample(&mut self, _obs: &Vec<f32>) -> Result<Vec<f32>> {
            Ok(vec![1.0])
        }
    }

    impl Agent<CountingEnv> for EchoAgent {
        fn act(&mut self, obs: &Vec<f32>, reward: f32, is_done: bool) -> Result<Vec<f32>> {
            self.rewards.push(reward);
            if is_done {
                self.dones += 1;
            }
            self.sample(obs)
        }

        fn describe(&self) -> String {
            "echo".to_string()
        }

        fn spawn_copy(&mut self) -> Self {
            Self::default()
        }
    }

    #[test]
    fn test_run_with_recorder() -> Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut env = CountingEnv::build(&3, 0)?;
        let mut agent = EchoAgent::default();
        let mut recorder = BufferedRecorder::new();

        let rs = run_with_recorder(&mut env, &mut agent, 7, &mut recorder)?;

        assert_eq!(rs, vec![3.0, 3.0]);
        assert_eq!(recorder.len(), 7);
        assert_eq!(agent.rewards, vec![0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
        assert_eq!(agent.dones, 2);

        let last = recorder.iter().last().unwrap();
        assert_eq!(last.get_scalar("episode")?, 2.0);
        assert_eq!(last.get_scalar("step")?, 6.0);
        Ok(())
    }

    #[test]
    fn test_run_with_recorder_rejects_action_of_wrong_len() -> Result<()> {
        let mut env = CountingEnv::build(&3, 0)?;
        env.act_dim = 2;
        let mut agent = EchoAgent::default();
        let mut recorder = BufferedRecorder::new();

        let r = run_with_recorder(&mut env, &mut agent, 5, &mut recorder);
        assert!(r.is_err());
        assert_eq!(agent.rewards.len(), 1);
        assert!(recorder.is_empty());
        Ok(())
    }
}
