use alife_core::{
    record::{BufferedRecorder, NullRecorder, Record},
    util::run_with_recorder,
    Agent, BoxSpace, Env, Step,
};
use alife_reinforce::{Baseline, Reinforce, ReinforceConfig};
use anyhow::Result;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// A bug sees on which side the food is (`+1` left, `-1` right) and is
/// rewarded for turning towards it.
struct TurnEnv {
    side: f32,
    t: usize,
    max_steps: usize,
    rng: StdRng,
}

impl TurnEnv {
    fn draw_side(&mut self) -> f32 {
        if self.rng.gen::<bool>() {
            1.0
        } else {
            -1.0
        }
    }
}

impl Env for TurnEnv {
    type Config = usize;
    type Obs = Vec<f32>;
    type Act = [f32; 2];

    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        Ok(Self {
            side: 1.0,
            t: 0,
            max_steps: *config,
            rng: StdRng::seed_from_u64(seed as _),
        })
    }

    fn observation_space(&self) -> BoxSpace {
        BoxSpace::new([1])
    }

    fn action_space(&self) -> BoxSpace {
        BoxSpace::new([2])
    }

    fn reset(&mut self) -> Result<Self::Obs> {
        self.t = 0;
        self.side = self.draw_side();
        Ok(vec![self.side])
    }

    fn step(&mut self, a: &Self::Act) -> (Step<Self>, Record) {
        let reward = if a[0] * self.side > 0.0 { 1.0 } else { 0.0 };
        self.t += 1;
        self.side = self.draw_side();
        let is_truncated = self.t == self.max_steps;
        let step = Step::new(vec![self.side], *a, reward, false, is_truncated);
        (step, Record::empty())
    }
}

fn build_agent(env: &TurnEnv, config: ReinforceConfig) -> Result<Reinforce> {
    Ok(Reinforce::build(
        &env.observation_space(),
        &env.action_space(),
        config,
    )?)
}

#[test]
fn test_learns_to_turn_towards_food() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut env = TurnEnv::build(&50, 0)?;
    let config = ReinforceConfig::default()
        .alpha(0.5)
        .episode_len(10)
        .baseline(Baseline::Mean)
        .seed(11);
    let mut agent = build_agent(&env, config)?;

    let rs = run_with_recorder(&mut env, &mut agent, 4000, &mut NullRecorder::default())?;
    assert_eq!(rs.len(), 80);
    assert_eq!(agent.n_updates(), 400);

    // Food on the left: turn left, i.e. action 0.
    assert!(agent.probability(&[1.0])? < 0.2);
    assert!(agent.probability(&[-1.0])? > 0.8);

    let last = rs[70..].iter().sum::<f32>() / 10.0;
    assert!(last > 40.0, "last={}", last);
    assert!(rs[0] < last, "first={}, last={}", rs[0], last);
    Ok(())
}

#[test]
fn test_spawned_population_acts_through_trait() -> Result<()> {
    let mut env = TurnEnv::build(&5, 1)?;
    let mut parent = build_agent(&env, ReinforceConfig::default().alpha(0.25).seed(2))?;
    let mut children: Vec<Reinforce> = (0..3).map(|_| parent.spawn_copy()).collect();

    for child in children.iter_mut() {
        let mut recorder = BufferedRecorder::new();
        let rs = run_with_recorder(&mut env, child, 20, &mut recorder)?;
        assert_eq!(rs.len(), 4);
        assert_eq!(recorder.len(), 20);
        assert_eq!(Agent::<TurnEnv>::describe(child), "RF. alpha=0.25");
        assert_eq!(child.n_updates(), 1);
    }
    Ok(())
}
