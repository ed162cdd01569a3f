use alife_core::BoxSpace;
use alife_reinforce::{Reinforce, ReinforceConfig};
use anyhow::Result;
use std::f32::consts::FRAC_PI_4;

#[test]
fn test_one_episode_with_uniform_policy() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    let config = ReinforceConfig::default().episode_len(4).seed(123);
    let mut agent = Reinforce::build(&BoxSpace::new([1]), &BoxSpace::new([2]), config)?;
    agent.set_weights(vec![0.0, 0.0])?;

    let xs = [0.0f32, 1.0, -1.0, 0.5];
    for (i, x) in xs.iter().enumerate() {
        assert_eq!(agent.probability(&[*x])?, 0.5);
        let a = agent.act(&[*x], 1.0, false)?;
        assert!(a == [FRAC_PI_4, 3.0] || a == [-FRAC_PI_4, 3.0]);
        let expected_updates = if i == 3 { 1 } else { 0 };
        assert_eq!(agent.n_updates(), expected_updates);
    }
    assert_eq!(agent.step_counter(), 0);

    let buffer = agent.buffer();
    let returns = buffer.returns_to_go(1.0);
    assert_eq!(returns, vec![4.0, 3.0, 2.0, 1.0]);

    // w = alpha / T * sum_t (a_t - 0.5) * [1, x_t] * R_t, starting from zero
    let mut expected = [0.0f32; 2];
    for t in 0..4 {
        assert_eq!(buffer.obs(t), &[xs[t]]);
        let c = (buffer.act(t) as f32 - 0.5) * returns[t] / 4.0;
        expected[0] += 0.1 * c;
        expected[1] += 0.1 * c * xs[t];
    }
    for (w, e) in agent.weights().iter().zip(expected.iter()) {
        assert!((w - e).abs() < 1e-6, "w={}, expected={}", w, e);
    }

    let record = agent.last_record().unwrap();
    assert_eq!(record.get_scalar("episode_return")?, 4.0);
    assert_eq!(record.get_scalar("mean_prob")?, 0.5);
    assert_eq!(record.get_scalar("n_updates")?, 1.0);
    assert_eq!(record.get_array1("weights")?, agent.weights().to_vec());
    Ok(())
}

#[test]
fn test_discounted_returns() -> Result<()> {
    let config = ReinforceConfig::default()
        .episode_len(3)
        .discount(0.5)
        .seed(1);
    let mut agent = Reinforce::build(&BoxSpace::new([2]), &BoxSpace::new([2]), config)?;
    for r in [4.0, 2.0, 8.0].iter() {
        agent.act(&[0.0, 1.0], *r, false)?;
    }
    assert_eq!(agent.buffer().returns_to_go(0.5), vec![7.0, 6.0, 8.0]);
    assert_eq!(agent.last_record().unwrap().get_scalar("episode_return")?, 14.0);
    Ok(())
}
