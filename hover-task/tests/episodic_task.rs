use anyhow::Result;
use hover_core::{Env as _, Obs as _};
use hover_task::{
    dummy::{ScriptedSim, ScriptedState},
    error::TaskError,
    reward::DistancePenalty,
    ActionCheck, EpisodicTask, EpisodicTaskConfig, InitialConditions, Pose, RewardConfig,
    RewardFn, RotorCommand, Simulator, TargetState, Velocity,
};

type Task = EpisodicTask<ScriptedSim>;

const HOVER: f64 = 450.0;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn scripted_task(config: &EpisodicTaskConfig, script: Vec<ScriptedState>) -> Result<Task> {
    let sim = ScriptedSim::build(&config.init, 0)?.with_script(script);
    Task::new(config, sim)
}

fn climb(z: f64) -> ScriptedState {
    ScriptedState::new(Pose::at(0.0, 0.0, z), Velocity::new(0.0, 0.0, 1.0))
}

#[test]
fn test_hover_scenario() -> Result<()> {
    init_logger();
    let config = EpisodicTaskConfig::default()
        .init(InitialConditions::default().init_pose(Pose::default()));
    let mut task = Task::build(&config, 0)?;

    assert_eq!(task.state_size(), 18);
    assert_eq!(task.action_size(), 4);
    assert_eq!(task.action_low(), 0.0);
    assert_eq!(task.action_high(), 900.0);

    let obs = task.reset()?;
    assert_eq!(obs.as_slice(), &[0.0; 18][..]);

    let (step, _) = task.step(&RotorCommand::uniform(HOVER))?;
    assert_eq!(step.obs.len(), 18);
    assert!(step.reward.is_finite());
    assert_eq!(task.simulator().n_advance(), 3);
    Ok(())
}

#[test]
fn test_reset_repeats_initial_pose() -> Result<()> {
    let pose = Pose::from([1.0, -2.0, 3.0, 0.1, 0.2, 0.3]);
    for action_repeat in [1, 3, 5] {
        let config = EpisodicTaskConfig::default()
            .init(InitialConditions::default().init_pose(pose))
            .action_repeat(action_repeat);
        let mut task = Task::build(&config, 0)?;

        let obs = task.reset()?;
        assert_eq!(obs.len(), action_repeat * 6);
        assert_eq!(obs.n_poses(), action_repeat);
        for ix in 0..action_repeat {
            assert_eq!(obs.pose(ix), Some(pose));
        }
    }
    Ok(())
}

#[test]
fn test_reset_is_idempotent() -> Result<()> {
    let config = EpisodicTaskConfig::default()
        .init(InitialConditions::default().init_pose(Pose::at(0.0, 0.0, 10.0)));
    let mut task = scripted_task(&config, vec![climb(11.0), climb(12.0), climb(13.0)])?;

    let first = task.reset()?;
    let second = task.reset()?;
    assert_eq!(first, second);

    task.step(&RotorCommand::uniform(HOVER))?;
    let third = task.reset()?;
    assert_eq!(first, third);
    assert_eq!(task.simulator().n_reset(), 3);
    Ok(())
}

#[test]
fn test_observation_is_chronological() -> Result<()> {
    let config = EpisodicTaskConfig::default();
    let script = (1..=6).map(|i| climb(i as f64)).collect();
    let mut task = scripted_task(&config, script)?;
    task.reset()?;

    let (step, _) = task.step(&RotorCommand::uniform(HOVER))?;
    let altitudes: Vec<f64> = (0..3).map(|ix| step.obs.pose(ix).unwrap().z).collect();
    assert_eq!(altitudes, vec![1.0, 2.0, 3.0]);

    let (step, _) = task.step(&RotorCommand::uniform(HOVER))?;
    let altitudes: Vec<f64> = (0..3).map(|ix| step.obs.pose(ix).unwrap().z).collect();
    assert_eq!(altitudes, vec![4.0, 5.0, 6.0]);
    Ok(())
}

#[test]
fn test_same_command_for_every_sub_step() -> Result<()> {
    let config = EpisodicTaskConfig::default().action_repeat(4);
    let mut task = Task::build(&config, 0)?;
    task.reset()?;

    let a = RotorCommand([100.0, 200.0, 300.0, 400.0]);
    let (step, _) = task.step(&a)?;
    assert_eq!(step.act, a);
    assert_eq!(task.simulator().commands(), &[a.0; 4][..]);
    Ok(())
}

#[test]
fn test_only_last_sub_step_terminates() -> Result<()> {
    let config = EpisodicTaskConfig::default();

    // Terminal report in the middle is discarded and does not shorten the loop.
    let mut task = scripted_task(
        &config,
        vec![climb(1.0), climb(2.0).terminal(), climb(3.0), climb(4.0)],
    )?;
    task.reset()?;
    let (step, record) = task.step(&RotorCommand::uniform(HOVER))?;
    assert!(!step.is_done());
    assert_eq!(step.obs.len(), 18);
    assert_eq!(step.info.sub_step_rewards.len(), 3);
    assert_eq!(task.simulator().n_advance(), 3);
    assert_eq!(record.get_scalar("terminal_sub_steps")?, 1.0);

    // Terminal report on the last sub-step ends the episode.
    let mut task = scripted_task(&config, vec![climb(1.0), climb(2.0), climb(3.0).terminal()])?;
    task.reset()?;
    let (step, _) = task.step(&RotorCommand::uniform(HOVER))?;
    assert!(step.is_done());
    assert_eq!(task.simulator().n_advance(), 3);
    Ok(())
}

#[test]
fn test_reward_is_sum_of_sub_steps() -> Result<()> {
    let config = EpisodicTaskConfig::default().reward(RewardConfig::DistancePenalty(
        DistancePenalty::default(),
    ));
    let script = vec![
        // at target, not climbing: 150 - 0 - 25
        ScriptedState::new(Pose::at(0.0, 0.0, 10.0), Velocity::default()),
        // distance 5, climbing: 150 - 5 + 25
        ScriptedState::new(Pose::at(3.0, 4.0, 10.0), Velocity::new(0.0, 0.0, 2.0)),
        // distance 10, descending: 150 - 10 - 25
        ScriptedState::new(Pose::at(0.0, 0.0, 0.0), Velocity::new(0.0, 0.0, -2.0)),
    ];
    let mut task = scripted_task(&config, script)?;
    task.reset()?;

    let (step, record) = task.step(&RotorCommand::uniform(HOVER))?;
    assert_eq!(step.info.sub_step_rewards, vec![125.0, 170.0, 115.0]);
    assert_eq!(step.reward, 410.0);
    assert_eq!(record.get_scalar("reward")?, 410.0);
    assert_eq!(record.get_scalar("altitude")?, 0.0);
    assert_eq!(record.get_scalar("distance_to_target")?, 10.0);
    assert_eq!(record.get_array1("obs")?, Vec::from(step.obs));
    Ok(())
}

#[test]
fn test_custom_reward_strategy() -> Result<()> {
    let config = EpisodicTaskConfig::default();
    let reward: Box<dyn RewardFn> =
        Box::new(|pose: &Pose, _: &Velocity, _: &TargetState| pose.z);
    let mut task = scripted_task(&config, vec![climb(1.0), climb(2.0), climb(3.0)])?
        .with_reward(reward);
    task.reset()?;

    let (step, _) = task.step(&RotorCommand::uniform(HOVER))?;
    assert_eq!(step.reward, 6.0);
    Ok(())
}

#[test]
fn test_invalid_configuration() {
    let config = EpisodicTaskConfig::default().action_repeat(0);
    let err = Task::build(&config, 0).err().unwrap();
    assert!(matches!(
        err.downcast_ref::<TaskError>(),
        Some(TaskError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        TargetState::new(0.0, 0.0, 0.0),
        Err(TaskError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_out_of_range_action_rejected() -> Result<()> {
    let config = EpisodicTaskConfig::default();
    let mut task = Task::build(&config, 0)?;
    task.reset()?;

    let err = task
        .step(&RotorCommand([HOVER, HOVER, 1000.0, HOVER]))
        .err()
        .unwrap();
    assert!(matches!(
        err.downcast_ref::<TaskError>(),
        Some(TaskError::InvalidAction(_))
    ));
    assert_eq!(task.simulator().n_advance(), 0);
    Ok(())
}

#[test]
fn test_out_of_range_action_passed_through() -> Result<()> {
    let config = EpisodicTaskConfig::default().action_check(ActionCheck::PassThrough);
    let mut task = Task::build(&config, 0)?;
    task.reset()?;

    let a = RotorCommand([-10.0, HOVER, 1000.0, HOVER]);
    task.step(&a)?;
    assert_eq!(task.simulator().commands(), &[a.0; 3][..]);
    Ok(())
}

#[test]
fn test_simulator_error_propagates() -> Result<()> {
    let config = EpisodicTaskConfig::default();
    let sim = ScriptedSim::build(&config.init, 0)?.fail_on_advance(2);
    let mut task = Task::new(&config, sim)?;
    task.reset()?;

    let err = task.step(&RotorCommand::uniform(HOVER)).err().unwrap();
    assert!(err.to_string().contains("scripted failure"));
    assert_eq!(task.simulator().n_advance(), 2);
    Ok(())
}

#[test]
fn test_step_after_termination_keeps_going() -> Result<()> {
    let config = EpisodicTaskConfig::default()
        .init(InitialConditions::default().runtime(0.05));
    let mut task = Task::build(&config, 0)?;
    task.reset()?;

    let (step, _) = task.step(&RotorCommand::uniform(HOVER))?;
    assert!(step.is_done());

    let (step, _) = task.step(&RotorCommand::uniform(HOVER))?;
    assert!(step.is_done());
    assert_eq!(task.simulator().n_advance(), 6);
    assert_eq!(task.simulator().n_reset(), 1);
    Ok(())
}

#[test]
fn test_step_with_reset() -> Result<()> {
    let config = EpisodicTaskConfig::default()
        .init(InitialConditions::default().init_pose(Pose::at(0.0, 0.0, 10.0)));
    let mut task = scripted_task(
        &config,
        vec![climb(11.0), climb(12.0), climb(13.0), climb(14.0), climb(15.0), climb(16.0).terminal()],
    )?;
    task.reset()?;

    let (step, _) = task.step_with_reset(&RotorCommand::uniform(HOVER))?;
    assert!(!step.is_done());
    assert!(step.init_obs.is_none());

    let (step, _) = task.step_with_reset(&RotorCommand::uniform(HOVER))?;
    assert!(step.is_done());
    assert_eq!(step.obs.last(), Some(Pose::at(0.0, 0.0, 16.0)));
    let init_obs = step.init_obs.unwrap();
    assert_eq!(init_obs.pose(0), Some(Pose::at(0.0, 0.0, 10.0)));
    assert_eq!(task.simulator().n_reset(), 2);
    Ok(())
}

#[test]
fn test_random_rollouts_keep_shapes() -> Result<()> {
    init_logger();
    fastrand::seed(42);
    let config = EpisodicTaskConfig::default()
        .init(InitialConditions::default().runtime(1.0))
        .action_repeat(2);
    let mut task = Task::build(&config, 0)?;

    for _ in 0..3 {
        let obs = task.reset()?;
        assert_eq!(obs.len(), task.state_size());
        loop {
            let a = RotorCommand([
                fastrand::f64() * 900.0,
                fastrand::f64() * 900.0,
                fastrand::f64() * 900.0,
                fastrand::f64() * 900.0,
            ]);
            let (step, _) = task.step(&a)?;
            assert_eq!(step.obs.len(), task.state_size());
            assert!(step.reward.is_finite());
            if step.is_done() {
                break;
            }
        }
    }
    Ok(())
}
