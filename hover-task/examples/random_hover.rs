use anyhow::Result;
use hover_core::Env as _;
use hover_task::{
    dummy::ScriptedSim,
    reward::{AbsDistanceTanh, BoundedShaping, DistancePenalty},
    EpisodicTask, EpisodicTaskConfig, InitialConditions, Pose, RewardConfig, RotorCommand,
    ACTION_HIGH, ACTION_LOW,
};
use log::info;

type Task = EpisodicTask<ScriptedSim>;

const N_EPISODES: usize = 3;

struct RandomPolicy {}

impl RandomPolicy {
    fn sample(&mut self) -> RotorCommand {
        let mut speeds = [0.0; 4];
        for v in speeds.iter_mut() {
            *v = ACTION_LOW + fastrand::f64() * (ACTION_HIGH - ACTION_LOW);
        }
        RotorCommand(speeds)
    }
}

fn run_episodes(task: &mut Task, policy: &mut RandomPolicy) -> Result<Vec<f64>> {
    let mut returns = Vec::new();

    for episode in 0..N_EPISODES {
        task.reset()?;
        let mut count_step = 0;
        let mut r_total = 0.0;

        loop {
            let (step, record) = task.step(&policy.sample())?;
            r_total += step.reward;
            count_step += 1;
            if step.is_done() {
                info!(
                    "Episode {}, {} steps, return = {:.3}, distance = {:.3}",
                    episode,
                    count_step,
                    r_total,
                    record.get_scalar("distance_to_target")?
                );
                break;
            }
        }
        returns.push(r_total);
    }

    Ok(returns)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    fastrand::seed(42);

    let rewards = [
        RewardConfig::DistancePenalty(DistancePenalty::default()),
        RewardConfig::BoundedShaping(BoundedShaping::default()),
        RewardConfig::AbsDistanceTanh(AbsDistanceTanh::default()),
    ];

    for reward in rewards {
        let config = EpisodicTaskConfig::default()
            .init(
                InitialConditions::default()
                    .init_pose(Pose::at(0.0, 0.0, 10.0))
                    .runtime(1.0),
            )
            .reward(reward);
        let mut task = Task::build(&config, 0)?;
        let mut policy = RandomPolicy {};

        let returns = run_episodes(&mut task, &mut policy)?;
        info!("{:?}: mean return = {:.3}", config.reward, returns.iter().sum::<f64>() / N_EPISODES as f64);
    }

    Ok(())
}
