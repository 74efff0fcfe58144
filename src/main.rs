use anyhow::Result;
use pan_reward_bot::config::load_pan_env;
use pan_reward_bot::services::{fetch_task_list, run_task, TaskOutcome};
use pan_reward_bot::utils::{build_client, Logger};
use tokio::time::{sleep, Duration};

const PAN_REFERER: &str = "https://pan.baidu.com/";

#[tokio::main]
async fn main() -> Result<()> {
    // Any error reaching here exits with code 1, which is what the
    // scheduler watches for.
    let env = load_pan_env()?;
    Logger::header("PAN REWARD BOT - TASK CLAIM");

    let client = build_client(env.request_timeout_ms, PAN_REFERER, Some(&env.cookie))?;

    let tasks = fetch_task_list(&client, &env).await?;
    if tasks.is_empty() {
        Logger::info("No claimable tasks right now.");
        return Ok(());
    }

    let mut completed = 0usize;
    let mut abandoned = 0usize;
    for task in &tasks {
        match run_task(&client, &env, task).await? {
            TaskOutcome::Completed => completed += 1,
            TaskOutcome::Abandoned => abandoned += 1,
        }
        sleep(Duration::from_secs(env.task_gap_secs)).await;
    }

    Logger::separator();
    if abandoned > 0 {
        Logger::warning(&format!("{} task(s) abandoned after errors", abandoned));
    }
    Logger::success(&format!(
        "All done: {} of {} task(s) completed",
        completed,
        tasks.len()
    ));
    Ok(())
}
