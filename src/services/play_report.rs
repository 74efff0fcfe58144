use anyhow::Result;
use reqwest::Client;
use tokio::time::{sleep, Duration};

use crate::config::PanEnv;
use crate::errors::{BotError, CODE_AUTH_EXPIRED, CODE_TASK_ALREADY_DONE};
use crate::interfaces::GameTask;
use crate::services::task_list::error_no;
use crate::utils::{get_json, Logger};

/// How a single task ended. Abandoned tasks do not fail the process; the
/// next scheduled run picks them up again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOutcome {
    Completed,
    Abandoned,
}

/// Poll the play-report endpoint until the server says no play time remains.
/// `isFirstReport` is 1 only on the first request; the server uses it to
/// open the play session. There is no iteration cap beyond the
/// server-reported remaining time.
pub async fn run_task(client: &Client, env: &PanEnv, task: &GameTask) -> Result<TaskOutcome> {
    Logger::info(&format!("🚀 Starting task: {}", task.name));

    let mut remaining = task.total_time_secs;
    let mut is_first = true;
    let url = format!("{}/gameapi", env.api_base);
    let activity_id = task.activity_id.clone().unwrap_or_default();

    while remaining > 0 {
        let first_flag = if is_first { "1" } else { "0" };
        let query = [
            ("action", "bonus_task_game_play_report"),
            ("gameId", task.game_id.as_str()),
            ("taskId", task.task_id.as_str()),
            ("activityId", activity_id.as_str()),
            ("isFirstReport", first_flag),
        ];

        let body = match get_json(client, &url, &query).await {
            Ok(body) => body,
            Err(e) => {
                Logger::error(&format!("Network error reporting [{}]: {}", task.name, e));
                return Ok(TaskOutcome::Abandoned);
            }
        };

        let code = error_no(&body);
        if code == 0 || code == CODE_TASK_ALREADY_DONE {
            let reported = body
                .get("result")
                .and_then(|r| r.get("data"))
                .and_then(|d| d.get("remainingTaskTime"))
                .and_then(|v| v.as_u64());

            if code == CODE_TASK_ALREADY_DONE || reported == Some(0) {
                Logger::success(&format!("🎉 Task [{}] completed", task.name));
                return Ok(TaskOutcome::Completed);
            }
            if let Some(secs) = reported {
                remaining = secs;
            }
            Logger::task_progress(&task.name, remaining);
        } else if code == CODE_AUTH_EXPIRED {
            return Err(BotError::AuthExpired.into());
        } else {
            Logger::warning(&format!(
                "Unexpected error code {} for [{}]: {}",
                code, task.name, body
            ));
            // A bad code on the very first report gets one more polling
            // round; after that the task is given up.
            if !is_first {
                return Ok(TaskOutcome::Abandoned);
            }
        }

        is_first = false;
        sleep(Duration::from_secs(env.poll_interval_secs)).await;
    }

    Ok(TaskOutcome::Completed)
}
