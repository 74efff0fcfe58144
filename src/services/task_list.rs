use anyhow::Result;
use rand::seq::SliceRandom;
use reqwest::Client;
use serde_json::Value;
use std::collections::HashSet;

use crate::config::PanEnv;
use crate::errors::{BotError, CODE_AUTH_EXPIRED};
use crate::interfaces::{value_as_string, GameTask};
use crate::utils::{get_json, Logger};

/// Fetch the task list for every configured channel and reduce it to the
/// claimable tasks. An expired cookie on any channel is fatal; any other
/// per-channel failure just skips that channel.
pub async fn fetch_task_list(client: &Client, env: &PanEnv) -> Result<Vec<GameTask>> {
    let mut raw_entries = Vec::new();
    Logger::info("Fetching task lists...");

    for channel in &env.channels {
        let url = format!("{}/gameapi", env.api_base);
        let channel_str = channel.to_string();
        let query = [
            ("action", "bonus_pan_task_list"),
            ("channel", channel_str.as_str()),
        ];

        match get_json(client, &url, &query).await {
            Ok(body) => {
                let code = error_no(&body);
                if code == CODE_AUTH_EXPIRED {
                    return Err(BotError::AuthExpired.into());
                }
                if code == 0 {
                    raw_entries.extend(flatten_task_groups(&body));
                } else {
                    Logger::warning(&format!("Channel {}: error code {}, skipping", channel, code));
                }
            }
            Err(e) => {
                Logger::warning(&format!("Channel {} fetch failed: {}", channel, e));
            }
        }
    }

    Logger::info(&format!(
        "{} raw entries fetched, filtering...",
        raw_entries.len()
    ));
    let tasks = select_tasks(&raw_entries, &env.target_modules);
    Logger::success(&format!("{} claimable task(s) found", tasks.len()));
    Ok(tasks)
}

pub fn error_no(body: &Value) -> i64 {
    body.get("errorNo").and_then(|v| v.as_i64()).unwrap_or(-1)
}

/// `result.data` is either a list of groups (`{module, data: [task...]}`,
/// current shape) or a flat task list (legacy shape).
pub fn flatten_task_groups(body: &Value) -> Vec<Value> {
    let mut tasks = Vec::new();
    let groups = body
        .get("result")
        .and_then(|r| r.get("data"))
        .and_then(|d| d.as_array());

    if let Some(groups) = groups {
        for group in groups {
            match group.get("data").and_then(|d| d.as_array()) {
                Some(nested) => tasks.extend(nested.iter().cloned()),
                None => tasks.push(group.clone()),
            }
        }
    }
    tasks
}

/// Filter by module allow-list, de-duplicate by task id, and resolve one
/// randomly chosen sub-game per task. Entries without a `gameId` in the game
/// URL still claim their id, so later duplicates of an unusable task stay
/// excluded.
pub fn select_tasks(entries: &[Value], target_modules: &[String]) -> Vec<GameTask> {
    let mut seen_ids = HashSet::new();
    let mut tasks = Vec::new();
    let mut rng = rand::thread_rng();

    for entry in entries {
        let module = entry
            .get("taskModule")
            .and_then(|v| v.as_str())
            .unwrap_or("");
        if !target_modules.iter().any(|m| m == module) {
            continue;
        }

        let Some(task_id) = entry.get("taskId").and_then(value_as_string) else {
            continue;
        };
        if !seen_ids.insert(task_id) {
            continue;
        }

        let Some(games) = entry.get("taskGames").and_then(|v| v.as_array()) else {
            continue;
        };
        let Some(game) = games.choose(&mut rng) else {
            continue;
        };
        if let Some(task) = GameTask::from_json_value(entry, game) {
            tasks.push(task);
        }
    }
    tasks
}
