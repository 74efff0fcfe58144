//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use pan_reward_bot::config::{CheckinCredential, CheckinEnv, PanEnv};
use pan_reward_bot::interfaces::GameTask;
use serde_json::json;

/// A raw task entry as the task-list endpoint returns it.
pub fn task_entry(task_id: i64, module: &str, game_url: &str) -> serde_json::Value {
    json!({
        "taskId": task_id,
        "taskModule": module,
        "taskTitle": format!("task-{}", task_id),
        "eachTaskNeedPlayTimeSecs": 60,
        "taskGames": [{ "gameUrl": game_url }]
    })
}

/// Current (grouped) task-list body shape.
pub fn grouped_list_body(entries: Vec<serde_json::Value>) -> serde_json::Value {
    json!({
        "errorNo": 0,
        "result": { "data": [{ "module": "games", "data": entries }] }
    })
}

pub fn play_report_body(error_no: i64, remaining: u64) -> serde_json::Value {
    json!({
        "errorNo": error_no,
        "result": { "data": { "remainingTaskTime": remaining } }
    })
}

pub fn default_modules() -> Vec<String> {
    vec!["game_return_play".to_string(), "new_game_play".to_string()]
}

/// PanEnv pointed at a mock server, with zero sleeps so tests run fast.
pub fn test_pan_env(api_base: &str) -> PanEnv {
    PanEnv {
        cookie: "BDUSS=test".to_string(),
        api_base: api_base.to_string(),
        channels: vec![10066, 10065],
        target_modules: default_modules(),
        poll_interval_secs: 0,
        task_gap_secs: 0,
        request_timeout_ms: 5000,
    }
}

pub fn test_checkin_env(api_base: &str, credential: CheckinCredential) -> CheckinEnv {
    CheckinEnv {
        api_base: api_base.to_string(),
        credential,
        request_timeout_ms: 5000,
    }
}

pub fn sample_task() -> GameTask {
    GameTask {
        name: "play 60s".to_string(),
        task_id: "42".to_string(),
        game_id: "g100".to_string(),
        activity_id: Some("act-1".to_string()),
        total_time_secs: 60,
    }
}
