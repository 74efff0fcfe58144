use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::Path;

use crate::errors::BotError;

pub const PAN_COOKIE_VAR: &str = "PAN_COOKIE";
pub const PAN_COOKIE_FILE: &str = "cookie_pan.txt";
pub const CHECKIN_CONFIG_FILE: &str = "config.json";

const DEFAULT_PAN_API_BASE: &str = "https://wan.baidu.com";
const DEFAULT_CHECKIN_API_BASE: &str = "https://api.gemai.cc";
const DEFAULT_CHANNELS: &str = "10066,10065";
const DEFAULT_TASK_MODULES: &str = "game_return_play,new_game_play";

/// Settings for the task-claim flow.
#[derive(Debug, Clone)]
pub struct PanEnv {
    pub cookie: String,
    pub api_base: String,
    pub channels: Vec<u32>,
    pub target_modules: Vec<String>,
    pub poll_interval_secs: u64,
    pub task_gap_secs: u64,
    pub request_timeout_ms: u64,
}

/// Settings for the check-in flow.
#[derive(Debug, Clone)]
pub struct CheckinEnv {
    pub api_base: String,
    pub credential: CheckinCredential,
    pub request_timeout_ms: u64,
}

/// Either a pre-captured session or a password login.
#[derive(Debug, Clone)]
pub enum CheckinCredential {
    Session { cookie: String, user_id: String },
    Password { username: String, password: String },
}

/// Environment variable first, local file second. Returns `None` when the
/// variable is unset and the file is absent, unreadable or empty.
pub fn secret_from(var_name: &str, file_path: &Path) -> Option<String> {
    if let Ok(value) = env::var(var_name) {
        let value = value.trim().to_string();
        if !value.is_empty() {
            return Some(value);
        }
    }

    match fs::read_to_string(file_path) {
        Ok(content) => {
            let content = content.trim().to_string();
            if content.is_empty() {
                None
            } else {
                Some(content)
            }
        }
        Err(_) => None,
    }
}

fn parse_channels(input: &str) -> Result<Vec<u32>> {
    let channels: Vec<u32> = input
        .split(',')
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .map(|c| c.parse::<u32>().context("Invalid PAN_CHANNELS entry"))
        .collect::<Result<_>>()?;

    if channels.is_empty() {
        anyhow::bail!("PAN_CHANNELS must list at least one channel id");
    }
    Ok(channels)
}

fn parse_modules(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .collect()
}

fn env_u64(var_name: &str, default: u64) -> u64 {
    env::var(var_name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

pub fn load_pan_env() -> Result<PanEnv> {
    dotenvy::dotenv().ok(); // Load .env file if it exists

    let cookie = secret_from(PAN_COOKIE_VAR, Path::new(PAN_COOKIE_FILE)).ok_or(
        BotError::MissingCredential {
            env_var: PAN_COOKIE_VAR,
            fallback_file: PAN_COOKIE_FILE,
        },
    )?;

    let channels_str = env::var("PAN_CHANNELS").unwrap_or_else(|_| DEFAULT_CHANNELS.to_string());
    let modules_str =
        env::var("PAN_TASK_MODULES").unwrap_or_else(|_| DEFAULT_TASK_MODULES.to_string());

    Ok(PanEnv {
        cookie,
        api_base: env::var("PAN_API_BASE").unwrap_or_else(|_| DEFAULT_PAN_API_BASE.to_string()),
        channels: parse_channels(&channels_str)?,
        target_modules: parse_modules(&modules_str),
        poll_interval_secs: env_u64("POLL_INTERVAL_SECS", 11),
        task_gap_secs: env_u64("TASK_GAP_SECS", 2),
        request_timeout_ms: env_u64("REQUEST_TIMEOUT_MS", 20000),
    })
}

/// JSON fallback for the check-in flow. Any subset of the fields may be
/// present; blank strings count as absent.
fn checkin_file_credential(file_path: &Path) -> Option<CheckinCredential> {
    let content = fs::read_to_string(file_path).ok()?;
    let config: serde_json::Value = serde_json::from_str(&content).ok()?;

    let field = |name: &str| -> Option<String> {
        config
            .get(name)
            .and_then(|v| v.as_str())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    };

    if let (Some(cookie), Some(user_id)) = (field("cookie"), field("user_id")) {
        return Some(CheckinCredential::Session { cookie, user_id });
    }
    if let (Some(username), Some(password)) = (field("username"), field("password")) {
        return Some(CheckinCredential::Password { username, password });
    }
    None
}

fn env_pair(a: &str, b: &str) -> Option<(String, String)> {
    let left = env::var(a).ok().map(|v| v.trim().to_string())?;
    let right = env::var(b).ok().map(|v| v.trim().to_string())?;
    if left.is_empty() || right.is_empty() {
        return None;
    }
    Some((left, right))
}

pub fn resolve_checkin_credential(config_file: &Path) -> Option<CheckinCredential> {
    if let Some((cookie, user_id)) = env_pair("GEMAI_COOKIE", "GEMAI_USER_ID") {
        return Some(CheckinCredential::Session { cookie, user_id });
    }
    if let Some((username, password)) = env_pair("GEMAI_USERNAME", "GEMAI_PASSWORD") {
        return Some(CheckinCredential::Password { username, password });
    }
    checkin_file_credential(config_file)
}

pub fn load_checkin_env() -> Result<CheckinEnv> {
    dotenvy::dotenv().ok();

    let credential = resolve_checkin_credential(Path::new(CHECKIN_CONFIG_FILE)).ok_or(
        BotError::MissingCredential {
            env_var: "GEMAI_USERNAME/GEMAI_PASSWORD",
            fallback_file: CHECKIN_CONFIG_FILE,
        },
    )?;

    Ok(CheckinEnv {
        api_base: env::var("CHECKIN_API_BASE")
            .unwrap_or_else(|_| DEFAULT_CHECKIN_API_BASE.to_string()),
        credential,
        request_timeout_ms: env_u64("REQUEST_TIMEOUT_MS", 20000),
    })
}
