use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::json;

use crate::config::{CheckinCredential, CheckinEnv};
use crate::errors::BotError;
use crate::interfaces::CheckinResponse;
use crate::utils::{post_json, Logger};

// "成功" = success, "重复" = already checked in today. Both count.
const SUCCESS_MARKERS: [&str; 2] = ["成功", "重复"];

/// Password login. Returns the user id the check-in route wants in its
/// `new-api-user` header (empty string when the response carries none).
/// The session cookie set by this call lives in the client's cookie store.
pub async fn login(client: &Client, env: &CheckinEnv, username: &str, password: &str) -> Result<String> {
    let url = format!("{}/api/user/login?turnstile=", env.api_base);
    Logger::info(&format!("Logging in as {}...", username));

    let payload = json!({ "username": username, "password": password });
    let (status, body) = post_json(client, &url, &payload, &[]).await?;
    if !status.is_success() {
        return Err(BotError::UnexpectedResponse(format!("login returned HTTP {}", status)).into());
    }

    let response: CheckinResponse =
        serde_json::from_value(body).context("malformed login response")?;
    if response.is_success_code() || response.data.is_some() {
        Logger::success("Login succeeded");
        Ok(response.user_id().unwrap_or_default())
    } else {
        let reason = match response.message_text() {
            "" => "unknown error",
            msg => msg,
        };
        Err(BotError::UnexpectedResponse(format!("login failed: {}", reason)).into())
    }
}

/// Single check-in POST. Success is judged from the body: a known success
/// substring in the message, or a success code. Anything else is fatal so
/// the scheduler alerts the operator.
pub async fn check_in(client: &Client, env: &CheckinEnv, user_id: &str) -> Result<()> {
    let url = format!("{}/api/user/checkin", env.api_base);
    Logger::info("Requesting check-in...");

    let mut headers: Vec<(&str, &str)> = Vec::new();
    if !user_id.is_empty() {
        headers.push(("new-api-user", user_id));
    }

    let (status, body) = post_json(client, &url, &json!({}), &headers).await?;
    Logger::info(&format!("Check-in response: {}", body));
    if !status.is_success() {
        return Err(
            BotError::UnexpectedResponse(format!("check-in returned HTTP {}", status)).into(),
        );
    }

    let response: CheckinResponse =
        serde_json::from_value(body.clone()).context("malformed check-in response")?;
    let message = response.message_text();
    if SUCCESS_MARKERS.iter().any(|m| message.contains(m)) || response.is_success_code() {
        Logger::success("Check-in complete");
        Ok(())
    } else {
        Err(BotError::UnexpectedResponse(format!("check-in rejected: {}", body)).into())
    }
}

/// Full check-in flow: a pre-captured session skips the login step.
pub async fn run_checkin(client: &Client, env: &CheckinEnv) -> Result<()> {
    let user_id = match &env.credential {
        CheckinCredential::Session { user_id, .. } => {
            Logger::info("Using pre-captured session, skipping login");
            user_id.clone()
        }
        CheckinCredential::Password { username, password } => {
            login(client, env, username, password).await?
        }
    };
    check_in(client, env, &user_id).await
}
