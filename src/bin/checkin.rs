//! Daily check-in driver. Exit code 0 means the reward was claimed (or was
//! already claimed today); 1 means the operator should look at the logs.

use anyhow::Result;
use pan_reward_bot::config::{load_checkin_env, CheckinCredential};
use pan_reward_bot::services::run_checkin;
use pan_reward_bot::utils::{build_client, Logger};

const CHECKIN_REFERER: &str = "https://gemai.cc/";

#[tokio::main]
async fn main() -> Result<()> {
    let env = load_checkin_env()?;
    Logger::header("PAN REWARD BOT - DAILY CHECK-IN");

    let cookie = match &env.credential {
        CheckinCredential::Session { cookie, .. } => Some(cookie.as_str()),
        CheckinCredential::Password { .. } => None,
    };
    let client = build_client(env.request_timeout_ms, CHECKIN_REFERER, cookie)?;

    run_checkin(&client, &env).await
}
