use thiserror::Error;

/// Vendor error code meaning the cookie/session is no longer valid.
pub const CODE_AUTH_EXPIRED: i64 = 110008;

/// Vendor error code meaning the task was already completed.
pub const CODE_TASK_ALREADY_DONE: i64 = 110503;

/// Conditions that must stop the whole process with exit code 1 so the
/// scheduler (cron, CI) notifies the operator.
#[derive(Debug, Error)]
pub enum BotError {
    #[error("credential not found: set {env_var} or create {fallback_file}")]
    MissingCredential {
        env_var: &'static str,
        fallback_file: &'static str,
    },

    #[error("authentication expired (server error 110008): refresh the cookie secret")]
    AuthExpired,

    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}
