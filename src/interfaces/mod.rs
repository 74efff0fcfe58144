use serde::Deserialize;
use serde_json::Value;
use url::Url;

/// A claimable reward task, flattened out of the vendor's nested task-list
/// payload. One sub-game is already chosen; its `gameId` is what the
/// play-report endpoint wants back.
#[derive(Debug, Clone, PartialEq)]
pub struct GameTask {
    pub name: String,
    pub task_id: String,
    pub game_id: String,
    pub activity_id: Option<String>,
    pub total_time_secs: u64,
}

impl GameTask {
    /// Build from a raw task object. Returns `None` when the entry has no
    /// usable game URL (no `gameId` query parameter means the task cannot be
    /// reported against). The vendor encodes ids as strings or numbers
    /// depending on the endpoint version, so everything is normalized to
    /// strings here.
    pub fn from_json_value(task: &Value, game: &Value) -> Option<Self> {
        let task_id = value_as_string(task.get("taskId")?)?;

        let game_url = game.get("gameUrl").and_then(|v| v.as_str()).unwrap_or("");
        let parsed = Url::parse(game_url).ok()?;
        let query_param = |name: &str| -> Option<String> {
            parsed
                .query_pairs()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.into_owned())
                .filter(|v| !v.is_empty())
        };

        let game_id = query_param("gameId")?;
        let activity_id = query_param("activityId")
            .or_else(|| task.get("activityId").and_then(value_as_string));

        let name = task
            .get("taskTitle")
            .and_then(|v| v.as_str())
            .or_else(|| task.get("taskName").and_then(|v| v.as_str()))
            .unwrap_or("unnamed task")
            .to_string();

        Some(GameTask {
            name,
            task_id,
            game_id,
            activity_id,
            total_time_secs: task
                .get("eachTaskNeedPlayTimeSecs")
                .and_then(|v| v.as_u64())
                .unwrap_or(60),
        })
    }
}

/// Vendor ids arrive as strings or numbers depending on the endpoint
/// version; normalize to a string.
pub fn value_as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Check-in API body. The service spells the message field `message` or
/// `msg` depending on the route.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckinResponse {
    pub code: Option<i64>,
    pub message: Option<String>,
    pub msg: Option<String>,
    pub data: Option<Value>,
    pub id: Option<Value>,
}

impl CheckinResponse {
    pub fn message_text(&self) -> &str {
        self.message
            .as_deref()
            .or(self.msg.as_deref())
            .unwrap_or("")
    }

    pub fn is_success_code(&self) -> bool {
        matches!(self.code, Some(200) | Some(0))
    }

    /// User id from `data.id` or a top-level `id`, whichever the login route
    /// returned. Numbers are stringified for use as a header value.
    pub fn user_id(&self) -> Option<String> {
        self.data
            .as_ref()
            .and_then(|d| d.get("id"))
            .and_then(value_as_string)
            .or_else(|| self.id.as_ref().and_then(value_as_string))
    }
}
