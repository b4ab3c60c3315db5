use serde_json::Value;

const UNTITLED_SCRIPT: &str = "Untitled Script";
const UNKNOWN_GAME: &str = "Unknown Game";
const MAX_TITLE_CHARS: usize = 100;

/// One entry of a script search, with provider gaps already filled in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptResult {
    pub title: String,
    pub game: String,
    pub views: u64,
    pub verified: bool,
}

impl ScriptResult {
    /// Decode one provider entry. Missing or mistyped fields fall back to
    /// placeholders instead of failing the whole result list.
    pub fn from_value(value: &Value) -> Self {
        let title = value
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or(UNTITLED_SCRIPT)
            .to_owned();
        let game = value
            .get("game")
            .and_then(|game| game.get("name"))
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_GAME)
            .to_owned();
        let views = value.get("views").and_then(decode_views).unwrap_or(0);
        let verified = value
            .get("isVerified")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        Self {
            title,
            game,
            views,
            verified,
        }
    }

    /// Title cut to the first 100 characters for display.
    pub fn display_title(&self) -> String {
        self.title.chars().take(MAX_TITLE_CHARS).collect()
    }
}

fn decode_views(value: &Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|views| views.is_finite() && *views >= 0.0)
            .map(|views| views as u64)
    })
}

/// Extract `result.scripts` from a search payload.
///
/// A payload without that array is treated as an empty result list.
pub fn parse_search_response(payload: &Value) -> Vec<ScriptResult> {
    payload
        .get("result")
        .and_then(|result| result.get("scripts"))
        .and_then(Value::as_array)
        .map(|scripts| scripts.iter().map(ScriptResult::from_value).collect())
        .unwrap_or_default()
}
