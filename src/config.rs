//! Board Configuration
//!
//! Which resource the widget pages through, which DOM ids it owns and how
//! it retries. Read from the mount element:
//!
//! ```html
//! <div data-board="public_files" data-for-user="1"
//!      data-board-config='{"retry": {"max_attempts": 5}}'></div>
//! ```

use list_loader::{Endpoints, RetryPolicy};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Attribute marking the element the widget mounts into
pub const MOUNT_ATTR: &str = "data-board";
pub const FOR_USER_ATTR: &str = "data-for-user";
pub const OVERRIDES_ATTR: &str = "data-board-config";

/// Paginated resources served by the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardKind {
    Posts,
    PublicFiles,
}

impl BoardKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "posts" => Some(BoardKind::Posts),
            "public_files" | "public-files" => Some(BoardKind::PublicFiles),
            _ => None,
        }
    }
}

/// DOM contract between the widget and the server-rendered fragments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selectors {
    pub container_id: String,
    pub trigger_id: String,
    pub count_id: String,
    pub total_id: String,
    /// Selector of one rendered item
    pub item: String,
    /// Item element ids are `<item_id_prefix><digits>`
    pub item_id_prefix: String,
    pub delete_button: String,
    pub like_button: String,
    /// Attribute of the like button carrying the post id
    pub like_attr: String,
    /// Like controls are `#<like_target_prefix><post id>`
    pub like_target_prefix: String,
}

impl Selectors {
    /// Ids derived from the resource prefix (`public_files` -> `public-files-*`)
    pub fn for_prefix(prefix: &str) -> Self {
        let stem = prefix.replace('_', "-");
        Self {
            container_id: format!("{}-container", stem),
            trigger_id: "load-more".to_string(),
            count_id: format!("{}-count", stem),
            total_id: format!("{}-total", stem),
            item: ".card.mb-3".to_string(),
            item_id_prefix: "post".to_string(),
            delete_button: ".btn-sm.btn-close.shadow-none".to_string(),
            like_button: ".btn-link".to_string(),
            like_attr: "post_id".to_string(),
            like_target_prefix: "like_".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub endpoints: Endpoints,
    pub selectors: Selectors,
    pub retry: RetryPolicy,
    /// How long a notice stays open before closing itself
    pub notice_timeout_ms: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::for_kind(BoardKind::Posts, false)
    }
}

impl BoardConfig {
    pub fn for_kind(kind: BoardKind, for_user: bool) -> Self {
        let endpoints = match kind {
            BoardKind::Posts => Endpoints::posts(),
            BoardKind::PublicFiles => Endpoints::public_files(for_user),
        };
        let selectors = Selectors::for_prefix(&endpoints.prefix);
        Self {
            endpoints,
            selectors,
            retry: RetryPolicy::default(),
            notice_timeout_ms: 5_000,
        }
    }

    /// Build the config from the mount element's attribute values.
    pub fn from_attributes(
        board: &str,
        for_user: Option<&str>,
        overrides: Option<&str>,
    ) -> Result<Self, String> {
        let kind = BoardKind::parse(board).ok_or_else(|| format!("unknown board `{}`", board))?;
        let for_user = matches!(for_user.map(str::trim), Some("1") | Some("true"));
        let config = Self::for_kind(kind, for_user);
        match overrides {
            Some(json) if !json.trim().is_empty() => config.with_overrides(json),
            _ => Ok(config),
        }
    }

    /// Deep-merge a JSON object over this config.
    pub fn with_overrides(self, json: &str) -> Result<Self, String> {
        let patch: Value =
            serde_json::from_str(json).map_err(|e| format!("invalid board config: {}", e))?;
        let mut base = serde_json::to_value(&self).map_err(|e| e.to_string())?;
        merge(&mut base, patch);
        serde_json::from_value(base).map_err(|e| format!("invalid board config: {}", e))
    }
}

fn merge(base: &mut Value, patch: Value) {
    match (base, patch) {
        (Value::Object(base), Value::Object(patch)) => {
            for (key, value) in patch {
                merge(base.entry(key).or_insert(Value::Null), value);
            }
        }
        (base, patch) => *base = patch,
    }
}
