use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

/// Kind of customer interaction recorded in the activity log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, AsRefStr, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ActionType {
    Call,
    Email,
    Meeting,
    Visit,
    Other,
}

impl ActionType {
    pub fn label(&self) -> &'static str {
        match self {
            ActionType::Call => "전화",
            ActionType::Email => "이메일",
            ActionType::Meeting => "미팅",
            ActionType::Visit => "방문",
            ActionType::Other => "기타",
        }
    }
}

/// Append-only activity log entry against a followup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct History {
    pub id: u64,
    pub followup_id: u64,
    pub user_id: u64,
    pub action_type: ActionType,
    pub content: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateHistoryRequest {
    pub action_type: ActionType,
    pub content: String,
}

/// History entry joined with the names the activity feeds display
#[derive(Debug, Clone, Serialize)]
pub struct ActivityEntry {
    #[serde(flatten)]
    pub history: History,
    pub action_label: &'static str,
    pub user_name: Option<String>,
    pub customer_name: Option<String>,
    pub company: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_action_type_round_trip_names() {
        for action in ActionType::iter() {
            let parsed: ActionType = action.as_ref().parse().unwrap();
            assert_eq!(parsed, action);
        }
        assert_eq!(ActionType::Visit.label(), "방문");
    }

    #[test]
    fn test_unknown_action_type_rejected() {
        let result = serde_json::from_str::<CreateHistoryRequest>(
            r#"{"action_type":"fax","content":"x"}"#,
        );
        assert!(result.is_err());
    }
}
