use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

use super::History;
use crate::error::StoreResult;

/// Followup status. Any value may be written over any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumString, AsRefStr, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FollowupStatus {
    #[default]
    Active,
    Completed,
    Pending,
}

impl FollowupStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FollowupStatus::Active => "진행중",
            FollowupStatus::Completed => "완료",
            FollowupStatus::Pending => "대기중",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumString, AsRefStr, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "높음",
            Priority::Medium => "보통",
            Priority::Low => "낮음",
        }
    }
}

/// A tracked sales relationship with one customer at one company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Followup {
    pub id: u64,
    pub user_id: u64,
    pub customer_name: String,
    pub company: String,
    pub status: FollowupStatus,
    pub priority: Priority,
    pub created_at: NaiveDate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateFollowupRequest {
    pub customer_name: String,
    pub company: String,
    #[serde(default)]
    pub status: FollowupStatus,
    #[serde(default)]
    pub priority: Priority,
}

/// Edit form. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateFollowupRequest {
    pub customer_name: Option<String>,
    pub company: Option<String>,
    pub status: Option<FollowupStatus>,
    pub priority: Option<Priority>,
}

impl Followup {
    /// Shallow merge of an edit form. Id, owner and creation date are fixed.
    pub fn apply(&mut self, update: UpdateFollowupRequest) -> StoreResult<()> {
        if let Some(name) = update.customer_name {
            self.customer_name = super::required("customer_name", &name)?;
        }
        if let Some(company) = update.company {
            self.company = super::required("company", &company)?;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        Ok(())
    }
}

/// Followup as shown in the list view, with its activity log
#[derive(Debug, Clone, Serialize)]
pub struct FollowupCard {
    #[serde(flatten)]
    pub followup: Followup,
    pub status_label: &'static str,
    pub priority_label: &'static str,
    pub histories: Vec<History>,
}

impl FollowupCard {
    pub fn new(followup: Followup, histories: Vec<History>) -> Self {
        FollowupCard {
            status_label: followup.status.label(),
            priority_label: followup.priority.label(),
            followup,
            histories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Followup {
        Followup {
            id: 1,
            user_id: 1,
            customer_name: "홍길동".to_string(),
            company: "ABC회사".to_string(),
            status: FollowupStatus::Active,
            priority: Priority::High,
            created_at: NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
        }
    }

    #[test]
    fn test_apply_merges_only_supplied_fields() {
        let mut followup = sample();
        followup
            .apply(UpdateFollowupRequest {
                status: Some(FollowupStatus::Completed),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(followup.status, FollowupStatus::Completed);
        assert_eq!(followup.customer_name, "홍길동");
        assert_eq!(followup.priority, Priority::High);
    }

    #[test]
    fn test_apply_allows_any_status_transition() {
        let mut followup = sample();
        followup.status = FollowupStatus::Completed;
        followup
            .apply(UpdateFollowupRequest {
                status: Some(FollowupStatus::Pending),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(followup.status, FollowupStatus::Pending);
    }

    #[test]
    fn test_apply_rejects_blank_name() {
        let mut followup = sample();
        let result = followup.apply(UpdateFollowupRequest {
            customer_name: Some("   ".to_string()),
            ..Default::default()
        });
        assert!(result.is_err());
        assert_eq!(followup.customer_name, "홍길동");
    }

    #[test]
    fn test_create_request_defaults() {
        let req: CreateFollowupRequest =
            serde_json::from_str(r#"{"customer_name":"a","company":"b"}"#).unwrap();
        assert_eq!(req.status, FollowupStatus::Active);
        assert_eq!(req.priority, Priority::Medium);
    }

    #[test]
    fn test_labels() {
        assert_eq!(FollowupStatus::Pending.label(), "대기중");
        assert_eq!(Priority::Low.label(), "낮음");
    }
}
