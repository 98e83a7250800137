use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString, IntoEnumIterator};

/// Account role. Decides which tabs are visible and how much data a session sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, AsRefStr, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    /// Field salesperson; owns followups and schedules
    Sales,
    /// Team lead; reads everything, mutates nothing
    Manager,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Sales => "영업사원",
            Role::Manager => "관리자",
        }
    }

    /// Managers get an unfiltered, read-only view of all data.
    pub fn sees_all(&self) -> bool {
        matches!(self, Role::Manager)
    }

    pub fn can_mutate(&self) -> bool {
        matches!(self, Role::Sales)
    }

    pub fn visible_tabs(&self) -> Vec<Tab> {
        Tab::iter().filter(|tab| tab.visible_to(*self)).collect()
    }
}

/// Top-level views of the front end, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, AsRefStr, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tab {
    Dashboard,
    Followup,
    Schedule,
    Report,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "대시보드",
            Tab::Followup => "팔로우업",
            Tab::Schedule => "일정",
            Tab::Report => "팀 보고서",
        }
    }

    pub fn visible_to(&self, role: Role) -> bool {
        match self {
            Tab::Report => role == Role::Manager,
            _ => true,
        }
    }
}

/// Account record. The credential is plaintext and stays inside the store.
#[derive(Debug, Clone)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub name: String,
    pub role: Role,
    pub password: String,
}

impl User {
    pub fn viewer(&self) -> Viewer {
        Viewer {
            user_id: self.id,
            role: self.role,
        }
    }
}

/// Who is asking. Scoped queries and mutations take this explicitly
/// instead of reading session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewer {
    pub user_id: u64,
    pub role: Role,
}

impl Viewer {
    /// Whether a row owned by `owner_id` is visible to this viewer.
    pub fn can_see(&self, owner_id: u64) -> bool {
        self.role.sees_all() || self.user_id == owner_id
    }
}

/// User as exposed over the API (no credential).
#[derive(Debug, Clone, Serialize)]
pub struct PublicUser {
    pub id: u64,
    pub username: String,
    pub name: String,
    pub role: Role,
    pub role_label: &'static str,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        PublicUser {
            id: user.id,
            username: user.username.clone(),
            name: user.name.clone(),
            role: user.role,
            role_label: user.role.label(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TabEntry {
    pub id: Tab,
    pub label: &'static str,
}

impl From<Tab> for TabEntry {
    fn from(tab: Tab) -> Self {
        TabEntry {
            id: tab,
            label: tab.label(),
        }
    }
}

/// Login / "who am I" response
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub user: PublicUser,
    pub tabs: Vec<TabEntry>,
}

impl SessionResponse {
    pub fn new(user: &User, token: Option<String>) -> Self {
        SessionResponse {
            token,
            user: user.into(),
            tabs: user.role.visible_tabs().into_iter().map(TabEntry::from).collect(),
        }
    }
}
