//! Entity records, form payloads and list-view rows.

mod followup;
mod history;
mod research;
mod schedule;
mod user;

pub use followup::{CreateFollowupRequest, Followup, FollowupCard, FollowupStatus, Priority, UpdateFollowupRequest};
pub use history::{ActionType, ActivityEntry, CreateHistoryRequest, History};
pub use research::{CreateResearchRequest, Research};
pub use schedule::{CreateScheduleRequest, Schedule, ScheduleStatus, UpcomingVisit, UpdateScheduleRequest};
pub use user::{LoginRequest, PublicUser, Role, SessionResponse, User, Viewer};

use crate::error::{StoreError, StoreResult};

/// Trimmed value of a form field that must not be blank.
pub(crate) fn required(field: &str, value: &str) -> StoreResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StoreError::InvalidInput(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}
