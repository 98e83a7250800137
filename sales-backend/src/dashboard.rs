//! Dashboard and team report aggregation.
//!
//! Everything here is recomputed from the store on each call.

use serde::Serialize;

use crate::error::{StoreError, StoreResult};
use crate::models::{
    ActivityEntry, Followup, FollowupStatus, History, PublicUser, Schedule, ScheduleStatus, User,
    Viewer,
};
use crate::store::CrmData;

/// How many of the user's own entries the dashboard feed shows
pub const RECENT_ACTIVITY_LIMIT: usize = 5;
/// How many entries the manager's team feed shows
pub const TEAM_ACTIVITY_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryCounts {
    pub total_followups: usize,
    pub active_followups: usize,
    pub scheduled_visits: usize,
}

impl SummaryCounts {
    pub fn tally(followups: &[&Followup], schedules: &[&Schedule]) -> Self {
        SummaryCounts {
            total_followups: followups.len(),
            active_followups: followups
                .iter()
                .filter(|f| f.status == FollowupStatus::Active)
                .count(),
            scheduled_visits: schedules
                .iter()
                .filter(|s| s.status == ScheduleStatus::Scheduled)
                .count(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub user: PublicUser,
    pub counts: SummaryCounts,
    pub recent_activities: Vec<ActivityEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamReport {
    pub sales_people: Vec<PublicUser>,
    pub selected_user_id: Option<u64>,
    pub counts: SummaryCounts,
    pub activities: Vec<ActivityEntry>,
}

fn activity_entry(data: &CrmData, history: &History) -> ActivityEntry {
    let followup = data.followup(history.followup_id);
    ActivityEntry {
        history: history.clone(),
        action_label: history.action_type.label(),
        user_name: data.user(history.user_id).map(|u| u.name.clone()),
        customer_name: followup.map(|f| f.customer_name.clone()),
        company: followup.map(|f| f.company.clone()),
    }
}

/// Counts over the user's scope plus their own latest activity.
pub fn dashboard(data: &CrmData, user: &User) -> DashboardSummary {
    let viewer = user.viewer();
    let counts = SummaryCounts::tally(
        &data.followups_in_scope(viewer),
        &data.schedules_in_scope(viewer),
    );
    let recent_activities = data
        .recent_histories(Some(user.id), RECENT_ACTIVITY_LIMIT)
        .into_iter()
        .map(|h| activity_entry(data, h))
        .collect();

    DashboardSummary {
        user: user.into(),
        counts,
        recent_activities,
    }
}

/// Manager-only team view, optionally narrowed to one salesperson.
pub fn team_report(
    data: &CrmData,
    viewer: Viewer,
    sales_user_id: Option<u64>,
) -> StoreResult<TeamReport> {
    if !viewer.role.sees_all() {
        return Err(StoreError::Forbidden(
            "team report is available to managers only".to_string(),
        ));
    }

    let owned_by = |owner: u64| sales_user_id.is_none_or(|id| id == owner);
    let followups: Vec<&Followup> = data.followups.iter().filter(|f| owned_by(f.user_id)).collect();
    let schedules: Vec<&Schedule> = data.schedules.iter().filter(|s| owned_by(s.user_id)).collect();

    let activities = data
        .recent_histories(sales_user_id, TEAM_ACTIVITY_LIMIT)
        .into_iter()
        .map(|h| activity_entry(data, h))
        .collect();

    Ok(TeamReport {
        sales_people: data.sales_users().into_iter().map(PublicUser::from).collect(),
        selected_user_id: sales_user_id,
        counts: SummaryCounts::tally(&followups, &schedules),
        activities,
    })
}
