//! List views joining store rows for display.

use crate::models::{FollowupCard, History, UpcomingVisit, Viewer};
use crate::store::CrmData;

/// Followups in scope, each with its history newest first.
pub fn followup_board(data: &CrmData, viewer: Viewer) -> Vec<FollowupCard> {
    data.followups_in_scope(viewer)
        .into_iter()
        .map(|followup| {
            let histories: Vec<History> = data
                .histories_for_followup(followup.id)
                .into_iter()
                .cloned()
                .collect();
            FollowupCard::new(followup.clone(), histories)
        })
        .collect()
}

/// Scheduled visits in scope, soonest first, with followup and research attached.
pub fn upcoming_visits(data: &CrmData, viewer: Viewer) -> Vec<UpcomingVisit> {
    data.upcoming_schedules(viewer)
        .into_iter()
        .map(|schedule| UpcomingVisit {
            status_label: schedule.status.label(),
            followup: data.followup(schedule.followup_id).cloned(),
            research: data.research_for_schedule(schedule.id).cloned(),
            schedule: schedule.clone(),
        })
        .collect()
}
