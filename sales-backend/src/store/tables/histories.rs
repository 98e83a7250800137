//! Activity history operations. The log is append-only.

use chrono::NaiveDateTime;

use crate::error::{StoreError, StoreResult};
use crate::models::{CreateHistoryRequest, History, Viewer, required};
use super::super::{take_id, CrmData};

impl CrmData {
    /// History of one followup, newest first.
    pub fn histories_for_followup(&self, followup_id: u64) -> Vec<&History> {
        let mut rows: Vec<&History> = self
            .histories
            .iter()
            .filter(|h| h.followup_id == followup_id)
            .collect();
        sort_newest_first(&mut rows);
        rows
    }

    /// The `limit` most recent entries, optionally only those logged by `user_id`.
    pub fn recent_histories(&self, user_id: Option<u64>, limit: usize) -> Vec<&History> {
        let mut rows: Vec<&History> = self
            .histories
            .iter()
            .filter(|h| user_id.is_none_or(|id| h.user_id == id))
            .collect();
        sort_newest_first(&mut rows);
        rows.truncate(limit);
        rows
    }

    pub fn create_history(
        &mut self,
        viewer: Viewer,
        followup_id: u64,
        req: CreateHistoryRequest,
        now: NaiveDateTime,
    ) -> StoreResult<History> {
        Self::require_writer(viewer)?;
        let followup = self
            .followup(followup_id)
            .ok_or_else(|| StoreError::not_found("followup", followup_id))?;
        Self::require_owner(viewer, followup.user_id, "followup", followup_id)?;
        let content = required("content", &req.content)?;

        let history = History {
            id: take_id(&mut self.next_ids.history),
            followup_id,
            user_id: viewer.user_id,
            action_type: req.action_type,
            content,
            created_at: now,
        };
        self.histories.push(history.clone());

        log::info!(
            "[STORE] User {} logged {} on followup {}",
            viewer.user_id,
            history.action_type.as_ref(),
            followup_id
        );
        Ok(history)
    }
}

/// Most recent first; later ids win ties.
fn sort_newest_first(rows: &mut [&History]) {
    rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
}
