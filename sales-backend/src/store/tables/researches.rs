//! Pre-visit research notes

use crate::error::{StoreError, StoreResult};
use crate::models::{CreateResearchRequest, Research, Viewer};
use super::super::{take_id, CrmData};

impl CrmData {
    pub fn research_for_schedule(&self, schedule_id: u64) -> Option<&Research> {
        self.researches.iter().find(|r| r.schedule_id == schedule_id)
    }

    /// Attach notes to a visit. Each schedule takes at most one.
    pub fn create_research(
        &mut self,
        viewer: Viewer,
        schedule_id: u64,
        req: CreateResearchRequest,
    ) -> StoreResult<Research> {
        Self::require_writer(viewer)?;
        let schedule = self
            .schedule(schedule_id)
            .ok_or_else(|| StoreError::not_found("schedule", schedule_id))?;
        Self::require_owner(viewer, schedule.user_id, "schedule", schedule_id)?;
        if self.research_for_schedule(schedule_id).is_some() {
            return Err(StoreError::Conflict(format!(
                "schedule {} already has research notes",
                schedule_id
            )));
        }

        let research = Research {
            id: take_id(&mut self.next_ids.research),
            schedule_id,
            user_id: viewer.user_id,
            customer_info: req.customer_info.trim().to_string(),
            market_analysis: req.market_analysis.trim().to_string(),
            notes: req.notes.trim().to_string(),
        };
        self.researches.push(research.clone());

        log::info!(
            "[STORE] User {} added research {} to schedule {}",
            viewer.user_id,
            research.id,
            schedule_id
        );
        Ok(research)
    }
}
