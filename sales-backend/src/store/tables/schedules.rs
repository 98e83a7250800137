//! Schedule (visit) operations

use crate::error::{StoreError, StoreResult};
use crate::models::{CreateScheduleRequest, Schedule, ScheduleStatus, UpdateScheduleRequest, Viewer};
use super::super::{take_id, CrmData};

impl CrmData {
    /// Schedules the viewer may see, in insertion order.
    pub fn schedules_in_scope(&self, viewer: Viewer) -> Vec<&Schedule> {
        self.schedules
            .iter()
            .filter(|s| viewer.can_see(s.user_id))
            .collect()
    }

    /// Pending visits in scope, soonest first.
    pub fn upcoming_schedules(&self, viewer: Viewer) -> Vec<&Schedule> {
        let mut upcoming: Vec<&Schedule> = self
            .schedules_in_scope(viewer)
            .into_iter()
            .filter(|s| s.status == ScheduleStatus::Scheduled)
            .collect();
        upcoming.sort_by_key(|s| (s.visit_date, s.visit_time, s.id));
        upcoming
    }

    pub fn schedule(&self, id: u64) -> Option<&Schedule> {
        self.schedules.iter().find(|s| s.id == id)
    }

    /// A schedule may only point at a followup the actor owns.
    fn check_followup_reference(&self, viewer: Viewer, followup_id: u64) -> StoreResult<()> {
        let followup = self
            .followup(followup_id)
            .ok_or_else(|| StoreError::not_found("followup", followup_id))?;
        Self::require_owner(viewer, followup.user_id, "followup", followup_id)
    }

    pub fn create_schedule(
        &mut self,
        viewer: Viewer,
        req: CreateScheduleRequest,
    ) -> StoreResult<Schedule> {
        Self::require_writer(viewer)?;
        self.check_followup_reference(viewer, req.followup_id)?;

        let schedule = Schedule {
            id: take_id(&mut self.next_ids.schedule),
            user_id: viewer.user_id,
            followup_id: req.followup_id,
            visit_date: req.visit_date,
            visit_time: req.visit_time,
            location: req.location.trim().to_string(),
            status: ScheduleStatus::Scheduled,
        };
        self.schedules.push(schedule.clone());

        log::info!(
            "[STORE] User {} scheduled visit {} for followup {} on {}",
            viewer.user_id,
            schedule.id,
            schedule.followup_id,
            schedule.visit_date
        );
        Ok(schedule)
    }

    pub fn update_schedule(
        &mut self,
        viewer: Viewer,
        id: u64,
        req: UpdateScheduleRequest,
    ) -> StoreResult<Schedule> {
        Self::require_writer(viewer)?;
        let index = self
            .schedules
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| StoreError::not_found("schedule", id))?;
        Self::require_owner(viewer, self.schedules[index].user_id, "schedule", id)?;
        if let Some(followup_id) = req.followup_id {
            self.check_followup_reference(viewer, followup_id)?;
        }

        let schedule = &mut self.schedules[index];
        schedule.apply(req);
        let updated = schedule.clone();

        log::info!("[STORE] User {} updated schedule {}", viewer.user_id, id);
        Ok(updated)
    }

    /// Removes the schedule and its research note. Returns false if the id
    /// was already gone.
    pub fn delete_schedule(&mut self, viewer: Viewer, id: u64) -> StoreResult<bool> {
        Self::require_writer(viewer)?;
        let Some(owner_id) = self.schedule(id).map(|s| s.user_id) else {
            return Ok(false);
        };
        Self::require_owner(viewer, owner_id, "schedule", id)?;

        self.schedules.retain(|s| s.id != id);
        self.researches.retain(|r| r.schedule_id != id);

        log::info!("[STORE] User {} deleted schedule {}", viewer.user_id, id);
        Ok(true)
    }
}
