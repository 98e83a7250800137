//! Followup operations

use chrono::NaiveDate;

use crate::error::{StoreError, StoreResult};
use crate::models::{CreateFollowupRequest, Followup, Role, UpdateFollowupRequest, Viewer, required};
use super::super::{take_id, CrmData};

impl CrmData {
    /// Followups the viewer may see, in insertion order.
    pub fn followups_in_scope(&self, viewer: Viewer) -> Vec<&Followup> {
        self.followups
            .iter()
            .filter(|f| viewer.can_see(f.user_id))
            .collect()
    }

    pub fn followup(&self, id: u64) -> Option<&Followup> {
        self.followups.iter().find(|f| f.id == id)
    }

    pub fn create_followup(
        &mut self,
        viewer: Viewer,
        req: CreateFollowupRequest,
        today: NaiveDate,
    ) -> StoreResult<Followup> {
        Self::require_writer(viewer)?;
        // Owner must be an existing salesperson
        match self.user(viewer.user_id) {
            Some(user) if user.role == Role::Sales => {}
            _ => return Err(StoreError::not_found("user", viewer.user_id)),
        }

        let customer_name = required("customer_name", &req.customer_name)?;
        let company = required("company", &req.company)?;

        let followup = Followup {
            id: take_id(&mut self.next_ids.followup),
            user_id: viewer.user_id,
            customer_name,
            company,
            status: req.status,
            priority: req.priority,
            created_at: today,
        };
        self.followups.push(followup.clone());

        log::info!(
            "[STORE] User {} created followup {} ({})",
            viewer.user_id,
            followup.id,
            followup.company
        );
        Ok(followup)
    }

    pub fn update_followup(
        &mut self,
        viewer: Viewer,
        id: u64,
        req: UpdateFollowupRequest,
    ) -> StoreResult<Followup> {
        Self::require_writer(viewer)?;
        let index = self
            .followups
            .iter()
            .position(|f| f.id == id)
            .ok_or_else(|| StoreError::not_found("followup", id))?;
        Self::require_owner(viewer, self.followups[index].user_id, "followup", id)?;

        // Merge into a copy so a rejected field leaves the row untouched
        let mut updated = self.followups[index].clone();
        updated.apply(req)?;
        self.followups[index] = updated.clone();

        log::info!("[STORE] User {} updated followup {}", viewer.user_id, id);
        Ok(updated)
    }

    /// Removes the followup together with its schedules, their research
    /// notes, and its history. Returns false if the id was already gone.
    pub fn delete_followup(&mut self, viewer: Viewer, id: u64) -> StoreResult<bool> {
        Self::require_writer(viewer)?;
        let Some(owner_id) = self.followup(id).map(|f| f.user_id) else {
            return Ok(false);
        };
        Self::require_owner(viewer, owner_id, "followup", id)?;

        let schedule_ids: Vec<u64> = self
            .schedules
            .iter()
            .filter(|s| s.followup_id == id)
            .map(|s| s.id)
            .collect();

        self.followups.retain(|f| f.id != id);
        self.schedules.retain(|s| s.followup_id != id);
        self.researches.retain(|r| !schedule_ids.contains(&r.schedule_id));
        self.histories.retain(|h| h.followup_id != id);

        log::info!(
            "[STORE] User {} deleted followup {} ({} schedules removed)",
            viewer.user_id,
            id,
            schedule_ids.len()
        );
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{MANAGER, SALES1, SALES2};
    use crate::error::StoreError;
    use crate::models::*;
    use crate::store::CrmData;
    use crate::store::seed::demo_data;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn new_followup(name: &str, company: &str) -> CreateFollowupRequest {
        CreateFollowupRequest {
            customer_name: name.to_string(),
            company: company.to_string(),
            status: FollowupStatus::Active,
            priority: Priority::High,
        }
    }

    fn ids(rows: Vec<&Followup>) -> Vec<u64> {
        rows.iter().map(|f| f.id).collect()
    }

    #[test]
    fn test_scope_for_sales_is_own_rows_only() {
        let data = demo_data();
        assert_eq!(ids(data.followups_in_scope(SALES1)), vec![1, 2]);
        assert_eq!(ids(data.followups_in_scope(SALES2)), vec![3]);
        for followup in data.followups_in_scope(SALES2) {
            assert_eq!(followup.user_id, SALES2.user_id);
        }
    }

    #[test]
    fn test_scope_for_manager_is_everything() {
        let data = demo_data();
        assert_eq!(ids(data.followups_in_scope(MANAGER)), vec![1, 2, 3]);
    }

    #[test]
    fn test_create_assigns_next_id_and_appends() {
        let mut data = demo_data();
        let created = data
            .create_followup(SALES1, new_followup("테스트", "테스트상사"), today())
            .unwrap();
        assert_eq!(created.id, 4);
        assert_eq!(created.user_id, 1);
        assert_eq!(created.created_at, today());
        assert_eq!(data.next_ids.followup, 5);
        assert_eq!(ids(data.followups_in_scope(SALES1)), vec![1, 2, 4]);
        assert_eq!(data.followups.last().unwrap().company, "테스트상사");
    }

    #[test]
    fn test_create_rejects_unknown_owner() {
        let mut data = demo_data();
        let ghost = Viewer { user_id: 99, role: Role::Sales };
        assert!(matches!(
            data.create_followup(ghost, new_followup("a", "b"), today()),
            Err(StoreError::NotFound { entity: "user", id: 99 })
        ));
        assert_eq!(data.followups.len(), 3);
        assert_eq!(data.next_ids.followup, 4);

        // Id 3 exists but is a manager, so it cannot own a followup
        let mislabeled = Viewer { user_id: 3, role: Role::Sales };
        assert!(matches!(
            data.create_followup(mislabeled, new_followup("a", "b"), today()),
            Err(StoreError::NotFound { entity: "user", id: 3 })
        ));
        assert_eq!(data.next_ids.followup, 4);
    }

    #[test]
    fn test_create_on_empty_store_starts_at_one() {
        let mut data = demo_data();
        let users = std::mem::take(&mut data.users);
        let mut empty = CrmData { users, ..Default::default() };
        let created = empty
            .create_followup(SALES2, new_followup("a", "b"), today())
            .unwrap();
        assert_eq!(created.id, 1);
    }

    #[test]
    fn test_manager_cannot_create() {
        let mut data = demo_data();
        let result = data.create_followup(MANAGER, new_followup("a", "b"), today());
        assert!(matches!(result, Err(StoreError::Forbidden(_))));
        assert_eq!(data.followups.len(), 3);
        assert_eq!(data.next_ids.followup, 4);
    }

    #[test]
    fn test_create_requires_fields() {
        let mut data = demo_data();
        let result = data.create_followup(SALES1, new_followup(" ", "b"), today());
        assert!(matches!(result, Err(StoreError::InvalidInput(_))));
        assert_eq!(data.next_ids.followup, 4);
    }

    #[test]
    fn test_update_merges_and_keeps_identity() {
        let mut data = demo_data();
        let updated = data
            .update_followup(
                SALES1,
                2,
                UpdateFollowupRequest {
                    company: Some("XYZ홀딩스".to_string()),
                    status: Some(FollowupStatus::Completed),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.id, 2);
        assert_eq!(updated.user_id, 1);
        assert_eq!(updated.customer_name, "김고객");
        assert_eq!(updated.company, "XYZ홀딩스");
        assert_eq!(data.followup(2).unwrap().status, FollowupStatus::Completed);
    }

    #[test]
    fn test_update_rejects_other_owner_and_missing() {
        let mut data = demo_data();
        let result = data.update_followup(SALES2, 1, UpdateFollowupRequest::default());
        assert!(matches!(result, Err(StoreError::Forbidden(_))));
        let result = data.update_followup(SALES1, 42, UpdateFollowupRequest::default());
        assert!(matches!(result, Err(StoreError::NotFound { id: 42, .. })));
    }

    #[test]
    fn test_failed_update_leaves_row_untouched() {
        let mut data = demo_data();
        let result = data.update_followup(
            SALES1,
            1,
            UpdateFollowupRequest {
                status: Some(FollowupStatus::Pending),
                company: Some("".to_string()),
                ..Default::default()
            },
        );
        assert!(result.is_err());
        assert_eq!(data.followup(1).unwrap().status, FollowupStatus::Active);
    }

    #[test]
    fn test_delete_removes_exactly_one_and_is_idempotent() {
        let mut data = demo_data();
        assert!(data.delete_followup(SALES1, 2).unwrap());
        assert_eq!(ids(data.followups_in_scope(MANAGER)), vec![1, 3]);
        assert!(!data.delete_followup(SALES1, 2).unwrap());
        assert_eq!(data.followups.len(), 2);
    }

    #[test]
    fn test_delete_cascades_to_dependents() {
        let mut data = demo_data();
        assert!(data.delete_followup(SALES1, 1).unwrap());
        assert!(data.schedules.iter().all(|s| s.followup_id != 1));
        assert_eq!(data.schedules.len(), 1);
        assert!(data.researches.is_empty());
        assert!(data.histories.is_empty());
    }

    #[test]
    fn test_delete_guards() {
        let mut data = demo_data();
        assert!(matches!(
            data.delete_followup(SALES2, 1),
            Err(StoreError::Forbidden(_))
        ));
        assert!(matches!(
            data.delete_followup(MANAGER, 1),
            Err(StoreError::Forbidden(_))
        ));
        assert_eq!(data.followups.len(), 3);
    }
}
