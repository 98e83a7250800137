//! In-memory CRM store.
//!
//! `CrmData` is the whole application state as a plain value: collections
//! plus per-entity id counters. Queries and mutations are ordinary methods on
//! it (split by table under `tables/`), so they can be exercised directly in
//! tests. `CrmStore` owns one `CrmData` behind a lock and is what the HTTP
//! layer shares between workers. Nothing is ever written to disk.

pub mod seed;
pub mod sessions;
mod tables;

use parking_lot::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::models::{Followup, History, Research, Schedule, User, Viewer};

pub use sessions::SessionRegistry;

/// Next id to hand out for each entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextIds {
    pub followup: u64,
    pub schedule: u64,
    pub history: u64,
    pub research: u64,
}

impl Default for NextIds {
    fn default() -> Self {
        NextIds {
            followup: 1,
            schedule: 1,
            history: 1,
            research: 1,
        }
    }
}

/// Returns the counter's value and advances it.
fn take_id(counter: &mut u64) -> u64 {
    let id = *counter;
    *counter += 1;
    id
}

#[derive(Debug, Clone, Default)]
pub struct CrmData {
    pub users: Vec<User>,
    pub followups: Vec<Followup>,
    pub schedules: Vec<Schedule>,
    pub histories: Vec<History>,
    pub researches: Vec<Research>,
    pub next_ids: NextIds,
}

impl CrmData {
    /// Rejects viewers whose role cannot write.
    fn require_writer(viewer: Viewer) -> StoreResult<()> {
        if viewer.role.can_mutate() {
            Ok(())
        } else {
            Err(StoreError::Forbidden(format!(
                "role '{}' has read-only access",
                viewer.role.as_ref()
            )))
        }
    }

    /// Rejects writes to rows the viewer does not own.
    fn require_owner(viewer: Viewer, owner_id: u64, entity: &str, id: u64) -> StoreResult<()> {
        if viewer.user_id == owner_id {
            Ok(())
        } else {
            Err(StoreError::Forbidden(format!(
                "{} {} belongs to another user",
                entity, id
            )))
        }
    }
}

/// Shared handle to the application state
pub struct CrmStore {
    data: RwLock<CrmData>,
}

impl CrmStore {
    pub fn new(data: CrmData) -> Self {
        Self {
            data: RwLock::new(data),
        }
    }

    /// Run a query against the current state.
    pub fn read<R>(&self, f: impl FnOnce(&CrmData) -> R) -> R {
        f(&self.data.read())
    }

    /// Run a mutation. The whole closure is one critical section.
    pub fn write<R>(&self, f: impl FnOnce(&mut CrmData) -> R) -> R {
        f(&mut self.data.write())
    }
}
