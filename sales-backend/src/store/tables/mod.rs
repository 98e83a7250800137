//! Store operations, one module per collection.
//!
//! Each module contains `impl CrmData` blocks for a single entity.

mod followups;
mod histories;
mod researches;
mod schedules;
mod users;
