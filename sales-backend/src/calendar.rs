//! Month calendar grid.
//!
//! A grid is always six full weeks (42 cells) starting on the Sunday on or
//! before the first of the month. Cells are flagged for month membership,
//! today, and whether any visit falls on that date.

use std::collections::HashSet;

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

use crate::error::{StoreError, StoreResult};
use crate::models::Schedule;

pub const GRID_CELLS: usize = 42;

pub const WEEKDAY_LABELS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

/// A calendar month, held as its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRef {
    first: NaiveDate,
}

impl MonthRef {
    pub fn new(year: i32, month: u32) -> StoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| MonthRef { first })
            .ok_or_else(|| StoreError::InvalidInput(format!("invalid month {}-{}", year, month)))
    }

    pub fn containing(date: NaiveDate) -> Self {
        MonthRef {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// Move by whole months, wrapping across years.
    pub fn shift(self, months: i32) -> Self {
        let index = self.year() * 12 + self.month0() as i32 + months;
        NaiveDate::from_ymd_opt(index.div_euclid(12), index.rem_euclid(12) as u32 + 1, 1)
            .map(|first| MonthRef { first })
            .unwrap_or(self)
    }

    pub fn title(&self) -> String {
        format!("{}년 {}월", self.year(), self.month())
    }

    fn month0(&self) -> u32 {
        self.first.month0()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthLink {
    pub year: i32,
    pub month: u32,
}

impl From<MonthRef> for MonthLink {
    fn from(month: MonthRef) -> Self {
        MonthLink {
            year: month.year(),
            month: month.month(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub day: u32,
    pub in_month: bool,
    pub is_today: bool,
    pub has_event: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub title: String,
    pub weekdays: [&'static str; 7],
    pub cells: Vec<CalendarCell>,
    pub prev: MonthLink,
    pub next: MonthLink,
}

/// Build the grid for `month`. `schedules` should already be scoped to
/// the viewer; every one of them marks its date regardless of status.
pub fn month_grid(month: MonthRef, today: NaiveDate, schedules: &[&Schedule]) -> MonthGrid {
    let lead = month.first.weekday().num_days_from_sunday();
    let origin = month
        .first
        .checked_sub_days(Days::new(u64::from(lead)))
        .unwrap_or(month.first);

    let event_days: HashSet<NaiveDate> = schedules.iter().map(|s| s.visit_date).collect();

    let cells = origin
        .iter_days()
        .take(GRID_CELLS)
        .map(|date| CalendarCell {
            date,
            day: date.day(),
            in_month: date.year() == month.year() && date.month() == month.month(),
            is_today: date == today,
            has_event: event_days.contains(&date),
        })
        .collect();

    MonthGrid {
        year: month.year(),
        month: month.month(),
        title: month.title(),
        weekdays: WEEKDAY_LABELS,
        cells,
        prev: month.shift(-1).into(),
        next: month.shift(1).into(),
    }
}
