use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

use super::{Followup, Research};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumString, AsRefStr, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ScheduleStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
}

impl ScheduleStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ScheduleStatus::Scheduled => "예정",
            ScheduleStatus::Completed => "완료",
            ScheduleStatus::Cancelled => "취소",
        }
    }
}

/// A planned visit tied to one followup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: u64,
    pub user_id: u64,
    pub followup_id: u64,
    pub visit_date: NaiveDate,
    #[serde(with = "visit_time")]
    pub visit_time: NaiveTime,
    pub location: String,
    pub status: ScheduleStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateScheduleRequest {
    pub followup_id: u64,
    pub visit_date: NaiveDate,
    #[serde(with = "visit_time")]
    pub visit_time: NaiveTime,
    #[serde(default)]
    pub location: String,
}

/// Edit form. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateScheduleRequest {
    pub followup_id: Option<u64>,
    pub visit_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "visit_time::deserialize_option")]
    pub visit_time: Option<NaiveTime>,
    pub location: Option<String>,
    pub status: Option<ScheduleStatus>,
}

impl Schedule {
    /// Shallow merge of an edit form. The caller checks a new followup id first.
    pub fn apply(&mut self, update: UpdateScheduleRequest) {
        if let Some(followup_id) = update.followup_id {
            self.followup_id = followup_id;
        }
        if let Some(date) = update.visit_date {
            self.visit_date = date;
        }
        if let Some(time) = update.visit_time {
            self.visit_time = time;
        }
        if let Some(location) = update.location {
            self.location = location.trim().to_string();
        }
        if let Some(status) = update.status {
            self.status = status;
        }
    }
}

/// Row of the upcoming-visits list
#[derive(Debug, Clone, Serialize)]
pub struct UpcomingVisit {
    #[serde(flatten)]
    pub schedule: Schedule,
    pub status_label: &'static str,
    pub followup: Option<Followup>,
    pub research: Option<Research>,
}

/// Visit times travel as `HH:MM`, the format of an HTML time input.
/// Seconds are accepted on input and dropped on output.
pub(crate) mod visit_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn parse(s: &str) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(s, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
            .ok()
    }

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid visit time: {}", s)))
    }

    pub fn deserialize_option<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => parse(&s)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid visit time: {}", s))),
            None => Ok(None),
        }
    }
}
