//! Demo data set loaded at startup: two salespeople, one manager and a
//! handful of followups, visits and notes.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::{CrmData, NextIds};
use crate::models::{
    ActionType, Followup, FollowupStatus, History, Priority, Research, Role, Schedule,
    ScheduleStatus, User,
};

const DEMO_PASSWORD: &str = "1234";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default()
}

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    date(y, mo, d).and_time(time(h, mi))
}

fn user(id: u64, username: &str, name: &str, role: Role) -> User {
    User {
        id,
        username: username.to_string(),
        name: name.to_string(),
        role,
        password: DEMO_PASSWORD.to_string(),
    }
}

pub fn demo_data() -> CrmData {
    let users = vec![
        user(1, "sales1", "김영업", Role::Sales),
        user(2, "sales2", "이세일즈", Role::Sales),
        user(3, "manager1", "박관리", Role::Manager),
    ];

    let followups = vec![
        Followup {
            id: 1,
            user_id: 1,
            customer_name: "홍길동".to_string(),
            company: "ABC회사".to_string(),
            status: FollowupStatus::Active,
            priority: Priority::High,
            created_at: date(2025, 6, 10),
        },
        Followup {
            id: 2,
            user_id: 1,
            customer_name: "김고객".to_string(),
            company: "XYZ그룹".to_string(),
            status: FollowupStatus::Active,
            priority: Priority::Medium,
            created_at: date(2025, 6, 12),
        },
        Followup {
            id: 3,
            user_id: 2,
            customer_name: "이클라이언트".to_string(),
            company: "DEF기업".to_string(),
            status: FollowupStatus::Completed,
            priority: Priority::Low,
            created_at: date(2025, 6, 8),
        },
    ];

    let schedules = vec![
        Schedule {
            id: 1,
            user_id: 1,
            followup_id: 1,
            visit_date: date(2025, 6, 20),
            visit_time: time(14, 0),
            location: "ABC회사 본사".to_string(),
            status: ScheduleStatus::Scheduled,
        },
        Schedule {
            id: 2,
            user_id: 1,
            followup_id: 2,
            visit_date: date(2025, 6, 22),
            visit_time: time(10, 0),
            location: "XYZ그룹 강남지점".to_string(),
            status: ScheduleStatus::Scheduled,
        },
    ];

    let histories = vec![
        History {
            id: 1,
            followup_id: 1,
            user_id: 1,
            action_type: ActionType::Call,
            content: "초기 상담 진행. 제품 관심도 높음".to_string(),
            created_at: at(2025, 6, 10, 9, 30),
        },
        History {
            id: 2,
            followup_id: 1,
            user_id: 1,
            action_type: ActionType::Email,
            content: "제품 카탈로그 및 견적서 발송".to_string(),
            created_at: at(2025, 6, 11, 16, 20),
        },
    ];

    let researches = vec![Research {
        id: 1,
        schedule_id: 1,
        user_id: 1,
        customer_info: "IT 솔루션 전문 기업, 직원 50명".to_string(),
        market_analysis: "경쟁사 대비 가격 경쟁력 있음".to_string(),
        notes: "의사결정권자는 CTO, 예산 승인 6월말 예정".to_string(),
    }];

    CrmData {
        users,
        followups,
        schedules,
        histories,
        researches,
        next_ids: NextIds {
            followup: 4,
            schedule: 3,
            history: 3,
            research: 2,
        },
    }
}
