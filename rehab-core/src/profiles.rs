//! Bảng hồ sơ cố định. Không có thao tác ghi.

use chrono::Weekday;

use crate::{
    DaySlot, Discipline, Profile, ProfileKey, ScheduleEntry, SessionJoin, SeverityClass,
    TherapyHours, TherapySession,
};
use crate::Discipline::{Occupational, Physical, Speech};

const fn hours(discipline: Discipline, hours: f64) -> TherapyHours {
    TherapyHours { discipline, hours }
}

const fn am(discipline: Discipline) -> TherapySession {
    TherapySession {
        discipline,
        slot: DaySlot::Am,
    }
}

const fn pm(discipline: Discipline) -> TherapySession {
    TherapySession {
        discipline,
        slot: DaySlot::Pm,
    }
}

static MILD: Profile = Profile {
    key: ProfileKey::Mild,
    label: "Mild Stroke Impairment",
    summary: "Focus: Regaining fine motor skills and high-level balance. Independent in daily living.",
    severity_class: SeverityClass::Mild,
    therapy_hours: &[hours(Physical, 3.0), hours(Occupational, 5.0), hours(Speech, 2.0)],
    weekly_plan: &[
        ScheduleEntry {
            day: Weekday::Mon,
            sessions: &[am(Occupational)],
            join: SessionJoin::Comma,
        },
        ScheduleEntry {
            day: Weekday::Tue,
            sessions: &[am(Physical)],
            join: SessionJoin::Comma,
        },
        ScheduleEntry {
            day: Weekday::Wed,
            sessions: &[am(Speech)],
            join: SessionJoin::Comma,
        },
        ScheduleEntry {
            day: Weekday::Thu,
            sessions: &[am(Occupational)],
            join: SessionJoin::Comma,
        },
        ScheduleEntry {
            day: Weekday::Fri,
            sessions: &[am(Physical), pm(Occupational)],
            join: SessionJoin::Ampersand,
        },
    ],
};

static MODERATE: Profile = Profile {
    key: ProfileKey::Moderate,
    label: "Moderate Stroke Impairment",
    summary: "Focus: Regaining mobility and self-care skills. Moderate assist needed.",
    severity_class: SeverityClass::Moderate,
    therapy_hours: &[hours(Physical, 6.0), hours(Occupational, 6.0), hours(Speech, 4.0)],
    weekly_plan: &[
        ScheduleEntry {
            day: Weekday::Mon,
            sessions: &[am(Physical), pm(Occupational)],
            join: SessionJoin::Comma,
        },
        ScheduleEntry {
            day: Weekday::Tue,
            sessions: &[am(Speech), pm(Physical)],
            join: SessionJoin::Comma,
        },
        ScheduleEntry {
            day: Weekday::Wed,
            sessions: &[am(Occupational)],
            join: SessionJoin::Comma,
        },
        ScheduleEntry {
            day: Weekday::Thu,
            sessions: &[am(Physical), pm(Speech)],
            join: SessionJoin::Comma,
        },
        ScheduleEntry {
            day: Weekday::Fri,
            sessions: &[am(Physical), pm(Occupational)],
            join: SessionJoin::Comma,
        },
    ],
};

static SEVERE: Profile = Profile {
    key: ProfileKey::Severe,
    label: "Severe Stroke Impairment",
    summary: "Focus: Basic mobility, swallowing, and communication. High level of care required.",
    severity_class: SeverityClass::Severe,
    therapy_hours: &[hours(Physical, 8.0), hours(Occupational, 5.0), hours(Speech, 7.0)],
    weekly_plan: &[
        ScheduleEntry {
            day: Weekday::Mon,
            sessions: &[am(Physical), pm(Speech)],
            join: SessionJoin::Comma,
        },
        ScheduleEntry {
            day: Weekday::Tue,
            sessions: &[am(Occupational), pm(Physical)],
            join: SessionJoin::Comma,
        },
        ScheduleEntry {
            day: Weekday::Wed,
            sessions: &[am(Speech), pm(Physical)],
            join: SessionJoin::Comma,
        },
        ScheduleEntry {
            day: Weekday::Thu,
            sessions: &[am(Occupational), pm(Speech)],
            join: SessionJoin::Comma,
        },
        ScheduleEntry {
            day: Weekday::Fri,
            sessions: &[am(Physical), pm(Speech)],
            join: SessionJoin::Comma,
        },
    ],
};

/// Tra cứu hồ sơ theo khóa.
pub fn get_profile(key: ProfileKey) -> &'static Profile {
    match key {
        ProfileKey::Mild => &MILD,
        ProfileKey::Moderate => &MODERATE,
        ProfileKey::Severe => &SEVERE,
    }
}

/// Cả ba hồ sơ, theo thứ tự `ProfileKey::ALL`.
pub fn all_profiles() -> [&'static Profile; 3] {
    ProfileKey::ALL.map(get_profile)
}
