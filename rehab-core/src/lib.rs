//! Logic lõi cho bảng điều khiển phục hồi chức năng: hồ sơ, biểu đồ và phiên hiển thị.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

pub mod chart;
pub mod profiles;
pub mod session;

pub use chart::{
    axis_ticks, layout_horizontal_bars, BarGeometry, ChartConfig, ChartData, ChartKind,
    ChartOrientation, PlotArea, Rgba,
};
pub use profiles::{all_profiles, get_profile};
pub use session::{ChartLifecycle, DashboardSession, DashboardSurface, StatusCard};

/// Khóa tra cứu hồ sơ. Tập khóa đóng, chỉ có ba giá trị.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(rename_all = "snake_case")]
pub enum ProfileKey {
    Mild,
    #[default]
    Moderate,
    Severe,
}

impl ProfileKey {
    /// Thứ tự hiển thị các nút chọn hồ sơ.
    pub const ALL: [ProfileKey; 3] = [ProfileKey::Mild, ProfileKey::Moderate, ProfileKey::Severe];

    pub fn as_str(self) -> &'static str {
        match self {
            ProfileKey::Mild => "mild",
            ProfileKey::Moderate => "moderate",
            ProfileKey::Severe => "severe",
        }
    }

    /// Nhãn ngắn cho nút bấm.
    pub fn button_label(self) -> &'static str {
        match self {
            ProfileKey::Mild => "Mild",
            ProfileKey::Moderate => "Moderate",
            ProfileKey::Severe => "Severe",
        }
    }
}

impl fmt::Display for ProfileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileKey {
    type Err = DashboardError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mild" => Ok(ProfileKey::Mild),
            "moderate" => Ok(ProfileKey::Moderate),
            "severe" => Ok(ProfileKey::Severe),
            _ => Err(DashboardError::UnknownProfile(value.to_string())),
        }
    }
}

/// Bộ chọn kiểu dáng cho thẻ trạng thái. Không mang ý nghĩa nghiệp vụ nào khác.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SeverityClass {
    Mild,
    Moderate,
    Severe,
}

impl SeverityClass {
    /// Lớp CSS tương ứng, ví dụ `status-severe`.
    pub fn css_class(self) -> &'static str {
        match self {
            SeverityClass::Mild => "status-mild",
            SeverityClass::Moderate => "status-moderate",
            SeverityClass::Severe => "status-severe",
        }
    }
}

/// Chuyên ngành trị liệu.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Discipline {
    Physical,
    Occupational,
    Speech,
}

impl Discipline {
    /// Nhãn trục biểu đồ.
    pub fn label(self) -> &'static str {
        match self {
            Discipline::Physical => "Physical",
            Discipline::Occupational => "Occupational",
            Discipline::Speech => "Speech",
        }
    }

    /// Tên buổi trị liệu trong lịch tuần.
    pub fn therapy_name(self) -> &'static str {
        match self {
            Discipline::Physical => "Physical Therapy",
            Discipline::Occupational => "Occupational Therapy",
            Discipline::Speech => "Speech Therapy",
        }
    }

    /// Màu nền và viền của cột, gắn theo chuyên ngành chứ không theo vị trí.
    pub fn palette(self) -> (Rgba, Rgba) {
        let (r, g, b) = match self {
            Discipline::Physical => (0, 123, 255),
            Discipline::Occupational => (30, 135, 85),
            Discipline::Speech => (245, 156, 0),
        };
        (Rgba::new(r, g, b, 0.6), Rgba::new(r, g, b, 1.0))
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Số giờ trị liệu mỗi tuần của một chuyên ngành.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct TherapyHours {
    pub discipline: Discipline,
    pub hours: f64,
}

/// Buổi sáng hay buổi chiều.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DaySlot {
    #[serde(rename = "AM")]
    Am,
    #[serde(rename = "PM")]
    Pm,
}

impl fmt::Display for DaySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DaySlot::Am => f.write_str("AM"),
            DaySlot::Pm => f.write_str("PM"),
        }
    }
}

/// Một buổi trị liệu trong ngày.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct TherapySession {
    pub discipline: Discipline,
    pub slot: DaySlot,
}

impl fmt::Display for TherapySession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.discipline.therapy_name(), self.slot)
    }
}

/// Cách nối các buổi trị liệu trong cùng một ngày.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SessionJoin {
    /// `A, B`
    #[default]
    Comma,
    /// `A & B`
    Ampersand,
}

impl SessionJoin {
    pub fn separator(self) -> &'static str {
        match self {
            SessionJoin::Comma => ", ",
            SessionJoin::Ampersand => " & ",
        }
    }
}

/// Một dòng trong lịch tuần: ngày và các buổi trị liệu theo thứ tự.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub day: Weekday,
    pub sessions: &'static [TherapySession],
    pub join: SessionJoin,
}

impl ScheduleEntry {
    /// Phần nhãn được nhấn mạnh, ví dụ `Mon:`.
    pub fn day_label(&self) -> String {
        format!("{}:", self.day)
    }

    /// Phần nội dung sau nhãn ngày.
    pub fn sessions_text(&self) -> String {
        self.sessions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(self.join.separator())
    }
}

impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day_label(), self.sessions_text())
    }
}

/// Hồ sơ phục hồi chức năng, là hằng số biên dịch sẵn.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Profile {
    pub key: ProfileKey,
    pub label: &'static str,
    pub summary: &'static str,
    pub severity_class: SeverityClass,
    pub therapy_hours: &'static [TherapyHours],
    pub weekly_plan: &'static [ScheduleEntry],
}

impl Profile {
    /// Số giờ của một chuyên ngành, nếu hồ sơ có chuyên ngành đó.
    pub fn hours_for(&self, discipline: Discipline) -> Option<f64> {
        self.therapy_hours
            .iter()
            .find(|entry| entry.discipline == discipline)
            .map(|entry| entry.hours)
    }

    /// Tổng số giờ trị liệu mỗi tuần.
    pub fn total_hours(&self) -> f64 {
        self.therapy_hours.iter().map(|entry| entry.hours).sum()
    }
}

/// Id các vùng hiển thị trong tài liệu HTML.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardTargets {
    pub status_card: String,
    pub patient_profile: String,
    pub plan_summary: String,
    pub weekly_plan: String,
    pub chart_canvas: String,
}

impl Default for DashboardTargets {
    fn default() -> Self {
        Self {
            status_card: "status-card".to_string(),
            patient_profile: "patient-profile".to_string(),
            plan_summary: "plan-summary".to_string(),
            weekly_plan: "weekly-plan-list".to_string(),
            chart_canvas: "therapy-chart".to_string(),
        }
    }
}

/// Cấu hình khởi động bảng điều khiển.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Hồ sơ hiển thị lần đầu khi tải trang.
    pub initial_profile: ProfileKey,
    pub targets: DashboardTargets,
}

/// Lỗi chung của bảng điều khiển.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("Không có hồ sơ với khóa `{0}`")]
    UnknownProfile(String),
    #[error("Không tìm thấy vùng hiển thị `{0}`")]
    MissingTarget(String),
    #[error("Lỗi vẽ: {0}")]
    Render(String),
}
