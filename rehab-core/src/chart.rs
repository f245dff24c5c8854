//! Mô hình biểu đồ giờ trị liệu: cấu hình cố định, chuỗi số liệu theo hồ sơ và bố cục cột.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::{Profile, TherapyHours};

/// Màu RGBA, in ra dạng CSS `rgba(r, g, b, a)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChartOrientation {
    Horizontal,
}

/// Tùy chọn biểu đồ, đặt một lần khi tạo widget và không đổi theo dữ liệu.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub orientation: ChartOrientation,
    pub axis_min: f64,
    pub axis_max: f64,
    pub tick_step: f64,
    pub show_legend: bool,
    pub dataset_label: &'static str,
    pub border_width: f64,
}

impl ChartConfig {
    /// Cột ngang trên trục 0..10 giờ, ẩn chú giải.
    pub const fn therapy_hours() -> Self {
        Self {
            kind: ChartKind::Bar,
            orientation: ChartOrientation::Horizontal,
            axis_min: 0.0,
            axis_max: 10.0,
            tick_step: 2.0,
            show_legend: false,
            dataset_label: "Hours per Week",
            border_width: 1.0,
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::therapy_hours()
    }
}

/// Nhãn và chuỗi số liệu duy nhất của biểu đồ.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub fill_colors: Vec<Rgba>,
    pub border_colors: Vec<Rgba>,
}

impl ChartData {
    /// Giữ thứ tự các chuyên ngành như trong hồ sơ; màu đi theo chuyên ngành.
    pub fn from_hours(hours: &[TherapyHours]) -> Self {
        let mut data = ChartData::default();
        for entry in hours {
            let (fill, border) = entry.discipline.palette();
            data.labels.push(entry.discipline.label().to_string());
            data.values.push(entry.hours);
            data.fill_colors.push(fill);
            data.border_colors.push(border);
        }
        data
    }

    pub fn from_profile(profile: &Profile) -> Self {
        Self::from_hours(profile.therapy_hours)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Các cặp `(nhãn, giá trị)`.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

/// Vùng vẽ bên trong canvas, tính bằng pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// Vùng vẽ cho canvas kích thước cho trước, chừa lề cho nhãn và trục.
    pub fn with_margins(canvas_width: f64, canvas_height: f64) -> Self {
        let left = 96.0;
        let right = 16.0;
        let top = 12.0;
        let bottom = 28.0;
        Self {
            left,
            top,
            width: (canvas_width - left - right).max(0.0),
            height: (canvas_height - top - bottom).max(0.0),
        }
    }

    /// Tọa độ x của một giá trị trên trục giá trị.
    pub fn x_for(&self, config: &ChartConfig, value: f64) -> f64 {
        self.left + self.width * axis_ratio(config, value)
    }
}

/// Một cột, sẵn sàng để vẽ.
#[derive(Debug, Clone, PartialEq)]
pub struct BarGeometry {
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Rgba,
    pub border: Rgba,
}

/// Vị trí của `value` giữa hai đầu trục, kẹp trong `[0, 1]`.
pub fn axis_ratio(config: &ChartConfig, value: f64) -> f64 {
    let span = config.axis_max - config.axis_min;
    if span <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    ((value - config.axis_min) / span).clamp(0.0, 1.0)
}

/// Mỗi nhãn một cột ngang. Giá trị vượt đầu trục được vẽ hết chiều dài, trục không đổi.
pub fn layout_horizontal_bars(
    config: &ChartConfig,
    data: &ChartData,
    plot: PlotArea,
) -> Vec<BarGeometry> {
    if data.is_empty() {
        return Vec::new();
    }

    let band = plot.height / data.len() as f64;
    let bar_height = band * 0.6;

    data.pairs()
        .enumerate()
        .map(|(idx, (label, value))| BarGeometry {
            label: label.to_string(),
            value,
            x: plot.left,
            y: plot.top + band * idx as f64 + (band - bar_height) / 2.0,
            width: plot.width * axis_ratio(config, value),
            height: bar_height,
            fill: data.fill_colors.get(idx).copied().unwrap_or(FALLBACK_FILL),
            border: data.border_colors.get(idx).copied().unwrap_or(FALLBACK_BORDER),
        })
        .collect()
}

const FALLBACK_FILL: Rgba = Rgba::new(148, 163, 184, 0.6);
const FALLBACK_BORDER: Rgba = Rgba::new(148, 163, 184, 1.0);

/// Các vạch chia từ đầu đến cuối trục, tính cả hai đầu.
pub fn axis_ticks(config: &ChartConfig) -> Vec<f64> {
    if config.tick_step <= 0.0 || config.axis_max <= config.axis_min {
        return vec![config.axis_min, config.axis_max];
    }

    let steps = ((config.axis_max - config.axis_min) / config.tick_step).round() as usize;
    (0..=steps)
        .map(|idx| config.axis_min + config.tick_step * idx as f64)
        .collect()
}
