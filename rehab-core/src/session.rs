//! Phiên hiển thị: giữ widget biểu đồ và vẽ lại toàn bộ bảng điều khiển từ một hồ sơ.

use crate::chart::{ChartConfig, ChartData};
use crate::{
    get_profile, DashboardConfig, DashboardError, Profile, ProfileKey, ScheduleEntry,
    SeverityClass,
};

/// Nội dung thẻ trạng thái.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCard {
    pub severity_class: SeverityClass,
    pub label: &'static str,
    pub summary: &'static str,
}

impl StatusCard {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            severity_class: profile.severity_class,
            label: profile.label,
            summary: profile.summary,
        }
    }

    /// Toàn bộ thuộc tính `class` của thẻ, ghi đè chứ không gộp.
    pub fn class_name(&self) -> String {
        format!("card {}", self.severity_class.css_class())
    }
}

/// Các vùng hiển thị mà phiên ghi vào (DOM, terminal, bản ghi trong test).
pub trait DashboardSurface {
    /// Handle của widget biểu đồ do surface tạo ra.
    type Chart;

    fn apply_status(&mut self, status: &StatusCard) -> Result<(), DashboardError>;

    /// Xóa danh sách cũ rồi thêm từng mục theo đúng thứ tự.
    fn replace_plan(&mut self, entries: &[ScheduleEntry]) -> Result<(), DashboardError>;

    fn create_chart(
        &mut self,
        config: &ChartConfig,
        data: &ChartData,
    ) -> Result<Self::Chart, DashboardError>;

    /// Ghi đè nhãn và chuỗi số liệu của widget có sẵn rồi vẽ lại.
    fn update_chart(&mut self, chart: &mut Self::Chart, data: ChartData)
        -> Result<(), DashboardError>;
}

/// Vòng đời widget biểu đồ: chưa tạo, hoặc đã tạo và được dùng lại.
#[derive(Debug)]
pub enum ChartLifecycle<W> {
    Uninitialized,
    Active(W),
}

impl<W> ChartLifecycle<W> {
    pub fn widget(&self) -> Option<&W> {
        match self {
            ChartLifecycle::Uninitialized => None,
            ChartLifecycle::Active(widget) => Some(widget),
        }
    }
}

/// Phiên bảng điều khiển, tạo một lần khi khởi động và dùng cho mọi lần vẽ.
pub struct DashboardSession<S: DashboardSurface> {
    surface: S,
    chart_config: ChartConfig,
    chart: ChartLifecycle<S::Chart>,
    displayed: Option<ProfileKey>,
}

impl<S: DashboardSurface> DashboardSession<S> {
    pub fn new(surface: S) -> Self {
        Self::with_chart_config(surface, ChartConfig::therapy_hours())
    }

    pub fn with_chart_config(surface: S, chart_config: ChartConfig) -> Self {
        Self {
            surface,
            chart_config,
            chart: ChartLifecycle::Uninitialized,
            displayed: None,
        }
    }

    /// Lần vẽ đầu tiên với hồ sơ khởi động trong cấu hình.
    pub fn start(&mut self, config: &DashboardConfig) -> Result<(), DashboardError> {
        self.show(config.initial_profile)
    }

    pub fn show(&mut self, key: ProfileKey) -> Result<(), DashboardError> {
        self.render(get_profile(key))
    }

    /// Vẽ lại thẻ trạng thái, lịch tuần và biểu đồ, theo đúng thứ tự đó.
    ///
    /// `displayed` đi theo thẻ trạng thái: đổi ngay khi thẻ đã ghi xong. Nếu bước
    /// lịch tuần hoặc biểu đồ lỗi, lỗi được trả về và các vùng sau đó giữ nội dung cũ.
    /// Biểu đồ chưa tạo được thì lần vẽ sau sẽ tạo lại.
    pub fn render(&mut self, profile: &Profile) -> Result<(), DashboardError> {
        self.surface.apply_status(&StatusCard::from_profile(profile))?;
        self.displayed = Some(profile.key);

        self.surface.replace_plan(profile.weekly_plan)?;

        let data = ChartData::from_profile(profile);
        match &mut self.chart {
            ChartLifecycle::Active(widget) => self.surface.update_chart(widget, data)?,
            ChartLifecycle::Uninitialized => {
                let widget = self.surface.create_chart(&self.chart_config, &data)?;
                self.chart = ChartLifecycle::Active(widget);
            }
        }

        Ok(())
    }

    /// Hồ sơ đang hiển thị; `None` trước lần vẽ đầu tiên.
    pub fn displayed(&self) -> Option<ProfileKey> {
        self.displayed
    }

    pub fn chart(&self) -> Option<&S::Chart> {
        self.chart.widget()
    }

    pub fn chart_config(&self) -> &ChartConfig {
        &self.chart_config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
