#![cfg(target_arch = "wasm32")]

//! Biểu đồ cột giờ trị liệu vẽ trên canvas HTML5.

use rehab_core::{
    axis_ticks, layout_horizontal_bars, ChartConfig, ChartData, DashboardError, PlotArea,
};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::dom::js_error;

const GRID_COLOR: &str = "rgba(148, 163, 184, 0.35)";
const TEXT_COLOR: &str = "#52606d";
const LABEL_FONT: &str = "13px 'Inter', system-ui, sans-serif";
const TICK_FONT: &str = "11px 'Inter', system-ui, sans-serif";

/// Widget biểu đồ gắn với một canvas. Tạo một lần, sau đó cập nhật tại chỗ.
pub struct CanvasChart {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    config: ChartConfig,
    data: ChartData,
}

impl CanvasChart {
    pub fn attach(
        canvas: HtmlCanvasElement,
        config: ChartConfig,
        data: ChartData,
    ) -> Result<Self, DashboardError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(js_error)?
            .ok_or_else(|| DashboardError::Render("Canvas không hỗ trợ context 2d".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| DashboardError::Render("Context không phải 2d".to_string()))?;

        let chart = Self {
            canvas,
            ctx,
            config,
            data,
        };
        chart.redraw()?;
        Ok(chart)
    }

    /// Thay nhãn và số liệu; cấu hình giữ nguyên như lúc tạo.
    pub fn set_data(&mut self, data: ChartData) {
        self.data = data;
    }

    pub fn redraw(&self) -> Result<(), DashboardError> {
        let width = f64::from(self.canvas.width());
        let height = f64::from(self.canvas.height());
        let plot = PlotArea::with_margins(width, height);
        let ctx = &self.ctx;

        ctx.clear_rect(0.0, 0.0, width, height);

        // lưới và nhãn vạch chia trên trục giá trị
        ctx.set_stroke_style_str(GRID_COLOR);
        ctx.set_line_width(1.0);
        ctx.set_fill_style_str(TEXT_COLOR);
        ctx.set_font(TICK_FONT);
        ctx.set_text_align("center");
        ctx.set_text_baseline("top");
        for tick in axis_ticks(&self.config) {
            let x = plot.x_for(&self.config, tick).round() + 0.5;
            ctx.begin_path();
            ctx.move_to(x, plot.top);
            ctx.line_to(x, plot.top + plot.height);
            ctx.stroke();
            ctx.fill_text(&format!("{tick}"), x, plot.top + plot.height + 8.0)
                .map_err(js_error)?;
        }

        ctx.set_font(LABEL_FONT);
        ctx.set_text_align("right");
        ctx.set_text_baseline("middle");
        ctx.set_line_width(self.config.border_width);
        for bar in layout_horizontal_bars(&self.config, &self.data, plot) {
            ctx.set_fill_style_str(&bar.fill.to_string());
            ctx.fill_rect(bar.x, bar.y, bar.width, bar.height);
            ctx.set_stroke_style_str(&bar.border.to_string());
            ctx.stroke_rect(bar.x, bar.y, bar.width, bar.height);

            ctx.set_fill_style_str(TEXT_COLOR);
            ctx.fill_text(&bar.label, plot.left - 10.0, bar.y + bar.height / 2.0)
                .map_err(js_error)?;
        }

        if self.config.show_legend {
            ctx.set_text_align("left");
            ctx.set_text_baseline("top");
            ctx.fill_text(self.config.dataset_label, plot.left, 0.0)
                .map_err(js_error)?;
        }

        Ok(())
    }
}
