#![cfg(target_arch = "wasm32")]

use rehab_core::{
    ChartConfig, ChartData, DashboardError, DashboardSurface, DashboardTargets, ScheduleEntry,
    StatusCard,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlCanvasElement};

use crate::canvas::CanvasChart;

/// Bốn vùng hiển thị trong DOM, được tìm một lần trước lần vẽ đầu tiên.
pub struct DomSurface {
    document: Document,
    status_card: Element,
    patient_profile: Element,
    plan_summary: Element,
    weekly_plan: Element,
    chart_canvas: HtmlCanvasElement,
}

impl DomSurface {
    /// Thiếu bất kỳ vùng nào là lỗi khởi động, không vẽ gì cả.
    pub fn locate(document: &Document, targets: &DashboardTargets) -> Result<Self, DashboardError> {
        let chart_canvas = find(document, &targets.chart_canvas)?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| {
                DashboardError::Render(format!("`{}` không phải thẻ <canvas>", targets.chart_canvas))
            })?;

        Ok(Self {
            document: document.clone(),
            status_card: find(document, &targets.status_card)?,
            patient_profile: find(document, &targets.patient_profile)?,
            plan_summary: find(document, &targets.plan_summary)?,
            weekly_plan: find(document, &targets.weekly_plan)?,
            chart_canvas,
        })
    }

    /// `<li><strong>{label}</strong> {text}</li>`, chỉ dùng text node, không parse HTML.
    fn plan_item(&self, label: &str, text: &str) -> Result<Element, JsValue> {
        let item = self.document.create_element("li")?;
        let day = self.document.create_element("strong")?;
        day.set_text_content(Some(label));
        item.append_child(&day)?;
        let sessions = self.document.create_text_node(&format!(" {text}"));
        item.append_child(&sessions)?;
        Ok(item)
    }
}

impl DashboardSurface for DomSurface {
    type Chart = CanvasChart;

    fn apply_status(&mut self, status: &StatusCard) -> Result<(), DashboardError> {
        self.status_card.set_class_name(&status.class_name());
        self.patient_profile.set_text_content(Some(status.label));
        self.plan_summary.set_text_content(Some(status.summary));
        Ok(())
    }

    fn replace_plan(&mut self, entries: &[ScheduleEntry]) -> Result<(), DashboardError> {
        self.weekly_plan.set_text_content(None);
        for entry in entries {
            let item = self
                .plan_item(&entry.day_label(), &entry.sessions_text())
                .map_err(js_error)?;
            self.weekly_plan.append_child(&item).map_err(js_error)?;
        }
        Ok(())
    }

    fn create_chart(
        &mut self,
        config: &ChartConfig,
        data: &ChartData,
    ) -> Result<CanvasChart, DashboardError> {
        CanvasChart::attach(self.chart_canvas.clone(), config.clone(), data.clone())
    }

    fn update_chart(&mut self, chart: &mut CanvasChart, data: ChartData) -> Result<(), DashboardError> {
        chart.set_data(data);
        chart.redraw()
    }
}

fn find(document: &Document, id: &str) -> Result<Element, DashboardError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| DashboardError::MissingTarget(id.to_string()))
}

pub fn js_error(err: JsValue) -> DashboardError {
    DashboardError::Render(format!("{err:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rehab_core::{get_profile, ProfileKey};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    /// Dựng bốn vùng hiển thị với id có tiền tố riêng cho từng test.
    fn mount_targets(prefix: &str) -> (Document, DashboardTargets) {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("Không có document");
        let body = document.body().expect("Không có <body>");

        let targets = DashboardTargets {
            status_card: format!("{prefix}-status"),
            patient_profile: format!("{prefix}-profile"),
            plan_summary: format!("{prefix}-summary"),
            weekly_plan: format!("{prefix}-plan"),
            chart_canvas: format!("{prefix}-chart"),
        };

        let status = document.create_element("section").expect("section");
        status.set_id(&targets.status_card);
        for (tag, id) in [("h2", &targets.patient_profile), ("p", &targets.plan_summary)] {
            let child = document.create_element(tag).expect("child");
            child.set_id(id);
            status.append_child(&child).expect("append");
        }
        body.append_child(&status).expect("append status");

        for (tag, id) in [("ul", &targets.weekly_plan), ("canvas", &targets.chart_canvas)] {
            let element = document.create_element(tag).expect("element");
            element.set_id(id);
            body.append_child(&element).expect("append");
        }

        (document, targets)
    }

    fn element(document: &Document, id: &str) -> Element {
        document.get_element_by_id(id).expect("Không tìm thấy element")
    }

    #[wasm_bindgen_test]
    fn missing_target_is_reported_by_id() {
        let (document, mut targets) = mount_targets("missing");
        targets.weekly_plan = "khong-ton-tai".to_string();

        let err = DomSurface::locate(&document, &targets).err();
        assert!(matches!(
            err,
            Some(DashboardError::MissingTarget(id)) if id == "khong-ton-tai"
        ));
    }

    #[wasm_bindgen_test]
    fn non_canvas_chart_target_is_rejected() {
        let (document, mut targets) = mount_targets("not-canvas");
        targets.chart_canvas = targets.weekly_plan.clone();

        let err = DomSurface::locate(&document, &targets).err();
        assert!(matches!(err, Some(DashboardError::Render(_))));
    }

    #[wasm_bindgen_test]
    fn status_class_is_overwritten_and_text_is_literal() {
        let (document, targets) = mount_targets("status");
        element(&document, &targets.status_card).set_class_name("card status-mild stale");
        let mut surface = DomSurface::locate(&document, &targets).expect("locate");

        let status = StatusCard {
            severity_class: rehab_core::SeverityClass::Severe,
            label: "<b>Severe</b> Stroke",
            summary: "Focus: <i>swallowing</i>",
        };
        surface.apply_status(&status).expect("apply_status");

        let card = element(&document, &targets.status_card);
        assert_eq!(card.class_name(), "card status-severe");

        let label = element(&document, &targets.patient_profile);
        assert_eq!(label.text_content().as_deref(), Some("<b>Severe</b> Stroke"));
        assert!(label.query_selector("b").expect("selector").is_none());
        let summary = element(&document, &targets.plan_summary);
        assert_eq!(summary.text_content().as_deref(), Some("Focus: <i>swallowing</i>"));
    }

    #[wasm_bindgen_test]
    fn replace_plan_clears_before_appending() {
        let (document, targets) = mount_targets("plan");
        let mut surface = DomSurface::locate(&document, &targets).expect("locate");

        surface
            .replace_plan(get_profile(ProfileKey::Mild).weekly_plan)
            .expect("replace_plan");
        surface
            .replace_plan(get_profile(ProfileKey::Severe).weekly_plan)
            .expect("replace_plan");

        let list = element(&document, &targets.weekly_plan);
        assert_eq!(list.child_element_count(), 5);

        let first = list.first_element_child().expect("Không có <li>");
        assert_eq!(first.tag_name(), "LI");
        assert_eq!(
            first.text_content().as_deref(),
            Some("Mon: Physical Therapy (AM), Speech Therapy (PM)")
        );
        let strong = first.query_selector("strong").expect("selector").expect("Không có <strong>");
        assert_eq!(strong.text_content().as_deref(), Some("Mon:"));

        let last = list.last_element_child().expect("Không có <li>");
        assert_eq!(
            last.text_content().as_deref(),
            Some("Fri: Physical Therapy (AM), Speech Therapy (PM)")
        );
    }

    #[wasm_bindgen_test]
    fn plan_item_text_is_never_parsed_as_html() {
        let (document, targets) = mount_targets("markup");
        let surface = DomSurface::locate(&document, &targets).expect("locate");

        let item = surface
            .plan_item("<b>Mon:</b>", "<b>Physical</b> & <img src=x>")
            .expect("plan_item");

        assert_eq!(item.child_element_count(), 1);
        assert!(item.query_selector("b").expect("selector").is_none());
        assert!(item.query_selector("img").expect("selector").is_none());
        assert_eq!(
            item.text_content().as_deref(),
            Some("<b>Mon:</b> <b>Physical</b> & <img src=x>")
        );
    }

    #[wasm_bindgen_test]
    fn chart_is_created_then_updated_on_same_canvas() {
        let (document, targets) = mount_targets("chart");
        let mut surface = DomSurface::locate(&document, &targets).expect("locate");
        let config = ChartConfig::therapy_hours();

        let mut chart = surface
            .create_chart(&config, &ChartData::from_profile(get_profile(ProfileKey::Moderate)))
            .expect("create_chart");
        surface
            .update_chart(&mut chart, ChartData::from_profile(get_profile(ProfileKey::Severe)))
            .expect("update_chart");
    }
}
