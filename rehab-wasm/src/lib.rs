//! Bridge WASM <-> JavaScript trung lập framework cho bảng điều khiển phục hồi.

use rehab_core::{
    all_profiles as core_profiles, get_profile as core_profile, ChartConfig, ChartData,
    DashboardConfig, DashboardError, ProfileKey,
};
use serde::{Deserialize, Serialize};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// Cấu hình phía JS, mọi trường đều tùy chọn và được gộp lên giá trị mặc định.
#[derive(Debug, Default, Deserialize)]
pub struct JsDashboardConfig {
    #[serde(default)]
    initial_profile: Option<String>,
    #[serde(default)]
    status_card: Option<String>,
    #[serde(default)]
    patient_profile: Option<String>,
    #[serde(default)]
    plan_summary: Option<String>,
    #[serde(default)]
    weekly_plan: Option<String>,
    #[serde(default)]
    chart_canvas: Option<String>,
}

impl TryFrom<JsDashboardConfig> for DashboardConfig {
    type Error = DashboardError;

    fn try_from(cfg: JsDashboardConfig) -> Result<Self, Self::Error> {
        let mut base = DashboardConfig::default();
        if let Some(key) = cfg.initial_profile {
            base.initial_profile = key.parse()?;
        }

        let targets = &mut base.targets;
        let overrides = [
            (&mut targets.status_card, cfg.status_card),
            (&mut targets.patient_profile, cfg.patient_profile),
            (&mut targets.plan_summary, cfg.plan_summary),
            (&mut targets.weekly_plan, cfg.weekly_plan),
            (&mut targets.chart_canvas, cfg.chart_canvas),
        ];
        for (slot, value) in overrides {
            if let Some(id) = value.filter(|id| !id.trim().is_empty()) {
                *slot = id;
            }
        }

        Ok(base)
    }
}

/// Đọc cấu hình tùy chọn từ JS; `None` dùng cấu hình mặc định.
pub fn config_from_js(config: Option<JsValue>) -> Result<DashboardConfig, JsValue> {
    let Some(js_cfg) = config.filter(|value| !value.is_undefined() && !value.is_null()) else {
        return Ok(DashboardConfig::default());
    };

    let cfg: JsDashboardConfig = from_value(js_cfg)
        .map_err(|err| JsValue::from_str(&format!("Không đọc được config: {err}")))?;
    DashboardConfig::try_from(cfg).map_err(|err| JsValue::from_str(&format_dashboard_error(err)))
}

#[wasm_bindgen]
pub fn profile_keys() -> Result<JsValue, JsValue> {
    init_panic_hook();
    let keys: Vec<&str> = ProfileKey::ALL.iter().map(|key| key.as_str()).collect();
    serialize(&keys)
}

#[wasm_bindgen]
pub fn get_profile(key: &str) -> Result<JsValue, JsValue> {
    init_panic_hook();
    serialize(core_profile(parse_key(key)?))
}

#[wasm_bindgen]
pub fn all_profiles() -> Result<JsValue, JsValue> {
    init_panic_hook();
    serialize(&core_profiles())
}

#[wasm_bindgen]
pub fn chart_data(key: &str) -> Result<JsValue, JsValue> {
    init_panic_hook();
    serialize(&ChartData::from_profile(core_profile(parse_key(key)?)))
}

#[wasm_bindgen]
pub fn chart_config() -> Result<JsValue, JsValue> {
    init_panic_hook();
    serialize(&ChartConfig::therapy_hours())
}

/// Cả ba hồ sơ dưới dạng chuỗi JSON định dạng sẵn.
#[wasm_bindgen]
pub fn profiles_json() -> Result<String, JsValue> {
    serde_json::to_string_pretty(&core_profiles())
        .map_err(|err| JsValue::from_str(&format!("Không serialize hồ sơ: {err}")))
}

/// Chuẩn hóa cấu hình JS thành cấu hình đầy đủ.
#[wasm_bindgen]
pub fn resolve_config(config: Option<JsValue>) -> Result<JsValue, JsValue> {
    init_panic_hook();
    serialize(&config_from_js(config)?)
}

fn parse_key(key: &str) -> Result<ProfileKey, JsValue> {
    key.parse::<ProfileKey>()
        .map_err(|err| JsValue::from_str(&format_dashboard_error(err)))
}

fn serialize<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(|err| JsValue::from_str(&format!("Không serialize dữ liệu: {err}")))
}

fn init_panic_hook() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

pub fn format_dashboard_error(err: DashboardError) -> String {
    format!("Dashboard error: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> Result<DashboardConfig, DashboardError> {
        let cfg: JsDashboardConfig = serde_json::from_value(value).expect("Config JSON không hợp lệ");
        DashboardConfig::try_from(cfg)
    }

    #[test]
    fn empty_config_keeps_defaults() {
        let cfg = parse(json!({})).expect("Config mặc định phải hợp lệ");
        assert_eq!(cfg, DashboardConfig::default());
        assert_eq!(cfg.initial_profile, ProfileKey::Moderate);
    }

    #[test]
    fn overrides_profile_and_targets() {
        let cfg = parse(json!({
            "initial_profile": "severe",
            "chart_canvas": "hours-canvas",
            "weekly_plan": "  "
        }))
        .expect("Config phải hợp lệ");

        assert_eq!(cfg.initial_profile, ProfileKey::Severe);
        assert_eq!(cfg.targets.chart_canvas, "hours-canvas");
        assert_eq!(cfg.targets.weekly_plan, "weekly-plan-list");
    }

    #[test]
    fn unknown_profile_is_rejected() {
        let err = parse(json!({ "initial_profile": "critical" })).unwrap_err();
        assert!(matches!(err, DashboardError::UnknownProfile(_)));
        assert!(format_dashboard_error(err).contains("critical"));
    }
}
