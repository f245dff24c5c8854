//! Giao diện bảng điều khiển phục hồi chức năng cho môi trường WebAssembly.

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod styles;

#[cfg(target_arch = "wasm32")]
mod wasm_ui {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::dom::DomSurface;
    use crate::styles;
    use rehab_core::{
        DashboardConfig, DashboardError, DashboardSession, DashboardTargets, ProfileKey,
    };
    use rehab_wasm::config_from_js;
    use wasm_bindgen::prelude::*;
    use web_sys::{console, Document, Element, Window};
    use yew::prelude::*;

    type SessionSlot = Rc<RefCell<Option<DashboardSession<DomSurface>>>>;

    #[derive(Properties, PartialEq)]
    pub struct RehabDashboardProps {
        pub config: DashboardConfig,
    }

    #[function_component(RehabDashboard)]
    fn rehab_dashboard(props: &RehabDashboardProps) -> Html {
        use_effect_with((), |_| {
            if let Some(document) = web_sys::window().and_then(|window| window.document()) {
                if let Err(err) = styles::ensure_styles(&document) {
                    console::error_1(&err);
                }
            }
            || ()
        });

        let initial = props.config.initial_profile;
        let active = use_state(move || initial);
        let session: SessionSlot = use_mut_ref(|| None);

        // Tìm các vùng hiển thị đúng một lần; thiếu vùng nào thì bảng điều khiển không khởi động.
        {
            let session = session.clone();
            let targets = props.config.targets.clone();
            use_effect_with((), move |_| {
                match open_session(&targets) {
                    Ok(opened) => *session.borrow_mut() = Some(opened),
                    Err(err) => console::error_1(&JsValue::from_str(&format!(
                        "rehab-ui: không khởi động được: {err}"
                    ))),
                }
                || ()
            });
        }

        {
            let session = session.clone();
            use_effect_with(*active, move |key| {
                let key = *key;
                if let Some(session) = session.borrow_mut().as_mut() {
                    match session.show(key) {
                        Ok(()) => console::debug_1(&JsValue::from_str(&format!(
                            "rehab-ui: đã hiển thị hồ sơ {key}"
                        ))),
                        Err(err) => console::error_1(&JsValue::from_str(&format!(
                            "rehab-ui: {err}"
                        ))),
                    }
                }
                || ()
            });
        }

        let buttons = render_profile_buttons(active.clone());
        let targets = &props.config.targets;

        // Nội dung các vùng dưới đây do DomSurface ghi, Yew chỉ dựng khung.
        html! {
            <div class="rehab-root">
                <header class="rehab-header">
                    <div>
                        <span class="rehab-eyebrow">{"Phục hồi sau đột quỵ"}</span>
                        <h1>{"Kế hoạch phục hồi chức năng"}</h1>
                    </div>
                    { buttons }
                </header>
                <section id={targets.status_card.clone()} aria-live="polite">
                    <h2 id={targets.patient_profile.clone()}></h2>
                    <p id={targets.plan_summary.clone()}></p>
                </section>
                <div class="rehab-grid">
                    <section class="card">
                        <h3>{"Lịch trị liệu trong tuần"}</h3>
                        <ul id={targets.weekly_plan.clone()} class="weekly-plan"></ul>
                    </section>
                    <section class="card chart-card">
                        <h3>{"Số giờ trị liệu mỗi tuần"}</h3>
                        <canvas
                            id={targets.chart_canvas.clone()}
                            width="520"
                            height="220"
                            role="img"
                            aria-label="Biểu đồ số giờ trị liệu theo chuyên ngành"
                        ></canvas>
                    </section>
                </div>
            </div>
        }
    }

    fn render_profile_buttons(active: UseStateHandle<ProfileKey>) -> Html {
        html! {
            <div class="profile-buttons" role="group" aria-label="Chọn hồ sơ bệnh nhân">
                {
                    for ProfileKey::ALL.into_iter().map(|key| {
                        let active = active.clone();
                        let is_active = *active == key;
                        let onclick = Callback::from(move |_| active.set(key));

                        html! {
                            <button
                                type="button"
                                id={format!("btn-{key}")}
                                class={classes!("profile-button", is_active.then_some("is-active"))}
                                aria-pressed={is_active.to_string()}
                                onclick={onclick}
                            >
                                { key.button_label() }
                            </button>
                        }
                    })
                }
            </div>
        }
    }

    fn open_session(
        targets: &DashboardTargets,
    ) -> Result<DashboardSession<DomSurface>, DashboardError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| DashboardError::MissingTarget("document".to_string()))?;
        Ok(DashboardSession::new(DomSurface::locate(&document, targets)?))
    }

    #[wasm_bindgen]
    pub fn mount_dashboard(selector: &str, config: Option<JsValue>) -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let window: Window =
            web_sys::window().ok_or_else(|| JsValue::from_str("Không có window"))?;
        let document: Document = window
            .document()
            .ok_or_else(|| JsValue::from_str("Không truy cập được document"))?;

        let target: Element = document
            .query_selector(selector)
            .map_err(|err| JsValue::from_str(&format!("Selector lỗi: {err:?}")))?
            .ok_or_else(|| JsValue::from_str("Không tìm thấy element theo selector"))?;

        let config = config_from_js(config)?;

        yew::Renderer::<RehabDashboard>::with_root_and_props(target, RehabDashboardProps { config })
            .render();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_ui::mount_dashboard;

#[cfg(not(target_arch = "wasm32"))]
pub fn mount_dashboard(
    _: &str,
    _: Option<wasm_bindgen::JsValue>,
) -> Result<(), wasm_bindgen::JsValue> {
    Err(wasm_bindgen::JsValue::from_str(
        "rehab-ui chỉ hỗ trợ biên dịch target wasm32",
    ))
}
