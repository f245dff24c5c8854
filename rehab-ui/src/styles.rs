#![cfg(target_arch = "wasm32")]

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Node};

const STYLE_TAG_SELECTOR: &str = "style[data-rehab-ui]";

/// Default CSS for the dashboard along with easy-to-override design tokens.
pub const DEFAULT_STYLES: &str = r#"
:root {
  --rehab-font-family: 'Inter', system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
  --rehab-bg: #f8fafc;
  --rehab-card-bg: #ffffff;
  --rehab-card-border: rgba(148, 163, 184, 0.28);
  --rehab-radius: 16px;
  --rehab-text: #1f2933;
  --rehab-muted: #52606d;
  --rehab-heading: #11181c;
  --rehab-accent: #007bff;
  --rehab-status-mild: #1e8755;
  --rehab-status-mild-bg: rgba(30, 135, 85, 0.08);
  --rehab-status-moderate: #f59c00;
  --rehab-status-moderate-bg: rgba(245, 156, 0, 0.1);
  --rehab-status-severe: #b42318;
  --rehab-status-severe-bg: rgba(180, 35, 24, 0.08);
}

.rehab-root {
  font-family: var(--rehab-font-family);
  background: var(--rehab-bg);
  color: var(--rehab-text);
  border-radius: var(--rehab-radius);
  display: flex;
  flex-direction: column;
  gap: 20px;
  padding: 28px;
}

.rehab-header {
  display: flex;
  align-items: flex-end;
  justify-content: space-between;
  flex-wrap: wrap;
  gap: 16px;
}

.rehab-header h1 {
  margin: 4px 0 0;
  font-size: 1.6rem;
  color: var(--rehab-heading);
}

.rehab-eyebrow {
  font-size: 0.75rem;
  font-weight: 600;
  letter-spacing: 0.08em;
  text-transform: uppercase;
  color: var(--rehab-muted);
}

.profile-buttons {
  display: flex;
  gap: 8px;
}

.profile-button {
  border: 1px solid var(--rehab-card-border);
  background: var(--rehab-card-bg);
  color: var(--rehab-text);
  border-radius: 999px;
  padding: 8px 18px;
  font-weight: 600;
  cursor: pointer;
  transition: background 140ms ease-out, color 140ms ease-out;
}

.profile-button:hover {
  border-color: var(--rehab-accent);
}

.profile-button.is-active {
  background: var(--rehab-accent);
  border-color: var(--rehab-accent);
  color: #ffffff;
}

.card {
  background: var(--rehab-card-bg);
  border: 1px solid var(--rehab-card-border);
  border-radius: var(--rehab-radius);
  padding: 20px 24px;
  box-shadow: 0 12px 32px rgba(15, 23, 42, 0.06);
}

.card h2,
.card h3 {
  margin: 0 0 10px;
  color: var(--rehab-heading);
}

.card p {
  margin: 0;
  color: var(--rehab-muted);
  line-height: 1.5;
}

.status-mild {
  border-left: 6px solid var(--rehab-status-mild);
  background: var(--rehab-status-mild-bg);
}

.status-moderate {
  border-left: 6px solid var(--rehab-status-moderate);
  background: var(--rehab-status-moderate-bg);
}

.status-severe {
  border-left: 6px solid var(--rehab-status-severe);
  background: var(--rehab-status-severe-bg);
}

.rehab-grid {
  display: grid;
  gap: 20px;
  grid-template-columns: minmax(280px, 1fr) minmax(320px, 1.2fr);
}

.weekly-plan {
  list-style: none;
  margin: 0;
  padding: 0;
  display: flex;
  flex-direction: column;
  gap: 10px;
}

.weekly-plan li {
  padding: 10px 12px;
  border-radius: 10px;
  background: rgba(71, 84, 103, 0.06);
}

.weekly-plan strong {
  color: var(--rehab-heading);
  margin-right: 4px;
}

.chart-card canvas {
  width: 100%;
  height: auto;
}

@media (max-width: 760px) {
  .rehab-root {
    padding: 18px;
  }

  .rehab-grid {
    grid-template-columns: 1fr;
  }

  .profile-buttons {
    width: 100%;
  }

  .profile-button {
    flex: 1;
  }
}
"#;

pub fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.query_selector(STYLE_TAG_SELECTOR)?.is_some() {
        return Ok(());
    }

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("Document không có thẻ <head>"))?;

    let style_el = document.create_element("style")?;
    style_el.set_attribute("data-rehab-ui", "v1")?;
    style_el.set_text_content(Some(DEFAULT_STYLES));
    head.append_child(&style_el.clone().dyn_into::<Node>()?)?;

    Ok(())
}
