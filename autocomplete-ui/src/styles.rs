use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Node};

const STYLE_TAG_SELECTOR: &str = "style[data-autocomplete-ui]";

/// Default CSS for the widget along with easy-to-override design tokens.
pub const DEFAULT_STYLES: &str = r#"
:root {
  --autocomplete-font-family: 'Inter', system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
  --autocomplete-bg: #ffffff;
  --autocomplete-border: rgba(148, 163, 184, 0.45);
  --autocomplete-border-focus: #2563eb;
  --autocomplete-radius: 10px;
  --autocomplete-text: #1f2933;
  --autocomplete-muted: #52606d;
  --autocomplete-highlight-bg: rgba(37, 99, 235, 0.1);
  --autocomplete-selected-text: #1d4ed8;
  --autocomplete-token-bg: rgba(37, 99, 235, 0.12);
  --autocomplete-token-text: #1e3a8a;
  --autocomplete-menu-max-height: 240px;
  --autocomplete-shadow: 0 16px 32px rgba(15, 23, 42, 0.12);
}

.autocomplete {
  position: relative;
  font-family: var(--autocomplete-font-family);
  color: var(--autocomplete-text);
  display: flex;
  flex-direction: column;
  gap: 6px;
}

.autocomplete-input {
  width: 100%;
  box-sizing: border-box;
  padding: 10px 12px;
  border: 1px solid var(--autocomplete-border);
  border-radius: var(--autocomplete-radius);
  background: var(--autocomplete-bg);
  font: inherit;
  color: inherit;
}

.autocomplete-input:focus {
  outline: none;
  border-color: var(--autocomplete-border-focus);
  box-shadow: 0 0 0 3px rgba(37, 99, 235, 0.18);
}

.autocomplete-menu {
  position: absolute;
  top: 100%;
  left: 0;
  right: 0;
  z-index: 100;
  margin-top: 4px;
  max-height: var(--autocomplete-menu-max-height);
  overflow-y: auto;
  background: var(--autocomplete-bg);
  border: 1px solid var(--autocomplete-border);
  border-radius: var(--autocomplete-radius);
  box-shadow: var(--autocomplete-shadow);
}

.autocomplete-option {
  padding: 8px 12px;
  cursor: pointer;
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}

.autocomplete-option.is-highlighted {
  background: var(--autocomplete-highlight-bg);
}

.autocomplete-option.is-selected {
  color: var(--autocomplete-selected-text);
  font-weight: 600;
}

.autocomplete-option.is-placeholder {
  cursor: default;
  color: var(--autocomplete-muted);
  text-align: center;
  font-style: italic;
}

.autocomplete-tokens {
  display: flex;
  flex-wrap: wrap;
  gap: 6px;
}

.autocomplete-tokens:empty {
  display: none;
}

.autocomplete-token {
  display: inline-flex;
  align-items: center;
  gap: 4px;
  padding: 3px 8px;
  border-radius: 999px;
  background: var(--autocomplete-token-bg);
  color: var(--autocomplete-token-text);
  font-size: 0.85rem;
  font-weight: 600;
}

.autocomplete-token-remove {
  border: none;
  background: transparent;
  color: inherit;
  cursor: pointer;
  font-size: 1rem;
  line-height: 1;
  padding: 0 2px;
}

@media (max-width: 640px) {
  .autocomplete-menu {
    --autocomplete-menu-max-height: 180px;
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
    style_el.set_attribute("data-autocomplete-ui", "v1")?;
    style_el.set_text_content(Some(DEFAULT_STYLES));
    head.append_child(&style_el.clone().dyn_into::<Node>()?)?;

    Ok(())
}
