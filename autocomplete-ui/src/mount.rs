//! Điểm vào JavaScript: gắn widget vào một element và điều khiển nó sau đó.

use autocomplete_core::{DropdownOption, SelectionEvent, WidgetConfig, WidgetConfigPatch};
use js_sys::{Function, Object, Reflect};
use log::LevelFilter;
use serde::Deserialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Element, HtmlInputElement, Window};
use yew::{AppHandle, Callback};

use crate::console as console_log;
use crate::styles::ensure_styles;
use crate::view::{AutocompleteView, AutocompleteViewProps, Msg};

const ON_SELECT_KEY: &str = "onSelect";

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct JsMountConfig {
    #[serde(flatten)]
    widget: WidgetConfigPatch,
    options: Vec<DropdownOption>,
    name: Option<String>,
    log_level: Option<String>,
}

/// Gắn widget vào element đầu tiên khớp `selector`.
///
/// Trả về `None` (không lỗi) khi trang không có element đó, để cùng một bundle
/// có thể chạy trên các trang không dùng widget.
#[wasm_bindgen]
pub fn mount_autocomplete(
    selector: &str,
    config: JsValue,
) -> Result<Option<AutocompleteMount>, JsValue> {
    let window: Window = web_sys::window().ok_or_else(|| JsValue::from_str("Không có window"))?;
    let document: Document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Không truy cập được document"))?;

    let (on_select, config) = split_config(config)?;
    console_log::install(parse_level(config.log_level.as_deref()));

    let Some(anchor) = document
        .query_selector(selector)
        .map_err(|err| JsValue::from_str(&format!("Selector lỗi: {err:?}")))?
    else {
        log::debug!("autocomplete-ui: không có element `{selector}`, bỏ qua");
        return Ok(None);
    };

    if let Err(err) = ensure_styles(&document) {
        console::error_1(&err);
    }

    let props = AutocompleteViewProps {
        anchor: anchor.clone(),
        config: WidgetConfig::from(config.widget),
        options: config.options,
        name: config.name.map(Into::into),
        on_select: selection_callback(on_select),
    };

    let app = yew::Renderer::<AutocompleteView>::with_root_and_props(anchor.clone(), props).render();
    log::info!("autocomplete-ui: đã gắn widget vào `{selector}`");

    Ok(Some(AutocompleteMount {
        anchor,
        app: Some(app),
    }))
}

/// Tách hàm `onSelect` khỏi object cấu hình rồi đọc phần còn lại bằng serde.
fn split_config(config: JsValue) -> Result<(Option<Function>, JsMountConfig), JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok((None, JsMountConfig::default()));
    }

    let source: &Object = config
        .dyn_ref::<Object>()
        .ok_or_else(|| JsValue::from_str("Cấu hình phải là object"))?;
    let on_select = Reflect::get(source, &JsValue::from_str(ON_SELECT_KEY))?
        .dyn_into::<Function>()
        .ok();

    let copy = Object::assign(&Object::new(), source);
    Reflect::delete_property(&copy, &JsValue::from_str(ON_SELECT_KEY))?;
    let parsed: JsMountConfig = from_value(copy.into())?;

    Ok((on_select, parsed))
}

fn parse_level(level: Option<&str>) -> LevelFilter {
    level
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

fn selection_callback(on_select: Option<Function>) -> Callback<SelectionEvent> {
    Callback::from(move |event: SelectionEvent| {
        let Some(on_select) = on_select.as_ref() else {
            return;
        };
        let result = to_value(&event)
            .map_err(JsValue::from)
            .and_then(|payload| on_select.call1(&JsValue::NULL, &payload));
        if let Err(err) = result {
            console::error_1(&err);
        }
    })
}

/// Handle trả về cho JavaScript sau khi gắn widget.
#[wasm_bindgen]
pub struct AutocompleteMount {
    anchor: Element,
    app: Option<AppHandle<AutocompleteView>>,
}

#[wasm_bindgen]
impl AutocompleteMount {
    /// Thay danh sách lựa chọn (ví dụ khi dữ liệu từ backend về).
    #[wasm_bindgen(js_name = setOptions)]
    pub fn set_options(&self, options: JsValue) -> Result<(), JsValue> {
        let options: Vec<DropdownOption> = from_value(options)?;
        self.send(Msg::SetOptions(options));
        Ok(())
    }

    pub fn open(&self) {
        self.send(Msg::Open);
    }

    pub fn close(&self) {
        self.send(Msg::Close);
    }

    pub fn commit(&self, option: JsValue) -> Result<(), JsValue> {
        let option: DropdownOption = from_value(option)?;
        self.send(Msg::Commit(option));
        Ok(())
    }

    pub fn remove(&self, value: String) {
        self.send(Msg::Remove(value));
    }

    pub fn clear(&self) {
        self.send(Msg::Clear);
    }

    /// Giá trị hiện tại của input ẩn (các value nối bằng dấu phẩy).
    #[wasm_bindgen(js_name = formValue)]
    pub fn form_value(&self) -> String {
        self.anchor
            .query_selector("input.autocomplete-value")
            .ok()
            .flatten()
            .and_then(|input| input.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default()
    }

    /// Gỡ widget khỏi trang; listener chung vẫn giữ cho các widget khác.
    pub fn destroy(mut self) {
        if let Some(app) = self.app.take() {
            app.destroy();
        }
    }
}

impl AutocompleteMount {
    fn send(&self, msg: Msg) {
        match self.app.as_ref() {
            Some(app) => app.send_message(msg),
            None => log::debug!("autocomplete-ui: widget đã bị huỷ"),
        }
    }
}
