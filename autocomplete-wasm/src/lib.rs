//! Bridge WASM <-> JavaScript trung lập framework cho widget autocomplete.
//!
//! Widget ở đây không chạm vào DOM: caller (React, Vue, trang tĩnh...) tự
//! render theo `menu()` và chuyển sự kiện bàn phím/chuột vào handle.

use autocomplete_core::{
    Autocomplete, AutocompleteError, Direction, DropdownOption, Key, WidgetConfig,
    WidgetConfigPatch,
};
use autocomplete_source::{LabelStyle, RequestSequencer, RequestTicket};
use serde::{Deserialize, Serialize};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

#[derive(Deserialize, Default)]
struct JsAutocompleteInit {
    #[serde(flatten)]
    config: WidgetConfigPatch,
    #[serde(default)]
    options: Vec<DropdownOption>,
}

/// Handle JS của một instance widget.
///
/// Handle không nhận callback `onSelect`: `commit`, `commitAt`, `remove` và
/// `handleKey` trả về payload selection (hoặc `undefined`) để caller tự gọi
/// callback của mình. Trường `onSelect` trong config bị bỏ qua.
#[wasm_bindgen]
pub struct AutocompleteHandle {
    widget: Autocomplete,
}

#[wasm_bindgen]
impl AutocompleteHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(config: Option<JsValue>) -> Result<AutocompleteHandle, JsValue> {
        #[cfg(target_arch = "wasm32")]
        console_error_panic_hook::set_once();

        let init = match config {
            Some(js_cfg) if !js_cfg.is_undefined() && !js_cfg.is_null() => {
                from_value::<JsAutocompleteInit>(js_cfg)
                    .map_err(|err| JsValue::from_str(&format!("Không đọc được config: {err}")))?
            }
            _ => JsAutocompleteInit::default(),
        };

        Ok(Self {
            widget: Autocomplete::with_options(WidgetConfig::from(init.config), init.options),
        })
    }

    #[wasm_bindgen(js_name = setOptions)]
    pub fn set_options(&mut self, options: JsValue) -> Result<(), JsValue> {
        let options: Vec<DropdownOption> = from_value(options)
            .map_err(|err| JsValue::from_str(&format!("Không đọc được danh sách lựa chọn: {err}")))?;
        self.widget.set_options(options);
        Ok(())
    }

    pub fn open(&mut self) -> bool {
        self.widget.open()
    }

    pub fn close(&mut self) -> bool {
        self.widget.close()
    }

    /// Người dùng gõ phím: mở dropdown và lọc.
    pub fn input(&mut self, text: String) {
        self.widget.input(text);
    }

    pub fn filter(&mut self, query: String) {
        self.widget.filter(query);
    }

    #[wasm_bindgen(js_name = moveHighlight)]
    pub fn move_highlight(&mut self, direction: &str) -> Result<bool, JsValue> {
        let direction: Direction = direction.parse().map_err(format_error)?;
        Ok(self.widget.move_highlight(direction))
    }

    /// Commit một lựa chọn; trả về payload cho `onSelect` hoặc `undefined`.
    pub fn commit(&mut self, option: JsValue) -> Result<JsValue, JsValue> {
        let option: DropdownOption = from_value(option)
            .map_err(|err| JsValue::from_str(&format!("Không đọc được lựa chọn: {err}")))?;
        serialize(&self.widget.commit(&option))
    }

    #[wasm_bindgen(js_name = commitAt)]
    pub fn commit_at(&mut self, position: usize) -> Result<JsValue, JsValue> {
        serialize(&self.widget.commit_at(position))
    }

    pub fn remove(&mut self, value: &str) -> Result<JsValue, JsValue> {
        serialize(&self.widget.remove(value))
    }

    #[wasm_bindgen(js_name = clearSelection)]
    pub fn clear_selection(&mut self) {
        self.widget.clear_selection();
    }

    /// Xử lý `KeyboardEvent.key`; trả về `{ handled, event }`.
    ///
    /// Khi `handled` là `true`, caller phải gọi `preventDefault()` và
    /// `stopPropagation()` để phím không submit form.
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, key: &str) -> Result<JsValue, JsValue> {
        serialize(&self.widget.handle_key(Key::from_dom(key)))
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        serialize(&self.widget.state())
    }

    pub fn menu(&self) -> Result<JsValue, JsValue> {
        serialize(&self.widget.menu())
    }

    #[wasm_bindgen(js_name = formValue)]
    pub fn form_value(&self) -> String {
        self.widget.form_value()
    }
}

/// Đọc payload `{ success, <itemsKey>: [...] }` thành danh sách lựa chọn.
#[wasm_bindgen(js_name = parseOptionPayload)]
pub fn parse_option_payload(
    payload: JsValue,
    items_key: &str,
    style: Option<JsValue>,
) -> Result<JsValue, JsValue> {
    let payload = from_value::<serde_json::Value>(payload)
        .map_err(|err| JsValue::from_str(&format!("Không đọc được JSON payload: {err}")))?;
    let style = read_style(style)?;

    let options =
        autocomplete_source::parse_option_payload_value(&payload, items_key).map_err(format_error)?;
    serialize(&autocomplete_source::normalize_options(options, style))
}

/// Giống `parseOptionPayload` nhưng không bao giờ ném lỗi: payload hỏng
/// được ghi log và trả về danh sách rỗng.
#[wasm_bindgen(js_name = optionsOrEmpty)]
pub fn options_or_empty(payload: JsValue, items_key: &str, source: &str) -> JsValue {
    let result = from_value::<serde_json::Value>(payload)
        .map_err(|err| AutocompleteError::Parse(err.to_string()))
        .and_then(|value| autocomplete_source::parse_option_payload_value(&value, items_key));
    let options = autocomplete_source::options_or_empty(result, source);
    to_value(&options).unwrap_or(JsValue::UNDEFINED)
}

/// Đánh số các request tải lựa chọn, bỏ qua response đến muộn.
#[wasm_bindgen(js_name = RequestSequencer)]
pub struct JsRequestSequencer {
    inner: RequestSequencer,
}

#[wasm_bindgen(js_class = RequestSequencer)]
impl JsRequestSequencer {
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsRequestSequencer {
        Self {
            inner: RequestSequencer::new(),
        }
    }

    pub fn issue(&mut self) -> f64 {
        self.inner.issue().get() as f64
    }

    pub fn accept(&mut self, ticket: f64) -> bool {
        self.inner.accept(RequestTicket::from(ticket as u64))
    }
}

impl Default for JsRequestSequencer {
    fn default() -> Self {
        Self::new()
    }
}

fn read_style(style: Option<JsValue>) -> Result<LabelStyle, JsValue> {
    match style {
        Some(js_style) if !js_style.is_undefined() && !js_style.is_null() => from_value(js_style)
            .map_err(|err| JsValue::from_str(&format!("Không đọc được label style: {err}"))),
        _ => Ok(LabelStyle::default()),
    }
}

fn serialize<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(|err| JsValue::from_str(&format!("Không serialize được: {err}")))
}

fn format_error(err: AutocompleteError) -> JsValue {
    JsValue::from_str(&format!("Autocomplete error: {err}"))
}
