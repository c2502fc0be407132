//! Widget autocomplete render bằng yew cho môi trường WebAssembly.

#[cfg(target_arch = "wasm32")]
mod console;
#[cfg(target_arch = "wasm32")]
mod mount;
#[cfg(target_arch = "wasm32")]
mod page;
#[cfg(target_arch = "wasm32")]
mod styles;
#[cfg(target_arch = "wasm32")]
mod view;

#[cfg(target_arch = "wasm32")]
pub use mount::{mount_autocomplete, AutocompleteMount};

#[cfg(not(target_arch = "wasm32"))]
pub fn mount_autocomplete(_: &str, _: wasm_bindgen::JsValue) -> Result<(), wasm_bindgen::JsValue> {
    Err(wasm_bindgen::JsValue::from_str(
        "autocomplete-ui chỉ hỗ trợ biên dịch target wasm32",
    ))
}
