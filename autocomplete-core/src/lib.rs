//! Logic lõi của widget dropdown tự hoàn thành (autocomplete), độc lập với DOM.

mod filter;
mod keys;
pub mod registry;
pub mod scroll;
mod widget;

use serde::{Deserialize, Serialize};

pub use filter::filter_options;
pub use keys::{Direction, Key};
pub use registry::{PageRegistry, WidgetId};
pub use widget::{Autocomplete, KeyOutcome, MenuRow, SelectionEvent, WidgetState};

/// Một lựa chọn trong dropdown: nhãn hiển thị và giá trị gửi về backend.
///
/// Khi đọc từ JSON chấp nhận cả chuỗi trần (nhãn = giá trị) lẫn object
/// `{ "label": .., "value": .. }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "RawOption")]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

impl DropdownOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Lựa chọn có giá trị trùng với nhãn (dạng phổ biến nhất từ backend).
    pub fn plain(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            value: label.clone(),
            label,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawOption {
    Plain(String),
    Labeled {
        label: String,
        #[serde(default)]
        value: Option<String>,
    },
}

impl From<RawOption> for DropdownOption {
    fn from(raw: RawOption) -> Self {
        match raw {
            RawOption::Plain(label) => DropdownOption::plain(label),
            RawOption::Labeled { label, value } => match value {
                Some(value) => DropdownOption::new(label, value),
                None => DropdownOption::plain(label),
            },
        }
    }
}

/// Chế độ chọn của widget.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SelectMode {
    #[default]
    Single,
    Multi,
}

/// Cấu hình một instance widget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WidgetConfig {
    pub mode: SelectMode,
    /// Placeholder của ô nhập.
    pub placeholder: String,
    /// Giới hạn số dòng hiển thị trong danh sách (None = không giới hạn).
    pub max_results: Option<usize>,
    /// Nhãn dòng giữ chỗ khi truy vấn không khớp lựa chọn nào.
    pub no_matches_label: String,
    /// Nhãn dòng giữ chỗ khi danh sách lựa chọn rỗng.
    pub no_options_label: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            mode: SelectMode::Single,
            placeholder: String::new(),
            max_results: None,
            no_matches_label: "No matches found".to_string(),
            no_options_label: "No options available".to_string(),
        }
    }
}

impl WidgetConfig {
    pub fn single() -> Self {
        Self::default()
    }

    pub fn multi() -> Self {
        Self {
            mode: SelectMode::Multi,
            ..Self::default()
        }
    }
}

/// Cấu hình gửi từ JavaScript: mọi trường đều tuỳ chọn, tên theo camelCase.
/// Trường vắng mặt lấy giá trị của [`WidgetConfig::default`].
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfigPatch {
    pub mode: Option<SelectMode>,
    pub placeholder: Option<String>,
    pub max_results: Option<usize>,
    pub no_matches_label: Option<String>,
    pub no_options_label: Option<String>,
}

impl From<WidgetConfigPatch> for WidgetConfig {
    fn from(patch: WidgetConfigPatch) -> Self {
        let mut base = WidgetConfig::default();
        if let Some(mode) = patch.mode {
            base.mode = mode;
        }
        if let Some(placeholder) = patch.placeholder {
            base.placeholder = placeholder;
        }
        if let Some(limit) = patch.max_results {
            base.max_results = Some(limit);
        }
        if let Some(label) = patch.no_matches_label {
            base.no_matches_label = label;
        }
        if let Some(label) = patch.no_options_label {
            base.no_options_label = label;
        }
        base
    }
}

/// Lỗi chung của các crate autocomplete.
#[derive(Debug, thiserror::Error)]
pub enum AutocompleteError {
    #[error("Dữ liệu đầu vào thiếu thông tin tối thiểu")]
    MissingData,
    #[error("Không đọc được dữ liệu: {0}")]
    Parse(String),
    #[error("Backend từ chối yêu cầu: {0}")]
    Rejected(String),
    #[error("Cấu hình không hợp lệ: {0}")]
    Config(String),
}
