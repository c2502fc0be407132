//! Máy trạng thái của widget autocomplete.

use serde::Serialize;

use crate::filter::filter_options;
use crate::keys::{Direction, Key};
use crate::{DropdownOption, SelectMode, WidgetConfig};

/// Payload gửi cho callback `onSelect`.
///
/// Chế độ single nhận đúng một lựa chọn, chế độ multi nhận toàn bộ tập đang
/// chọn (theo thứ tự commit).
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum SelectionEvent {
    Single(DropdownOption),
    Multi(Vec<DropdownOption>),
}

/// Một dòng cần render trong danh sách thả xuống.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuRow {
    Option {
        label: String,
        value: String,
        highlighted: bool,
        selected: bool,
    },
    /// Dòng giữ chỗ bị vô hiệu hoá ("no matches", "no options").
    Placeholder { label: String },
}

/// Kết quả xử lý một phím.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct KeyOutcome {
    /// Phím đã được widget dùng; caller phải preventDefault + stopPropagation.
    pub handled: bool,
    pub event: Option<SelectionEvent>,
}

impl KeyOutcome {
    fn handled(event: Option<SelectionEvent>) -> Self {
        Self {
            handled: true,
            event,
        }
    }

    fn ignored() -> Self {
        Self::default()
    }
}

/// Ảnh chụp trạng thái công khai của widget.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WidgetState {
    pub is_open: bool,
    pub query: String,
    pub filtered_options: Vec<DropdownOption>,
    pub highlighted_index: Option<usize>,
    pub selection: Vec<DropdownOption>,
}

#[derive(Debug, Clone, PartialEq)]
enum Selection {
    Single(Option<DropdownOption>),
    Multi(Vec<DropdownOption>),
}

impl Selection {
    fn for_mode(mode: SelectMode) -> Self {
        match mode {
            SelectMode::Single => Selection::Single(None),
            SelectMode::Multi => Selection::Multi(Vec::new()),
        }
    }

    fn as_slice(&self) -> &[DropdownOption] {
        match self {
            Selection::Single(selected) => selected.as_slice(),
            Selection::Multi(items) => items,
        }
    }
}

/// Widget autocomplete không phụ thuộc DOM.
///
/// Trạng thái chỉ thay đổi qua các phương thức công khai. Mọi thao tác sai
/// (commit lựa chọn không có trong danh sách lọc, di chuyển highlight trên
/// danh sách rỗng...) đều là no-op, không bao giờ trả lỗi.
#[derive(Debug, Clone)]
pub struct Autocomplete {
    config: WidgetConfig,
    options: Vec<DropdownOption>,
    is_open: bool,
    query: String,
    /// Chỉ số vào `options`, đã sắp theo độ liên quan và cắt theo `max_results`.
    filtered: Vec<usize>,
    /// Chỉ số vào `filtered`.
    highlighted: Option<usize>,
    selection: Selection,
}

impl Autocomplete {
    pub fn new(config: WidgetConfig) -> Self {
        Self::with_options(config, Vec::new())
    }

    pub fn with_options(config: WidgetConfig, options: Vec<DropdownOption>) -> Self {
        let selection = Selection::for_mode(config.mode);
        let mut widget = Self {
            config,
            options,
            is_open: false,
            query: String::new(),
            filtered: Vec::new(),
            highlighted: None,
            selection,
        };
        widget.refilter();
        widget
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn mode(&self) -> SelectMode {
        self.config.mode
    }

    pub fn options(&self) -> &[DropdownOption] {
        &self.options
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Nội dung hiện tại của ô nhập.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filtered(&self) -> Vec<&DropdownOption> {
        self.filtered
            .iter()
            .map(|&index| &self.options[index])
            .collect()
    }

    pub fn highlighted_index(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn highlighted_option(&self) -> Option<&DropdownOption> {
        self.highlighted
            .and_then(|position| self.filtered.get(position))
            .map(|&index| &self.options[index])
    }

    /// Lựa chọn đã commit ở chế độ single.
    pub fn selected(&self) -> Option<&DropdownOption> {
        match &self.selection {
            Selection::Single(selected) => selected.as_ref(),
            Selection::Multi(_) => None,
        }
    }

    /// Toàn bộ lựa chọn đã commit (0 hoặc 1 phần tử ở chế độ single).
    pub fn selection(&self) -> &[DropdownOption] {
        self.selection.as_slice()
    }

    /// Các token hiển thị của chế độ multi, theo thứ tự commit.
    pub fn tokens(&self) -> &[DropdownOption] {
        match &self.selection {
            Selection::Single(_) => &[],
            Selection::Multi(items) => items,
        }
    }

    pub fn is_selected(&self, option: &DropdownOption) -> bool {
        self.selection
            .as_slice()
            .iter()
            .any(|item| item.value == option.value)
    }

    /// Giá trị cho input ẩn của form: giá trị đã chọn (single) hoặc các giá
    /// trị nối bằng dấu phẩy (multi).
    pub fn form_value(&self) -> String {
        self.selection
            .as_slice()
            .iter()
            .map(|item| item.value.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn state(&self) -> WidgetState {
        WidgetState {
            is_open: self.is_open,
            query: self.query.clone(),
            filtered_options: self.filtered().into_iter().cloned().collect(),
            highlighted_index: self.highlighted,
            selection: self.selection.as_slice().to_vec(),
        }
    }

    /// Thay danh sách lựa chọn, giữ nguyên truy vấn hiện tại.
    ///
    /// Lựa chọn đã commit không còn trong danh sách mới bị loại bỏ.
    pub fn set_options(&mut self, options: Vec<DropdownOption>) {
        let highlighted_value = self.highlighted_option().map(|option| option.value.clone());
        self.options = options;

        let options = &self.options;
        let refreshed = |item: &DropdownOption| {
            options
                .iter()
                .find(|option| option.value == item.value)
                .cloned()
        };
        match &mut self.selection {
            Selection::Single(selected) => {
                let previous = selected.take();
                *selected = previous.as_ref().and_then(refreshed);
                // Ô nhập đang đóng hiển thị nhãn đã chọn, phải theo lựa chọn mới.
                if !self.is_open && previous.is_some() {
                    self.query = selected
                        .as_ref()
                        .map(|item| item.label.clone())
                        .unwrap_or_default();
                }
            }
            Selection::Multi(items) => *items = items.iter().filter_map(refreshed).collect(),
        }

        self.refilter();
        if let Some(position) = highlighted_value.and_then(|value| self.position_of_value(&value)) {
            self.highlighted = Some(position);
        }

        log::debug!(
            "autocomplete: nhận {} lựa chọn, {} khớp truy vấn {:?}",
            self.options.len(),
            self.filtered.len(),
            self.query
        );
    }

    /// Mở dropdown. Trả về `false` nếu đã mở sẵn.
    pub fn open(&mut self) -> bool {
        if self.is_open {
            return false;
        }
        self.is_open = true;
        self.refilter();
        true
    }

    /// Đóng dropdown mà không commit. Trả về `false` nếu đã đóng sẵn.
    ///
    /// Chế độ single khôi phục nhãn của lựa chọn đã commit (hoặc xoá ô nhập),
    /// chế độ multi luôn xoá truy vấn.
    pub fn close(&mut self) -> bool {
        if !self.is_open {
            return false;
        }
        self.is_open = false;
        self.query = match &self.selection {
            Selection::Single(Some(selected)) => selected.label.clone(),
            Selection::Single(None) | Selection::Multi(_) => String::new(),
        };
        self.refilter();
        true
    }

    /// Người dùng gõ vào ô nhập: mở dropdown và lọc theo nội dung mới.
    pub fn input(&mut self, text: impl Into<String>) {
        self.is_open = true;
        self.filter(text);
    }

    /// Lọc theo truy vấn; highlight mặc định về dòng đầu tiên.
    pub fn filter(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refilter();
    }

    /// Di chuyển highlight vòng quanh danh sách đã lọc.
    pub fn move_highlight(&mut self, direction: Direction) -> bool {
        let len = self.filtered.len();
        if len == 0 {
            return false;
        }

        self.highlighted = Some(match (self.highlighted, direction) {
            (None, Direction::Next) => 0,
            (None, Direction::Previous) => len - 1,
            (Some(current), Direction::Next) => (current + 1) % len,
            (Some(current), Direction::Previous) => (current + len - 1) % len,
        });
        true
    }

    /// Commit một lựa chọn đang hiển thị trong danh sách lọc.
    pub fn commit(&mut self, option: &DropdownOption) -> Option<SelectionEvent> {
        let Some(position) = self
            .filtered
            .iter()
            .position(|&index| &self.options[index] == option)
        else {
            log::debug!(
                "autocomplete: bỏ qua commit {:?}, không có trong danh sách lọc",
                option.label
            );
            return None;
        };
        self.commit_at(position)
    }

    /// Commit dòng thứ `position` của danh sách lọc (ví dụ khi click chuột).
    pub fn commit_at(&mut self, position: usize) -> Option<SelectionEvent> {
        let option = self.options.get(*self.filtered.get(position)?)?.clone();

        match &mut self.selection {
            Selection::Single(selected) => {
                *selected = Some(option.clone());
                self.query = option.label.clone();
                self.is_open = false;
                self.refilter();
                Some(SelectionEvent::Single(option))
            }
            Selection::Multi(items) => {
                match items.iter().position(|item| item.value == option.value) {
                    Some(existing) => {
                        items.remove(existing);
                    }
                    None => items.push(option.clone()),
                }
                let snapshot = items.clone();

                self.query.clear();
                self.refilter();
                if let Some(position) = self.position_of_value(&option.value) {
                    self.highlighted = Some(position);
                }
                Some(SelectionEvent::Multi(snapshot))
            }
        }
    }

    /// Commit dòng đang highlight (phím Enter).
    pub fn commit_highlighted(&mut self) -> Option<SelectionEvent> {
        let position = self.highlighted?;
        self.commit_at(position)
    }

    /// Gỡ một token khỏi tập chọn (nút xoá trên token, chỉ chế độ multi).
    pub fn remove(&mut self, value: &str) -> Option<SelectionEvent> {
        let Selection::Multi(items) = &mut self.selection else {
            return None;
        };
        let existing = items.iter().position(|item| item.value == value)?;
        items.remove(existing);
        Some(SelectionEvent::Multi(items.clone()))
    }

    /// Xoá toàn bộ lựa chọn và ô nhập (reset form).
    pub fn clear_selection(&mut self) {
        self.selection = Selection::for_mode(self.config.mode);
        self.query.clear();
        self.refilter();
    }

    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        if !self.is_open {
            return match key {
                Key::ArrowDown => {
                    self.open();
                    KeyOutcome::handled(None)
                }
                _ => KeyOutcome::ignored(),
            };
        }

        match key {
            Key::ArrowDown => {
                self.move_highlight(Direction::Next);
                KeyOutcome::handled(None)
            }
            Key::ArrowUp => {
                self.move_highlight(Direction::Previous);
                KeyOutcome::handled(None)
            }
            Key::Enter => KeyOutcome::handled(self.commit_highlighted()),
            Key::Escape => {
                self.close();
                KeyOutcome::handled(None)
            }
            Key::Other => KeyOutcome::ignored(),
        }
    }

    /// Các dòng cần render cho danh sách thả xuống.
    ///
    /// Không khớp lựa chọn nào thì trả về đúng một dòng giữ chỗ.
    pub fn menu(&self) -> Vec<MenuRow> {
        if self.options.is_empty() {
            return vec![MenuRow::Placeholder {
                label: self.config.no_options_label.clone(),
            }];
        }
        if self.filtered.is_empty() {
            return vec![MenuRow::Placeholder {
                label: self.config.no_matches_label.clone(),
            }];
        }

        self.filtered
            .iter()
            .enumerate()
            .map(|(position, &index)| {
                let option = &self.options[index];
                MenuRow::Option {
                    label: option.label.clone(),
                    value: option.value.clone(),
                    highlighted: self.highlighted == Some(position),
                    selected: self.is_selected(option),
                }
            })
            .collect()
    }

    fn refilter(&mut self) {
        let mut filtered = filter_options(&self.options, &self.query);
        if let Some(limit) = self.config.max_results {
            filtered.truncate(limit);
        }
        self.filtered = filtered;
        self.highlighted = (self.is_open && !self.filtered.is_empty()).then_some(0);
    }

    fn position_of_value(&self, value: &str) -> Option<usize> {
        self.filtered
            .iter()
            .position(|&index| self.options[index].value == value)
    }
}
