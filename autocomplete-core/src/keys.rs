use std::str::FromStr;

use crate::AutocompleteError;

/// Các phím widget xử lý, đọc từ `KeyboardEvent.key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    Other,
}

impl Key {
    pub fn from_dom(key: &str) -> Self {
        match key {
            "ArrowDown" | "Down" => Key::ArrowDown,
            "ArrowUp" | "Up" => Key::ArrowUp,
            "Enter" => Key::Enter,
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Other,
        }
    }

    /// Phím có bị widget chặn (preventDefault + stopPropagation) hay không.
    ///
    /// Khi dropdown đang mở, cả bốn phím đều bị chặn để không kích hoạt submit
    /// form. Khi đóng, chỉ `ArrowDown` bị chặn vì nó mở dropdown.
    pub fn is_intercepted(self, is_open: bool) -> bool {
        match self {
            Key::ArrowDown => true,
            Key::ArrowUp | Key::Enter | Key::Escape => is_open,
            Key::Other => false,
        }
    }
}

/// Hướng di chuyển highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

impl FromStr for Direction {
    type Err = AutocompleteError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "next" | "down" => Ok(Direction::Next),
            "previous" | "prev" | "up" => Ok(Direction::Previous),
            other => Err(AutocompleteError::Config(format!(
                "hướng không hợp lệ: {other}"
            ))),
        }
    }
}
