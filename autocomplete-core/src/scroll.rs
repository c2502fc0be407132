//! Tính toán cuộn để dòng đang highlight luôn hiển thị đầy đủ.

/// Một đoạn theo trục dọc (pixel): vị trí bắt đầu và chiều cao.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub start: f64,
    pub extent: f64,
}

impl Span {
    pub fn new(start: f64, extent: f64) -> Self {
        Self { start, extent }
    }

    pub fn end(&self) -> f64 {
        self.start + self.extent
    }
}

/// Trả về `scrollTop` mới nếu cần cuộn để `row` nằm trọn trong `viewport`.
///
/// Chỉ dịch chuyển tối thiểu: dòng nằm trên vùng nhìn thì căn mép trên, nằm
/// dưới thì căn mép dưới. Dòng cao hơn vùng nhìn được căn theo mép trên.
/// `None` nghĩa là dòng đã hiển thị đầy đủ.
pub fn scroll_to_reveal(row: Span, viewport: Span) -> Option<f64> {
    if viewport.extent <= 0.0 {
        return None;
    }

    if row.start < viewport.start || row.extent >= viewport.extent {
        return (row.start != viewport.start).then_some(row.start);
    }

    if row.end() > viewport.end() {
        return Some(row.end() - viewport.extent);
    }

    None
}
