//! Sổ đăng ký các widget đang hoạt động trên một trang.
//!
//! Cả trang chỉ có một listener click-outside. Listener đó được gắn đúng một
//! lần (lần đăng ký widget đầu tiên) và phân phối sự kiện tới các widget qua
//! sổ đăng ký này, thay vì mỗi widget tự gắn handler lên `document`.

/// Định danh một widget trong sổ đăng ký của trang.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(u64);

impl WidgetId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for WidgetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "autocomplete-{}", self.0)
    }
}

/// Sổ đăng ký widget, tham số hoá theo handle mà tầng giao diện cần giữ
/// (anchor DOM, scope của component...).
#[derive(Debug)]
pub struct PageRegistry<H> {
    next_id: u64,
    entries: Vec<(WidgetId, H)>,
    listener_installed: bool,
}

impl<H> Default for PageRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> PageRegistry<H> {
    pub const fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
            listener_installed: false,
        }
    }

    pub fn register(&mut self, handle: H) -> WidgetId {
        let id = WidgetId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, handle));
        log::debug!("registry: đăng ký {id}, tổng {}", self.entries.len());
        id
    }

    pub fn unregister(&mut self, id: WidgetId) -> Option<H> {
        let position = self.entries.iter().position(|(entry, _)| *entry == id)?;
        let (_, handle) = self.entries.remove(position);
        log::debug!("registry: huỷ {id}, còn {}", self.entries.len());
        Some(handle)
    }

    pub fn get(&self, id: WidgetId) -> Option<&H> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == id)
            .map(|(_, handle)| handle)
    }

    pub fn iter(&self) -> impl Iterator<Item = (WidgetId, &H)> {
        self.entries.iter().map(|(id, handle)| (*id, handle))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn listener_installed(&self) -> bool {
        self.listener_installed
    }

    /// Gọi `install` nếu listener của trang chưa được gắn. Idempotent: các lần
    /// gọi sau không làm gì và trả về `false`.
    pub fn ensure_listener(&mut self, install: impl FnOnce()) -> bool {
        if self.listener_installed {
            return false;
        }
        install();
        self.listener_installed = true;
        true
    }

    /// Các widget cần đóng khi có click tại một điểm trên trang.
    ///
    /// `contains` cho biết anchor của widget có chứa mục tiêu click hay
    /// không. Nếu mục tiêu nằm trong bất kỳ anchor nào thì không widget nào bị
    /// đóng; ngược lại trả về mọi widget đã đăng ký (đóng widget đã đóng là
    /// no-op).
    pub fn outside_click_targets(&self, mut contains: impl FnMut(&H) -> bool) -> Vec<WidgetId> {
        if self.entries.iter().any(|(_, handle)| contains(handle)) {
            return Vec::new();
        }
        self.entries.iter().map(|(id, _)| *id).collect()
    }
}
