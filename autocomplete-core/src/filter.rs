//! Lọc lựa chọn theo truy vấn.

use crate::DropdownOption;

/// Lọc danh sách lựa chọn theo truy vấn, trả về chỉ số trong danh sách gốc.
///
/// So khớp chuỗi con không phân biệt hoa thường trên nhãn. Những lựa chọn có
/// nhãn trùng khớp hoàn toàn với truy vấn được đưa lên đầu, phần còn lại giữ
/// nguyên thứ tự gốc (phân hoạch ổn định, không sắp xếp lại). Truy vấn rỗng
/// trả về toàn bộ danh sách.
pub fn filter_options(options: &[DropdownOption], query: &str) -> Vec<usize> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return (0..options.len()).collect();
    }

    let (exact, partial): (Vec<(usize, bool)>, Vec<(usize, bool)>) = options
        .iter()
        .enumerate()
        .filter_map(|(index, option)| {
            let label = option.label.to_lowercase();
            label
                .contains(&needle)
                .then(|| (index, label == needle))
        })
        .partition(|(_, is_exact)| *is_exact);

    exact
        .into_iter()
        .chain(partial)
        .map(|(index, _)| index)
        .collect()
}
