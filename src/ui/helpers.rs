// ═══════════════════════════════════════════════════════════════════════════════
// 📦 ui/helpers.rs - Helper Functions
// ═══════════════════════════════════════════════════════════════════════════════
// Contains: Rect arithmetic shared by the dock layout and the runner
// ═══════════════════════════════════════════════════════════════════════════════

use ratatui::layout::{Constraint, Direction, Layout, Rect};

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Helper Functions / دوال مساعدة
// ═══════════════════════════════════════════════════════════════════════════════

/// Cut `ratio` of `area` along `direction`, from the left or top edge
/// قص جزء من المنطقة من الحافة اليسرى أو العليا
///
/// Returns `(new_region, remainder)`.
pub fn split_rect(area: Rect, direction: Direction, ratio: f32) -> (Rect, Rect) {
    let percent = (ratio.clamp(0.0, 1.0) * 100.0).round() as u16;
    let chunks = Layout::default()
        .direction(direction)
        .constraints([Constraint::Percentage(percent), Constraint::Fill(1)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Stack `count` equal rows inside `area`
pub fn stack_vertical(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let constraints = (0..count).map(|_| Constraint::Ratio(1, count as u32));
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

/// Does `area` contain the cell at (column, row)?
pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
