// ═══════════════════════════════════════════════════════════════════════════════
// 📦 ui/display_panel.rs - Display Window
// ═══════════════════════════════════════════════════════════════════════════════
// Read-only view of the selected recipe: ingredients, then directions.
// ═══════════════════════════════════════════════════════════════════════════════

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::state::{AppState, Focus, SelectionState};

use super::{controls, docking::DISPLAY_WINDOW};

/// Text shown for the current selection / النص المعروض للاختيار الحالي
///
/// Empty fields contribute no lines.
pub fn display_text(selection: &SelectionState) -> Text<'_> {
    let lines: Vec<Line> = [
        selection.displayed_ingredients(),
        selection.displayed_directions(),
    ]
    .into_iter()
    .filter(|field| !field.is_empty())
    .flat_map(|field| Text::from(field).lines)
    .collect();
    Text::from(lines)
}

fn paragraph(selection: &SelectionState) -> Paragraph<'_> {
    Paragraph::new(display_text(selection)).wrap(Wrap { trim: false })
}

/// Rows the text takes once wrapped to `width` columns
/// عدد الصفوف بعد التفاف النص على العرض المعطى
pub fn wrapped_height(selection: &SelectionState, width: u16) -> usize {
    paragraph(selection).line_count(width)
}

/// Largest scroll offset that still fills `viewport` with text
pub fn max_scroll(selection: &SelectionState, viewport: Rect) -> u16 {
    let overflow = wrapped_height(selection, viewport.width).saturating_sub(viewport.height as usize);
    u16::try_from(overflow).unwrap_or(u16::MAX)
}

/// Render the display window / رسم نافذة العرض
pub fn render(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let focused = state.focus == Focus::Display;
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(format!(" {} ", DISPLAY_WINDOW))
        .title_bottom(controls::hint_line(Focus::Display))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    // Keep the offset valid after a resize / إبقاء الإزاحة صالحة بعد تغيير الحجم
    state.display_viewport = block.inner(area);
    state.display_scroll = state
        .display_scroll
        .min(max_scroll(&state.selection, state.display_viewport));

    let text = paragraph(&state.selection)
        .block(block)
        .scroll((state.display_scroll, 0));
    frame.render_widget(text, area);
}
