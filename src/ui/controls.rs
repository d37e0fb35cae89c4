// ═══════════════════════════════════════════════════════════════════════════════
// 📦 ui/controls.rs - Keyboard Controls Display
// ═══════════════════════════════════════════════════════════════════════════════
// Key hints shown on the bottom border of each window
// ═══════════════════════════════════════════════════════════════════════════════

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::state::Focus;

fn key(label: &'static str, color: Color) -> Span<'static> {
    Span::styled(label, Style::default().fg(color).add_modifier(Modifier::BOLD))
}

/// Hints for the given window / تلميحات المفاتيح للنافذة
pub fn hint_line(window: Focus) -> Line<'static> {
    match window {
        Focus::Search => render_search_controls(),
        Focus::Display => render_display_controls(),
    }
}

fn render_search_controls() -> Line<'static> {
    Line::from(vec![
        Span::raw(" "),
        key("↑↓", Color::Cyan),
        Span::raw(" Select "),
        key("Enter", Color::Green),
        Span::raw(" Fold "),
        key("Tab", Color::Yellow),
        Span::raw(" Focus "),
        key("Q", Color::Red),
        Span::raw(" Quit "),
    ])
}

fn render_display_controls() -> Line<'static> {
    Line::from(vec![
        Span::raw(" "),
        key("↑↓", Color::Cyan),
        Span::raw(" Scroll "),
        key("Tab", Color::Yellow),
        Span::raw(" Focus "),
        key("Q", Color::Red),
        Span::raw(" Quit "),
    ])
}
