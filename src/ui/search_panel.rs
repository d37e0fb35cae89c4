// ═══════════════════════════════════════════════════════════════════════════════
// 📦 ui/search_panel.rs - Search Window
// ═══════════════════════════════════════════════════════════════════════════════
// Collapsible "Recipes" section with a fixed-height list of recipe names.
// Picking an entry copies that recipe's text into the selection state right
// away, within the same frame.
// ═══════════════════════════════════════════════════════════════════════════════

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::config::LIST_VISIBLE_ROWS;
use crate::recipe_store::RecipeCollection;
use crate::state::{AppState, Focus, SelectionState};

use super::{controls, docking::SEARCH_WINDOW, helpers};

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Panel State / حالة اللوحة
// ═══════════════════════════════════════════════════════════════════════════════

/// State kept by the search window between frames
/// الحالة التي تحتفظ بها نافذة البحث بين الإطارات
#[derive(Debug, Clone)]
pub struct SearchPanelState {
    /// Highlighted entry, none until the user picks one / العنصر المحدد
    highlighted: Option<usize>,

    /// Is the "Recipes" section open? / هل قسم الوصفات مفتوح؟
    expanded: bool,

    /// Scroll offset and highlight for the list widget
    list_state: ListState,

    /// Where the header and list were drawn last frame (for mouse hits)
    header_area: Rect,
    list_area: Rect,

    /// Entry rows of the list, inside its border / صفوف العناصر داخل الإطار
    list_inner: Rect,
}

impl Default for SearchPanelState {
    fn default() -> Self {
        Self {
            highlighted: None,
            expanded: true,
            list_state: ListState::default(),
            header_area: Rect::default(),
            list_area: Rect::default(),
            list_inner: Rect::default(),
        }
    }
}

impl SearchPanelState {
    /// Highlight entry `index` and copy its text into `selection`
    /// تحديد العنصر ونسخ نصه إلى حالة الاختيار
    pub fn select(
        &mut self,
        index: usize,
        selection: &mut SelectionState,
        recipes: &RecipeCollection,
    ) -> bool {
        if !selection.select(index, recipes) {
            return false;
        }
        self.highlighted = Some(index);
        self.list_state.select(Some(index));
        true
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Entry reached by moving `delta` rows from the highlight
    ///
    /// With nothing highlighted yet, any move lands on the first entry.
    pub fn step_target(&self, delta: isize, len: usize) -> Option<usize> {
        if len == 0 || !self.expanded {
            return None;
        }
        let last = (len - 1) as isize;
        let target = match self.highlighted {
            None => 0,
            Some(current) => (current as isize + delta).clamp(0, last),
        };
        Some(target as usize)
    }

    /// Was the section header drawn at this cell?
    pub fn header_hit(&self, column: u16, row: u16) -> bool {
        helpers::contains(self.header_area, column, row)
    }

    /// Entry drawn at this cell, if any
    /// العنصر المرسوم في هذه الخلية
    pub fn entry_at(&self, column: u16, row: u16, len: usize) -> Option<usize> {
        if !self.expanded {
            return None;
        }
        if !helpers::contains(self.list_inner, column, row) {
            return None;
        }
        let index = self.list_state.offset() + (row - self.list_inner.y) as usize;
        (index < len).then_some(index)
    }

    /// Is this cell inside the list box?
    pub fn over_list(&self, column: u16, row: u16) -> bool {
        self.expanded && helpers::contains(self.list_area, column, row)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Rendering / الرسم
// ═══════════════════════════════════════════════════════════════════════════════

/// Render the search window / رسم نافذة البحث
pub fn render(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let focused = state.focus == Focus::Search;
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(format!(" {} ", SEARCH_WINDOW))
        .title_bottom(controls::hint_line(Focus::Search))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                     // Section header / عنوان القسم
            Constraint::Length(LIST_VISIBLE_ROWS + 2), // List box with border / صندوق القائمة
            Constraint::Min(0),
        ])
        .split(inner);

    let panel = &mut state.search;
    panel.header_area = chunks[0];
    render_header(frame, chunks[0], panel.expanded, state.recipes.len());

    if !panel.is_expanded() {
        panel.list_area = Rect::default();
        panel.list_inner = Rect::default();
        return;
    }

    let list_block = Block::default().borders(Borders::ALL);
    panel.list_area = chunks[1];
    panel.list_inner = list_block.inner(chunks[1]);

    let items: Vec<ListItem> = state
        .recipes
        .names()
        .iter()
        .map(|name| ListItem::new(name.as_str()))
        .collect();
    let list = List::new(items)
        .block(list_block)
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, chunks[1], &mut panel.list_state);
}

/// Render the collapsible section header
fn render_header(frame: &mut Frame, area: Rect, expanded: bool, count: usize) {
    let arrow = if expanded { "▼" } else { "▶" };
    let line = Line::from(vec![
        Span::styled(arrow, Style::default().fg(Color::Yellow)),
        Span::styled(" Recipes", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(format!(" ({})", count), Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Unit Tests / اختبارات الوحدة
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe_store::Recipe;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn draw(terminal: &mut Terminal<TestBackend>, state: &mut AppState) {
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, area, state);
            })
            .unwrap();
    }

    fn recipes(count: usize) -> RecipeCollection {
        RecipeCollection::from_recipes(
            (0..count).map(|i| Recipe::new(format!("Recipe {i}"), format!("ing {i}"), format!("dir {i}"))),
        )
    }

    #[test]
    fn test_empty_collection_renders() {
        let mut state = AppState::new(RecipeCollection::default());
        let mut terminal = Terminal::new(TestBackend::new(60, 25)).unwrap();

        draw(&mut terminal, &mut state);

        let text = buffer_text(&terminal);
        assert!(text.contains("Search Window"));
        assert!(text.contains("Recipes (0)"));
        assert_eq!(state.search.entry_at(3, 3, 0), None);
        assert_eq!(state.search.step_target(1, 0), None);
    }

    #[test]
    fn test_names_listed_in_order() {
        let mut state = AppState::new(recipes(3));
        let mut terminal = Terminal::new(TestBackend::new(60, 25)).unwrap();

        draw(&mut terminal, &mut state);

        let text = buffer_text(&terminal);
        let first = text.find("Recipe 0").unwrap();
        let second = text.find("Recipe 1").unwrap();
        let third = text.find("Recipe 2").unwrap();
        assert!(first < second && second < third);
        assert_eq!(state.search.highlighted, None);
    }

    #[test]
    fn test_list_box_is_fifteen_rows() {
        let mut state = AppState::new(recipes(40));
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();

        draw(&mut terminal, &mut state);

        assert_eq!(state.search.list_area.height, LIST_VISIBLE_ROWS + 2);
        assert_eq!(state.search.list_area.width, 58);
        let text = buffer_text(&terminal);
        assert!(text.contains("Recipe 14"));
        assert!(!text.contains("Recipe 15"));
    }

    #[test]
    fn test_entry_at_maps_rows() {
        let mut state = AppState::new(recipes(5));
        let mut terminal = Terminal::new(TestBackend::new(60, 25)).unwrap();
        draw(&mut terminal, &mut state);

        // Window border (row 0), header (row 1), list border (row 2)
        assert_eq!(state.search.list_inner, Rect::new(2, 3, 56, 15));
        assert_eq!(state.search.entry_at(5, 3, 5), Some(0));
        assert_eq!(state.search.entry_at(5, 6, 5), Some(3));
        assert_eq!(state.search.entry_at(5, 8, 5), None);
        assert!(state.search.header_hit(5, 1));
    }

    #[test]
    fn test_select_copies_text() {
        let collection = recipes(3);
        let mut panel = SearchPanelState::default();
        let mut selection = SelectionState::new();

        assert!(panel.select(2, &mut selection, &collection));
        assert_eq!(panel.highlighted, Some(2));
        assert_eq!(selection.displayed_ingredients(), "ing 2");
        assert_eq!(selection.displayed_directions(), "dir 2");

        assert!(!panel.select(9, &mut selection, &collection));
        assert_eq!(panel.highlighted, Some(2));
    }

    #[test]
    fn test_scrolls_to_keep_highlight_visible() {
        let mut state = AppState::new(recipes(40));
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();

        state.select_recipe(30);
        draw(&mut terminal, &mut state);

        assert!(buffer_text(&terminal).contains("Recipe 30"));
        assert!(state.search.list_state.offset() > 0);
    }

    #[test]
    fn test_step_target() {
        let mut panel = SearchPanelState::default();
        assert_eq!(panel.step_target(-1, 4), Some(0));

        panel.highlighted = Some(2);
        assert_eq!(panel.step_target(1, 4), Some(3));
        assert_eq!(panel.step_target(10, 4), Some(3));
        assert_eq!(panel.step_target(-10, 4), Some(0));

        panel.toggle_expanded();
        assert_eq!(panel.step_target(1, 4), None);
    }

    #[test]
    fn test_collapsed_hides_list() {
        let mut state = AppState::new(recipes(2));
        state.search.toggle_expanded();
        let mut terminal = Terminal::new(TestBackend::new(60, 25)).unwrap();

        draw(&mut terminal, &mut state);

        let text = buffer_text(&terminal);
        assert!(text.contains("▶ Recipes"));
        assert!(!text.contains("Recipe 0"));
        assert_eq!(state.search.entry_at(5, 3, 2), None);
    }
}
