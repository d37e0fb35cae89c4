// ═══════════════════════════════════════════════════════════════════════════════
// 📦 app.rs - Application Logic
// ═══════════════════════════════════════════════════════════════════════════════
// This module contains the main application logic and event handling.
// Features:
// - Per-frame rendering through the dock layout
// - Keyboard input handling (focus, navigation, quit)
// - Mouse input handling (click to select, wheel to move)
// ═══════════════════════════════════════════════════════════════════════════════

use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use log::{debug, trace};
use ratatui::{layout::Rect, Frame};

use crate::config::LIST_VISIBLE_ROWS;
use crate::recipe_store::RecipeCollection;
use crate::state::{AppState, Focus};
use crate::ui::display_panel;
use crate::ui::docking::{DockingParams, DISPLAY_WINDOW, SEARCH_WINDOW};

/// Rows moved by PageUp / PageDown in the display window
const DISPLAY_PAGE: u16 = 10;

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Application Structure / هيكل التطبيق
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application structure
/// هيكل التطبيق الرئيسي
pub struct App {
    /// Application state passed to every window / حالة التطبيق
    state: AppState,

    /// Dock layout, built once before the loop / تخطيط الإرساء
    docking: DockingParams,

    /// Host area of the last frame, for mouse hit tests
    dock_area: Rect,
}

impl App {
    /// Create a new application instance
    /// إنشاء مثيل تطبيق جديد
    pub fn new(recipes: RecipeCollection, docking: DockingParams) -> Self {
        Self {
            state: AppState::new(recipes),
            docking,
            dock_area: Rect::default(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit
    }

    /// Draw every docked window into `area`
    /// رسم جميع النوافذ المرساة
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.dock_area = area;
        self.docking.render(frame, area, &mut self.state);
    }

    /// Wait up to `tick` for one input event and apply it
    /// انتظار حدث إدخال واحد وتطبيقه
    pub fn handle_events(&mut self, tick: Duration) -> io::Result<()> {
        if event::poll(tick)? {
            let event = event::read()?;
            self.handle_event(event);
        }
        Ok(())
    }

    /// Apply a single input event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Only handle key press events / معالجة أحداث الضغط فقط
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    /// Handle a single key press
    /// معالجة ضغطة مفتاح واحدة
    fn handle_key(&mut self, key: KeyEvent) {
        trace!("Key {:?}", key);
        match key.code {
            // Ctrl+C - Quit / الخروج
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.should_quit = true;
            }

            // Q / Escape - Quit / الخروج
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.state.should_quit = true;
            }

            // Tab - Switch focus / تبديل التركيز
            KeyCode::Tab | KeyCode::BackTab => {
                self.state.focus = self.state.focus.toggle();
                debug!("Focus moved to {:?}", self.state.focus);
            }

            code => match self.state.focus {
                Focus::Search => self.handle_search_key(code),
                Focus::Display => self.handle_display_key(code),
            },
        }
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        let page = LIST_VISIBLE_ROWS as isize;
        let delta = match code {
            KeyCode::Up | KeyCode::Char('k') => -1,
            KeyCode::Down | KeyCode::Char('j') => 1,
            KeyCode::PageUp => -page,
            KeyCode::PageDown => page,
            KeyCode::Home => isize::MIN / 2,
            KeyCode::End => isize::MAX / 2,
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.state.search.toggle_expanded();
                return;
            }
            _ => return,
        };
        self.move_highlight(delta);
    }

    fn handle_display_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_display(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_display(1),
            KeyCode::PageUp => self.scroll_display(-(DISPLAY_PAGE as i32)),
            KeyCode::PageDown => self.scroll_display(DISPLAY_PAGE as i32),
            KeyCode::Home => self.state.display_scroll = 0,
            _ => {}
        }
    }

    /// Handle mouse clicks and wheel
    /// معالجة نقرات الفأرة والعجلة
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let (column, row) = (mouse.column, mouse.row);
        let window = match self.docking.window_at(self.dock_area, column, row) {
            Some(SEARCH_WINDOW) => Some(Focus::Search),
            Some(DISPLAY_WINDOW) => Some(Focus::Display),
            _ => None,
        };

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                // Clicking a window focuses it / النقر على نافذة يمنحها التركيز
                if let Some(focus) = window {
                    self.state.focus = focus;
                }
                if window == Some(Focus::Search) {
                    self.click_search(column, row);
                }
            }
            MouseEventKind::ScrollDown | MouseEventKind::ScrollUp => {
                let delta = if mouse.kind == MouseEventKind::ScrollDown { 1 } else { -1 };
                match window {
                    Some(Focus::Search) if self.state.search.over_list(column, row) => {
                        self.move_highlight(delta as isize);
                    }
                    Some(Focus::Display) => self.scroll_display(delta),
                    _ => {}
                }
            }
            _ => {}
        }
    }

    fn click_search(&mut self, column: u16, row: u16) {
        if self.state.search.header_hit(column, row) {
            self.state.search.toggle_expanded();
            return;
        }
        let len = self.state.recipes.len();
        if let Some(index) = self.state.search.entry_at(column, row, len) {
            self.state.select_recipe(index);
        }
    }

    fn move_highlight(&mut self, delta: isize) {
        let len = self.state.recipes.len();
        if let Some(target) = self.state.search.step_target(delta, len) {
            self.state.select_recipe(target);
        }
    }

    fn scroll_display(&mut self, delta: i32) {
        let max = display_panel::max_scroll(&self.state.selection, self.state.display_viewport);
        let next = (i32::from(self.state.display_scroll) + delta).clamp(0, i32::from(max));
        self.state.display_scroll = u16::try_from(next).unwrap_or(max);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Unit Tests / اختبارات الوحدة
// ═══════════════════════════════════════════════════════════════════════════════
