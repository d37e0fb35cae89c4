// ═══════════════════════════════════════════════════════════════════════════════
// 📦 ui/docking.rs - Dock Layout
// ═══════════════════════════════════════════════════════════════════════════════
// Declarative dock layout: named dock spaces, splits that carve new docks out
// of existing ones, and windows bound to a dock and a render function.
// The layout is built once before the loop; only the rects follow the
// terminal size.
// ═══════════════════════════════════════════════════════════════════════════════

use ratatui::{
    layout::{Direction, Rect},
    Frame,
};

use crate::config::SPLIT_RATIO;
use crate::state::AppState;

use super::{display_panel, helpers, search_panel};

/// Dock space covering the whole host area / منطقة الإرساء الرئيسية
pub const MAIN_DOCK_SPACE: &str = "MainDockSpace";

/// Dock space created for the search window / منطقة إرساء نافذة البحث
pub const SEARCH_DOCK_SPACE: &str = "SearchSpace";

pub const SEARCH_WINDOW: &str = "Search Window";
pub const DISPLAY_WINDOW: &str = "Display Window";

/// Render function bound to a dockable window
pub type GuiFunction = fn(&mut Frame, Rect, &mut AppState);

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Structures / الهياكل
// ═══════════════════════════════════════════════════════════════════════════════

/// Split rule: carve `new_dock` out of `initial_dock`
/// قاعدة تقسيم: اقتطاع منطقة جديدة من منطقة موجودة
#[derive(Debug, Clone, PartialEq)]
pub struct DockingSplit {
    pub initial_dock: String,
    pub new_dock: String,
    /// Axis of the cut; the new dock takes the left or top side
    pub direction: Direction,
    /// Share of `initial_dock` given to `new_dock` (0.0 - 1.0)
    pub ratio: f32,
}

/// A window docked into a named dock space
/// نافذة مرساة في منطقة إرساء مسماة
pub struct DockableWindow {
    pub label: String,
    pub dock_space: String,
    pub gui_function: GuiFunction,
}

/// Complete layout: splits applied in order, then windows placed
#[derive(Default)]
pub struct DockingParams {
    pub splits: Vec<DockingSplit>,
    pub windows: Vec<DockableWindow>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Default Layout / التخطيط الافتراضي
// ═══════════════════════════════════════════════════════════════════════════════

/// Left half for searching, right half for the selected recipe
pub fn create_docking_split() -> DockingSplit {
    DockingSplit {
        initial_dock: MAIN_DOCK_SPACE.to_string(),
        new_dock: SEARCH_DOCK_SPACE.to_string(),
        direction: Direction::Horizontal,
        ratio: SPLIT_RATIO,
    }
}

pub fn create_dockable_windows() -> Vec<DockableWindow> {
    vec![
        DockableWindow {
            label: SEARCH_WINDOW.to_string(),
            dock_space: SEARCH_DOCK_SPACE.to_string(),
            gui_function: search_panel::render,
        },
        DockableWindow {
            label: DISPLAY_WINDOW.to_string(),
            dock_space: MAIN_DOCK_SPACE.to_string(),
            gui_function: display_panel::render,
        },
    ]
}

/// Build the whole layout / بناء التخطيط بالكامل
pub fn create_default_layout() -> DockingParams {
    DockingParams {
        splits: vec![create_docking_split()],
        windows: create_dockable_windows(),
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Layout Resolution / حساب التخطيط
// ═══════════════════════════════════════════════════════════════════════════════

impl DockingParams {
    /// Compute every dock space's rect inside the host area
    /// حساب مستطيل كل منطقة إرساء داخل المنطقة المضيفة
    ///
    /// Splits naming an unknown dock are skipped.
    pub fn resolve(&self, area: Rect) -> Vec<(String, Rect)> {
        let mut docks = vec![(MAIN_DOCK_SPACE.to_string(), area)];

        for split in &self.splits {
            let Some(parent) = docks.iter().position(|(name, _)| *name == split.initial_dock) else {
                continue;
            };
            let (new_area, remainder) = helpers::split_rect(docks[parent].1, split.direction, split.ratio);
            docks[parent].1 = remainder;
            docks.push((split.new_dock.clone(), new_area));
        }

        docks
    }

    /// Rect of each window, in registration order
    ///
    /// Windows sharing a dock space are stacked top to bottom. A window whose
    /// dock does not exist gets an empty rect.
    pub fn window_regions(&self, area: Rect) -> Vec<Rect> {
        let docks = self.resolve(area);

        self.windows
            .iter()
            .enumerate()
            .map(|(i, window)| {
                let Some((_, dock_area)) = docks.iter().find(|(name, _)| *name == window.dock_space) else {
                    return Rect::default();
                };
                let siblings: Vec<usize> = self
                    .windows
                    .iter()
                    .enumerate()
                    .filter(|(_, w)| w.dock_space == window.dock_space)
                    .map(|(j, _)| j)
                    .collect();
                let slot = siblings.iter().position(|&j| j == i).unwrap_or(0);
                helpers::stack_vertical(*dock_area, siblings.len())[slot]
            })
            .collect()
    }

    /// Label of the window under the cell (column, row)
    pub fn window_at(&self, area: Rect, column: u16, row: u16) -> Option<&str> {
        self.windows
            .iter()
            .zip(self.window_regions(area))
            .find(|(_, rect)| helpers::contains(*rect, column, row))
            .map(|(window, _)| window.label.as_str())
    }

    /// Render every window into its region
    /// رسم كل نافذة في منطقتها
    pub fn render(&self, frame: &mut Frame, area: Rect, state: &mut AppState) {
        for (window, rect) in self.windows.iter().zip(self.window_regions(area)) {
            if rect.is_empty() {
                continue;
            }
            (window.gui_function)(frame, rect, state);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Unit Tests / اختبارات الوحدة
// ═══════════════════════════════════════════════════════════════════════════════
