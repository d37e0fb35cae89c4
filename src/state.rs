// ═══════════════════════════════════════════════════════════════════════════════
// 📦 state.rs - Application State Management
// ═══════════════════════════════════════════════════════════════════════════════
// This module defines the selection state and the application state that is
// passed into every render call. Everything runs on the UI thread, so the
// state is owned by the loop and borrowed mutably per frame.
// ═══════════════════════════════════════════════════════════════════════════════

use log::debug;
use ratatui::layout::Rect;

use crate::recipe_store::RecipeCollection;
use crate::ui::search_panel::SearchPanelState;

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Selection State / حالة الاختيار
// ═══════════════════════════════════════════════════════════════════════════════

/// Which recipe is selected and the text currently shown for it
/// الوصفة المختارة والنص المعروض لها حالياً
///
/// Starts unselected with empty text. Once a recipe is selected there is no
/// transition back to unselected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_index: Option<usize>,
    displayed_ingredients: String,
    displayed_directions: String,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select recipe `index`, replacing the displayed text
    /// اختيار الوصفة واستبدال النص المعروض
    ///
    /// Returns false and leaves the state untouched when `index` is out of range.
    pub fn select(&mut self, index: usize, recipes: &RecipeCollection) -> bool {
        let (Some(name), Some(ingredients), Some(directions)) = (
            recipes.names().get(index),
            recipes.ingredients().get(index),
            recipes.directions().get(index),
        ) else {
            return false;
        };

        self.selected_index = Some(index);
        self.displayed_ingredients.clone_from(ingredients);
        self.displayed_directions.clone_from(directions);
        debug!("Selected recipe {} '{}'", index, name);
        true
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn displayed_ingredients(&self) -> &str {
        &self.displayed_ingredients
    }

    pub fn displayed_directions(&self) -> &str {
        &self.displayed_directions
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Focus / التركيز
// ═══════════════════════════════════════════════════════════════════════════════

/// Window receiving keyboard input / النافذة التي تستقبل لوحة المفاتيح
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Search,
    Display,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Search => Focus::Display,
            Focus::Display => Focus::Search,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Application State / حالة التطبيق
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state, owned by the render loop
/// حالة التطبيق الرئيسية، مملوكة لحلقة الرسم
pub struct AppState {
    /// Loaded recipes, never mutated / الوصفات المحملة، لا تتغير
    pub recipes: RecipeCollection,

    /// Current selection and its text / الاختيار الحالي ونصه
    pub selection: SelectionState,

    /// Search window's own persistent state / الحالة الخاصة بنافذة البحث
    pub search: SearchPanelState,

    /// Vertical scroll of the display window / التمرير العمودي لنافذة العرض
    pub display_scroll: u16,

    /// Text area of the display window last frame / منطقة النص في نافذة العرض
    pub display_viewport: Rect,

    /// Window with keyboard focus / النافذة ذات التركيز
    pub focus: Focus,

    /// Should the application quit? / هل يجب إنهاء التطبيق؟
    pub should_quit: bool,
}

impl AppState {
    /// Create a new AppState over a loaded collection
    /// إنشاء حالة تطبيق جديدة فوق مجموعة محملة
    pub fn new(recipes: RecipeCollection) -> Self {
        Self {
            recipes,
            selection: SelectionState::new(),
            search: SearchPanelState::default(),
            display_scroll: 0,
            display_viewport: Rect::default(),
            focus: Focus::default(),
            should_quit: false,
        }
    }

    /// Select entry `index` through the search panel
    /// اختيار عنصر عبر لوحة البحث
    pub fn select_recipe(&mut self, index: usize) -> bool {
        let changed = self.selection.selected_index() != Some(index);
        let selected = self
            .search
            .select(index, &mut self.selection, &self.recipes);
        if selected && changed {
            self.display_scroll = 0;
        }
        selected
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Unit Tests / اختبارات الوحدة
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe_store::Recipe;

    fn soup_and_cake() -> RecipeCollection {
        RecipeCollection::from_recipes(vec![
            Recipe::new("Soup", "water", "boil"),
            Recipe::new("Soup", "salt", "stir"),
            Recipe::new("Cake", "flour", "bake"),
        ])
    }

    #[test]
    fn test_initial_state_unselected() {
        let selection = SelectionState::new();

        assert_eq!(selection.selected_index(), None);
        assert_eq!(selection.displayed_ingredients(), "");
        assert_eq!(selection.displayed_directions(), "");
    }

    #[test]
    fn test_select_index_one() {
        let recipes = soup_and_cake();
        let mut selection = SelectionState::new();

        assert!(selection.select(1, &recipes));
        assert_eq!(selection.selected_index(), Some(1));
        assert_eq!(selection.displayed_ingredients(), "flour");
        assert_eq!(selection.displayed_directions(), "bake");
    }

    #[test]
    fn test_select_every_index_matches_recipe() {
        let recipes = RecipeCollection::from_recipes(
            (0..20).map(|i| Recipe::new(format!("R{i}"), format!("ing {i}"), format!("dir {i}"))),
        );
        let mut selection = SelectionState::new();

        for n in 0..recipes.len() {
            assert!(selection.select(n, &recipes));
            assert_eq!(selection.displayed_ingredients(), recipes.ingredients()[n]);
            assert_eq!(selection.displayed_directions(), recipes.directions()[n]);
        }
    }

    #[test]
    fn test_second_selection_replaces_text() {
        let recipes = RecipeCollection::from_recipes(vec![
            Recipe::new("Long", "a very long ingredient list", "many many steps"),
            Recipe::new("Short", "egg", "fry"),
        ]);
        let mut selection = SelectionState::new();

        selection.select(0, &recipes);
        selection.select(1, &recipes);

        assert_eq!(selection.displayed_ingredients(), "egg");
        assert_eq!(selection.displayed_directions(), "fry");
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let recipes = soup_and_cake();
        let mut selection = SelectionState::new();
        selection.select(0, &recipes);

        assert!(!selection.select(5, &recipes));
        assert_eq!(selection.selected_index(), Some(0));
        assert_eq!(selection.displayed_ingredients(), "water");
    }

    #[test]
    fn test_select_recipe_resets_scroll() {
        let mut state = AppState::new(soup_and_cake());
        state.select_recipe(0);
        state.display_scroll = 4;

        state.select_recipe(0);
        assert_eq!(state.display_scroll, 4);

        state.select_recipe(1);
        assert_eq!(state.display_scroll, 0);
        assert_eq!(state.selection.selected_index(), Some(1));
    }

    #[test]
    fn test_focus_toggle() {
        assert_eq!(Focus::Search.toggle(), Focus::Display);
        assert_eq!(Focus::Display.toggle(), Focus::Search);
    }
}
