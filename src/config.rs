// ═══════════════════════════════════════════════════════════════════════════════
// 📦 config.rs - Runner Configuration
// ═══════════════════════════════════════════════════════════════════════════════
// Fixed window and layout settings. Nothing here is read from the
// environment or the command line.
// ═══════════════════════════════════════════════════════════════════════════════

use std::time::Duration;

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Constants / الثوابت
// ═══════════════════════════════════════════════════════════════════════════════

/// Terminal window title / عنوان النافذة
pub const WINDOW_TITLE: &str = "Recipe Database";

/// Initial window size in cells (columns, rows) / الحجم الابتدائي للنافذة بالخلايا
pub const WINDOW_SIZE: (u16, u16) = (120, 40);

/// Tick rate for the event loop in milliseconds
/// معدل التحديث لحلقة الأحداث بالميلي ثانية
pub const TICK_RATE_MS: u64 = 50;

/// Dataset file name, looked up next to the executable
pub const DATA_FILE_NAME: &str = "recipes.csv";

/// Visible rows of the recipe list box / عدد الصفوف الظاهرة في قائمة الوصفات
pub const LIST_VISIBLE_ROWS: u16 = 15;

/// Ratio of the left (search) dock / نسبة منطقة البحث اليسرى
pub const SPLIT_RATIO: f32 = 0.5;

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Runner Configuration / إعدادات التشغيل
// ═══════════════════════════════════════════════════════════════════════════════

/// Settings the application runner applies before entering the loop
#[derive(Debug, Clone, PartialEq)]
pub struct RunnerConfig {
    pub window_title: String,
    pub window_size: (u16, u16),
    pub tick_rate: Duration,
    pub data_file_name: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            window_title: WINDOW_TITLE.to_string(),
            window_size: WINDOW_SIZE,
            tick_rate: Duration::from_millis(TICK_RATE_MS),
            data_file_name: DATA_FILE_NAME.to_string(),
        }
    }
}
