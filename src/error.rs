// ═══════════════════════════════════════════════════════════════════════════════
// 📦 error.rs - Error Types
// ═══════════════════════════════════════════════════════════════════════════════
// Errors raised while loading the recipe dataset at startup.
// All of them are fatal: the app exits before the terminal is touched.
// ═══════════════════════════════════════════════════════════════════════════════

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading the recipe file
/// الأخطاء التي قد تحدث أثناء تحميل ملف الوصفات
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File is missing or unreadable / الملف غير موجود أو غير قابل للقراءة
    #[error("Failed to open recipe file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Header row lacks a required column / الترويسة تفتقد عموداً مطلوباً
    #[error("Required column '{0}' not found in header")]
    MissingColumn(&'static str),

    /// A data row could not be parsed / تعذر تحليل صف بيانات
    #[error("Malformed row at line {line}: {source}")]
    Malformed {
        line: u64,
        #[source]
        source: csv::Error,
    },

    /// Header row could not be read
    #[error("Failed to read CSV header: {0}")]
    Csv(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_message_names_path_and_cause() {
        let err = DataLoadError::Open {
            path: PathBuf::from("data/recipes.csv"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };

        assert_eq!(
            err.to_string(),
            "Failed to open recipe file data/recipes.csv: no such file"
        );
    }

    #[test]
    fn test_missing_column_message() {
        let err = DataLoadError::MissingColumn("directions");
        assert_eq!(err.to_string(), "Required column 'directions' not found in header");
    }
}
