// ═══════════════════════════════════════════════════════════════════════════════
// 📦 recipe_store.rs - Recipe Data Loader
// ═══════════════════════════════════════════════════════════════════════════════
// This module loads the recipe dataset from a CSV file once at startup.
// Features:
// - Header-driven column lookup (recipe_name, ingredients, directions)
// - Extra columns ignored, quoted fields supported
// - Duplicate recipe names dropped, first occurrence kept
// - Immutable collection exposed as parallel name/ingredients/directions lists
// ═══════════════════════════════════════════════════════════════════════════════

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Deserialize;

use crate::error::DataLoadError;

/// Columns every recipe file must provide / الأعمدة المطلوبة في كل ملف وصفات
pub const REQUIRED_COLUMNS: [&str; 3] = ["recipe_name", "ingredients", "directions"];

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Recipe Structures / هياكل الوصفات
// ═══════════════════════════════════════════════════════════════════════════════

/// A single recipe, immutable after load
/// وصفة واحدة، غير قابلة للتعديل بعد التحميل
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub name: String,
    pub ingredients: String,
    pub directions: String,
}

impl Recipe {
    pub fn new(
        name: impl Into<String>,
        ingredients: impl Into<String>,
        directions: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.into(),
            directions: directions.into(),
        }
    }
}

/// Raw CSV row; unknown columns are ignored by serde
#[derive(Debug, Deserialize)]
struct RecipeRow {
    recipe_name: String,
    ingredients: String,
    directions: String,
}

impl From<RecipeRow> for Recipe {
    fn from(row: RecipeRow) -> Self {
        Recipe::new(row.recipe_name, row.ingredients, row.directions)
    }
}

/// Ordered recipes with unique names, kept as three index-consistent sequences
/// مجموعة وصفات مرتبة بأسماء فريدة، محفوظة كثلاث قوائم متوازية
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeCollection {
    names: Vec<String>,
    ingredients: Vec<String>,
    directions: Vec<String>,
}

impl RecipeCollection {
    /// Build a collection, dropping later duplicates by name
    /// بناء مجموعة مع حذف التكرارات اللاحقة حسب الاسم
    pub fn from_recipes<I: IntoIterator<Item = Recipe>>(items: I) -> Self {
        let mut seen = HashSet::new();
        let mut collection = Self::default();

        for recipe in items {
            if !seen.insert(recipe.name.clone()) {
                debug!("Dropping duplicate recipe '{}'", recipe.name);
                continue;
            }
            collection.names.push(recipe.name);
            collection.ingredients.push(recipe.ingredients);
            collection.directions.push(recipe.directions);
        }

        collection
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn directions(&self) -> &[String] {
        &self.directions
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Recipe Loader / محمّل الوصفات
// ═══════════════════════════════════════════════════════════════════════════════

/// CSV loader for the recipe dataset
/// محمّل CSV لبيانات الوصفات
#[derive(Debug, Default)]
pub struct RecipeLoader {
    /// Data rows read from the file / عدد الصفوف المقروءة
    rows_read: usize,

    /// Rows dropped because the name was already seen / الصفوف المحذوفة بسبب التكرار
    duplicates_dropped: usize,
}

impl RecipeLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load recipes from a CSV file
    /// تحميل الوصفات من ملف CSV
    ///
    /// # Errors
    /// * `DataLoadError::Open` - file missing or unreadable
    /// * `DataLoadError::MissingColumn` - header lacks a required column
    /// * `DataLoadError::Malformed` - a row cannot be parsed
    pub fn load<P: AsRef<Path>>(&mut self, file_path: P) -> Result<RecipeCollection, DataLoadError> {
        let path = file_path.as_ref();
        let file = File::open(path).map_err(|source| DataLoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let collection = self.load_from_reader(file)?;
        info!(
            "Loaded {} recipes from {} ({} rows, {} duplicates dropped)",
            collection.len(),
            path.display(),
            self.rows_read(),
            self.duplicates_dropped()
        );
        Ok(collection)
    }

    /// Load recipes from any reader producing CSV text
    pub fn load_from_reader<R: Read>(&mut self, reader: R) -> Result<RecipeCollection, DataLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        // Check the header before touching rows / التحقق من الترويسة قبل قراءة الصفوف
        let headers = csv_reader.headers()?;
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DataLoadError::MissingColumn(column));
            }
        }

        let rows = csv_reader
            .deserialize::<RecipeRow>()
            .map(|result| {
                result.map(Recipe::from).map_err(|source| DataLoadError::Malformed {
                    line: source.position().map_or(0, |p| p.line()),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.rows_read = rows.len();
        let collection = RecipeCollection::from_recipes(rows);
        self.duplicates_dropped = self.rows_read - collection.len();

        Ok(collection)
    }

    pub fn rows_read(&self) -> usize {
        self.rows_read
    }

    pub fn duplicates_dropped(&self) -> usize {
        self.duplicates_dropped
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Helper Functions / دوال مساعدة
// ═══════════════════════════════════════════════════════════════════════════════

/// Load the recipe file at `path`
pub fn load<P: AsRef<Path>>(path: P) -> Result<RecipeCollection, DataLoadError> {
    RecipeLoader::new().load(path)
}

/// Locate the dataset: next to the executable first, then the working directory
/// تحديد مكان ملف البيانات: بجانب الملف التنفيذي أولاً، ثم مجلد العمل
pub fn resolve_data_path(file_name: &str) -> PathBuf {
    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(file_name)));

    match beside_exe {
        Some(path) if path.is_file() => path,
        _ => PathBuf::from(file_name),
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Unit Tests / اختبارات الوحدة
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn load_str(data: &str) -> Result<RecipeCollection, DataLoadError> {
        RecipeLoader::new().load_from_reader(data.as_bytes())
    }

    /// Rebuild entry `index` from the three parallel lists
    fn recipe_at(recipes: &RecipeCollection, index: usize) -> Recipe {
        Recipe::new(
            recipes.names()[index].as_str(),
            recipes.ingredients()[index].as_str(),
            recipes.directions()[index].as_str(),
        )
    }

    #[test]
    fn test_duplicates_keep_first_occurrence() {
        let data = "recipe_name,ingredients,directions\n\
                    Soup,water,boil\n\
                    Soup,salt,stir\n\
                    Cake,flour,bake\n";

        let mut loader = RecipeLoader::new();
        let recipes = loader.load_from_reader(data.as_bytes()).unwrap();

        assert_eq!(recipes.len(), 2);
        assert_eq!(recipe_at(&recipes, 0), Recipe::new("Soup", "water", "boil"));
        assert_eq!(recipe_at(&recipes, 1), Recipe::new("Cake", "flour", "bake"));
        assert_eq!(loader.rows_read(), 3);
        assert_eq!(loader.duplicates_dropped(), 1);
    }

    #[test]
    fn test_row_order_preserved_after_dedup() {
        let data = "recipe_name,ingredients,directions\n\
                    B,1,1\nA,2,2\nB,3,3\nC,4,4\nA,5,5\n";
        let recipes = load_str(data).unwrap();

        assert_eq!(recipes.names(), ["B", "A", "C"]);
        assert_eq!(recipes.ingredients(), ["1", "2", "4"]);
        assert_eq!(recipes.directions(), ["1", "2", "4"]);
    }

    #[test]
    fn test_extra_columns_and_order_ignored() {
        let data = "id,directions,recipe_name,rating,ingredients\n\
                    7,\"Mix, then bake\",Bread,5,\"flour, water\"\n";
        let recipes = load_str(data).unwrap();

        assert_eq!(recipes.len(), 1);
        assert_eq!(
            recipe_at(&recipes, 0),
            Recipe::new("Bread", "flour, water", "Mix, then bake")
        );
    }

    #[test]
    fn test_empty_strings_allowed() {
        let data = "recipe_name,ingredients,directions\nToast,,\n";
        let recipes = load_str(data).unwrap();

        assert_eq!(recipe_at(&recipes, 0), Recipe::new("Toast", "", ""));
    }

    #[test]
    fn test_header_only_gives_empty_collection() {
        let recipes = load_str("recipe_name,ingredients,directions\n").unwrap();
        assert!(recipes.is_empty());
        assert!(recipes.names().is_empty());
    }

    #[test]
    fn test_missing_column() {
        let err = load_str("recipe_name,ingredients\nSoup,water\n").unwrap_err();
        assert!(matches!(err, DataLoadError::MissingColumn("directions")));
    }

    #[test]
    fn test_empty_input_is_missing_column() {
        let err = load_str("").unwrap_err();
        assert!(matches!(err, DataLoadError::MissingColumn("recipe_name")));
    }

    #[test]
    fn test_unequal_row_is_malformed() {
        let data = "recipe_name,ingredients,directions\nSoup,water,boil\nCake,flour\n";
        let err = load_str(data).unwrap_err();
        assert!(matches!(err, DataLoadError::Malformed { .. }));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, DataLoadError::Open { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "recipe_name,ingredients,directions").unwrap();
        writeln!(file, "Pancakes,\"eggs\nmilk\",fry").unwrap();
        file.flush().unwrap();

        let recipes = load(file.path()).unwrap();
        assert_eq!(recipe_at(&recipes, 0), Recipe::new("Pancakes", "eggs\nmilk", "fry"));
    }

    #[test]
    fn test_loader_and_from_recipes_agree() {
        let data = "recipe_name,ingredients,directions\nSoup,water,boil\nSoup,salt,stir\n";
        let loaded = load_str(data).unwrap();
        let built = RecipeCollection::from_recipes(vec![
            Recipe::new("Soup", "water", "boil"),
            Recipe::new("Soup", "salt", "stir"),
        ]);

        assert_eq!(loaded, built);
        assert_eq!(built.ingredients(), ["water"]);
    }
}
