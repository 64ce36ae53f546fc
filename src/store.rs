//! Durable client-local store of saved recipes.
//!
//! One JSON file holds the full ordered list, loaded once at startup and
//! rewritten wholesale on every mutation. Record counts are small
//! (single user), so whole-file rewrites are the durability model.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::ChefError;
use crate::model::Recipe;

/// Result of a save attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The recipe was added and persisted
    Saved,
    /// An identical (title, submitter) pair already exists; nothing changed
    AlreadySaved,
}

/// Result of a removal attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The recipe was removed and the store re-persisted
    Removed,
    /// The confirmation gate declined; nothing changed
    Declined,
}

/// Blocking acknowledgement gate for destructive operations.
pub trait Confirmation {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Saved-recipes store backed by a single JSON file.
pub struct LocalStore {
    path: PathBuf,
    recipes: Vec<Recipe>,
}

impl LocalStore {
    /// Opens the store, reading the persisted set once.
    ///
    /// A missing file or a parse failure is recovered as an empty store;
    /// it is logged but never surfaced to the user.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let recipes = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<Vec<Recipe>>(&raw) {
                Ok(recipes) => recipes,
                Err(e) => {
                    warn!("Failed to parse saved recipes at {}: {}", path.display(), e);
                    Vec::new()
                }
            },
            Err(e) => {
                debug!("No saved recipes at {}: {}", path.display(), e);
                Vec::new()
            }
        };

        LocalStore { path, recipes }
    }

    /// Saved recipes, most recent first.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Saves a recipe unless an exact (title, submitter) match exists.
    ///
    /// Duplicates are a no-op signalled as [`SaveOutcome::AlreadySaved`];
    /// the caller shows a notice, not an error. New recipes are prepended
    /// and the full set rewritten.
    pub fn save(&mut self, recipe: Recipe) -> Result<SaveOutcome, ChefError> {
        let exists = self
            .recipes
            .iter()
            .any(|r| r.title == recipe.title && r.submitter == recipe.submitter);
        if exists {
            return Ok(SaveOutcome::AlreadySaved);
        }

        self.recipes.insert(0, recipe);
        self.persist()?;
        Ok(SaveOutcome::Saved)
    }

    /// Removes the recipe at `index` behind the confirmation gate.
    ///
    /// A declined confirmation leaves the store (and file) untouched.
    pub fn remove(
        &mut self,
        index: usize,
        gate: &dyn Confirmation,
    ) -> Result<RemoveOutcome, ChefError> {
        if index >= self.recipes.len() {
            return Err(ChefError::InvalidIndex(index));
        }
        if !gate.confirm("Remove this recipe from your personal list?") {
            return Ok(RemoveOutcome::Declined);
        }

        self.recipes.remove(index);
        self.persist()?;
        Ok(RemoveOutcome::Removed)
    }

    fn persist(&self) -> Result<(), ChefError> {
        let serialized = serde_json::to_string(&self.recipes)?;
        fs::write(&self.path, serialized)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    struct Always(bool);

    impl Confirmation for Always {
        fn confirm(&self, _prompt: &str) -> bool {
            self.0
        }
    }

    fn recipe(title: &str, submitter: &str) -> Recipe {
        Recipe {
            title: title.to_string(),
            submitter: submitter.to_string(),
            ingredients: "something".to_string(),
            ..Recipe::default()
        }
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = LocalStore::open(dir.path().join("none.json"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_open_corrupt_file_recovers_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("saved.json");
        fs::write(&path, "{not json at all").unwrap();

        let store = LocalStore::open(&path);
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_persists_and_reloads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("saved.json");

        let mut store = LocalStore::open(&path);
        assert_eq!(
            store.save(recipe("Pad Thai", "Ann")).unwrap(),
            SaveOutcome::Saved
        );

        let reloaded = LocalStore::open(&path);
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.recipes()[0].title, "Pad Thai");
    }

    #[test]
    fn test_duplicate_save_is_noop() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("saved.json");

        let mut store = LocalStore::open(&path);
        store.save(recipe("Pad Thai", "Ann")).unwrap();
        assert_eq!(
            store.save(recipe("Pad Thai", "Ann")).unwrap(),
            SaveOutcome::AlreadySaved
        );
        assert_eq!(store.len(), 1);

        // Same title by a different submitter is a distinct record.
        assert_eq!(
            store.save(recipe("Pad Thai", "Ben")).unwrap(),
            SaveOutcome::Saved
        );
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_saves_are_most_recent_first() {
        let dir = tempdir().unwrap();
        let mut store = LocalStore::open(dir.path().join("saved.json"));

        store.save(recipe("First", "Ann")).unwrap();
        store.save(recipe("Second", "Ann")).unwrap();

        assert_eq!(store.recipes()[0].title, "Second");
        assert_eq!(store.recipes()[1].title, "First");
    }

    #[test]
    fn test_remove_requires_confirmation() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("saved.json");
        let mut store = LocalStore::open(&path);
        store.save(recipe("Pad Thai", "Ann")).unwrap();

        assert_eq!(
            store.remove(0, &Always(false)).unwrap(),
            RemoveOutcome::Declined
        );
        assert_eq!(store.len(), 1);

        assert_eq!(
            store.remove(0, &Always(true)).unwrap(),
            RemoveOutcome::Removed
        );
        assert!(store.is_empty());
        assert!(LocalStore::open(&path).is_empty());
    }

    #[test]
    fn test_remove_out_of_range_errors() {
        let dir = tempdir().unwrap();
        let mut store = LocalStore::open(dir.path().join("saved.json"));
        assert!(matches!(
            store.remove(0, &Always(true)),
            Err(ChefError::InvalidIndex(0))
        ));
    }
}
