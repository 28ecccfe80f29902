use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub image: String,
    pub ready_in_minutes: u32,
    pub servings: u32,
}

impl Recipe {
    pub fn new(id: u64, title: impl Into<String>, ready_in_minutes: u32, servings: u32) -> Self {
        Self {
            id,
            title: title.into(),
            image: String::new(),
            ready_in_minutes,
            servings,
        }
    }
}

/// Bookmarked recipes, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedRecipes {
    recipes: Vec<Recipe>,
}

impl SavedRecipes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bookmark a recipe. Returns false if it was already saved.
    pub fn save(&mut self, recipe: Recipe) -> bool {
        if self.is_saved(recipe.id) {
            return false;
        }
        self.recipes.push(recipe);
        true
    }

    /// Returns false if nothing was saved under `id`.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.recipes.len();
        self.recipes.retain(|r| r.id != id);
        self.recipes.len() != before
    }

    pub fn is_saved(&self, id: u64) -> bool {
        self.recipes.iter().any(|r| r.id == id)
    }

    pub fn get(&self, id: u64) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn all(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Recipes whose title contains `query`, ignoring case.
    pub fn filter(&self, query: &str) -> Vec<&Recipe> {
        let needle = query.trim().to_lowercase();
        self.recipes
            .iter()
            .filter(|r| needle.is_empty() || r.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// Load bookmarks from a JSON file. A missing file is an empty collection.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn store(&self, path: &Path) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
