use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::day_grid::DayKey;
use super::recipe::Recipe;

/// The part of a recipe the calendar needs to show an assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRef {
    pub id: u64,
    pub title: String,
    pub ready_in_minutes: Option<u32>,
    pub servings: Option<u32>,
}

impl RecipeRef {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            ready_in_minutes: None,
            servings: None,
        }
    }
}

impl From<&Recipe> for RecipeRef {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title.clone(),
            ready_in_minutes: Some(recipe.ready_in_minutes),
            servings: Some(recipe.servings),
        }
    }
}

/// Day-to-recipe assignments as seen by the calendar.
pub trait DayAssignmentStore {
    fn lookup(&self, key: DayKey) -> Option<RecipeRef>;

    /// Drop the assignment for `key`. Removing an empty day is a no-op.
    fn remove(&mut self, key: DayKey);
}

/// In-memory meal plan, at most one recipe per day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MealPlan {
    days: BTreeMap<DayKey, RecipeRef>,
}

impl MealPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `recipe` to `key`, returning whatever it replaced.
    pub fn assign(&mut self, key: DayKey, recipe: RecipeRef) -> Option<RecipeRef> {
        self.days.insert(key, recipe)
    }

    pub fn get(&self, key: DayKey) -> Option<&RecipeRef> {
        self.days.get(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (DayKey, &RecipeRef)> {
        self.days.iter().map(|(k, r)| (*k, r))
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl DayAssignmentStore for MealPlan {
    fn lookup(&self, key: DayKey) -> Option<RecipeRef> {
        self.days.get(&key).cloned()
    }

    fn remove(&mut self, key: DayKey) {
        if self.days.remove(&key).is_none() {
            log::debug!("meal plan: nothing assigned on {key}");
        }
    }
}

impl FromIterator<(DayKey, RecipeRef)> for MealPlan {
    fn from_iter<I: IntoIterator<Item = (DayKey, RecipeRef)>>(iter: I) -> Self {
        Self {
            days: iter.into_iter().collect(),
        }
    }
}
