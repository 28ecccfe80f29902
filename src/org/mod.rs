pub mod convert;
pub mod parser;
pub mod writer;

use std::io::ErrorKind;
use std::path::Path;

use crate::core::assignment::MealPlan;
use crate::core::grocery::GroceryList;
use crate::error::StoreError;

use writer::OrgWriter;

fn read_optional(path: &Path) -> Result<Option<String>, StoreError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Load the meal plan. A missing file is an empty plan.
pub fn load_meal_plan(path: &Path) -> Result<MealPlan, StoreError> {
    Ok(read_optional(path)?
        .map(|content| convert::parse_meal_plan(&content))
        .unwrap_or_default())
}

pub fn save_meal_plan(path: &Path, plan: &MealPlan) -> Result<(), StoreError> {
    std::fs::write(path, OrgWriter::write_meal_plan(plan))?;
    Ok(())
}

/// Load the grocery list. A missing file is an empty list.
pub fn load_groceries(path: &Path) -> Result<GroceryList, StoreError> {
    Ok(read_optional(path)?
        .map(|content| convert::parse_groceries(&content))
        .unwrap_or_default())
}

pub fn save_groceries(path: &Path, list: &GroceryList) -> Result<(), StoreError> {
    std::fs::write(path, OrgWriter::write_groceries(list))?;
    Ok(())
}
