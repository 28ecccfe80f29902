pub mod calendar;
pub mod groceries;
pub mod saved_recipes;
