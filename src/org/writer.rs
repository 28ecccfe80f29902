use crate::core::assignment::{MealPlan, RecipeRef};
use crate::core::day_grid::DayKey;
use crate::core::grocery::{GroceryItem, GroceryList};

/// Writes planner data to org-mode format.
pub struct OrgWriter;

impl OrgWriter {
    /// Write the meal plan file, one heading per assigned day in date order.
    pub fn write_meal_plan(plan: &MealPlan) -> String {
        let mut out = String::from("#+TITLE: Meal Plan\n\n");
        for (key, recipe) in plan.iter() {
            out.push_str(&Self::write_assignment(key, recipe));
        }
        out
    }

    /// Write one assignment: `* <2024-06-18 Tue> Title` plus a property drawer.
    pub fn write_assignment(key: DayKey, recipe: &RecipeRef) -> String {
        let mut out = String::new();
        let indent = "  ";

        out.push_str(&format!(
            "* <{}> {}\n",
            key.date().format("%Y-%m-%d %a"),
            recipe.title
        ));
        out.push_str(&format!("{indent}:PROPERTIES:\n"));
        out.push_str(&format!("{indent}:RECIPE_ID: {}\n", recipe.id));
        if let Some(minutes) = recipe.ready_in_minutes {
            out.push_str(&format!("{indent}:READY_IN: {}\n", minutes));
        }
        if let Some(servings) = recipe.servings {
            out.push_str(&format!("{indent}:SERVINGS: {}\n", servings));
        }
        out.push_str(&format!("{indent}:END:\n"));

        out
    }

    /// Write the grocery list file. Blank items are left out.
    pub fn write_groceries(list: &GroceryList) -> String {
        let mut out = String::from("#+TITLE: Groceries\n\n");
        for item in list.items().iter().filter(|i| !i.is_blank()) {
            out.push_str(&Self::write_grocery_item(item));
        }
        out
    }

    pub fn write_grocery_item(item: &GroceryItem) -> String {
        let mut out = String::new();
        let indent = "  ";

        let keyword = if item.crossed_out { "DONE" } else { "TODO" };
        out.push_str(&format!("* {} {}\n", keyword, item.name.trim()));
        out.push_str(&format!("{indent}:PROPERTIES:\n"));
        out.push_str(&format!("{indent}:ID: {}\n", item.id));
        out.push_str(&format!(
            "{indent}:CREATED: [{}]\n",
            item.created.format("%Y-%m-%d %a %H:%M")
        ));
        out.push_str(&format!("{indent}:END:\n"));

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn write_assignment_heading() {
        let key = DayKey(NaiveDate::from_ymd_opt(2024, 6, 18).unwrap());
        let recipe = RecipeRef {
            ready_in_minutes: Some(25),
            ..RecipeRef::new(715594, "Creamy Pesto Chicken Pasta")
        };
        let output = OrgWriter::write_assignment(key, &recipe);
        assert!(output.starts_with("* <2024-06-18 Tue> Creamy Pesto Chicken Pasta\n"));
        assert!(output.contains(":RECIPE_ID: 715594"));
        assert!(output.contains(":READY_IN: 25"));
        assert!(!output.contains(":SERVINGS:"));
    }

    #[test]
    fn write_groceries_skips_blank_items() {
        let mut list = GroceryList::new();
        let milk = list.add();
        list.rename(milk, "Milk");
        list.toggle_crossed_out(milk);
        list.add();
        let output = OrgWriter::write_groceries(&list);
        assert!(output.starts_with("#+TITLE: Groceries"));
        assert!(output.contains("* DONE Milk"));
        assert_eq!(output.matches("\n* ").count(), 1);
    }
}
