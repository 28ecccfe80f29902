use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::core::assignment::{MealPlan, RecipeRef};
use crate::core::day_grid::DayKey;
use crate::core::grocery::{GroceryItem, GroceryList};

use super::parser::{OrgParser, ParsedHeading};

/// Convert a dated heading into a day assignment. Headings without a date or
/// recipe id are skipped.
pub fn heading_to_assignment(heading: &ParsedHeading) -> Option<(DayKey, RecipeRef)> {
    let date = heading.date?;
    let id = OrgParser::get_property(&heading.properties, "RECIPE_ID")?
        .parse::<u64>()
        .ok()?;
    let number = |key: &str| {
        OrgParser::get_property(&heading.properties, key).and_then(|s| s.parse::<u32>().ok())
    };

    Some((
        DayKey(date),
        RecipeRef {
            id,
            title: heading.title.clone(),
            ready_in_minutes: number("READY_IN"),
            servings: number("SERVINGS"),
        },
    ))
}

/// Convert a heading into a grocery item.
pub fn heading_to_grocery(heading: &ParsedHeading) -> GroceryItem {
    let id = OrgParser::get_property(&heading.properties, "ID")
        .and_then(|s| Uuid::parse_str(s).ok())
        .unwrap_or_else(Uuid::new_v4);

    let created = OrgParser::get_property(&heading.properties, "CREATED")
        .and_then(|s| {
            // Format: [2024-06-15 Sat 10:00]
            let s = s.trim_matches(|c| c == '[' || c == ']');
            NaiveDateTime::parse_from_str(s, "%Y-%m-%d %a %H:%M").ok()
        })
        .unwrap_or_else(|| chrono::Local::now().naive_local());

    GroceryItem {
        id,
        name: heading.title.clone(),
        editing: false,
        crossed_out: heading.keyword.as_deref() == Some("DONE"),
        created,
    }
}

/// Parse the meal plan file. Later headings for the same day win.
pub fn parse_meal_plan(input: &str) -> MealPlan {
    OrgParser::parse(input)
        .iter()
        .filter_map(|h| {
            let assignment = heading_to_assignment(h);
            if assignment.is_none() {
                log::warn!("Skipping meal plan heading without date or recipe id: {}", h.title);
            }
            assignment
        })
        .collect()
}

/// Parse the grocery list file.
pub fn parse_groceries(input: &str) -> GroceryList {
    let items = OrgParser::parse(input)
        .iter()
        .filter(|h| !h.title.trim().is_empty())
        .map(heading_to_grocery)
        .collect();
    GroceryList::from_items(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::assignment::DayAssignmentStore;
    use crate::org::writer::OrgWriter;
    use chrono::NaiveDate;

    #[test]
    fn meal_plan_survives_a_write() {
        let mut plan = MealPlan::new();
        let tue = DayKey(NaiveDate::from_ymd_opt(2024, 6, 18).unwrap());
        let fri = DayKey(NaiveDate::from_ymd_opt(2024, 6, 21).unwrap());
        plan.assign(tue, RecipeRef { servings: Some(4), ..RecipeRef::new(1, "Pesto pasta") });
        plan.assign(fri, RecipeRef::new(2, "Fish tacos"));

        let parsed = parse_meal_plan(&OrgWriter::write_meal_plan(&plan));
        assert_eq!(parsed, plan);
        assert_eq!(parsed.lookup(tue).and_then(|r| r.servings), Some(4));
    }

    #[test]
    fn headings_missing_recipe_id_are_skipped() {
        let input = "\
* <2024-06-18 Tue> Mystery dish
* <2024-06-19 Wed> Soup
  :PROPERTIES:
  :RECIPE_ID: 12
  :END:
* Undated
  :PROPERTIES:
  :RECIPE_ID: 13
  :END:
";
        let plan = parse_meal_plan(input);
        assert_eq!(plan.len(), 1);
        let (key, recipe) = plan.iter().next().unwrap();
        assert_eq!(key.date(), NaiveDate::from_ymd_opt(2024, 6, 19).unwrap());
        assert_eq!(recipe.title, "Soup");
    }

    #[test]
    fn groceries_keep_id_and_crossed_out_state() {
        let input = "\
#+TITLE: Groceries

* DONE Parmesan
  :PROPERTIES:
  :ID: 550e8400-e29b-41d4-a716-446655440000
  :CREATED: [2024-06-15 Sat 10:00]
  :END:
* TODO Basil
";
        let list = parse_groceries(input);
        assert_eq!(list.items().len(), 2);
        let parmesan = &list.items()[0];
        assert!(parmesan.crossed_out);
        assert_eq!(parmesan.id.to_string(), "550e8400-e29b-41d4-a716-446655440000");
        assert_eq!(
            parmesan.created,
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap().and_hms_opt(10, 0, 0).unwrap()
        );
        assert!(!list.items()[1].crossed_out);
        assert!(!list.items()[1].editing);
    }
}
