use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::carousel::{CarouselConfig, SWIPE_THRESHOLD};
use crate::core::spring::SpringConfig;

pub const CONFIG_VERSION: u64 = 1;

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("~/.local/share"))
        .join("mealplan")
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, CosmicConfigEntry)]
pub struct MealPlanConfig {
    pub data_directory: PathBuf,
    pub swipe_threshold: f32,
    pub spring_stiffness: f32,
    pub spring_damping: f32,
    pub debug_logging: bool,
}

impl Default for MealPlanConfig {
    fn default() -> Self {
        let spring = SpringConfig::default();
        Self {
            data_directory: default_data_dir(),
            swipe_threshold: SWIPE_THRESHOLD,
            spring_stiffness: spring.stiffness,
            spring_damping: spring.damping,
            debug_logging: false,
        }
    }
}

impl MealPlanConfig {
    pub fn meal_plan_path(&self) -> PathBuf {
        self.data_directory.join("meals.org")
    }

    pub fn groceries_path(&self) -> PathBuf {
        self.data_directory.join("groceries.org")
    }

    pub fn saved_recipes_path(&self) -> PathBuf {
        self.data_directory.join("saved_recipes.json")
    }

    /// Carousel tuning. Non-positive values fall back to the defaults.
    pub fn carousel_config(&self) -> CarouselConfig {
        let defaults = CarouselConfig::default();
        let positive = |value: f32, fallback: f32| if value > 0.0 { value } else { fallback };
        CarouselConfig {
            swipe_threshold: positive(self.swipe_threshold, defaults.swipe_threshold),
            spring: SpringConfig {
                stiffness: positive(self.spring_stiffness, defaults.spring.stiffness),
                damping: positive(self.spring_damping, defaults.spring.damping),
                ..defaults.spring
            },
        }
    }

    /// Ensure the data directory and org files exist.
    pub fn ensure_files(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.data_directory)?;

        let files = [("meals.org", "Meal Plan"), ("groceries.org", "Groceries")];

        for (filename, title) in &files {
            let path = self.data_directory.join(filename);
            if !path.exists() {
                std::fs::write(&path, format!("#+TITLE: {}\n\n", title))?;
            }
        }

        Ok(())
    }
}
