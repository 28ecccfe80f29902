use std::time::Instant;

use chrono::NaiveDate;
use uuid::Uuid;

use mealplan::core::day_grid::DayKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Calendar,
    SavedRecipes,
    Groceries,
}

impl Page {
    pub const ALL: &'static [Page] = &[Page::Calendar, Page::SavedRecipes, Page::Groceries];

    pub fn title(&self) -> String {
        match self {
            Self::Calendar => crate::fl!("page-calendar"),
            Self::SavedRecipes => crate::fl!("page-saved-recipes"),
            Self::Groceries => crate::fl!("page-groceries"),
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::Calendar => "x-office-calendar-symbolic",
            Self::SavedRecipes => "starred-symbolic",
            Self::Groceries => "payment-card-symbolic",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    // Pointer input feeding the week carousel
    CursorMoved(f32),
    /// Touch events carry a position; mouse presses reuse the last cursor position.
    PointerPressed(Option<f32>),
    PointerReleased(Option<f32>),
    AnimationTick(Instant),
    WindowResized(f32),
    /// The week strip reported a new horizontal scroll offset.
    StripScrolled(f32),

    // Calendar
    SelectDay(NaiveDate),
    RequestDelete(DayKey),
    ConfirmDelete,
    CancelDelete,

    // Saved recipes
    SearchQueryChanged(String),
    PlanRecipe(u64),
    RemoveSavedRecipe(u64),

    // Groceries
    GroceryAdd,
    GroceryRename(Uuid, String),
    GrocerySubmit(Uuid),
    GroceryToggle(Uuid),
    GroceryRemove(Uuid),
}
