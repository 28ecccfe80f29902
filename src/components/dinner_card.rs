use cosmic::iced::Length;
use cosmic::widget::{column, container, text};
use cosmic::Element;

use mealplan::core::assignment::RecipeRef;

use crate::fl;
use crate::message::Message;

/// Card showing the recipe planned for today.
pub fn dinner_card<'a>(tonight: Option<RecipeRef>) -> Element<'a, Message> {
    let mut card = column().spacing(4).push(text::title4(fl!("tonights-dinner")));

    match tonight {
        Some(recipe) => {
            card = card.push(text::body(recipe.title));
            if let Some(minutes) = recipe.ready_in_minutes {
                card = card.push(text::caption(fl!("cook-time", minutes = minutes.to_string())));
            }
        }
        None => {
            card = card.push(text::caption(fl!("no-dinner")));
        }
    }

    container(card).padding(12).width(Length::Fill).into()
}
