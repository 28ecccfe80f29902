use chrono::NaiveDate;
use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, column, container, icon, row, scrollable, text, text_input};
use cosmic::Element;

use mealplan::core::recipe::SavedRecipes;

use crate::fl;
use crate::message::Message;

pub fn saved_recipes_view<'a>(
    saved: &SavedRecipes,
    query: &str,
    selected_day: Option<NaiveDate>,
) -> Element<'a, Message> {
    let mut content = column().spacing(12);

    content = content.push(
        text_input::text_input(fl!("search-placeholder"), query.to_string())
            .on_input(Message::SearchQueryChanged)
            .width(Length::Fill),
    );

    let matches = saved.filter(query);
    if matches.is_empty() {
        let empty_msg = if query.trim().is_empty() {
            fl!("saved-empty")
        } else {
            fl!("saved-no-match")
        };
        content = content.push(
            container(text::body(empty_msg))
                .padding(32)
                .center_x(Length::Fill)
                .width(Length::Fill),
        );
    }

    for recipe in matches {
        let id = recipe.id;

        let details = column()
            .spacing(2)
            .push(text::body(recipe.title.clone()))
            .push(text::caption(fl!(
                "recipe-details",
                minutes = recipe.ready_in_minutes.to_string(),
                servings = recipe.servings.to_string()
            )));

        let mut item_row = row()
            .spacing(8)
            .align_y(Alignment::Center)
            .push(container(details).width(Length::Fill));

        if let Some(day) = selected_day {
            item_row = item_row.push(
                button::standard(fl!("plan-for", day = day.format("%a %b %e").to_string()))
                    .on_press(Message::PlanRecipe(id)),
            );
        }

        item_row = item_row.push(
            button::icon(icon::from_name("edit-delete-symbolic"))
                .on_press(Message::RemoveSavedRecipe(id)),
        );

        content = content.push(item_row);
    }

    container(scrollable(content.padding(16)))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
