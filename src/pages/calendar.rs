use chrono::NaiveDate;
use cosmic::iced::{Alignment, Length};
use cosmic::widget::{self, button, column, container, horizontal_space, row, scrollable, text};
use cosmic::Element;

use mealplan::core::assignment::{DayAssignmentStore, MealPlan};
use mealplan::core::carousel::GestureCarousel;
use mealplan::core::day_grid::DayKey;
use mealplan::core::deletion::DeletionConfirm;

use crate::components::dinner_card::dinner_card;
use crate::components::pagination::pagination;
use crate::components::week_slide::week_slide;
use crate::fl;
use crate::message::Message;

pub fn calendar_view<'a>(
    carousel: &GestureCarousel,
    plan: &MealPlan,
    deletion: &DeletionConfirm,
    today: NaiveDate,
    selected_day: Option<NaiveDate>,
    strip_id: &widget::Id,
) -> Element<'a, Message> {
    let mut content = column()
        .spacing(16)
        .padding(16)
        .width(Length::Fill)
        .align_x(Alignment::Center)
        .push(dinner_card(plan.lookup(DayKey(today))));

    // The strip stays mounted while a deletion is pending so it keeps its
    // scroll position; its day rows are inert until the prompt closes.
    let pending = deletion.pending();

    let width = carousel.slide_width();
    let gutter = edge_gutter(width);
    let mut slides = row()
        .spacing(0)
        .push(horizontal_space().width(Length::Fixed(gutter)));
    for (slide, anchor) in carousel.anchors().iter().enumerate() {
        slides = slides.push(week_slide(
            *anchor,
            pending.is_none() && carousel.is_interactable(slide),
            plan,
            today,
            selected_day,
            width,
        ));
    }
    slides = slides.push(horizontal_space().width(Length::Fixed(gutter)));

    let strip = scrollable::horizontal(slides)
        .id(strip_id.clone())
        .on_scroll(|viewport| Message::StripScrolled(viewport.absolute_offset().x))
        .width(Length::Fixed(width));

    content = content
        .push(strip)
        .push(pagination(&carousel.pagination()));

    if let Some(key) = pending {
        content = content.push(delete_prompt(key));
    }

    container(content).width(Length::Fill).height(Length::Fill).into()
}

/// Blank space either side of the week slides, room for edge overshoot.
pub fn edge_gutter(slide_width: f32) -> f32 {
    slide_width / 2.0
}

fn delete_prompt<'a>(key: DayKey) -> Element<'a, Message> {
    let buttons = row()
        .spacing(16)
        .push(button::standard(fl!("delete-no")).on_press(Message::CancelDelete))
        .push(button::destructive(fl!("delete-yes")).on_press(Message::ConfirmDelete));

    container(
        column()
            .spacing(16)
            .align_x(Alignment::Center)
            .push(text::body(fl!("delete-recipe-prompt")))
            .push(text::caption(key.to_string()))
            .push(buttons),
    )
    .padding(20)
    .center_x(Length::Fill)
    .into()
}
