use chrono::{NaiveDate, Weekday};
use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, column, container, icon, row, text};
use cosmic::{Element, theme};

use mealplan::core::assignment::DayAssignmentStore;
use mealplan::core::day_grid::{DayCell, day_grid};

use crate::fl;
use crate::message::Message;

/// Render one week of the carousel: a row per weekday with its assigned recipe.
///
/// Inert slides render the same content without press handlers.
pub fn week_slide<'a, S: DayAssignmentStore>(
    anchor: NaiveDate,
    interactable: bool,
    store: &S,
    today: NaiveDate,
    selected_day: Option<NaiveDate>,
    width: f32,
) -> Element<'a, Message> {
    let cells = day_grid(anchor);
    let (first, last) = (cells[0].date, cells[6].date);

    let mut content = column().spacing(4).push(
        text::title4(format!("{} – {}", first.format("%b %e"), last.format("%b %e")))
            .width(Length::Fill)
            .center(),
    );

    for cell in &cells {
        content = content.push(day_row(cell, interactable, store, today, selected_day));
    }

    container(content)
        .padding(12)
        .width(Length::Fixed(width))
        .into()
}

fn day_row<'a, S: DayAssignmentStore>(
    cell: &DayCell,
    interactable: bool,
    store: &S,
    today: NaiveDate,
    selected_day: Option<NaiveDate>,
) -> Element<'a, Message> {
    let assigned = store.lookup(cell.key());

    let date_label = text::caption(format!("{}\n{}", weekday_label(cell.weekday), cell.day_of_month)).width(Length::Fixed(44.0));
    let date_label = if cell.date == today {
        date_label.font(cosmic::iced::Font {
            weight: cosmic::iced::font::Weight::Bold,
            ..Default::default()
        })
    } else {
        date_label
    };

    let recipe_label = match &assigned {
        Some(recipe) => text::body(recipe.title.clone()),
        None => text::body(fl!("no-recipe")),
    };

    let cell_content = row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(date_label)
        .push(recipe_label.width(Length::Fill));

    let class = if selected_day == Some(cell.date) {
        theme::Button::Suggested
    } else {
        theme::Button::Text
    };
    let mut day_btn = button::custom(cell_content).class(class).width(Length::Fill);
    if interactable {
        day_btn = day_btn.on_press(Message::SelectDay(cell.date));
    }

    let mut day = row().spacing(4).align_y(Alignment::Center).push(day_btn);

    if assigned.is_some() && interactable {
        day = day.push(
            button::icon(icon::from_name("edit-delete-symbolic"))
                .on_press(Message::RequestDelete(cell.key())),
        );
    }

    day.into()
}

fn weekday_label(weekday: Weekday) -> String {
    match weekday {
        Weekday::Sun => fl!("weekday-sun"),
        Weekday::Mon => fl!("weekday-mon"),
        Weekday::Tue => fl!("weekday-tue"),
        Weekday::Wed => fl!("weekday-wed"),
        Weekday::Thu => fl!("weekday-thu"),
        Weekday::Fri => fl!("weekday-fri"),
        Weekday::Sat => fl!("weekday-sat"),
    }
}
