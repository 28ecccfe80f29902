use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, column, container, icon, row, scrollable, text, text_input};
use cosmic::Element;

use mealplan::core::grocery::GroceryList;

use crate::fl;
use crate::message::Message;

pub fn groceries_view<'a>(list: &GroceryList) -> Element<'a, Message> {
    let mut content = column().spacing(12);

    content = content.push(
        row()
            .spacing(8)
            .align_y(Alignment::Center)
            .push(text::title4(fl!("page-groceries")).width(Length::Fill))
            .push(
                button::icon(icon::from_name("list-add-symbolic"))
                    .on_press(Message::GroceryAdd),
            ),
    );

    if list.is_empty() {
        content = content.push(
            container(text::body(fl!("grocery-empty")))
                .padding(32)
                .center_x(Length::Fill)
                .width(Length::Fill),
        );
    }

    for item in list.items() {
        let id = item.id;

        let check_icon = if item.crossed_out {
            "checkbox-checked-symbolic"
        } else {
            "checkbox-symbolic"
        };
        let check_btn = button::icon(icon::from_name(check_icon)).on_press(Message::GroceryToggle(id));

        let name: Element<'a, Message> = if item.editing {
            text_input::text_input(fl!("grocery-placeholder"), item.name.clone())
                .on_input(move |v| Message::GroceryRename(id, v))
                .on_submit(move |_| Message::GrocerySubmit(id))
                .width(Length::Fill)
                .into()
        } else if item.crossed_out {
            text::caption(item.name.clone()).width(Length::Fill).into()
        } else {
            text::body(item.name.clone()).width(Length::Fill).into()
        };

        let delete_btn = button::icon(icon::from_name("window-close-symbolic"))
            .on_press(Message::GroceryRemove(id));

        content = content.push(
            row()
                .spacing(8)
                .align_y(Alignment::Center)
                .push(check_btn)
                .push(name)
                .push(delete_btn),
        );
    }

    container(scrollable(content.padding(16)))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
