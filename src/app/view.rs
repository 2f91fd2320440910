// SPDX-License-Identifier: MPL-2.0
//! View rendering for the settings companion.

use super::{App, Message};
use iced::widget::{button, text, Column, Container, Row, Stack};
use iced::{alignment, Color, Element, Length};

/// Renders the main screen, layering the selection dialog and toast
/// notices on top when present.
pub fn view(app: &App) -> Element<'_, Message> {
    let mut layers: Vec<Element<'_, Message>> = vec![main_screen(app)];

    if let Some(dialog) = &app.dialog {
        let card = dialog.view(&app.i18n).map(Message::Dialog);
        layers.push(
            Container::new(card)
                .center(Length::Fill)
                .style(|_theme: &iced::Theme| iced::widget::container::Style {
                    background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.4).into()),
                    ..iced::widget::container::Style::default()
                })
                .into(),
        );
    }

    layers.push(app.notifications.view(&app.i18n).map(Message::Notification));

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn main_screen(app: &App) -> Element<'_, Message> {
    let title = text(app.i18n.tr("main-title")).size(28);

    let label_value = app
        .selected_label
        .clone()
        .unwrap_or_else(|| app.i18n.tr("selected-language-none"));

    let selection_row = Row::new()
        .spacing(8)
        .align_y(alignment::Vertical::Center)
        .push(text(app.i18n.tr("selected-language-label")))
        .push(text(label_value).size(16));

    let select_button = button(text(app.i18n.tr("select-language-button")))
        .on_press(Message::OpenDialog)
        .style(button::primary);

    let content = Column::new()
        .spacing(24)
        .padding(32)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(selection_row)
        .push(select_button);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}
