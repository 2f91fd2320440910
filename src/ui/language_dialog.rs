// SPDX-License-Identifier: MPL-2.0
//! Single-choice dialog for picking the injected dictionary language.
//!
//! The option list starts with a "None" sentinel (keep the keyboard's
//! stock dictionaries) followed by the catalog entries sorted
//! alphabetically as `"Name (tag)"`. Confirming resolves the checked
//! entry back to its tag through the parenthesized suffix; cancelling
//! changes nothing. The state machine is pure and rendered separately so
//! the transitions are testable without a UI.

use crate::dicts::{self, Language};
use crate::i18n::fluent::I18n;
use iced::widget::{button, container, radio, text, Column, Container, Row};
use iced::{alignment, Border, Element, Length, Theme};

/// Sentinel entry that clears the selection.
const NONE_ENTRY: &str = "None";

/// Dialog state: the option list and the checked index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    options: Vec<String>,
    selected: usize,
}

/// Messages emitted by the dialog widgets.
#[derive(Debug, Clone)]
pub enum Message {
    Select(usize),
    Confirm,
    Cancel,
}

/// Outcome propagated to the parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Ok pressed: the tag to persist, or `None` to clear the selection.
    Chosen(Option<String>),
    Cancelled,
}

impl State {
    /// Builds the dialog seeded from the persisted tag: the matching
    /// entry is pre-checked, falling back to "None" when the tag is
    /// absent or matches nothing.
    #[must_use]
    pub fn open(configured: Option<&str>) -> Self {
        let mut names: Vec<String> = dicts::LANGUAGES.iter().map(Language::display).collect();
        names.sort();

        let mut options = Vec::with_capacity(names.len() + 1);
        options.push(NONE_ENTRY.to_string());
        options.extend(names);

        let selected = configured
            .and_then(|tag| {
                options
                    .iter()
                    .skip(1)
                    .position(|entry| dicts::tag_of_display(entry) == Some(tag))
                    .map(|index| index + 1)
            })
            .unwrap_or(0);

        Self { options, selected }
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// The display entry currently checked.
    #[must_use]
    pub fn selected_entry(&self) -> &str {
        self.options
            .get(self.selected)
            .map_or(NONE_ENTRY, String::as_str)
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Select(index) => {
                if index < self.options.len() {
                    self.selected = index;
                }
                Event::None
            }
            Message::Confirm => {
                if self.selected == 0 {
                    Event::Chosen(None)
                } else {
                    let tag = dicts::tag_of_display(self.selected_entry()).map(str::to_string);
                    Event::Chosen(tag)
                }
            }
            Message::Cancel => Event::Cancelled,
        }
    }

    /// Renders the dialog card.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let title = text(i18n.tr("dialog-title")).size(20);

        let mut list = Column::new().spacing(6);
        for (index, entry) in self.options.iter().enumerate() {
            list = list.push(radio(
                entry.as_str(),
                index,
                Some(self.selected),
                Message::Select,
            ));
        }

        let buttons = Row::new()
            .spacing(12)
            .push(
                button(text(i18n.tr("dialog-cancel")))
                    .on_press(Message::Cancel)
                    .style(button::secondary),
            )
            .push(
                button(text(i18n.tr("dialog-ok")))
                    .on_press(Message::Confirm)
                    .style(button::primary),
            );

        let card = Column::new()
            .spacing(16)
            .push(title)
            .push(list)
            .push(
                Container::new(buttons)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Right),
            );

        container(card)
            .padding(24)
            .max_width(360)
            .style(|theme: &Theme| {
                let palette = theme.extended_palette();
                container::Style {
                    background: Some(palette.background.base.color.into()),
                    border: Border {
                        color: palette.background.strong.color,
                        width: 1.0,
                        radius: 8.0.into(),
                    },
                    ..container::Style::default()
                }
            })
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_start_with_the_none_sentinel() {
        let state = State::open(None);
        assert_eq!(state.options()[0], NONE_ENTRY);
        assert_eq!(state.options().len(), dicts::LANGUAGES.len() + 1);
    }

    #[test]
    fn language_entries_are_sorted() {
        let state = State::open(None);
        let entries = &state.options()[1..];
        let mut sorted = entries.to_vec();
        sorted.sort();
        assert_eq!(entries, sorted.as_slice());
    }

    #[test]
    fn absent_tag_preselects_none() {
        let state = State::open(None);
        assert_eq!(state.selected(), 0);
    }

    #[test]
    fn persisted_tag_preselects_its_entry() {
        let state = State::open(Some("pt_BR"));
        assert!(state.selected() > 0);
        assert_eq!(state.selected_entry(), "Portuguese (pt_BR)");
    }

    #[test]
    fn unknown_tag_preselects_none() {
        let state = State::open(Some("tlh"));
        assert_eq!(state.selected(), 0);
    }

    #[test]
    fn confirming_none_clears_the_selection() {
        let mut state = State::open(Some("pt_BR"));
        state.update(Message::Select(0));
        assert_eq!(state.update(Message::Confirm), Event::Chosen(None));
    }

    #[test]
    fn confirming_an_entry_yields_its_tag() {
        let mut state = State::open(None);
        let index = state
            .options()
            .iter()
            .position(|entry| entry == "Portuguese (pt_BR)")
            .expect("catalog entry missing");
        state.update(Message::Select(index));
        assert_eq!(
            state.update(Message::Confirm),
            Event::Chosen(Some("pt_BR".to_string()))
        );
    }

    #[test]
    fn cancel_changes_nothing() {
        let mut state = State::open(Some("ca"));
        let before = state.clone();
        assert_eq!(state.update(Message::Cancel), Event::Cancelled);
        assert_eq!(state, before);
    }

    #[test]
    fn out_of_range_select_is_ignored() {
        let mut state = State::open(None);
        state.update(Message::Select(999));
        assert_eq!(state.selected(), 0);
    }
}
