// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the settings companion.

use super::{App, Message};
use crate::dicts;
use crate::ui::language_dialog::{self, Event as DialogEvent};
use crate::ui::notifications::Notice;
use iced::Task;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::OpenDialog => {
            // Another process may have rewritten the settings since launch.
            if let Err(error) = app.store.reload_if_changed() {
                eprintln!("Failed to reload settings: {error}");
            }
            app.dialog = Some(language_dialog::State::open(app.store.language_tag()));
        }
        Message::Dialog(dialog_message) => {
            let Some(dialog) = &mut app.dialog else {
                return Task::none();
            };
            match dialog.update(dialog_message) {
                DialogEvent::None => {}
                DialogEvent::Cancelled => app.dialog = None,
                DialogEvent::Chosen(tag) => {
                    app.dialog = None;
                    apply_selection(app, tag);
                }
            }
        }
        Message::Notification(notification_message) => {
            app.notifications.handle_message(&notification_message);
        }
        Message::Tick(_) => app.notifications.tick(),
    }
    Task::none()
}

/// Persists a confirmed selection and updates the displayed label.
///
/// The "takes effect after the keyboard reloads" notice is one-shot: it
/// only fires when the label actually changed, so re-confirming the
/// current selection stays silent.
fn apply_selection(app: &mut App, tag: Option<String>) {
    if let Err(error) = app.store.set_language_tag(tag.clone()) {
        eprintln!("Failed to save settings: {error}");
        app.notifications.push(Notice::warning("notification-save-error"));
        return;
    }

    let label = tag.as_deref().map(dicts::display_for_tag);
    if label != app.selected_label {
        app.selected_label = label;
        app.notifications.push(Notice::info("notice-reload-required"));
    }
}
