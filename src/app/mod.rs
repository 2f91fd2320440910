// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration for the settings companion.
//!
//! The `App` struct wires together the preference store, localization,
//! the selection dialog, and toast notices. Policy that is easy to get
//! subtly wrong (when the reload notice fires, what the label shows)
//! lives in `update` so user-facing behavior stays auditable in one
//! place.

pub mod message;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::PrefStore;
use crate::dicts;
use crate::i18n::fluent::I18n;
use crate::ui::{language_dialog, notifications};
use iced::{time, window, Element, Subscription, Task};
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 560;

/// Root application state bridging the store, localization, and UI
/// components.
pub struct App {
    pub i18n: I18n,
    store: PrefStore,
    dialog: Option<language_dialog::State>,
    notifications: notifications::Manager,
    /// Display string of the current selection, `None` when no language
    /// is configured. The reload notice fires only when this changes.
    selected_label: Option<String>,
}

impl App {
    /// Initializes application state from CLI flags and the saved
    /// configuration.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let store = match flags.settings_path {
            Some(path) => PrefStore::open(path),
            None => PrefStore::open_default().unwrap_or_else(|error| {
                eprintln!("Falling back to a local settings file: {error}");
                PrefStore::open("settings.toml")
            }),
        };

        let i18n = I18n::new(flags.lang, store.config());
        let selected_label = store.language_tag().map(dicts::display_for_tag);

        let app = App {
            i18n,
            store,
            dialog: None,
            notifications: notifications::Manager::new(),
            selected_label,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.notifications.has_notices() {
            time::every(Duration::from_millis(250)).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(360.0, 420.0)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait bound
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}
