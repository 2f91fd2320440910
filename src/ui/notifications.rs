// SPDX-License-Identifier: MPL-2.0
//! Toast notices for the settings screen.
//!
//! Notices carry an i18n message key resolved at render time, appear in a
//! bottom-right stack, and dismiss themselves after a severity-dependent
//! delay (or on click).

use crate::i18n::fluent::I18n;
use iced::widget::{button, text, Column, Container};
use iced::{alignment, Border, Element, Length, Theme};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Maximum number of notices visible at once.
const MAX_VISIBLE: usize = 2;

/// Unique identifier for a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoticeId(u64);

impl NoticeId {
    fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Severity determines how long a notice stays on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
}

impl Severity {
    fn auto_dismiss_duration(self) -> Duration {
        match self {
            Severity::Info => Duration::from_secs(4),
            Severity::Warning => Duration::from_secs(6),
        }
    }
}

/// A notice to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notice {
    id: NoticeId,
    severity: Severity,
    message_key: String,
    created_at: Instant,
}

impl Notice {
    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NoticeId::next(),
            severity,
            message_key: message_key.into(),
            created_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn id(&self) -> NoticeId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    fn expired(&self) -> bool {
        self.created_at.elapsed() >= self.severity.auto_dismiss_duration()
    }
}

/// Messages for notice state changes.
#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NoticeId),
    Tick,
}

/// Manages the notice queue and the visible stack.
#[derive(Debug, Default)]
pub struct Manager {
    visible: VecDeque<Notice>,
    queue: VecDeque<Notice>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a notice immediately, or queues it when the visible stack
    /// is full.
    pub fn push(&mut self, notice: Notice) {
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_back(notice);
        } else {
            self.queue.push_back(notice);
        }
    }

    /// Removes a notice by ID. Returns whether it was found.
    pub fn dismiss(&mut self, id: NoticeId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }
        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }
        false
    }

    /// Drops expired notices. Called from the periodic tick.
    pub fn tick(&mut self) {
        let expired: Vec<NoticeId> = self
            .visible
            .iter()
            .filter(|n| n.expired())
            .map(Notice::id)
            .collect();
        for id in expired {
            self.dismiss(id);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => self.tick(),
        }
    }

    #[must_use]
    pub fn has_notices(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Renders the visible notices as a bottom-right overlay.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        if self.visible.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let cards: Vec<Element<'a, Message>> = self
            .visible
            .iter()
            .map(|notice| Self::card(notice, i18n))
            .collect();

        Container::new(
            Column::with_children(cards)
                .spacing(8)
                .align_x(alignment::Horizontal::Right),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(16)
        .into()
    }

    fn card<'a>(notice: &'a Notice, i18n: &'a I18n) -> Element<'a, Message> {
        let body = text(i18n.tr(notice.message_key())).size(14);

        button(body)
            .on_press(Message::Dismiss(notice.id()))
            .padding(10)
            .style(|theme: &Theme, _status| {
                let palette = theme.extended_palette();
                button::Style {
                    background: Some(palette.background.weak.color.into()),
                    text_color: palette.background.base.text,
                    border: Border {
                        color: palette.background.strong.color,
                        width: 1.0,
                        radius: 6.0.into(),
                    },
                    ..button::Style::default()
                }
            })
            .into()
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            if let Some(notice) = self.queue.pop_front() {
                self.visible.push_back(notice);
            } else {
                break;
            }
        }
    }
}
