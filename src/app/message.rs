// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the settings companion.

use crate::ui::{language_dialog, notifications};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Open the language selection dialog.
    OpenDialog,
    Dialog(language_dialog::Message),
    Notification(notifications::Message),
    /// Periodic tick driving notice auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `pt-BR`) for the
    /// companion UI itself.
    pub lang: Option<String>,
    /// Optional settings-file override, mainly for development.
    pub settings_path: Option<String>,
}
