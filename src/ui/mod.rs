// SPDX-License-Identifier: MPL-2.0
//! User interface components, following the Elm-style "state down,
//! messages up" pattern.
//!
//! - [`language_dialog`] - Single-choice dictionary-language selection
//! - [`notifications`] - Short-lived toast notices for user feedback

pub mod language_dialog;
pub mod notifications;
