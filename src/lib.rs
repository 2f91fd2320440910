// SPDX-License-Identifier: MPL-2.0
//! `dictswap` substitutes the dictionary a third-party virtual keyboard
//! loads, based on a persisted language preference.
//!
//! The crate has two halves. The patch half ([`patch`]) runs inside the
//! keyboard's host process: it rewrites the locale argument of the
//! dictionary lookup and redirects one resource slot to a bundled
//! replacement dictionary, driven by the host through port traits. The
//! companion half ([`app`]) is a small Iced application where the user
//! picks the injected language; the two halves share nothing but the
//! preference file.

#![doc(html_root_url = "https://docs.rs/dictswap/0.2.0")]

pub mod app;
pub mod config;
pub mod dicts;
pub mod error;
pub mod i18n;
pub mod locale;
pub mod patch;
pub mod ui;
