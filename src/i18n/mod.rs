// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the settings companion.
//!
//! Localization uses the Fluent system. Translation files are embedded in
//! the binary; the display locale resolves from the CLI override, then the
//! saved configuration, then the OS locale.

pub mod fluent;
