//! GtkBuilder-backed dialogs for GTK 4 applications.
//!
//! Dialog definitions live in a UI resource (bundled as a GResource by
//! default). [`ui::dialogs::show_dialog`] runs input, chooser and message
//! dialogs modally and returns the user's answer, while
//! [`ui::dialogs::WaitDialog`] is a non-modal progress window that worker
//! threads can hide or destroy through the UI thread's main context.

pub mod config;
pub mod i18n;
pub mod ui;
