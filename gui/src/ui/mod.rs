//! User interface: dialogs, the demo launcher and widget helpers.

pub mod app;
pub mod dialogs;
pub mod utils;
