//! Application-wide constants and user settings.

pub mod user;

/// Application identifier used for the GTK application and config paths.
pub const APP_ID: &str = "org.dialogkit.DialogKit";

/// Gettext domain for dialog strings and builder translations.
pub const TEXT_DOMAIN: &str = "dialog-kit";

/// Name of the directory under the XDG config/data roots.
pub const APP_DIR_NAME: &str = "dialog-kit";

/// GResource paths of the bundled UI definitions.
pub mod resources {
    pub const MAIN_UI: &str = "/org/dialogkit/DialogKit/ui/main.ui";
    pub const DIALOGS_UI: &str = "/org/dialogkit/DialogKit/ui/dialogs.ui";
}
