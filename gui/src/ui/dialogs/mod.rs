//! Dialog windows for user interaction.
//!
//! Every dialog is a named object inside one GtkBuilder definition file:
//! - `loader`: builds a single dialog object and ties it to its parent
//! - `presenter`: runs input, chooser and message dialogs modally
//! - `wait`: non-modal progress dialog controlled from worker threads
//! - `toolkit`: the widget operations the dialogs rely on
//! - `gtk`: the GTK 4 implementation of those operations

pub mod gtk;
pub mod loader;
pub mod presenter;
pub mod toolkit;
pub mod wait;

#[cfg(test)]
pub(crate) mod fake;

pub use self::gtk::{GtkToolkit, UiSource};
pub use loader::load_dialog;
pub use presenter::{choose_file, show_dialog, DialogParams, DialogResult};
pub use toolkit::{DialogContext, DialogHandle, Toolkit};
pub use wait::{WaitDialog, WaitDialogRemote, WaitState};

use std::fmt;

/// Dialog kinds available in the definition file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DialogType {
    Input,
    Chooser,
    Error,
    Question,
    About,
    Wait,
}

impl DialogType {
    pub const ALL: [DialogType; 6] = [
        DialogType::Input,
        DialogType::Chooser,
        DialogType::Error,
        DialogType::Question,
        DialogType::About,
        DialogType::Wait,
    ];

    /// Builder object id of this dialog.
    pub fn object_id(self) -> &'static str {
        match self {
            DialogType::Input => "input_dialog",
            DialogType::Chooser => "path_chooser_dialog",
            DialogType::Error => "error_dialog",
            DialogType::Question => "question_dialog",
            DialogType::About => "about_dialog",
            DialogType::Wait => "wait_dialog",
        }
    }
}

impl fmt::Display for DialogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.object_id())
    }
}

/// Edit mode for item dialogs. Reserved: no dialog here consumes it yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Edit,
    Add,
}

/// Toolkit response code returned by a dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Response(pub i32);

impl Response {
    pub const NONE: Response = Response(-1);
    pub const REJECT: Response = Response(-2);
    pub const ACCEPT: Response = Response(-3);
    pub const DELETE_EVENT: Response = Response(-4);
    pub const OK: Response = Response(-5);
    pub const CANCEL: Response = Response(-6);
    pub const CLOSE: Response = Response(-7);
    pub const YES: Response = Response(-8);
    pub const NO: Response = Response(-9);
    pub const APPLY: Response = Response(-10);
    pub const HELP: Response = Response(-11);
    /// Confirm button of `path_chooser_dialog`. The chooser uses its own code
    /// because GTK asserts `gtk_widget_get_can_default` on the stock accept.
    pub const CHOOSER_ACCEPT: Response = Response(-12);

    pub fn code(self) -> i32 {
        self.0
    }

    /// Whether a path chooser was confirmed.
    pub fn is_chooser_accept(self) -> bool {
        self == Self::CHOOSER_ACCEPT || self == Self::ACCEPT
    }
}

impl From<i32> for Response {
    fn from(code: i32) -> Self {
        Response(code)
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Self::NONE => "none",
            Self::REJECT => "reject",
            Self::ACCEPT => "accept",
            Self::DELETE_EVENT => "delete-event",
            Self::OK => "ok",
            Self::CANCEL => "cancel",
            Self::CLOSE => "close",
            Self::YES => "yes",
            Self::NO => "no",
            Self::APPLY => "apply",
            Self::HELP => "help",
            Self::CHOOSER_ACCEPT => "chooser-accept",
            Response(code) => return write!(f, "response {code}"),
        };
        f.write_str(name)
    }
}

/// What a file chooser lets the user pick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChooserAction {
    Open,
    Save,
    SelectFolder,
}

/// Glob pattern plus the name shown in the chooser's filter list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileFilter {
    pub pattern: String,
    pub name: String,
}

impl FileFilter {
    pub fn new(pattern: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DialogError {
    #[error("Failed to load '{object_id}' from {source_path}: {message}")]
    ResourceLoad {
        object_id: String,
        source_path: String,
        message: String,
    },
    #[error("Widget '{id}' ({expected}) not found in dialog definition")]
    WidgetNotFound { id: String, expected: &'static str },
}

impl DialogError {
    pub(crate) fn widget_not_found(id: impl Into<String>, expected: &'static str) -> Self {
        DialogError::WidgetNotFound {
            id: id.into(),
            expected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn object_ids_are_unique() {
        let ids: HashSet<_> = DialogType::ALL.iter().map(|kind| kind.object_id()).collect();
        assert_eq!(ids.len(), DialogType::ALL.len());
        assert_eq!(DialogType::Chooser.to_string(), "path_chooser_dialog");
    }

    #[test]
    fn chooser_accept_is_the_custom_code() {
        assert_eq!(Response::CHOOSER_ACCEPT.code(), -12);
        assert!(Response::CHOOSER_ACCEPT.is_chooser_accept());
        assert!(!Response::CANCEL.is_chooser_accept());
        assert!(!Response::OK.is_chooser_accept());
    }

    #[test]
    fn responses_display_by_name() {
        assert_eq!(Response::from(-5).to_string(), "ok");
        assert_eq!(Response(3).to_string(), "response 3");
    }
}
