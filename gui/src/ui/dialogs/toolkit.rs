//! Widget operations the dialogs need from the toolkit.

use super::{ChooserAction, DialogError, FileFilter, Response};
use std::path::{Path, PathBuf};

/// Builds dialogs from the definition file and translates their messages.
pub trait Toolkit {
    /// Window type dialogs are made transient for.
    type Parent;
    /// Lookup of named sub-widgets of one built dialog.
    type Context: DialogContext;
    type Handle: DialogHandle<Parent = Self::Parent>;

    /// Instantiate the object named `object_id`, and only that object.
    fn build(&self, object_id: &str) -> Result<(Self::Context, Self::Handle), DialogError>;

    fn translate(&self, message: &str) -> String;
}

pub trait DialogContext {
    fn set_entry_text(&self, id: &str, text: &str) -> Result<(), DialogError>;
    fn entry_text(&self, id: &str) -> Result<String, DialogError>;
    fn set_label_text(&self, id: &str, text: &str) -> Result<(), DialogError>;
}

/// A live dialog window.
///
/// Kind-specific setters fail with [`DialogError::WidgetNotFound`] when the
/// window is not of the kind they need.
pub trait DialogHandle {
    type Parent;

    fn set_transient_for(&self, parent: Option<&Self::Parent>);

    /// Block in a nested event loop until the dialog responds or is closed.
    fn run(&self) -> Response;

    fn show(&self);
    fn hide(&self);
    fn destroy(&self);

    /// Set the message of a message dialog. Dialogs without a markup-capable
    /// message area (about dialogs) show the text with tags stripped.
    fn set_message_markup(&self, markup: &str) -> Result<(), DialogError>;

    fn set_chooser_action(&self, action: ChooserAction) -> Result<(), DialogError>;
    fn add_file_filter(&self, filter: &FileFilter) -> Result<(), DialogError>;
    fn set_current_folder(&self, folder: &Path) -> Result<(), DialogError>;
    fn selected_path(&self) -> Option<PathBuf>;
}
