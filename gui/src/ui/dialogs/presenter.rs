//! Modal presentation of input, chooser and message dialogs.

use super::loader::load_dialog;
use super::toolkit::{DialogContext, DialogHandle, Toolkit};
use super::wait::WAIT_LABEL;
use super::{ChooserAction, DialogError, DialogType, FileFilter, Response};
use crate::config::user::Settings;
use log::{debug, info};
use std::path::{Path, MAIN_SEPARATOR};

pub const INPUT_ENTRY: &str = "input_entry";

/// Optional inputs of [`show_dialog`]. Each dialog kind reads only the
/// fields it understands.
#[derive(Clone, Debug, Default)]
pub struct DialogParams<'a> {
    /// Initial entry text, or the message of a message dialog.
    pub text: Option<&'a str>,
    /// Supplies the chooser's starting folder.
    pub options: Option<&'a Settings>,
    pub action: Option<ChooserAction>,
    pub file_filter: Option<FileFilter>,
}

impl<'a> DialogParams<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: &'a str) -> Self {
        self.text = Some(text);
        self
    }

    pub fn options(mut self, options: &'a Settings) -> Self {
        self.options = Some(options);
        self
    }

    pub fn action(mut self, action: ChooserAction) -> Self {
        self.action = Some(action);
        self
    }

    pub fn file_filter(mut self, filter: FileFilter) -> Self {
        self.file_filter = Some(filter);
        self
    }
}

/// What the user answered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DialogResult {
    /// Entry text of a confirmed input dialog.
    Text(String),
    /// Chosen path. Folders end with a path separator.
    Path(String),
    /// Raw response, including [`Response::CANCEL`] for a dismissed input dialog.
    Response(Response),
}

impl DialogResult {
    pub fn response(&self) -> Option<Response> {
        match self {
            DialogResult::Response(response) => Some(*response),
            _ => None,
        }
    }

    /// Kind of answer, without the entered text or chosen path.
    pub fn outcome(&self) -> String {
        match self {
            DialogResult::Text(_) => "text entered".to_string(),
            DialogResult::Path(_) => "path chosen".to_string(),
            DialogResult::Response(response) => response.to_string(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(
            self,
            DialogResult::Response(Response::CANCEL | Response::DELETE_EVENT)
        )
    }
}

/// Destroys the dialog when presentation ends, on every exit path.
struct DestroyOnExit<'a, H: DialogHandle>(&'a H);

impl<H: DialogHandle> Drop for DestroyOnExit<'_, H> {
    fn drop(&mut self) {
        self.0.destroy();
    }
}

/// Show a dialog modally and return the user's answer.
///
/// Blocks until the dialog responds. The dialog is destroyed before this
/// returns, whether it was confirmed, cancelled or failed to set up.
pub fn show_dialog<T: Toolkit>(
    toolkit: &T,
    kind: DialogType,
    parent: Option<&T::Parent>,
    params: DialogParams<'_>,
) -> Result<DialogResult, DialogError> {
    let (context, dialog) = load_dialog(toolkit, kind, parent)?;
    let _destroy = DestroyOnExit(&dialog);

    let result = match kind {
        DialogType::Chooser => run_chooser(&dialog, &params)?,
        DialogType::Input => run_input(&context, &dialog, params.text)?,
        DialogType::Wait => {
            if let Some(text) = params.text {
                context.set_label_text(WAIT_LABEL, text)?;
            }
            DialogResult::Response(dialog.run())
        }
        DialogType::Error | DialogType::Question | DialogType::About => {
            if let Some(text) = params.text.filter(|text| !text.is_empty()) {
                dialog.set_message_markup(&toolkit.translate(text))?;
            }
            DialogResult::Response(dialog.run())
        }
    };

    info!("Dialog '{}' finished: {}", kind, result.outcome());
    debug!("Dialog '{}' result: {:?}", kind, result);
    Ok(result)
}

/// Let the user pick one existing file matching `pattern`.
pub fn choose_file<T: Toolkit>(
    toolkit: &T,
    parent: Option<&T::Parent>,
    options: &Settings,
    pattern: &str,
    name: &str,
) -> Result<DialogResult, DialogError> {
    let params = DialogParams::new()
        .options(options)
        .action(ChooserAction::Open)
        .file_filter(FileFilter::new(pattern, name));

    show_dialog(toolkit, DialogType::Chooser, parent, params)
}

fn run_chooser<H: DialogHandle>(
    dialog: &H,
    params: &DialogParams<'_>,
) -> Result<DialogResult, DialogError> {
    if let Some(action) = params.action {
        dialog.set_chooser_action(action)?;
    }
    if let Some(filter) = &params.file_filter {
        dialog.add_file_filter(filter)?;
    }

    let start_folder = params
        .options
        .map(|options| options.paths.data_dir_path.as_path());
    if let Some(folder) = start_folder {
        dialog.set_current_folder(folder)?;
    }

    let response = dialog.run();
    if !response.is_chooser_accept() {
        return Ok(DialogResult::Response(response));
    }

    let result = match dialog.selected_path() {
        Some(path) => {
            let mut path = path.to_string_lossy().into_owned();
            if params.action != Some(ChooserAction::Open) && !path.ends_with(MAIN_SEPARATOR) {
                path.push(MAIN_SEPARATOR);
            }
            DialogResult::Path(path)
        }
        None => match start_folder {
            Some(folder) => DialogResult::Path(path_string(folder)),
            None => DialogResult::Response(response),
        },
    };
    Ok(result)
}

fn run_input<C: DialogContext, H: DialogHandle>(
    context: &C,
    dialog: &H,
    text: Option<&str>,
) -> Result<DialogResult, DialogError> {
    context.set_entry_text(INPUT_ENTRY, text.unwrap_or_default())?;

    let response = dialog.run();
    let entered = context.entry_text(INPUT_ENTRY)?;

    if response == Response::OK {
        Ok(DialogResult::Text(entered))
    } else {
        Ok(DialogResult::Response(Response::CANCEL))
    }
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
