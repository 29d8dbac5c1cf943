//! GTK 4 implementation of the dialog toolkit.
//!
//! The definition file describes classic `GtkDialog`-based windows, which GTK
//! deprecated in 4.10 together with `gtk_dialog_run`. Modal runs are emulated
//! with a nested main loop.

#![allow(deprecated)]

use super::toolkit::{DialogContext, DialogHandle, Toolkit};
use super::{ChooserAction, DialogError, FileFilter, Response};
use crate::config;
use crate::config::user::Settings;
use crate::i18n;
use crate::ui::utils::extract_widget;
use gtk4::glib::translate::IntoGlib;
use gtk4::prelude::*;
use gtk4::{
    gio, glib, pango, AboutDialog, Builder, Entry, FileChooser, FileChooserAction, Label,
    MessageDialog, Window,
};
use log::warn;
use std::cell::Cell;
use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Where the dialog definitions are read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiSource {
    /// Path inside a registered GResource bundle.
    Resource(String),
    File(PathBuf),
}

impl fmt::Display for UiSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiSource::Resource(path) => write!(f, "resource://{path}"),
            UiSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

pub struct GtkToolkit {
    source: UiSource,
    text_domain: String,
}

impl GtkToolkit {
    pub fn new(source: UiSource, text_domain: impl Into<String>) -> Self {
        Self {
            source,
            text_domain: text_domain.into(),
        }
    }

    /// Use the definition file and text domain chosen in the user settings.
    pub fn from_settings(settings: &Settings) -> Self {
        let source = match &settings.ui.dialogs_file {
            Some(path) => UiSource::File(path.clone()),
            None => UiSource::Resource(config::resources::DIALOGS_UI.to_string()),
        };
        Self::new(source, settings.ui.text_domain.clone())
    }

    pub fn source(&self) -> &UiSource {
        &self.source
    }
}

impl Default for GtkToolkit {
    fn default() -> Self {
        Self::new(
            UiSource::Resource(config::resources::DIALOGS_UI.to_string()),
            config::TEXT_DOMAIN,
        )
    }
}

impl Toolkit for GtkToolkit {
    type Parent = Window;
    type Context = GtkDialogContext;
    type Handle = GtkDialogHandle;

    fn build(&self, object_id: &str) -> Result<(GtkDialogContext, GtkDialogHandle), DialogError> {
        let load_error = |message: String| DialogError::ResourceLoad {
            object_id: object_id.to_string(),
            source_path: self.source.to_string(),
            message,
        };

        let builder = Builder::new();
        builder.set_translation_domain(Some(self.text_domain.as_str()));

        let loaded = match &self.source {
            UiSource::Resource(path) => builder.add_objects_from_resource(path, &[object_id]),
            UiSource::File(path) => builder.add_objects_from_file(path, &[object_id]),
        };
        loaded.map_err(|e| load_error(e.to_string()))?;

        let window: Window = builder
            .object(object_id)
            .ok_or_else(|| load_error("object is missing or not a window".to_string()))?;

        Ok((
            GtkDialogContext { builder },
            GtkDialogHandle {
                object_id: object_id.to_string(),
                window,
            },
        ))
    }

    fn translate(&self, message: &str) -> String {
        i18n::translate(&self.text_domain, message)
    }
}

pub struct GtkDialogContext {
    builder: Builder,
}

impl DialogContext for GtkDialogContext {
    fn set_entry_text(&self, id: &str, text: &str) -> Result<(), DialogError> {
        let entry: Entry = extract_widget(&self.builder, id)?;
        entry.set_text(text);
        Ok(())
    }

    fn entry_text(&self, id: &str) -> Result<String, DialogError> {
        let entry: Entry = extract_widget(&self.builder, id)?;
        Ok(entry.text().to_string())
    }

    fn set_label_text(&self, id: &str, text: &str) -> Result<(), DialogError> {
        let label: Label = extract_widget(&self.builder, id)?;
        label.set_text(text);
        Ok(())
    }
}

pub struct GtkDialogHandle {
    object_id: String,
    window: Window,
}

impl GtkDialogHandle {
    fn chooser(&self) -> Result<&FileChooser, DialogError> {
        self.window
            .dynamic_cast_ref::<FileChooser>()
            .ok_or_else(|| DialogError::widget_not_found(&self.object_id, "GtkFileChooser"))
    }
}

impl DialogHandle for GtkDialogHandle {
    type Parent = Window;

    fn set_transient_for(&self, parent: Option<&Window>) {
        self.window.set_transient_for(parent);
    }

    fn run(&self) -> Response {
        let main_loop = glib::MainLoop::new(None, false);
        let response = Rc::new(Cell::new(Response::DELETE_EVENT));

        let response_handler = self.window.downcast_ref::<gtk4::Dialog>().map(|dialog| {
            let main_loop = main_loop.clone();
            let response = response.clone();
            dialog.connect_response(move |_, answer| {
                response.set(Response(answer.into_glib()));
                main_loop.quit();
            })
        });

        // Keep the window alive on close; the caller destroys it.
        let close_handler = {
            let main_loop = main_loop.clone();
            self.window.connect_close_request(move |_| {
                main_loop.quit();
                glib::Propagation::Stop
            })
        };

        self.window.set_modal(true);
        self.window.present();
        main_loop.run();

        if let Some(handler) = response_handler {
            self.window.disconnect(handler);
        }
        self.window.disconnect(close_handler);

        response.get()
    }

    fn show(&self) {
        self.window.present();
    }

    fn hide(&self) {
        self.window.set_visible(false);
    }

    fn destroy(&self) {
        self.window.destroy();
    }

    fn set_message_markup(&self, markup: &str) -> Result<(), DialogError> {
        if let Some(dialog) = self.window.downcast_ref::<MessageDialog>() {
            dialog.set_markup(markup);
            return Ok(());
        }
        // About dialogs have no message area, the comments line takes its place.
        if let Some(about) = self.window.downcast_ref::<AboutDialog>() {
            about.set_comments(Some(&markup_to_plain(markup)));
            return Ok(());
        }
        Err(DialogError::widget_not_found(&self.object_id, "GtkMessageDialog"))
    }

    fn set_chooser_action(&self, action: ChooserAction) -> Result<(), DialogError> {
        let action = match action {
            ChooserAction::Open => FileChooserAction::Open,
            ChooserAction::Save => FileChooserAction::Save,
            ChooserAction::SelectFolder => FileChooserAction::SelectFolder,
        };
        self.chooser()?.set_action(action);
        Ok(())
    }

    fn add_file_filter(&self, filter: &FileFilter) -> Result<(), DialogError> {
        let file_filter = gtk4::FileFilter::new();
        file_filter.add_pattern(&filter.pattern);
        file_filter.set_name(Some(filter.name.as_str()));
        self.chooser()?.add_filter(&file_filter);
        Ok(())
    }

    fn set_current_folder(&self, folder: &Path) -> Result<(), DialogError> {
        let chooser = self.chooser()?;
        if let Err(e) = chooser.set_current_folder(Some(&gio::File::for_path(folder))) {
            warn!("Could not open chooser in {}: {}", folder.display(), e);
        }
        Ok(())
    }

    fn selected_path(&self) -> Option<PathBuf> {
        self.window
            .dynamic_cast_ref::<FileChooser>()?
            .file()?
            .path()
    }
}

/// Text of `markup` with tags removed and entities decoded. Malformed
/// markup is returned unchanged.
fn markup_to_plain(markup: &str) -> String {
    match pango::parse_markup(markup, '\0') {
        Ok((_, text, _)) => text.to_string(),
        Err(e) => {
            warn!("Showing message verbatim, markup does not parse: {}", e);
            markup.to_string()
        }
    }
}
