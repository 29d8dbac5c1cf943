//! Demo launcher: one button per dialog kind.

use crate::config;
use crate::config::user::Settings;
use crate::ui::dialogs::{
    choose_file, show_dialog, ChooserAction, DialogError, DialogParams, DialogResult, DialogType,
    GtkToolkit, Response, WaitDialog,
};
use crate::ui::utils::extract_widget;
use adw::prelude::*;
use adw::{Application, ApplicationWindow};
use anyhow::{Context, Result};
use gtk4::glib;
use gtk4::{gio, Builder, Button, Label, Window};
use log::{debug, error, info, warn};
use std::rc::Rc;
use std::time::Duration;

const BUTTONS: &[(&str, fn(&Demo))] = &[
    ("btn_input", Demo::input),
    ("btn_open_file", Demo::open_file),
    ("btn_select_folder", Demo::select_folder),
    ("btn_error", Demo::error),
    ("btn_question", Demo::question),
    ("btn_about", Demo::about),
    ("btn_wait", Demo::wait),
];

/// Initialize and set up main application UI.
pub fn setup_application_ui(app: &Application) {
    info!("Initializing application components");

    if let Err(e) = build_main_window(app) {
        error!("Failed to set up the main window: {:#}", e);
        app.quit();
    }
}

fn build_main_window(app: &Application) -> Result<()> {
    gio::resources_register_include!("dialog-kit.gresource")
        .context("Failed to register gresources")?;

    let settings = Settings::load();
    info!("User settings loaded from {}", config::user::config_path().display());

    // Persist once on shutdown so a first run leaves an editable config file.
    {
        let settings = settings.clone();
        app.connect_shutdown(move |_| {
            if let Err(e) = settings.save() {
                warn!("Failed to save settings on shutdown: {}", e);
            } else {
                info!("Settings saved on shutdown");
            }
        });
    }

    let builder = Builder::from_resource(config::resources::MAIN_UI);
    let window: ApplicationWindow = extract_widget(&builder, "app_window")?;
    window.set_application(Some(app));

    let demo = Rc::new(Demo {
        toolkit: GtkToolkit::from_settings(&settings),
        status: extract_widget(&builder, "status_label")?,
        window: window.clone(),
        settings,
    });

    for (id, action) in BUTTONS {
        let button: Button =
            extract_widget(&builder, id).with_context(|| format!("Missing demo button {id}"))?;
        let demo = demo.clone();
        button.connect_clicked(move |_| {
            info!("{} clicked", id);
            action(&*demo);
        });
    }

    window.present();
    info!("Dialog Kit demo ready");
    Ok(())
}

struct Demo {
    toolkit: GtkToolkit,
    settings: Settings,
    window: ApplicationWindow,
    status: Label,
}

impl Demo {
    fn parent(&self) -> Option<&Window> {
        Some(self.window.upcast_ref())
    }

    fn input(&self) {
        let params = DialogParams::new().text("Favourites");
        let result = show_dialog(&self.toolkit, DialogType::Input, self.parent(), params);
        self.report("Input", result);
    }

    fn open_file(&self) {
        let result = choose_file(
            &self.toolkit,
            self.parent(),
            &self.settings,
            "*.xml",
            "XML files",
        );
        self.report("Open file", result);
    }

    fn select_folder(&self) {
        let params = DialogParams::new()
            .options(&self.settings)
            .action(ChooserAction::SelectFolder);
        let result = show_dialog(&self.toolkit, DialogType::Chooser, self.parent(), params);
        self.report("Select folder", result);
    }

    fn error(&self) {
        let params =
            DialogParams::new().text("<b>Error reading data.</b>\nThe file may be damaged.");
        let result = show_dialog(&self.toolkit, DialogType::Error, self.parent(), params);
        self.report("Error", result);
    }

    fn question(&self) {
        let params = DialogParams::new().text("Are you sure?");
        let result = show_dialog(&self.toolkit, DialogType::Question, self.parent(), params);
        let confirmed = result
            .as_ref()
            .ok()
            .and_then(DialogResult::response)
            .is_some_and(|response| response == Response::OK);
        info!("Question confirmed: {}", confirmed);
        self.report("Question", result);
    }

    fn about(&self) {
        let result = show_dialog(
            &self.toolkit,
            DialogType::About,
            self.parent(),
            DialogParams::new(),
        );
        self.report("About", result);
    }

    /// Count the data folder entries on a worker thread behind a wait dialog.
    fn wait(&self) {
        let wait = match WaitDialog::new(
            &self.toolkit,
            self.parent(),
            Some("Scanning data folder..."),
        ) {
            Ok(wait) => wait,
            Err(e) => {
                self.report("Wait", Err(e));
                return;
            }
        };
        wait.show();

        let remote = wait.remote();
        let data_dir = self.settings.paths.data_dir_path.clone();
        let (result_tx, result_rx) = async_channel::bounded(1);

        std::thread::spawn(move || {
            info!("Scanning {} on background thread", data_dir.display());
            let entries = std::fs::read_dir(&data_dir).map(|entries| entries.count());
            std::thread::sleep(Duration::from_secs(2));

            remote.hide();
            remote.destroy();

            if let Err(e) = result_tx.send_blocking(entries) {
                error!("Failed to send scan result: {}", e);
            }
        });

        let status = self.status.clone();
        glib::MainContext::default().spawn_local(async move {
            let message = match result_rx.recv().await {
                Ok(Ok(count)) => format!("Data folder holds {count} entries"),
                Ok(Err(e)) => format!("Could not scan data folder: {e}"),
                Err(e) => {
                    error!("Failed to receive scan result: {}", e);
                    return;
                }
            };
            info!("{}", message);
            status.set_text(&message);
            drop(wait);
        });
    }

    fn report(&self, what: &str, result: Result<DialogResult, DialogError>) {
        let message = match result {
            Ok(DialogResult::Text(text)) => format!("{what}: entered \"{text}\""),
            Ok(DialogResult::Path(path)) => format!("{what}: {path}"),
            Ok(DialogResult::Response(response)) => format!("{what}: {response}"),
            Err(e) => {
                error!("{} dialog failed: {}", what, e);
                format!("{what} failed: {e}")
            }
        };
        debug!("{}", message);
        self.status.set_text(&message);
    }
}
