use adw::prelude::*;
use dialog_kit::{config, ui};
use gtk4::glib;
use log::info;

fn main() -> glib::ExitCode {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()
        .expect("Failed to initialize logger");

    info!("Starting Dialog Kit");

    let app = adw::Application::builder()
        .application_id(config::APP_ID)
        .build();

    app.connect_activate(ui::app::setup_application_ui);

    app.run()
}
