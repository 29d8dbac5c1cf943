//! UI utility functions for widget extraction.

use crate::ui::dialogs::DialogError;
use gtk4::glib;
use gtk4::prelude::*;
use gtk4::Builder;

/// Look up a typed object in a builder, reporting its id and expected type
/// when it is absent or of another type.
pub fn extract_widget<T: IsA<glib::Object>>(
    builder: &Builder,
    name: &str,
) -> Result<T, DialogError> {
    builder
        .object(name)
        .ok_or_else(|| DialogError::widget_not_found(name, T::static_type().name()))
}
