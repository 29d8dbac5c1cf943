//! Builds one dialog from the definition file.

use super::toolkit::{DialogHandle, Toolkit};
use super::{DialogError, DialogType};
use log::debug;

/// Build the dialog for `kind` and make it transient for `parent`.
///
/// Returns the widget lookup context alongside the dialog so callers can
/// reach sub-widgets such as the input entry or the wait label.
pub fn load_dialog<T: Toolkit>(
    toolkit: &T,
    kind: DialogType,
    parent: Option<&T::Parent>,
) -> Result<(T::Context, T::Handle), DialogError> {
    debug!("Loading dialog '{}'", kind.object_id());

    let (context, dialog) = toolkit.build(kind.object_id())?;
    dialog.set_transient_for(parent);

    Ok((context, dialog))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::dialogs::fake::{FakeParent, FakeToolkit};

    #[test]
    fn marks_dialog_transient_for_parent() {
        let toolkit = FakeToolkit::new();
        let parent = FakeParent("main_window");

        let (_context, dialog) = load_dialog(&toolkit, DialogType::Error, Some(&parent)).unwrap();

        assert_eq!(dialog.object_id(), "error_dialog");
        assert_eq!(toolkit.events(), ["error_dialog: transient-for main_window"]);
    }

    #[test]
    fn missing_fragment_is_a_resource_error() {
        let toolkit = FakeToolkit::new().without_fragment("about_dialog");

        let Err(err) = load_dialog(&toolkit, DialogType::About, None) else {
            panic!("about_dialog should fail to load");
        };

        assert!(matches!(
            err,
            DialogError::ResourceLoad { ref object_id, .. } if object_id == "about_dialog"
        ));
        assert!(toolkit.events().is_empty());
    }
}
