//! Message translation through the process-wide gettext catalogs.

use gtk4::glib;

/// Look up `message` in `domain`, returning it unchanged when no catalog
/// provides a translation.
pub fn translate(domain: &str, message: &str) -> String {
    glib::dgettext(Some(domain), message).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untranslated_message_is_returned_verbatim() {
        let message = "<b>No such bouquet</b>";
        assert_eq!(translate("dialog-kit-test-missing-domain", message), message);
    }
}
