//! Scripted toolkit that records widget calls, for headless tests.

use super::toolkit::{DialogContext, DialogHandle, Toolkit};
use super::{ChooserAction, DialogError, FileFilter, Response};
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::rc::Rc;

const MESSAGE_DIALOGS: &[&str] = &["error_dialog", "question_dialog", "about_dialog"];

pub(crate) struct FakeParent(pub &'static str);

#[derive(Default)]
struct Shared {
    events: RefCell<Vec<String>>,
    responses: RefCell<VecDeque<Response>>,
    entries: RefCell<HashMap<String, String>>,
    labels: RefCell<HashMap<String, String>>,
    typed_text: RefCell<Option<String>>,
    selection: RefCell<Option<PathBuf>>,
}

impl Shared {
    fn record(&self, object_id: &str, event: impl AsRef<str>) {
        self.events
            .borrow_mut()
            .push(format!("{object_id}: {}", event.as_ref()));
    }
}

pub(crate) struct FakeToolkit {
    shared: Rc<Shared>,
    missing_fragments: Vec<String>,
    missing_widgets: Vec<String>,
}

impl FakeToolkit {
    pub fn new() -> Self {
        Self {
            shared: Rc::default(),
            missing_fragments: Vec::new(),
            missing_widgets: Vec::new(),
        }
    }

    pub fn without_fragment(mut self, object_id: &str) -> Self {
        self.missing_fragments.push(object_id.to_string());
        self
    }

    pub fn without_widget(mut self, id: &str) -> Self {
        self.missing_widgets.push(id.to_string());
        self
    }

    /// Queue the response the next `run` returns.
    pub fn respond_with(self, response: Response) -> Self {
        self.shared.responses.borrow_mut().push_back(response);
        self
    }

    /// Replace the input entry's text while the dialog runs.
    pub fn user_types(self, text: &str) -> Self {
        *self.shared.typed_text.borrow_mut() = Some(text.to_string());
        self
    }

    pub fn user_selects(self, path: &str) -> Self {
        *self.shared.selection.borrow_mut() = Some(PathBuf::from(path));
        self
    }

    pub fn events(&self) -> Vec<String> {
        self.shared.events.borrow().clone()
    }

    pub fn count(&self, event: &str) -> usize {
        self.shared
            .events
            .borrow()
            .iter()
            .filter(|recorded| recorded.as_str() == event)
            .count()
    }

    pub fn label(&self, id: &str) -> Option<String> {
        self.shared.labels.borrow().get(id).cloned()
    }
}

impl Toolkit for FakeToolkit {
    type Parent = FakeParent;
    type Context = FakeContext;
    type Handle = FakeHandle;

    fn build(&self, object_id: &str) -> Result<(FakeContext, FakeHandle), DialogError> {
        if self.missing_fragments.iter().any(|id| id == object_id) {
            return Err(DialogError::ResourceLoad {
                object_id: object_id.to_string(),
                source_path: "fake.ui".to_string(),
                message: "no such object".to_string(),
            });
        }

        let context = FakeContext {
            shared: self.shared.clone(),
            object_id: object_id.to_string(),
            missing_widgets: self.missing_widgets.clone(),
        };
        let handle = FakeHandle {
            shared: self.shared.clone(),
            object_id: object_id.to_string(),
        };
        Ok((context, handle))
    }

    fn translate(&self, message: &str) -> String {
        format!("tr({message})")
    }
}

pub(crate) struct FakeContext {
    shared: Rc<Shared>,
    object_id: String,
    missing_widgets: Vec<String>,
}

impl FakeContext {
    fn check(&self, id: &str, owner: &str, expected: &'static str) -> Result<(), DialogError> {
        if self.object_id != owner || self.missing_widgets.iter().any(|missing| missing == id) {
            return Err(DialogError::widget_not_found(id, expected));
        }
        Ok(())
    }
}

impl DialogContext for FakeContext {
    fn set_entry_text(&self, id: &str, text: &str) -> Result<(), DialogError> {
        self.check(id, "input_dialog", "GtkEntry")?;
        self.shared.record(&self.object_id, format!("entry {id} = {text}"));
        self.shared
            .entries
            .borrow_mut()
            .insert(id.to_string(), text.to_string());
        Ok(())
    }

    fn entry_text(&self, id: &str) -> Result<String, DialogError> {
        self.check(id, "input_dialog", "GtkEntry")?;
        Ok(self
            .shared
            .entries
            .borrow()
            .get(id)
            .cloned()
            .unwrap_or_default())
    }

    fn set_label_text(&self, id: &str, text: &str) -> Result<(), DialogError> {
        self.check(id, "wait_dialog", "GtkLabel")?;
        self.shared.record(&self.object_id, format!("label {id} = {text}"));
        self.shared
            .labels
            .borrow_mut()
            .insert(id.to_string(), text.to_string());
        Ok(())
    }
}

pub(crate) struct FakeHandle {
    shared: Rc<Shared>,
    object_id: String,
}

impl FakeHandle {
    pub fn object_id(&self) -> &str {
        &self.object_id
    }

    fn require(&self, kinds: &[&str], expected: &'static str) -> Result<(), DialogError> {
        if kinds.contains(&self.object_id.as_str()) {
            Ok(())
        } else {
            Err(DialogError::widget_not_found(&self.object_id, expected))
        }
    }
}

impl DialogHandle for FakeHandle {
    type Parent = FakeParent;

    fn set_transient_for(&self, parent: Option<&FakeParent>) {
        let parent = parent.map_or("none", |p| p.0);
        self.shared
            .record(&self.object_id, format!("transient-for {parent}"));
    }

    fn run(&self) -> Response {
        self.shared.record(&self.object_id, "run");
        if let Some(text) = self.shared.typed_text.borrow_mut().take() {
            self.shared
                .entries
                .borrow_mut()
                .insert("input_entry".to_string(), text);
        }
        self.shared
            .responses
            .borrow_mut()
            .pop_front()
            .unwrap_or(Response::DELETE_EVENT)
    }

    fn show(&self) {
        self.shared.record(&self.object_id, "show");
    }

    fn hide(&self) {
        self.shared.record(&self.object_id, "hide");
    }

    fn destroy(&self) {
        self.shared.record(&self.object_id, "destroy");
    }

    fn set_message_markup(&self, markup: &str) -> Result<(), DialogError> {
        self.require(MESSAGE_DIALOGS, "GtkMessageDialog")?;
        self.shared
            .record(&self.object_id, format!("markup = {markup}"));
        Ok(())
    }

    fn set_chooser_action(&self, action: ChooserAction) -> Result<(), DialogError> {
        self.require(&["path_chooser_dialog"], "GtkFileChooser")?;
        self.shared
            .record(&self.object_id, format!("action = {action:?}"));
        Ok(())
    }

    fn add_file_filter(&self, filter: &FileFilter) -> Result<(), DialogError> {
        self.require(&["path_chooser_dialog"], "GtkFileChooser")?;
        self.shared.record(
            &self.object_id,
            format!("filter = {} ({})", filter.pattern, filter.name),
        );
        Ok(())
    }

    fn set_current_folder(&self, folder: &Path) -> Result<(), DialogError> {
        self.require(&["path_chooser_dialog"], "GtkFileChooser")?;
        self.shared
            .record(&self.object_id, format!("folder = {}", folder.display()));
        Ok(())
    }

    fn selected_path(&self) -> Option<PathBuf> {
        self.shared.selection.borrow().clone()
    }
}
