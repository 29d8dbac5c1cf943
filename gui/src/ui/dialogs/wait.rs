//! Non-modal "please wait" dialog.
//!
//! The dialog is built and shown on the UI thread. Hiding and destroying are
//! requests queued on a channel and applied by a task on the UI thread's
//! main context, so worker threads can dismiss the dialog through a
//! [`WaitDialogRemote`] without touching widgets.

use super::loader::load_dialog;
use super::toolkit::{DialogContext, DialogHandle, Toolkit};
use super::{DialogError, DialogType};
use gtk4::glib;
use log::{debug, warn};
use std::cell::Cell;
use std::rc::Rc;

pub const WAIT_LABEL: &str = "wait_dialog_label";

/// Lifecycle of a wait dialog. `Destroyed` is final.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaitState {
    Constructed,
    Shown,
    Hidden,
    Destroyed,
}

#[derive(Debug)]
enum WaitRequest {
    Hide,
    Destroy,
}

pub struct WaitDialog<T: Toolkit> {
    context: T::Context,
    dialog: Rc<T::Handle>,
    state: Rc<Cell<WaitState>>,
    remote: WaitDialogRemote,
}

impl<T: Toolkit> WaitDialog<T>
where
    T::Handle: 'static,
{
    /// Build the wait dialog, optionally replacing its label text.
    ///
    /// Must be called on the thread that owns the default main context.
    pub fn new(
        toolkit: &T,
        parent: Option<&T::Parent>,
        text: Option<&str>,
    ) -> Result<Self, DialogError> {
        let (context, dialog) = load_dialog(toolkit, DialogType::Wait, parent)?;

        if let Some(text) = text {
            if let Err(e) = context.set_label_text(WAIT_LABEL, text) {
                dialog.destroy();
                return Err(e);
            }
        }

        let dialog = Rc::new(dialog);
        let state = Rc::new(Cell::new(WaitState::Constructed));
        let (sender, receiver) = async_channel::unbounded();

        glib::MainContext::ref_thread_default().spawn_local(process_requests(
            receiver,
            dialog.clone(),
            state.clone(),
        ));

        Ok(Self {
            context,
            dialog,
            state,
            remote: WaitDialogRemote { sender },
        })
    }

    /// Make the dialog visible right away, without blocking.
    pub fn show(&self) {
        if self.state.get() == WaitState::Destroyed {
            warn!("Ignoring show on a destroyed wait dialog");
            return;
        }
        self.dialog.show();
        self.state.set(WaitState::Shown);
        debug!("Wait dialog shown");
    }

    /// Queue hiding the dialog on the UI thread.
    pub fn hide(&self) {
        self.remote.hide();
    }

    /// Queue destroying the dialog on the UI thread.
    pub fn destroy(&self) {
        self.remote.destroy();
    }

    pub fn set_text(&self, text: &str) -> Result<(), DialogError> {
        if self.state.get() == WaitState::Destroyed {
            debug!("Ignoring text update on a destroyed wait dialog");
            return Ok(());
        }
        self.context.set_label_text(WAIT_LABEL, text)
    }

    pub fn state(&self) -> WaitState {
        self.state.get()
    }

    /// Handle for other threads.
    pub fn remote(&self) -> WaitDialogRemote {
        self.remote.clone()
    }
}

/// Thread-safe control of a [`WaitDialog`].
///
/// Requests sent after the dialog has been destroyed are ignored.
#[derive(Clone)]
pub struct WaitDialogRemote {
    sender: async_channel::Sender<WaitRequest>,
}

impl WaitDialogRemote {
    pub fn hide(&self) {
        self.send(WaitRequest::Hide);
    }

    pub fn destroy(&self) {
        self.send(WaitRequest::Destroy);
    }

    pub fn is_destroyed(&self) -> bool {
        self.sender.is_closed()
    }

    fn send(&self, request: WaitRequest) {
        if let Err(e) = self.sender.try_send(request) {
            debug!("Wait dialog already destroyed, ignoring {:?}", e.into_inner());
        }
    }
}

/// Applies queued requests until a destroy arrives or every sender is gone,
/// then destroys the dialog.
async fn process_requests<H: DialogHandle>(
    receiver: async_channel::Receiver<WaitRequest>,
    dialog: Rc<H>,
    state: Rc<Cell<WaitState>>,
) {
    while let Ok(request) = receiver.recv().await {
        match request {
            WaitRequest::Hide => {
                dialog.hide();
                state.set(WaitState::Hidden);
                debug!("Wait dialog hidden");
            }
            WaitRequest::Destroy => break,
        }
    }

    receiver.close();
    dialog.destroy();
    state.set(WaitState::Destroyed);
    debug!("Wait dialog destroyed");
}
