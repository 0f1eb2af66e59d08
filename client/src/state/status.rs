#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use menu::{FormError, Modal, Notice, Phase};

/// Page-level status: whether the first list arrived, the latest failure
/// notice, and the inline error for the open form.
///
/// `dialog_seq` counts dialog openings. A submit remembers the value it saw
/// so a late answer can tell whether its dialog is still the open one.
#[derive(Clone, Debug, Default)]
pub struct PageStatus {
    pub loaded: bool,
    pub notice: Option<Notice>,
    pub form_error: Option<String>,
    pub dialog_seq: u64,
}

impl PageStatus {
    #[must_use]
    pub fn phase(&self, modal: &Modal) -> Phase {
        Phase::of(self.loaded, modal)
    }

    /// Show `notice`, replacing any earlier one.
    pub fn report(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn dismiss(&mut self) {
        self.notice = None;
    }

    pub fn reject_form(&mut self, error: &FormError) {
        self.form_error = Some(error.to_string());
    }

    pub fn clear_form_error(&mut self) {
        self.form_error = None;
    }

    /// Start a new dialog session.
    pub fn open_dialog(&mut self) {
        self.form_error = None;
        self.dialog_seq = self.dialog_seq.wrapping_add(1);
    }

    /// Whether the dialog opened as session `seq` has not been replaced.
    #[must_use]
    pub fn owns_dialog(&self, seq: u64) -> bool {
        self.dialog_seq == seq
    }
}
