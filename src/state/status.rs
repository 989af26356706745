#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

/// How long a status message stays visible before auto-hiding.
pub const STATUS_HIDE_MS: u64 = 5000;

/// Visual kind of a status message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusKind {
    #[default]
    Success,
    Error,
}

/// Transient feedback shown after a signup or unregister attempt.
///
/// `epoch` is bumped on every `show` so a scheduled auto-hide can tell
/// whether its message is still the one on screen. A timer that has been
/// superseded by a newer message is a no-op.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusState {
    pub text: String,
    pub kind: StatusKind,
    pub visible: bool,
    pub epoch: u64,
}

impl StatusState {
    /// Show a new message and return the epoch to pass to [`Self::hide`].
    pub fn show(&mut self, text: String, kind: StatusKind) -> u64 {
        self.text = text;
        self.kind = kind;
        self.visible = true;
        self.epoch += 1;
        self.epoch
    }

    /// Hide the message, but only if `epoch` still refers to the message
    /// currently shown.
    pub fn hide(&mut self, epoch: u64) {
        if self.epoch == epoch {
            self.visible = false;
        }
    }
}
