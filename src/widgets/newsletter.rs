//! Newsletter signup box.

/// Notice shown after a signup.
pub const THANK_YOU: &str = "Thank you for subscribing!";

#[derive(Debug, Default)]
pub struct Newsletter {
    pub email: String,
    notice: Option<&'static str>,
}

impl Newsletter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit the current input.
    ///
    /// Any non-blank address is accepted; the input is cleared and a thank
    /// you notice is raised. Blank input does nothing. Returns whether the
    /// signup was accepted.
    pub fn subscribe(&mut self) -> bool {
        if self.email.trim().is_empty() {
            return false;
        }
        tracing::debug!("newsletter signup");
        self.email.clear();
        self.notice = Some(THANK_YOU);
        true
    }

    /// Take the pending notice, if any.
    pub fn take_notice(&mut self) -> Option<&'static str> {
        self.notice.take()
    }

    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }
}
