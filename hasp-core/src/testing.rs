//! Scripted session double for tests.

use crate::session::Session;

/// A delegated call recorded by [`ScriptedSession`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Login(String),
    Logout,
    GetSize,
    Read,
    Write(Vec<u8>),
}

/// A [`Session`] that records every call and reports a scripted outcome.
///
/// While a failure is set, every call raises the error flag with that message.
#[derive(Debug, Default, Clone)]
pub struct ScriptedSession {
    calls: Vec<Call>,
    size: u32,
    content: Vec<u8>,
    failure: Option<String>,
    error: bool,
    message: String,
}

impl ScriptedSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<Vec<u8>>) -> Self {
        self.content = content.into();
        self
    }

    /// Makes every subsequent call fail with `message`.
    #[must_use]
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    pub fn set_failure(&mut self, message: Option<String>) {
        self.failure = message;
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// Bytes written so far, in call order.
    pub fn written(&self) -> Vec<u8> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Write(data) => Some(data.as_slice()),
                _ => None,
            })
            .flatten()
            .copied()
            .collect()
    }

    fn record(&mut self, call: Call) {
        self.calls.push(call);
        match &self.failure {
            Some(msg) => {
                self.error = true;
                self.message = msg.clone();
            }
            None => {
                self.error = false;
                self.message = "Request successfully completed".to_string();
            }
        }
    }
}

impl Session for ScriptedSession {
    fn login(&mut self, vendor_code: &str) {
        self.record(Call::Login(vendor_code.to_string()));
    }

    fn logout(&mut self) {
        self.record(Call::Logout);
    }

    fn get_size(&mut self) -> u32 {
        self.record(Call::GetSize);
        if self.error { 0 } else { self.size }
    }

    fn read(&mut self) -> Vec<u8> {
        self.record(Call::Read);
        if self.error {
            Vec::new()
        } else {
            self.content.clone()
        }
    }

    fn write(&mut self, data: &[u8]) {
        self.record(Call::Write(data.to_vec()));
    }

    fn is_error(&self) -> bool {
        self.error
    }

    fn get_message(&self) -> &str {
        &self.message
    }
}
