//! Device handles: the owning wrapper around a [`Session`].
//!
//! Every operation delegates to the session and then checks its error flag
//! before returning, turning the flag into a [`HaspError::Session`].

use crate::error::{HaspError, HaspResult};
use crate::session::Session;
use std::fmt;
use tracing::{debug, warn};
use uuid::Uuid;

/// Identifier attached to a handle for log correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandleId(Uuid);

impl HandleId {
    /// Creates a new random handle ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for HandleId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A handle that exclusively owns one dongle session.
pub struct DeviceHandle<S: Session> {
    id: HandleId,
    session: S,
}

impl<S: Session> DeviceHandle<S> {
    /// Wraps a fresh session. Nothing is validated until [`login`](Self::login).
    pub fn new(session: S) -> Self {
        let id = HandleId::new();
        debug!(handle = %id, "device handle created");
        Self { id, session }
    }

    #[must_use]
    pub fn id(&self) -> HandleId {
        self.id
    }

    /// Shared access to the owned session.
    pub fn session(&self) -> &S {
        &self.session
    }

    /// Releases the handle and hands back its session.
    pub fn into_session(self) -> S {
        self.session
    }

    /// Logs in with `vendor_code`.
    pub fn login(&mut self, vendor_code: &str) -> HaspResult<()> {
        if vendor_code.is_empty() {
            return Err(HaspError::invalid_argument("Please specify vendor code"));
        }
        self.session.login(vendor_code);
        self.check("login")
    }

    pub fn logout(&mut self) -> HaspResult<()> {
        self.session.logout();
        self.check("logout")
    }

    /// Size of the dongle memory file, passed through unchanged.
    pub fn get_size(&mut self) -> HaspResult<u32> {
        let size = self.session.get_size();
        self.check("get_size")?;
        Ok(size)
    }

    /// Raw contents of the dongle memory file.
    pub fn read_bytes(&mut self) -> HaspResult<Vec<u8>> {
        let content = self.session.read();
        self.check("read")?;
        Ok(content)
    }

    /// Contents of the dongle memory file as text.
    ///
    /// The session's buffer length is authoritative: embedded NUL bytes are
    /// kept and invalid UTF-8 sequences become U+FFFD.
    pub fn read(&mut self) -> HaspResult<String> {
        let content = self.read_bytes()?;
        Ok(String::from_utf8_lossy(&content).into_owned())
    }

    pub fn write(&mut self, data: &str) -> HaspResult<()> {
        self.session.write(data.as_bytes());
        self.check("write")
    }

    fn check(&self, op: &'static str) -> HaspResult<()> {
        if self.session.is_error() {
            let message = self.session.get_message().to_string();
            warn!(handle = %self.id, op, %message, "session reported error");
            return Err(HaspError::Session(message));
        }
        debug!(handle = %self.id, op, "session call succeeded");
        Ok(())
    }
}

impl<S: Session> fmt::Debug for DeviceHandle<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceHandle").field("id", &self.id).finish_non_exhaustive()
    }
}
