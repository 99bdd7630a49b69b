//! The capability interface over a vendor device session.
//!
//! A session keeps its own error flag: every operation overwrites it, and the
//! caller is expected to inspect [`Session::is_error`] and
//! [`Session::get_message`] right after the call that set it.

/// Opaque vendor session for one dongle.
pub trait Session {
    /// Opens a session for the given vendor code.
    fn login(&mut self, vendor_code: &str);

    /// Closes the current session.
    fn logout(&mut self);

    /// Size in bytes of the dongle memory file.
    fn get_size(&mut self) -> u32;

    /// Reads the dongle memory file. The buffer length is authoritative.
    fn read(&mut self) -> Vec<u8>;

    /// Writes `data` to the dongle memory file.
    fn write(&mut self, data: &[u8]);

    /// Whether the last operation failed.
    fn is_error(&self) -> bool;

    /// Message describing the outcome of the last operation.
    fn get_message(&self) -> &str;
}

impl<S: Session + ?Sized> Session for Box<S> {
    fn login(&mut self, vendor_code: &str) {
        (**self).login(vendor_code);
    }

    fn logout(&mut self) {
        (**self).logout();
    }

    fn get_size(&mut self) -> u32 {
        (**self).get_size()
    }

    fn read(&mut self) -> Vec<u8> {
        (**self).read()
    }

    fn write(&mut self, data: &[u8]) {
        (**self).write(data);
    }

    fn is_error(&self) -> bool {
        (**self).is_error()
    }

    fn get_message(&self) -> &str {
        (**self).get_message()
    }
}
