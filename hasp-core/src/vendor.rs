//! [`Session`] over the vendor HASP runtime library.
//!
//! Exported with the `vendor-sdk` feature; the vendor library must then be on
//! the linker search path. Unit tests swap the vendor calls for a scripted
//! in-process stand-in.

use crate::config::SessionConfig;
use crate::session::Session;
use crate::status::VendorStatus;
use libc::{c_uint, c_void};
use std::ffi::CString;
use tracing::debug;

#[cfg(not(test))]
mod sys {
    use libc::{c_uint, c_void};

    pub type HaspStatus = c_uint;
    pub type HaspHandle = c_uint;

    #[cfg_attr(target_os = "linux", link(name = "hasp_linux_x86_64"))]
    #[cfg_attr(target_os = "windows", link(name = "hasp_windows_x64"))]
    #[cfg_attr(target_os = "macos", link(name = "hasp_darwin"))]
    unsafe extern "C" {
        pub fn hasp_login(
            feature_id: c_uint,
            vendor_code: *const c_void,
            handle: *mut HaspHandle,
        ) -> HaspStatus;

        pub fn hasp_logout(handle: HaspHandle) -> HaspStatus;

        pub fn hasp_get_size(handle: HaspHandle, file_id: c_uint, size: *mut c_uint)
            -> HaspStatus;

        pub fn hasp_read(
            handle: HaspHandle,
            file_id: c_uint,
            offset: c_uint,
            length: c_uint,
            buffer: *mut c_void,
        ) -> HaspStatus;

        pub fn hasp_write(
            handle: HaspHandle,
            file_id: c_uint,
            offset: c_uint,
            length: c_uint,
            buffer: *const c_void,
        ) -> HaspStatus;
    }
}


/// A session backed by the vendor runtime.
#[derive(Debug)]
pub struct VendorSession {
    config: SessionConfig,
    handle: Option<sys::HaspHandle>,
    status: VendorStatus,
    message: String,
}

impl VendorSession {
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            handle: None,
            status: VendorStatus::OK,
            message: VendorStatus::OK.message(),
        }
    }

    #[must_use]
    pub fn status(&self) -> VendorStatus {
        self.status
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.handle.is_some()
    }

    fn set_status(&mut self, code: c_uint) {
        self.status = VendorStatus::from(code);
        self.message = self.status.message();
    }

    fn fail(&mut self, status: VendorStatus, message: impl Into<String>) {
        self.status = status;
        self.message = message.into();
    }

    fn open_handle(&mut self) -> Option<sys::HaspHandle> {
        if self.handle.is_none() {
            self.fail(VendorStatus::INV_HND, VendorStatus::INV_HND.message());
        }
        self.handle
    }

    fn close(&mut self) -> Option<c_uint> {
        let handle = self.handle.take()?;
        // SAFETY: `handle` came from a successful hasp_login and is released once.
        let status = unsafe { sys::hasp_logout(handle) };
        debug!(status, "vendor session closed");
        Some(status)
    }
}

impl Default for VendorSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl Session for VendorSession {
    fn login(&mut self, vendor_code: &str) {
        let Ok(code) = CString::new(vendor_code) else {
            self.fail(VendorStatus::INV_VCODE, "Vendor code contains a NUL byte");
            return;
        };
        self.close();

        let mut handle: sys::HaspHandle = 0;
        // SAFETY: `code` is NUL-terminated and outlives the call; `handle` is a valid out-pointer.
        let status = unsafe {
            sys::hasp_login(
                self.config.feature_id,
                code.as_ptr().cast::<c_void>(),
                &mut handle,
            )
        };
        self.set_status(status);
        if self.status.is_ok() {
            self.handle = Some(handle);
        }
    }

    fn logout(&mut self) {
        if self.open_handle().is_none() {
            return;
        }
        if let Some(status) = self.close() {
            self.set_status(status);
        }
    }

    fn get_size(&mut self) -> u32 {
        let Some(handle) = self.open_handle() else {
            return 0;
        };
        let mut size: c_uint = 0;
        // SAFETY: `size` is a valid out-pointer for the duration of the call.
        let status = unsafe { sys::hasp_get_size(handle, self.config.file_id, &mut size) };
        self.set_status(status);
        if self.status.is_ok() { size } else { 0 }
    }

    fn read(&mut self) -> Vec<u8> {
        let size = self.get_size();
        if self.is_error() {
            return Vec::new();
        }
        let Some(handle) = self.handle else {
            return Vec::new();
        };

        let mut buffer = vec![0u8; size as usize];
        // SAFETY: `buffer` holds exactly `size` writable bytes.
        let status = unsafe {
            sys::hasp_read(
                handle,
                self.config.file_id,
                0,
                size,
                buffer.as_mut_ptr().cast::<c_void>(),
            )
        };
        self.set_status(status);
        if self.status.is_ok() { buffer } else { Vec::new() }
    }

    fn write(&mut self, data: &[u8]) {
        let Some(handle) = self.open_handle() else {
            return;
        };
        let length = match write_length(data.len()) {
            Ok(length) => length,
            Err(status) => {
                self.fail(status, status.message());
                return;
            }
        };
        // SAFETY: `data` holds `length` readable bytes for the duration of the call.
        let status = unsafe {
            sys::hasp_write(
                handle,
                self.config.file_id,
                0,
                length,
                data.as_ptr().cast::<c_void>(),
            )
        };
        self.set_status(status);
    }

    fn is_error(&self) -> bool {
        !self.status.is_ok()
    }

    fn get_message(&self) -> &str {
        &self.message
    }
}

/// Length of a write from offset 0, or the memory-range status when it does
/// not fit the vendor size type.
fn write_length(len: usize) -> Result<c_uint, VendorStatus> {
    c_uint::try_from(len).map_err(|_| VendorStatus::MEM_RANGE)
}

impl Drop for VendorSession {
    fn drop(&mut self) {
        self.close();
    }
}
