//! Shared helpers for driving the C ABI from tests.

#![allow(dead_code)]

use hasp_core::testing::ScriptedSession;
use hasp_ffi::{HostHandle, SdkResponse, hasp_free_string};
use std::ffi::{CStr, CString, c_char};

/// Owns a raw host handle for the duration of a test.
pub struct RawHandle(pub *mut HostHandle);

impl RawHandle {
    pub fn new(session: ScriptedSession) -> Self {
        Self(HostHandle::new(session).into_raw())
    }
}

impl Drop for RawHandle {
    fn drop(&mut self) {
        unsafe { hasp_ffi::hasp_free(self.0) };
    }
}

/// Converts a returned string into a response and frees it.
pub fn take_response(ptr: *mut c_char) -> SdkResponse {
    assert!(!ptr.is_null());
    let json = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap().to_string();
    unsafe { hasp_free_string(ptr) };
    serde_json::from_str(&json).unwrap()
}

pub fn c(s: &str) -> CString {
    CString::new(s).unwrap()
}
