//! C ABI exports exposing HASP dongle handles to scripting hosts.
//!
//! A host allocates a handle, then calls `login`, `logout`, `getSize`, `read`
//! and `write` on it. Arguments are passed as a JSON array of the host's
//! positional arguments; every call returns a JSON envelope:
//!
//! ```json
//! {"success": true, "data": 4096}
//! {"success": false, "error_code": "session_error", "error_message": "device not found"}
//! ```
//!
//! Returned strings must be released with [`hasp_free_string`], handles with
//! [`hasp_free`].
//!
//! # Constructing handles
//!
//! The C constructors `hasp_new` and `hasp_new_with_config` exist only when the
//! crate is built with the `vendor-sdk` feature, which links the vendor
//! runtime. C hosts must build the `cdylib`/`staticlib` with that feature.
//! Without it, handles can only be created from Rust through
//! [`HostHandle::new`] and [`HostHandle::into_raw`], e.g. by an embedder that
//! supplies its own [`Session`].

mod args;
mod error;
mod logging;

pub use args::Method;
pub use error::CallError;
pub use logging::init_logging;

use hasp_core::{DeviceHandle, Session};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::ffi::{CStr, CString, c_char};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Response envelope returned across the C ABI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SdkResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl SdkResponse {
    pub fn ok(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error_code: None,
            error_message: None,
        }
    }

    pub fn ok_empty() -> Self {
        Self {
            success: true,
            data: None,
            error_code: None,
            error_message: None,
        }
    }

    pub fn err(code: &str, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error_code: Some(code.to_string()),
            error_message: Some(message.to_string()),
        }
    }
}

impl From<Result<Value, CallError>> for SdkResponse {
    fn from(result: Result<Value, CallError>) -> Self {
        match result {
            Ok(Value::Null) => SdkResponse::ok_empty(),
            Ok(data) => SdkResponse::ok(data),
            Err(e) => SdkResponse::err(e.code(), &e.message()),
        }
    }
}

type BoxedSession = Box<dyn Session + Send>;

/// The object a host holds: one device handle behind a lock.
pub struct HostHandle {
    device: Mutex<DeviceHandle<BoxedSession>>,
}

impl HostHandle {
    pub fn new(session: impl Session + Send + 'static) -> Self {
        let session: BoxedSession = Box::new(session);
        Self {
            device: Mutex::new(DeviceHandle::new(session)),
        }
    }

    /// Moves the handle to the heap for the host. Release with [`hasp_free`].
    pub fn into_raw(self) -> *mut HostHandle {
        Box::into_raw(Box::new(self))
    }

    /// Validates `args` for `method` and runs it on the device.
    pub fn call(&self, method: Method, args: &[Value]) -> Result<Value, CallError> {
        let mut device = self.lock();
        debug!(handle = %device.id(), %method, "host call");
        match method {
            Method::Login => {
                let code = crate::args::vendor_code(args)?;
                device.login(code)?;
                Ok(Value::Bool(true))
            }
            Method::Logout => {
                device.logout()?;
                Ok(Value::Bool(true))
            }
            Method::GetSize => Ok(Value::from(device.get_size()?)),
            Method::Read => Ok(Value::String(device.read()?)),
            Method::Write => {
                let data = crate::args::write_data(args)?;
                device.write(data)?;
                Ok(Value::Null)
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, DeviceHandle<BoxedSession>> {
        self.device.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn into_c_string(response: &SdkResponse) -> *mut c_char {
    let json_out = serde_json::to_string(response).unwrap_or_else(|_| {
        r#"{"success":false,"error_code":"json_error","error_message":"Failed to serialize response"}"#.to_string()
    });
    CString::new(json_out).unwrap_or_default().into_raw()
}

unsafe fn read_str<'a>(ptr: *const c_char, what: &str) -> Result<&'a str, SdkResponse> {
    if ptr.is_null() {
        return Err(SdkResponse::err("null_pointer", &format!("{what} is null")));
    }
    unsafe { CStr::from_ptr(ptr) }
        .to_str()
        .map_err(|_| SdkResponse::err("invalid_utf8", &format!("{what} is not valid UTF-8")))
}

/// Parses the host argument array. A null pointer means no arguments.
unsafe fn read_args(args: *const c_char) -> Result<Vec<Value>, SdkResponse> {
    if args.is_null() {
        return Ok(Vec::new());
    }
    let json_str = unsafe { read_str(args, "Arguments") }?;
    serde_json::from_str(json_str).map_err(|e| {
        SdkResponse::err("json_parse_error", &format!("Arguments must be a JSON array: {e}"))
    })
}

unsafe fn call_inner(handle: *mut HostHandle, method: Method, args: *const c_char) -> SdkResponse {
    if handle.is_null() {
        return SdkResponse::err("null_pointer", "Handle is null");
    }
    let args = match unsafe { read_args(args) } {
        Ok(a) => a,
        Err(response) => return response,
    };
    let handle = unsafe { &*handle };
    handle.call(method, &args).into()
}

unsafe fn dispatch_inner(
    handle: *mut HostHandle,
    method: *const c_char,
    args: *const c_char,
) -> SdkResponse {
    let name = match unsafe { read_str(method, "Method") } {
        Ok(n) => n,
        Err(response) => return response,
    };
    let method = match name.parse::<Method>() {
        Ok(m) => m,
        Err(e) => return SdkResponse::err(e.code(), &e.message()),
    };
    unsafe { call_inner(handle, method, args) }
}

/// Allocates a handle over the vendor runtime with the default feature and
/// read/write memory file.
#[cfg(feature = "vendor-sdk")]
#[unsafe(no_mangle)]
pub extern "C" fn hasp_new() -> *mut HostHandle {
    HostHandle::new(hasp_core::VendorSession::default()).into_raw()
}

/// Allocates a handle over the vendor runtime configured from JSON, e.g.
/// `{"feature_id": 1, "file_id": 65525}`. Returns null on an invalid config.
///
/// # Safety
/// `config` must be null or a valid null-terminated UTF-8 string.
#[cfg(feature = "vendor-sdk")]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn hasp_new_with_config(config: *const c_char) -> *mut HostHandle {
    let config = if config.is_null() {
        hasp_core::SessionConfig::default()
    } else {
        let parsed = unsafe { read_str(config, "Config") }
            .ok()
            .and_then(|json| hasp_core::SessionConfig::from_json(json).ok());
        match parsed {
            Some(c) => c,
            None => {
                tracing::warn!("rejected invalid session config");
                return std::ptr::null_mut();
            }
        }
    };
    HostHandle::new(hasp_core::VendorSession::new(config)).into_raw()
}

/// Releases a handle and its session.
///
/// # Safety
/// `handle` must be null or a pointer returned by a handle constructor that
/// has not been freed yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn hasp_free(handle: *mut HostHandle) {
    if !handle.is_null() {
        drop(unsafe { Box::from_raw(handle) });
    }
}

/// Logs in. `args` is `[vendorCode]`.
///
/// # Safety
/// `handle` must be a live handle; `args` must be null or a valid
/// null-terminated UTF-8 string. The returned pointer must be freed with
/// `hasp_free_string`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn hasp_login(handle: *mut HostHandle, args: *const c_char) -> *mut c_char {
    into_c_string(&unsafe { call_inner(handle, Method::Login, args) })
}

/// Logs out.
///
/// # Safety
/// `handle` must be a live handle. The returned pointer must be freed with
/// `hasp_free_string`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn hasp_logout(handle: *mut HostHandle) -> *mut c_char {
    into_c_string(&unsafe { call_inner(handle, Method::Logout, std::ptr::null()) })
}

/// Size of the dongle memory file.
///
/// # Safety
/// `handle` must be a live handle. The returned pointer must be freed with
/// `hasp_free_string`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn hasp_get_size(handle: *mut HostHandle) -> *mut c_char {
    into_c_string(&unsafe { call_inner(handle, Method::GetSize, std::ptr::null()) })
}

/// Contents of the dongle memory file as a string.
///
/// # Safety
/// `handle` must be a live handle. The returned pointer must be freed with
/// `hasp_free_string`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn hasp_read(handle: *mut HostHandle) -> *mut c_char {
    into_c_string(&unsafe { call_inner(handle, Method::Read, std::ptr::null()) })
}

/// Writes to the dongle memory file. `args` is `[data]`.
///
/// # Safety
/// `handle` must be a live handle; `args` must be null or a valid
/// null-terminated UTF-8 string. The returned pointer must be freed with
/// `hasp_free_string`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn hasp_write(handle: *mut HostHandle, args: *const c_char) -> *mut c_char {
    into_c_string(&unsafe { call_inner(handle, Method::Write, args) })
}

/// Calls a method by its host name (`login`, `logout`, `getSize`, `read`,
/// `write`).
///
/// # Safety
/// `handle` must be a live handle; `method` must be a valid null-terminated
/// UTF-8 string; `args` must be null or one. The returned pointer must be
/// freed with `hasp_free_string`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn hasp_call(
    handle: *mut HostHandle,
    method: *const c_char,
    args: *const c_char,
) -> *mut c_char {
    into_c_string(&unsafe { dispatch_inner(handle, method, args) })
}

/// Frees a string returned by any `hasp_*` call.
///
/// # Safety
/// `ptr` must be null or a pointer returned by this library, freed once.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn hasp_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(unsafe { CString::from_raw(ptr) });
    }
}

/// Installs the tracing subscriber. `filter` may be null to use `RUST_LOG`.
///
/// # Safety
/// `filter` must be null or a valid null-terminated UTF-8 string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn hasp_init_logging(filter: *const c_char) -> bool {
    if filter.is_null() {
        return init_logging(None);
    }
    match unsafe { read_str(filter, "Filter") } {
        Ok(directives) => init_logging(Some(directives)),
        Err(_) => false,
    }
}
