mod common;

use common::{failing_handle, handle_with_content, healthy_handle};
use hasp_core::testing::{Call, ScriptedSession};
use hasp_core::{DeviceHandle, HaspError};
use pretty_assertions::assert_eq;

// ── login ─────────────────────────────────────────────────────────

#[test]
fn login_succeeds_on_healthy_session() {
    let mut handle = healthy_handle();
    assert!(handle.login("ABC123").is_ok());
    assert_eq!(handle.session().calls(), &[Call::Login("ABC123".into())]);
}

#[test]
fn login_with_empty_code_is_invalid_argument() {
    let mut handle = healthy_handle();
    let err = handle.login("").unwrap_err();
    assert!(matches!(err, HaspError::InvalidArgument(_)));
    assert!(handle.session().calls().is_empty());
}

#[test]
fn login_failure_carries_session_message() {
    let mut handle = failing_handle("Invalid Vendor Code passed");
    let err = handle.login("ABC123").unwrap_err();
    assert_eq!(err, HaspError::Session("Invalid Vendor Code passed".into()));
}

// ── logout ────────────────────────────────────────────────────────

#[test]
fn logout_succeeds_on_healthy_session() {
    let mut handle = healthy_handle();
    handle.login("ABC123").unwrap();
    assert!(handle.logout().is_ok());
    assert_eq!(handle.session().calls().last(), Some(&Call::Logout));
}

#[test]
fn logout_failure_carries_session_message() {
    let mut handle = failing_handle("Invalid login handle passed to function");
    let err = handle.logout().unwrap_err();
    assert_eq!(err.message(), "Invalid login handle passed to function");
}

// ── get_size ──────────────────────────────────────────────────────

#[test]
fn get_size_passes_through() {
    let mut handle = DeviceHandle::new(ScriptedSession::new().with_size(4096));
    assert_eq!(handle.get_size().unwrap(), 4096);
}

#[test]
fn get_size_failure_is_session_error() {
    let mut handle = failing_handle("HASP protection key not available");
    let err = handle.get_size().unwrap_err();
    assert_eq!(err, HaspError::Session("HASP protection key not available".into()));
}

// ── read ──────────────────────────────────────────────────────────

#[test]
fn read_returns_content_as_text() {
    let mut handle = handle_with_content(b"license-data");
    assert_eq!(handle.read().unwrap(), "license-data");
}

#[test]
fn read_keeps_embedded_nul_bytes() {
    let mut handle = handle_with_content(b"ab\0cd\0\0");
    let text = handle.read().unwrap();
    assert_eq!(text.len(), 7);
    assert_eq!(text, "ab\0cd\0\0");
}

#[test]
fn read_replaces_invalid_utf8() {
    let mut handle = handle_with_content(&[b'o', b'k', 0xff]);
    assert_eq!(handle.read().unwrap(), "ok\u{fffd}");
}

#[test]
fn read_bytes_is_exact() {
    let content = [0u8, 1, 2, 0xfe, 0xff];
    let mut handle = handle_with_content(&content);
    assert_eq!(handle.read_bytes().unwrap(), content.to_vec());
}

#[test]
fn read_failure_is_session_error() {
    let mut handle = failing_handle("Session been interrupted");
    let err = handle.read().unwrap_err();
    assert_eq!(err, HaspError::Session("Session been interrupted".into()));
}

// ── write ─────────────────────────────────────────────────────────

#[test]
fn write_forwards_utf8_bytes() {
    let mut handle = healthy_handle();
    handle.write("héllo").unwrap();
    assert_eq!(handle.session().written(), "héllo".as_bytes().to_vec());
}

#[test]
fn write_device_not_found() {
    let mut handle = failing_handle("device not found");
    let err = handle.write("data").unwrap_err();
    assert_eq!(err, HaspError::Session("device not found".into()));
    assert_eq!(err.to_string(), "device not found");
}

// ── error flag is per call ────────────────────────────────────────

#[test]
fn recovered_session_succeeds_again() {
    let mut handle = failing_handle("Session been interrupted");
    assert!(handle.get_size().is_err());

    let mut session = handle.into_session();
    session.set_failure(None);
    let mut handle = DeviceHandle::new(session.with_size(16));
    assert_eq!(handle.get_size().unwrap(), 16);
}

#[test]
fn handles_get_distinct_ids() {
    let a = healthy_handle();
    let b = healthy_handle();
    assert_ne!(a.id(), b.id());
}

#[test]
fn boxed_session_delegates() {
    let session: Box<ScriptedSession> = Box::new(ScriptedSession::new().with_size(8));
    let mut handle = DeviceHandle::new(session);
    assert_eq!(handle.get_size().unwrap(), 8);
    assert_eq!(handle.session().calls(), &[Call::GetSize]);
}
