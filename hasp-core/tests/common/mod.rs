//! Shared test helpers for handle tests.

#![allow(dead_code)]

use hasp_core::DeviceHandle;
use hasp_core::testing::ScriptedSession;

/// A handle over a session that reports no error.
pub fn healthy_handle() -> DeviceHandle<ScriptedSession> {
    DeviceHandle::new(ScriptedSession::new())
}

/// A handle over a session that fails every call with `message`.
pub fn failing_handle(message: &str) -> DeviceHandle<ScriptedSession> {
    DeviceHandle::new(ScriptedSession::new().failing(message))
}

/// A handle whose dongle memory holds `content`.
pub fn handle_with_content(content: &[u8]) -> DeviceHandle<ScriptedSession> {
    DeviceHandle::new(
        ScriptedSession::new()
            .with_size(content.len() as u32)
            .with_content(content),
    )
}
