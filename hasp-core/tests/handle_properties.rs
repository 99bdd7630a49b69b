//! Property-based tests for the handle boundary.
//!
//! - Size is passed through unchanged
//! - Reads return exactly the session's buffer
//! - Any session failure surfaces its message verbatim

use hasp_core::testing::ScriptedSession;
use hasp_core::{DeviceHandle, HaspError};
use proptest::prelude::*;

proptest! {
    #[test]
    fn get_size_is_identity(size in any::<u32>()) {
        let mut handle = DeviceHandle::new(ScriptedSession::new().with_size(size));
        prop_assert_eq!(handle.get_size().unwrap(), size);
    }

    #[test]
    fn read_bytes_returns_session_buffer(content in prop::collection::vec(any::<u8>(), 0..512)) {
        let session = ScriptedSession::new()
            .with_size(content.len() as u32)
            .with_content(content.clone());
        let mut handle = DeviceHandle::new(session);
        prop_assert_eq!(handle.read_bytes().unwrap(), content);
    }

    #[test]
    fn read_text_length_matches_ascii_buffer(content in prop::collection::vec(0u8..0x80, 0..512)) {
        let mut handle = DeviceHandle::new(ScriptedSession::new().with_content(content.clone()));
        prop_assert_eq!(handle.read().unwrap().len(), content.len());
    }

    #[test]
    fn session_message_is_verbatim(message in "[ -~]{1,80}", data in "[ -~]{0,40}") {
        let mut handle = DeviceHandle::new(ScriptedSession::new().failing(message.clone()));
        prop_assert_eq!(handle.write(&data).unwrap_err(), HaspError::Session(message.clone()));
        prop_assert_eq!(handle.logout().unwrap_err(), HaspError::Session(message));
    }
}
