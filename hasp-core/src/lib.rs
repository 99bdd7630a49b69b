//! Binding boundary for HASP license dongles.
//!
//! A [`DeviceHandle`] owns one vendor [`Session`] and exposes five operations:
//! login, logout, size query, read and write. Each call is delegated to the
//! session, whose error flag is checked right afterwards and turned into a
//! [`HaspError`].
//!
//! The vendor runtime itself sits behind the [`Session`] trait. With the
//! `vendor-sdk` feature, [`VendorSession`] implements it over the vendor C
//! library.

mod config;
mod error;
mod handle;
mod session;
mod status;
#[cfg(feature = "test-util")]
pub mod testing;
#[cfg(any(test, feature = "vendor-sdk"))]
mod vendor;

pub use config::{DEFAULT_FEATURE_ID, FILE_ID_RO, FILE_ID_RW, SessionConfig};
pub use error::{HaspError, HaspResult};
pub use handle::{DeviceHandle, HandleId};
pub use session::Session;
pub use status::VendorStatus;

#[cfg(feature = "vendor-sdk")]
pub use vendor::VendorSession;
