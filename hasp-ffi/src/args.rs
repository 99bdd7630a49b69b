//! Host method names and argument validation.
//!
//! Arguments arrive as the host's positional argument list. Trailing extras
//! are ignored; missing or mistyped arguments fail before the session is
//! touched.

use hasp_core::HaspError;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::CallError;

/// A method exposed on the host-side handle object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Login,
    Logout,
    GetSize,
    Read,
    Write,
}

impl Method {
    pub const ALL: [Method; 5] = [
        Method::Login,
        Method::Logout,
        Method::GetSize,
        Method::Read,
        Method::Write,
    ];

    /// The name the host sees.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Method::Login => "login",
            Method::Logout => "logout",
            Method::GetSize => "getSize",
            Method::Read => "read",
            Method::Write => "write",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = CallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| CallError::UnknownMethod(s.to_string()))
    }
}

/// The vendor code argument of `login`.
pub fn vendor_code(args: &[Value]) -> Result<&str, HaspError> {
    match args.first() {
        None => Err(HaspError::InvalidArgument("Please specify vendor code".into())),
        Some(Value::String(code)) => Ok(code),
        Some(_) => Err(HaspError::InvalidArgument(
            "Vendor code should be a string".into(),
        )),
    }
}

/// The data argument of `write`.
pub fn write_data(args: &[Value]) -> Result<&str, HaspError> {
    match args.first() {
        None => Err(HaspError::InvalidArgument("Wrong number of arguments".into())),
        Some(Value::String(data)) => Ok(data),
        Some(_) => Err(HaspError::InvalidArgument(
            "First argument should be a string".into(),
        )),
    }
}
