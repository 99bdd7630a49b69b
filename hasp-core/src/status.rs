//! Status codes returned by the vendor runtime.

use std::fmt;

/// A raw HASP status code. `0` means success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VendorStatus(pub u32);

impl VendorStatus {
    pub const OK: Self = Self(0);
    pub const MEM_RANGE: Self = Self(1);
    pub const INSUF_MEM: Self = Self(3);
    pub const ACCESS_DENIED: Self = Self(5);
    pub const HASP_NOT_FOUND: Self = Self(7);
    pub const INV_HND: Self = Self(9);
    pub const INV_FILEID: Self = Self(10);
    pub const INV_VCODE: Self = Self(22);
    pub const FEATURE_NOT_FOUND: Self = Self(31);
    pub const BROKEN_SESSION: Self = Self(39);
    pub const FEATURE_EXPIRED: Self = Self(41);

    #[must_use]
    pub const fn is_ok(self) -> bool {
        self.0 == Self::OK.0
    }

    #[must_use]
    pub const fn code(self) -> u32 {
        self.0
    }

    /// Human-readable description, `None` for codes outside the table.
    #[must_use]
    pub fn known_message(self) -> Option<&'static str> {
        let msg = match self.0 {
            0 => "Request successfully completed",
            1 => "Request exceeds memory range of a HASP file",
            2 => "Legacy HASP HL Run-time API: Unknown/Invalid Feature ID option",
            3 => "System is out of memory",
            4 => "Too many open Features (sessions)",
            5 => "Access to Feature, HASP protection key or functionality denied",
            6 => "Legacy decryption function cannot work on Feature",
            7 => "HASP protection key not available",
            8 => "Encrypted/decrypted data length too short to execute function call",
            9 => "Invalid login handle passed to function",
            10 => "Specified File ID not recognized by API",
            11 => "Installed driver or daemon too old to execute function",
            12 => "Real-time clock (rtc) not available",
            13 => "Generic error from host system call",
            14 => "Required driver not installed",
            15 => "Invalid XML format",
            16 => "Unable to execute function in this context",
            17 => "Binary data passed to function does not contain valid update",
            18 => "HASP protection key not found",
            19 => "Required XML tags not found",
            20 => "Update request not supported by HASP protection key",
            21 => "Update counter set incorrectly",
            22 => "Invalid Vendor Code passed",
            23 => "HASP protection key does not support encryption type",
            24 => "Passed time value outside supported value range",
            25 => "Real-time clock battery out of power",
            26 => "Acknowledge data requested by update, but ack_data parameter is NULL",
            27 => "Program running on a terminal server",
            28 => "Requested Feature type not implemented",
            29 => "Unknown algorithm used in H2R/V2C file",
            30 => "Signature verification operation failed",
            31 => "Requested Feature not available",
            32 => "Access log not enabled",
            33 => "Communication error between API and local HASP License Manager",
            34 => "Vendor Code not recognized by API",
            35 => "Invalid XML specification",
            36 => "Invalid XML scope",
            37 => "Too many HASP protection keys match the scope",
            38 => "Too many concurrent user sessions currently connected",
            39 => "Session been interrupted",
            40 => "Communication error between local and remote HASP License Managers",
            41 => "Feature expired",
            42 => "HASP License Manager version too old",
            43 => "Input/Output error occurred in secure storage area of HASP SL key",
            44 => "Update installation not permitted; update was already applied",
            45 => "System time has been tampered with",
            46 => "Communication error occurred in secure channel",
            47 => "Corrupt data exists in secure storage area of HASP SL protection key",
            48 => "Unable to find Vendor library",
            49 => "Unable to load Vendor library",
            50 => "Unable to locate any Feature matching scope",
            51 => "Program running on a virtual machine",
            _ => return None,
        };
        Some(msg)
    }

    /// Human-readable description, naming the code when it is unknown.
    #[must_use]
    pub fn message(self) -> String {
        match self.known_message() {
            Some(msg) => msg.to_string(),
            None => format!("Unknown HASP status {}", self.0),
        }
    }
}

impl From<u32> for VendorStatus {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

impl fmt::Display for VendorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (status {})", self.message(), self.0)
    }
}
