//! IP-camera address validation.
//!
//! The phone-camera form accepts `<a>.<b>.<c>.<d>:<port>`, where each octet
//! is one to three ASCII digits and the port is one or more digits. Values
//! are not range checked: `999.999.999.999:99999` is accepted and left for the
//! server to reject.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{PageError, PageResult};

/// Example shown to the user when validation fails
pub const EXAMPLE_ADDRESS: &str = "192.168.0.23:8080";

fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // `[0-9]` rather than `\d`: only ASCII digits are valid.
        Regex::new(r"^([0-9]{1,3}(?:\.[0-9]{1,3}){3}):([0-9]+)$")
            .unwrap_or_else(|e| unreachable!("static pattern is valid: {e}"))
    })
}

/// Returns true iff `candidate` is exactly `<1-3 digits>.<1-3 digits>.<1-3 digits>.<1-3 digits>:<digits>`.
pub fn validate(candidate: &str) -> bool {
    pattern().is_match(candidate)
}

/// A syntactically valid IP-camera address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraAddress {
    host: String,
    port: String,
}

impl CameraAddress {
    /// Parse a `host:port` string, rejecting anything [`validate`] rejects.
    pub fn parse(candidate: &str) -> PageResult<Self> {
        let caps = pattern()
            .captures(candidate)
            .ok_or_else(|| PageError::InvalidCameraAddress {
                input: candidate.to_string(),
            })?;
        Ok(Self {
            host: caps[1].to_string(),
            port: caps[2].to_string(),
        })
    }

    /// Dotted host part
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Port digits, unchecked against the 16-bit range
    pub fn port(&self) -> &str {
        &self.port
    }

    /// Still-image URL served by IP Webcam style apps
    pub fn snapshot_url(&self) -> String {
        format!("http://{}/shot.jpg", self)
    }
}

impl fmt::Display for CameraAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}
