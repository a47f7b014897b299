// src/version.rs
//! Application identity, fixed at build time.

use std::fmt;

use serde::Serialize;

/// Application version derived from Cargo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name and version of the running binary.
///
/// Built once at startup and handed to whoever needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
}

impl AppInfo {
    pub const fn current() -> Self {
        Self { name: env!("CARGO_PKG_NAME"), version: VERSION }
    }
}

impl fmt::Display for AppInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}
