//! Error types for the focus camera rig
//!
//! The rig math itself never fails. Errors come from the glue around it:
//! stale node handles, lifecycle misuse and invalid configuration.

use std::fmt;

/// Result type for rig operations
pub type Result<T> = std::result::Result<T, Error>;

/// Rig errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A node handle does not refer to a live node in the transform store
    InvalidNode(String),

    /// A descriptor value is out of its allowed domain
    InvalidConfig(String),

    /// A lifecycle hook was called in the wrong order
    InvalidState(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidNode(msg) => write!(f, "Invalid node: {}", msg),
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Build an error of the given kind and log it at ERROR severity
///
/// # Example
///
/// ```no_run
/// use focus_camera_rig::focuscam::Error;
/// use focus_camera_rig::engine_err;
///
/// let err = engine_err!(Error::InvalidNode, "focuscam::TransformStore", "node {} not found", 3);
/// ```
#[macro_export]
macro_rules! engine_err {
    ($kind:path, $source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $kind(message)
    }};
}

/// Log an error of the given kind and return it from the current function
#[macro_export]
macro_rules! engine_bail {
    ($kind:path, $source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($kind, $source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
