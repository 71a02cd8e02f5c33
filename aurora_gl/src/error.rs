//! Error types for the Aurora GL resource layer
//!
//! Every fallible operation returns [`Result`]. The variants follow the four
//! failure categories of the layer: caller configuration, byte-range bounds,
//! driver-reported failures and lifecycle state.

use thiserror::Error as ThisError;

use crate::driver::FramebufferStatus;

/// Result type for Aurora GL operations
pub type Result<T> = std::result::Result<T, Error>;

/// Aurora GL errors
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    /// Invalid arguments detected before any driver call
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A byte range or region exceeds a buffer, texture or destination
    #[error("Out of bounds: {0}")]
    OutOfBounds(String),

    /// The driver reported a failure (allocation, mapping, unmapping...)
    #[error("Driver error: {0}")]
    DriverError(String),

    /// The framebuffer did not report the complete status
    #[error("Framebuffer incomplete: {0}")]
    FramebufferIncomplete(FramebufferStatus),

    /// The resource is in the wrong lifecycle state for the operation
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

// ===== ERROR MACROS =====

/// Log an error and return it from the current function
///
/// The first argument is the [`Error`] variant name, the second the log
/// source, followed by `format!` arguments.
///
/// # Example
///
/// ```ignore
/// aurora_bail!(OutOfBounds, "aurora::Buffer", "{} bytes exceed {}", len, capacity);
/// ```
#[macro_export]
macro_rules! aurora_bail {
    ($kind:ident, $source:expr, $($arg:tt)*) => {
        return Err($crate::aurora_err!($kind, $source, $($arg)*))
    };
}

/// Log an error and evaluate to it, without returning
///
/// Useful inside `ok_or_else` / `map_err` closures.
#[macro_export]
macro_rules! aurora_err {
    ($kind:ident, $source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::aurora_error!($source, "{}", message);
        $crate::aurora::Error::$kind(message)
    }};
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
