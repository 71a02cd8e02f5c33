/*!
# Aurora GL

Host-side resource layer over an immediate-mode graphics API.

This crate owns GPU objects through RAII wrappers and validates every
request before it reaches the driver. The graphics API itself sits behind
the [`Driver`](driver::Driver) trait: the OpenGL implementation lives in
`aurora_gl_driver_opengl`, and the `mock` feature provides an in-memory
driver that records every call.

## Architecture

- **Context**: shared, single-threaded access to one driver, plus the
  debug-output hook
- **Buffer**: immutable storage with a write cursor, either host-shadowed,
  mapped on demand or persistently mapped
- **Texture**: immutable-storage textures of every target kind, with
  validated sub-region uploads
- **Framebuffer**: ordered texture and renderbuffer attachments, with
  selective rebuild on resize
- **VertexArray**: vertex buffer bindings and their attribute layout
*/

// Internal modules
mod error;
mod context;
pub mod log;
pub mod driver;
pub mod resource;

#[cfg(feature = "mock")]
mod utils;

// Main aurora namespace module
pub mod aurora {
    // Error types
    pub use crate::error::{Error, Result};

    // Context and its configuration
    pub use crate::context::{Context, ContextConfig, DEBUG_OUTPUT_ENABLED_ID};

    // Logging sub-module (types and sink control; macros live at the crate root)
    pub mod log {
        pub use crate::log::{
            enabled, log, log_detailed, min_severity, reset_logger, set_logger, set_min_severity,
            DefaultLogger, LogEntry, LogSeverity, Logger,
        };
    }

    // Driver facade and value types
    pub mod driver {
        pub use crate::driver::*;
    }

    // Resource sub-module
    pub mod resource {
        pub use crate::resource::*;
    }
}

pub use context::{Context, ContextConfig};
pub use error::{Error, Result};
