/// Context - shared access to the driver of one graphics context
///
/// Every resource keeps a clone of the [`Context`] it was created with and
/// issues its driver calls through it. The context is reference counted
/// and `!Send`: resources cannot leave the thread owning the graphics
/// context.
///
/// The context also owns the debug-output hook. Installing a new hook
/// replaces the previous one, and dropping the last clone of the context
/// removes it from the driver.

use std::cell::{RefCell, RefMut};
use std::rc::Rc;

use crate::driver::{
    DebugMessage, DebugSeverity, DebugSource, DebugType, Driver, ErrorCode,
};
use crate::log::LogSeverity;

/// Id of the message inserted when debug output is enabled
pub const DEBUG_OUTPUT_ENABLED_ID: u32 = 1;

// ============================================================================
// Configuration
// ============================================================================

/// Context configuration
#[derive(Debug, Clone)]
pub struct ContextConfig {
    /// Forward driver debug messages to the aurora logger from creation on
    pub debug_output: bool,
    /// Deliver debug messages inside the offending call
    pub synchronous_debug: bool,
    /// Name used as the log source of forwarded debug messages
    pub label: String,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            debug_output: false,
            synchronous_debug: true,
            label: "aurora::Context".to_string(),
        }
    }
}

impl ContextConfig {
    pub fn with_debug_output(mut self, enabled: bool) -> Self {
        self.debug_output = enabled;
        self
    }

    pub fn with_synchronous_debug(mut self, synchronous: bool) -> Self {
        self.synchronous_debug = synchronous;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

// ============================================================================
// Context
// ============================================================================

struct ContextInner {
    driver: RefCell<Box<dyn Driver>>,
    config: ContextConfig,
}

impl Drop for ContextInner {
    fn drop(&mut self) {
        self.driver.get_mut().set_debug_hook(None, false);
    }
}

fn unbox(driver: &mut Box<dyn Driver>) -> &mut (dyn Driver + 'static) {
    &mut **driver
}

/// Handle to one graphics context and its driver
#[derive(Clone)]
pub struct Context {
    inner: Rc<ContextInner>,
}

impl Context {
    /// Wrap a driver with the default configuration
    pub fn new<D: Driver + 'static>(driver: D) -> Self {
        Self::with_config(driver, ContextConfig::default())
    }

    /// Wrap a driver
    ///
    /// With `config.debug_output`, driver messages are logged through the
    /// aurora logger until [`Context::disable_debug_output`] or a custom
    /// hook replaces the forwarding.
    pub fn with_config<D: Driver + 'static>(driver: D, config: ContextConfig) -> Self {
        let context = Self {
            inner: Rc::new(ContextInner {
                driver: RefCell::new(Box::new(driver)),
                config,
            }),
        };
        if context.inner.config.debug_output {
            context.enable_debug_logging();
        }
        crate::aurora_debug!(
            "aurora::Context",
            "Context '{}' created (debug output: {})",
            context.inner.config.label,
            context.inner.config.debug_output
        );
        context
    }

    pub fn config(&self) -> &ContextConfig {
        &self.inner.config
    }

    /// Borrow the driver for one call sequence
    ///
    /// The borrow must end before any other resource of this context is
    /// used; resources never hold it across calls.
    pub(crate) fn driver(&self) -> RefMut<'_, dyn Driver> {
        RefMut::map(self.inner.driver.borrow_mut(), unbox)
    }

    /// Like [`Context::driver`], but `None` while the driver is borrowed.
    /// Used by deletion paths, which may run from `Drop`.
    pub(crate) fn try_driver(&self) -> Option<RefMut<'_, dyn Driver>> {
        self.inner
            .driver
            .try_borrow_mut()
            .ok()
            .map(|driver| -> RefMut<'_, dyn Driver> { RefMut::map(driver, unbox) })
    }

    /// Run `f` with direct access to the driver
    ///
    /// Intended for calls outside the resource layer (draws, state).
    pub fn with_driver<R>(&self, f: impl FnOnce(&mut dyn Driver) -> R) -> R {
        f(&mut *self.driver())
    }

    /// Whether two handles refer to the same context
    pub fn same_context(&self, other: &Context) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    // ===== DEBUG OUTPUT =====

    /// Install `callback` as the debug hook and announce it with a test
    /// message
    ///
    /// # Example
    ///
    /// ```no_run
    /// # fn run(context: &aurora_gl::Context) {
    /// context.enable_debug_output(|message| eprintln!("{}", message));
    /// # }
    /// ```
    pub fn enable_debug_output<F>(&self, callback: F)
    where
        F: FnMut(&DebugMessage) + 'static,
    {
        let synchronous = self.inner.config.synchronous_debug;
        let mut driver = self.driver();
        driver.set_debug_hook(Some(Box::new(callback)), synchronous);
        driver.insert_debug_message(&DebugMessage {
            source: DebugSource::Application,
            kind: DebugType::Other,
            id: DEBUG_OUTPUT_ENABLED_ID,
            severity: DebugSeverity::Notification,
            message: "Debug output enabled.".to_string(),
        });
    }

    /// Install a hook that forwards every message to the aurora logger
    pub fn enable_debug_logging(&self) {
        let source = self.inner.config.label.clone();
        self.enable_debug_output(move |message| {
            let severity = match message.severity {
                DebugSeverity::Notification => LogSeverity::Debug,
                DebugSeverity::Low => LogSeverity::Info,
                DebugSeverity::Medium => LogSeverity::Warn,
                DebugSeverity::High => LogSeverity::Error,
            };
            crate::log::log(severity, &source, message.to_string());
        });
    }

    /// Remove the debug hook
    pub fn disable_debug_output(&self) {
        self.driver().set_debug_hook(None, false);
    }

    /// Push an application message into the debug stream
    pub fn insert_debug_message(&self, message: &DebugMessage) {
        self.driver().insert_debug_message(message);
    }

    /// Pop the oldest pending driver error flag
    pub fn get_error(&self) -> ErrorCode {
        self.driver().get_error()
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
