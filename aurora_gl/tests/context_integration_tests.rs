//! Integration tests for Context debug output
//!
//! Driver debug messages forwarded to the aurora logger, and custom hooks.
//! No GPU required.
//!
//! Run with: cargo test --test context_integration_tests

use aurora_gl::aurora::driver::{
    DebugMessage, DebugSeverity, DebugSource, DebugType, MockDriver,
};
use aurora_gl::aurora::log::{self, LogEntry, LogSeverity, Logger};
use aurora_gl::aurora::{Context, ContextConfig, DEBUG_OUTPUT_ENABLED_ID};
use serial_test::serial;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn capture_logs() -> Arc<Mutex<Vec<LogEntry>>> {
    let entries = Arc::new(Mutex::new(Vec::new()));
    log::set_logger(TestLogger { entries: entries.clone() });
    log::set_min_severity(LogSeverity::Trace);
    entries
}

fn restore() {
    log::reset_logger();
    log::set_min_severity(LogSeverity::Info);
}

fn message(severity: DebugSeverity, text: &str) -> DebugMessage {
    DebugMessage {
        source: DebugSource::Api,
        kind: DebugType::Error,
        id: 1281,
        severity,
        message: text.to_string(),
    }
}

// ============================================================================
// FORWARDING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_debug_output_forwards_to_logger() {
    let entries = capture_logs();
    let mock = MockDriver::new();
    let _context = Context::with_config(
        mock.clone(),
        ContextConfig::default().with_debug_output(true).with_label("aurora::opengl::Debug"),
    );

    mock.emit_debug_message(&message(DebugSeverity::Low, "low"));
    mock.emit_debug_message(&message(DebugSeverity::Medium, "medium"));
    mock.emit_debug_message(&message(DebugSeverity::High, "invalid value"));

    {
        let captured = entries.lock().unwrap();
        let forwarded: Vec<(LogSeverity, String)> = captured
            .iter()
            .filter(|entry| entry.source == "aurora::opengl::Debug")
            .map(|entry| (entry.severity, entry.message.clone()))
            .collect();

        assert_eq!(forwarded.len(), 4);
        assert_eq!(forwarded[0].0, LogSeverity::Debug);
        assert!(forwarded[0].1.contains("Debug output enabled."));
        assert_eq!(forwarded[1].0, LogSeverity::Info);
        assert_eq!(forwarded[2].0, LogSeverity::Warn);
        assert_eq!(forwarded[3].0, LogSeverity::Error);
        assert!(forwarded[3].1.contains("invalid value"));
        assert!(forwarded[3].1.contains("#1281"));
    }

    restore();
}

#[test]
#[serial]
fn test_integration_disable_stops_forwarding() {
    let entries = capture_logs();
    let mock = MockDriver::new();
    let context = Context::with_config(
        mock.clone(),
        ContextConfig::default().with_debug_output(true).with_label("forward"),
    );

    context.disable_debug_output();
    mock.emit_debug_message(&message(DebugSeverity::High, "dropped"));

    {
        let captured = entries.lock().unwrap();
        assert!(!captured.iter().any(|entry| entry.message.contains("dropped")));
    }

    restore();
}

// ============================================================================
// CUSTOM HOOK TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_custom_hook_replaces_logging() {
    let mock = MockDriver::new();
    let context = Context::with_config(mock.clone(), ContextConfig::default().with_debug_output(true));
    let received = Rc::new(RefCell::new(Vec::new()));
    let sink = received.clone();

    context.enable_debug_output(move |message| sink.borrow_mut().push(message.id));
    mock.emit_debug_message(&message(DebugSeverity::Medium, "performance"));

    assert_eq!(*received.borrow(), vec![DEBUG_OUTPUT_ENABLED_ID, 1281]);
    assert_eq!(mock.calls_named("set_debug_hook").len(), 2);
}

#[test]
#[serial]
fn test_integration_hook_outlives_resources_not_context() {
    let mock = MockDriver::new();
    let received = Rc::new(RefCell::new(0usize));
    {
        let context = Context::new(mock.clone());
        let sink = received.clone();
        context.enable_debug_output(move |_| *sink.borrow_mut() += 1);
        mock.emit_debug_message(&message(DebugSeverity::Low, "first"));
    }

    mock.emit_debug_message(&message(DebugSeverity::Low, "after teardown"));

    assert_eq!(*received.borrow(), 2);
    assert!(!mock.has_debug_hook());
    assert_eq!(Rc::strong_count(&received), 1);
}
