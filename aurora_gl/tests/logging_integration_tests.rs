//! Integration tests for the logging system
//!
//! These tests verify the global sink, the severity filter and the log
//! output of failing resource operations. No GPU required.
//!
//! Run with: cargo test --test logging_integration_tests

use aurora_gl::aurora::driver::{BufferFlags, MockDriver};
use aurora_gl::aurora::log::{self, LogEntry, LogSeverity, Logger};
use aurora_gl::aurora::resource::Buffer;
use aurora_gl::aurora::Context;
use serial_test::serial;
use std::sync::{Arc, Mutex};

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn install() -> Arc<Mutex<Vec<LogEntry>>> {
        let entries = Arc::new(Mutex::new(Vec::new()));
        log::set_logger(Self { entries: entries.clone() });
        entries
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn restore() {
    log::reset_logger();
    log::set_min_severity(LogSeverity::Info);
}

// ============================================================================
// SINK TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_custom_logger() {
    let entries = TestLogger::install();

    log::log(LogSeverity::Info, "test::module", "Test info message".to_string());
    log::log(LogSeverity::Warn, "test::module", "Test warning message".to_string());
    log::log(LogSeverity::Error, "test::module", "Test error message".to_string());

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 3);
        assert_eq!(captured[0].severity, LogSeverity::Info);
        assert_eq!(captured[1].message, "Test warning message");
        assert_eq!(captured[2].source, "test::module");
        assert!(captured.iter().all(|entry| entry.file.is_none()));
    }

    restore();
}

#[test]
#[serial]
fn test_integration_error_logging_with_location() {
    let entries = TestLogger::install();

    log::log_detailed(
        LogSeverity::Error,
        "test::error",
        "Critical error occurred".to_string(),
        "test_file.rs",
        42,
    );

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].file, Some("test_file.rs"));
        assert_eq!(captured[0].line, Some(42));
    }

    restore();
}

#[test]
#[serial]
fn test_integration_logger_reset() {
    let entries = TestLogger::install();

    log::log(LogSeverity::Info, "test", "Message 1".to_string());
    log::reset_logger();
    log::log(LogSeverity::Info, "test", "Message 2".to_string());

    assert_eq!(entries.lock().unwrap().len(), 1);
    restore();
}

#[test]
#[serial]
fn test_integration_min_severity_filter() {
    let entries = TestLogger::install();

    log::log(LogSeverity::Trace, "test", "Trace message".to_string());
    log::log(LogSeverity::Debug, "test", "Debug message".to_string());
    log::log(LogSeverity::Info, "test", "Info message".to_string());

    log::set_min_severity(LogSeverity::Trace);
    log::log(LogSeverity::Trace, "test", "Trace message".to_string());

    log::set_min_severity(LogSeverity::Error);
    log::log(LogSeverity::Warn, "test", "Warn message".to_string());

    {
        let captured = entries.lock().unwrap();
        let severities: Vec<LogSeverity> = captured.iter().map(|entry| entry.severity).collect();
        assert_eq!(severities, vec![LogSeverity::Info, LogSeverity::Trace]);
    }

    restore();
}

// ============================================================================
// RESOURCE LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_failed_operation_is_logged() {
    let entries = TestLogger::install();
    let context = Context::new(MockDriver::new());
    let mut buffer = Buffer::create(&context, 16, BufferFlags::DYNAMIC_STORAGE).unwrap();

    assert!(buffer.store(&[0u8; 32]).is_err());

    {
        let captured = entries.lock().unwrap();
        let errors: Vec<&LogEntry> = captured
            .iter()
            .filter(|entry| entry.severity == LogSeverity::Error)
            .collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].source, "aurora::Buffer");
        assert!(errors[0].message.contains("overflow"));
        assert!(errors[0].file.is_some());
        assert!(errors[0].line.is_some());
    }

    restore();
}

#[test]
#[serial]
fn test_integration_lifecycle_details_need_debug_severity() {
    let entries = TestLogger::install();
    let context = Context::new(MockDriver::new());

    let _quiet = Buffer::create(&context, 16, BufferFlags::DYNAMIC_STORAGE).unwrap();
    assert!(entries.lock().unwrap().is_empty());

    log::set_min_severity(LogSeverity::Debug);
    let _verbose = Buffer::create(&context, 16, BufferFlags::DYNAMIC_STORAGE).unwrap();
    {
        let captured = entries.lock().unwrap();
        assert!(captured
            .iter()
            .any(|entry| entry.severity == LogSeverity::Debug && entry.source == "aurora::Buffer"));
    }

    restore();
}
