//! Integration tests for rig logging
//!
//! Verifies that lifecycle events and diagnostics reach a custom logger.
//!
//! Run with: cargo test --test logging_integration_tests

use focus_camera_rig::focuscam::Engine;
use focus_camera_rig::focuscam::log::{Logger, LogEntry, LogSeverity};
use focus_camera_rig::focuscam::rig::{OrbitRig, RigComponent, RigDesc, ZoomMode};
use focus_camera_rig::focuscam::transform::TransformStore;
use focus_camera_rig::focuscam::utils::out_of_range_distance;
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn entries_from(entries: &Arc<Mutex<Vec<LogEntry>>>, source: &str) -> Vec<LogEntry> {
    entries.lock().unwrap().iter().filter(|e| e.source == source).cloned().collect()
}

// ============================================================================
// LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_inverted_range_is_logged_not_fatal() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    let value = out_of_range_distance(10.0, -10.0, 0.0);
    assert_eq!(value, -10.0);

    let logged = entries_from(&entries, "focuscam::utils");
    assert_eq!(logged.len(), 1);
    assert_eq!(logged[0].severity, LogSeverity::Error);
    assert!(logged[0].message.contains("min"));
    assert!(logged[0].file.is_some());
    assert!(logged[0].line.is_some());

    // A valid range logs nothing
    out_of_range_distance(-10.0, 10.0, 0.0);
    assert_eq!(entries_from(&entries, "focuscam::utils").len(), 1);

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_rig_lifecycle_is_logged() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    let mut store = TransformStore::new();
    let root = store.create_node(None).unwrap();
    let target = store.create_node(None).unwrap();
    let mut desc = RigDesc::default();
    desc.zoom.mode = ZoomMode::Pinch;

    let mut rig = OrbitRig::new(desc, root, target).unwrap();
    rig.on_init(&mut store).unwrap();
    rig.on_teardown(&mut store).unwrap();

    let logged = entries_from(&entries, "focuscam::OrbitRig");
    assert!(logged.iter().any(|e| e.severity == LogSeverity::Debug && e.message.contains("Pinch")));
    assert!(logged.iter().any(|e| e.severity == LogSeverity::Info && e.message.contains("initialized")));
    assert!(logged.iter().any(|e| e.severity == LogSeverity::Info && e.message.contains("torn down")));

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_invalid_config_is_logged() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    let mut store = TransformStore::new();
    let root = store.create_node(None).unwrap();
    let mut desc = RigDesc::default();
    desc.zoom.min_zoom = 150.0;

    assert!(OrbitRig::new(desc, root, root).is_err());

    let logged = entries_from(&entries, "focuscam::RigDesc");
    assert_eq!(logged.len(), 1);
    assert_eq!(logged[0].severity, LogSeverity::Error);
    assert!(logged[0].message.contains("min_zoom"));

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_logger_reset() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    Engine::log(LogSeverity::Info, "test", "Message 1".to_string());
    assert_eq!(entries.lock().unwrap().len(), 1);

    Engine::reset_logger();

    // Goes to the default logger, not captured
    Engine::log(LogSeverity::Info, "test", "Message 2".to_string());
    assert_eq!(entries.lock().unwrap().len(), 1);
}
