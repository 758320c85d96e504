use std::sync::{Arc, Mutex};

use utils_core::{log, Console, DiagnosticSink};

fn recording_sink() -> (Arc<Mutex<Vec<String>>>, impl DiagnosticSink + 'static) {
    let lines = Arc::new(Mutex::new(Vec::new()));
    let captured = Arc::clone(&lines);
    let sink = move |text: &str| captured.lock().unwrap().push(text.to_string());
    (lines, sink)
}

#[test]
fn console_forwards_value_unmodified() {
    let (lines, sink) = recording_sink();
    let console = Console::with_sink(sink);

    console.log("hello");
    console.log(&42);
    console.log(&format_args!("{}-{}", "a", 1));

    assert_eq!(*lines.lock().unwrap(), vec!["hello", "42", "a-1"]);
}

#[test]
fn detached_console_is_a_no_op() {
    let console = Console::detached();
    assert!(!console.has_sink());
    console.log("dropped");
    console.log(&3.25);
}

#[test]
fn default_console_has_no_sink() {
    let console = Console::default();
    assert!(!console.has_sink());
    assert_eq!(format!("{console:?}"), "Console { has_sink: false }");
}

#[test]
fn free_log_writes_only_when_sink_present() {
    let (lines, sink) = recording_sink();

    log(None, "ignored");
    log(Some(&sink as &dyn DiagnosticSink), "kept");

    assert_eq!(*lines.lock().unwrap(), vec!["kept"]);
}

#[test]
fn console_attaches_to_installed_logger() {
    utils_logging::initialize_for_tests();
    let console = Console::from_environment();
    assert!(console.has_sink());
    console.log("routed through the log facade");
}
