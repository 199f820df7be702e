//! The default sink forwards validator messages to the installed `tracing`
//! subscriber under target `envgate`.

use std::sync::{Arc, Mutex};

use envgate_core::envfile::entries_from_pairs;
use envgate_core::{Validator, ValidatorConfig};

/// Shared buffer the JSON formatter writes into.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Captured {
    fn install() -> (Self, tracing::subscriber::DefaultGuard) {
        let captured = Self::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::DEBUG)
            .json()
            .finish();
        (captured, tracing::subscriber::set_default(subscriber))
    }

    fn events(&self) -> Vec<serde_json::Value> {
        let output = String::from_utf8(self.0.lock().unwrap().clone()).unwrap();
        output
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }
}

fn message_of(event: &serde_json::Value) -> &str {
    event["fields"]["message"].as_str().unwrap_or_default()
}

#[test]
fn test_violation_emitted_as_error_event() {
    let (captured, _guard) = Captured::install();

    let validator = Validator::new(ValidatorConfig::new(), Vec::<String>::new());
    let verdict = validator.run(&entries_from_pairs([("ENABLE_DEBUG", "maybe")]));
    assert!(!verdict.is_valid());

    let events = captured.events();
    let error = events
        .iter()
        .find(|e| e["level"] == "ERROR")
        .expect("an error event");
    assert_eq!(error["target"], "envgate");
    assert!(message_of(error).starts_with("Validation error for key ENABLE_DEBUG: "));
}

#[test]
fn test_verbose_trace_reaches_subscriber() {
    let (captured, _guard) = Captured::install();

    let validator = Validator::new(ValidatorConfig::new().verbose(true), ["ENABLE_DEBUG"]);
    let verdict = validator.run(&entries_from_pairs([("ENABLE_DEBUG", "yes")]));
    assert!(verdict.is_valid());

    let events = captured.events();
    let messages: Vec<&str> = events.iter().map(message_of).collect();
    assert!(messages.contains(&"Processing key: ENABLE_DEBUG"));
    assert!(messages.contains(&"  ENABLE_DEBUG is a required variable."));
    assert!(messages.contains(&"  [validated by: BooleanPolicy]"));
    assert!(messages.contains(&"env file is valid"));

    let validated = events
        .iter()
        .find(|e| message_of(e) == "  [validated by: BooleanPolicy]")
        .unwrap();
    assert_eq!(validated["level"], "DEBUG");
}

#[test]
fn test_quiet_run_emits_only_outcome() {
    let (captured, _guard) = Captured::install();

    let validator = Validator::new(ValidatorConfig::new(), ["ENABLE_DEBUG"]);
    assert!(validator
        .run(&entries_from_pairs([("ENABLE_DEBUG", "1")]))
        .is_valid());

    let events = captured.events();
    let messages: Vec<&str> = events.iter().map(message_of).collect();
    assert_eq!(messages, vec!["env file is valid"]);
}
