//! Integration tests for the slog adapters.
//!
//! Covers:
//! - `into_redacted_json()` on views and containers
//! - the `slog::Value` impl of `RedactingView`
//! - records logged through `record_json` and the derived `slog::Value`

#![cfg(feature = "slog")]

use std::{cell::RefCell, collections::HashMap, fmt::Arguments};

use dualview::{
    slog::{record_json, IntoRedactedJson, SERIALIZE_FAILURE},
    DualView, Record, RedactingView, Replacement,
};
use serde::Serialize;
use serde_json::{json, Value as JsonValue};

// A test serializer that captures serialized key-value pairs
struct CapturingSerializer {
    captured: RefCell<HashMap<String, CapturedValue>>,
}

#[derive(Debug, Clone, PartialEq)]
enum CapturedValue {
    Str(String),
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    Unit,
    None,
    // For nested serde values, we capture the JSON representation
    Serde(JsonValue),
}

impl CapturingSerializer {
    fn new() -> Self {
        Self {
            captured: RefCell::new(HashMap::new()),
        }
    }

    fn get(&self, key: &str) -> Option<CapturedValue> {
        self.captured.borrow().get(key).cloned()
    }
}

impl slog::Serializer for CapturingSerializer {
    fn emit_arguments(&mut self, key: slog::Key, val: &Arguments<'_>) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Str(val.to_string()));
        Ok(())
    }

    fn emit_str(&mut self, key: slog::Key, val: &str) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Str(val.into()));
        Ok(())
    }

    fn emit_bool(&mut self, key: slog::Key, val: bool) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Bool(val));
        Ok(())
    }

    fn emit_i64(&mut self, key: slog::Key, val: i64) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::I64(val));
        Ok(())
    }

    fn emit_u64(&mut self, key: slog::Key, val: u64) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::U64(val));
        Ok(())
    }

    fn emit_f64(&mut self, key: slog::Key, val: f64) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::F64(val));
        Ok(())
    }

    fn emit_unit(&mut self, key: slog::Key) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Unit);
        Ok(())
    }

    fn emit_none(&mut self, key: slog::Key) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::None);
        Ok(())
    }

    fn emit_serde(&mut self, key: slog::Key, val: &dyn slog::SerdeValue) -> slog::Result {
        // Serialize the value to JSON to capture it
        let json = serde_json::to_value(val.as_serde()).unwrap_or(JsonValue::Null);
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Serde(json));
        Ok(())
    }
}

/// Helper function to serialize a slog::Value into any Serializer.
fn serialize_to_capture<V: slog::Value, S: slog::Serializer>(
    value: &V,
    key: &'static str,
    serializer: &mut S,
) {
    // The record is created and used in a single expression to avoid lifetime issues
    static RS: slog::RecordStatic<'static> = slog::record_static!(slog::Level::Info, "");
    // We need to ensure format_args! result lives long enough
    let args = format_args!("");
    let record = slog::Record::new(&RS, &args, slog::b!());
    value.serialize(&record, key, serializer).unwrap();
}

fn captured_json<V: slog::Value>(value: &V, key: &'static str) -> JsonValue {
    let mut serializer = CapturingSerializer::new();
    serialize_to_capture(value, key, &mut serializer);
    match serializer.get(key) {
        Some(CapturedValue::Serde(json)) => json,
        other => panic!("Expected Serde value for '{key}', got {other:?}"),
    }
}

#[test]
fn view_json_contains_only_redacted_values() {
    let source = HashMap::from([
        ("user".to_string(), "alice".to_string()),
        ("password".to_string(), "hunter2".to_string()),
    ]);
    let view = RedactingView::new(&source, ["password".to_string()], Replacement::placeholder());

    let redacted = (&view).into_redacted_json();

    assert_eq!(
        redacted.as_json(),
        &json!({ "user": "alice", "password": "[REDACTED]" })
    );
}

#[test]
fn view_is_logged_as_nested_json() {
    let source = HashMap::from([("pin", 1234_u32), ("floor", 3)]);
    let view = RedactingView::new(&source, ["pin"], Replacement::constant(0));

    let json = captured_json(&view, "settings");

    assert_eq!(json, json!({ "pin": 0, "floor": 3 }));
}

#[test]
fn logging_reflects_current_sensitivity() {
    let source = HashMap::from([("token", "abc")]);
    let view = RedactingView::new(&source, None, Replacement::constant("***"));

    assert_eq!(captured_json(&view, "v"), json!({ "token": "abc" }));
    view.add_sensitive("token");
    assert_eq!(captured_json(&view, "v"), json!({ "token": "***" }));
}

#[test]
fn dual_view_json_goes_through_the_redacting_path() {
    let mut config = DualView::new(Replacement::tagged(), ["secret"]);
    config.set("secret", "s3cr3t".to_string());
    config.set("region", "eu-west-1".to_string());

    let json = captured_json(&config.into_redacted_json(), "config");

    assert_eq!(
        json,
        json!({ "secret": "[REDACTED:secret]", "region": "eu-west-1" })
    );
}

#[test]
fn unserializable_values_become_a_placeholder() {
    #[derive(Clone)]
    struct Broken;

    impl Serialize for Broken {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("nope"))
        }
    }

    let source = HashMap::from([("bad", Broken)]);
    let view = RedactingView::new(&source, None, Replacement::constant(Broken));

    assert_eq!(
        (&view).into_redacted_json().as_json(),
        &json!({ "bad": SERIALIZE_FAILURE })
    );
}

#[derive(Record)]
struct Login {
    user: String,
    #[sensitive]
    password: String,
    attempts: u8,
}

fn login() -> Login {
    Login {
        user: "alice".into(),
        password: "hunter2".into(),
        attempts: 3,
    }
}

#[test]
fn record_json_replaces_sensitive_fields() {
    assert_eq!(
        record_json(&login()).as_json(),
        &json!({ "user": "alice", "password": "[REDACTED]", "attempts": "3" })
    );
}

#[test]
fn derived_record_is_a_slog_value() {
    let json = captured_json(&login(), "login");

    assert_eq!(json["user"], "alice");
    assert_eq!(json["password"], "[REDACTED]");
    assert_eq!(json["attempts"], "3");
}

#[test]
fn renamed_sensitive_fields_are_redacted_under_the_new_key() {
    #[derive(Record)]
    struct Upstream {
        #[sensitive]
        #[record(rename = "auth_header")]
        header: String,
    }

    let json = captured_json(
        &Upstream {
            header: "Bearer abc".into(),
        },
        "upstream",
    );

    assert_eq!(json, json!({ "auth_header": "[REDACTED]" }));
}
