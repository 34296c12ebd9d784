//! Adapters for emitting redacted views through `slog`.
//!
//! This module connects the redacting read path with `slog` by providing
//! `slog::Value` implementations that serialize *redacted* entries as
//! structured JSON via `slog`'s nested-value support.
//!
//! It is responsible for:
//! - Ensuring the logged representation is built from redacted reads, never
//!   from the exposed values.
//! - Avoiding fallible logging APIs: values that fail to serialize are
//!   represented as placeholder strings rather than propagated as errors.
//!
//! It does not configure `slog` or decide which keys are sensitive.

use std::{borrow::Cow, fmt::Display, hash::Hash};

use serde::Serialize;
use serde_json::{Map, Value as JsonValue};
use slog::{Key, Record as SlogRecord, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{
    record::Record,
    view::{DualView, ReadOnlyMap, RedactingView, REDACTED_PLACEHOLDER},
};

/// Logged in place of a value that could not be converted to JSON.
pub const SERIALIZE_FAILURE: &str = "Failed to serialize redacted value";

/// A `slog::Value` that emits redacted entries as a JSON object.
///
/// The payload is computed once, when the value is created, and emitted via
/// `slog`'s nested-value support.
#[derive(Clone, Debug)]
pub struct RedactedJson {
    value: JsonValue,
}

impl RedactedJson {
    fn new(value: JsonValue) -> Self {
        Self { value }
    }

    /// The JSON payload that will be logged.
    pub fn as_json(&self) -> &JsonValue {
        &self.value
    }
}

impl SlogValue for RedactedJson {
    fn serialize(
        &self,
        record: &SlogRecord<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Converts a view into a `slog::Value` holding its redacted entries.
///
/// Keys are rendered through `Display`; values through `Serialize`. Only the
/// redacted read path is consulted.
///
/// ## Example
/// ```ignore
/// use dualview::slog::IntoRedactedJson;
///
/// info!(logger, "loaded config"; "config" => config.into_redacted_json());
/// ```
pub trait IntoRedactedJson {
    /// Reads every entry through the redacting path and captures the result.
    fn into_redacted_json(self) -> RedactedJson;
}

impl<K, V, M> IntoRedactedJson for &RedactingView<'_, K, V, M>
where
    K: Eq + Hash + Display,
    V: Clone + Serialize,
    M: ReadOnlyMap<K, V> + ?Sized,
{
    fn into_redacted_json(self) -> RedactedJson {
        RedactedJson::new(entries_to_json(self.iter()))
    }
}

impl<K, V> IntoRedactedJson for &DualView<K, V>
where
    K: Eq + Hash + Clone + Display,
    V: Clone + Serialize,
{
    fn into_redacted_json(self) -> RedactedJson {
        self.redacting_view().into_redacted_json()
    }
}

/// Logs the view's redacted entries, so a view can be passed directly as a
/// key/value pair.
impl<K, V, M> SlogValue for RedactingView<'_, K, V, M>
where
    K: Eq + Hash + Display,
    V: Clone + Serialize,
    M: ReadOnlyMap<K, V> + ?Sized,
{
    fn serialize(
        &self,
        record: &SlogRecord<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        SlogValue::serialize(&self.into_redacted_json(), record, key, serializer)
    }
}

/// Captures a [`Record`] with its sensitive fields replaced by
/// [`REDACTED_PLACEHOLDER`].
///
/// `#[derive(Record)]` calls this from its generated `slog::Value` impl.
pub fn record_json<R: Record>(record: &R) -> RedactedJson {
    let object: Map<String, JsonValue> = record
        .entries()
        .into_iter()
        .map(|(name, value)| {
            let value = if R::SENSITIVE_FIELDS.contains(&name) {
                REDACTED_PLACEHOLDER.to_string()
            } else {
                value
            };
            (name.to_string(), JsonValue::String(value))
        })
        .collect();
    RedactedJson::new(JsonValue::Object(object))
}

fn entries_to_json<'e, K, V, I>(entries: I) -> JsonValue
where
    K: Display + 'e,
    V: Clone + Serialize + 'e,
    I: Iterator<Item = (&'e K, Cow<'e, V>)>,
{
    let object: Map<String, JsonValue> = entries
        .map(|(key, value)| {
            let json = serde_json::to_value(&*value)
                .unwrap_or_else(|_| JsonValue::String(SERIALIZE_FAILURE.to_string()));
            (key.to_string(), json)
        })
        .collect();
    JsonValue::Object(object)
}
