//! Flattening structs into container entries.
//!
//! A [`Record`] is a struct viewed as a list of `(field name, rendered value)`
//! pairs plus the static list of fields that are sensitive. It is usually
//! derived with `#[derive(Record)]`.

use crate::view::{DualView, Replacement};

/// A struct that can seed a [`DualView`].
///
/// ```rust
/// use dualview::{DualView, Record, Replacement};
///
/// #[derive(Record)]
/// struct Database {
///     host: String,
///     port: u16,
///     #[sensitive]
///     password: String,
/// }
///
/// let db = Database { host: "db.internal".into(), port: 5432, password: "hunter2".into() };
/// let view = DualView::from_record(&db, Replacement::placeholder());
///
/// assert_eq!(view.exposed()["port"], "5432");
/// assert_eq!(*view.redacting_view().get(&"password").unwrap(), "[REDACTED]");
/// ```
pub trait Record {
    /// Names of the fields whose values must be redacted.
    const SENSITIVE_FIELDS: &'static [&'static str];

    /// Field names paired with their `Display` rendering, in declaration order.
    fn entries(&self) -> Vec<(&'static str, String)>;
}

impl DualView<&'static str, String> {
    /// Builds a container holding `record`'s entries, with its sensitive
    /// fields as the sensitive keys.
    pub fn from_record<R: Record>(record: &R, replacement: Replacement<&'static str, String>) -> Self {
        let mut view = Self::new(replacement, R::SENSITIVE_FIELDS.iter().copied());
        view.extend(record.entries());
        view
    }

    /// Writes `record`'s entries and marks its sensitive fields.
    ///
    /// Existing sensitive keys are kept; entries with the same name are
    /// overwritten.
    pub fn extend_record<R: Record>(&mut self, record: &R) {
        self.sensitive_keys_mut()
            .extend(R::SENSITIVE_FIELDS.iter().copied());
        self.extend(record.entries());
    }
}

#[cfg(test)]
mod tests {
    use super::Record;
    use crate::{DualView, Replacement};

    struct Manual {
        name: &'static str,
        secret: &'static str,
    }

    impl Record for Manual {
        const SENSITIVE_FIELDS: &'static [&'static str] = &["secret"];

        fn entries(&self) -> Vec<(&'static str, String)> {
            vec![
                ("name", self.name.to_string()),
                ("secret", self.secret.to_string()),
            ]
        }
    }

    #[test]
    fn from_record_marks_sensitive_fields() {
        let record = Manual {
            name: "svc",
            secret: "s3cr3t",
        };
        let view = DualView::from_record(&record, Replacement::tagged());
        assert!(view.sensitive_keys().contains(&"secret"));
        assert_eq!(view.exposed()["secret"], "s3cr3t");
        assert_eq!(
            *view.redacting_view().get(&"secret").unwrap(),
            "[REDACTED:secret]"
        );
    }

    #[test]
    fn extend_record_keeps_existing_sensitive_keys() {
        let mut view = DualView::new(Replacement::placeholder(), ["region"]);
        view.set("region", "eu-west-1".to_string());
        view.extend_record(&Manual {
            name: "svc",
            secret: "s3cr3t",
        });
        assert_eq!(view.len(), 3);
        assert_eq!(view.sensitive_keys().len(), 2);
    }

    #[derive(crate::Record)]
    struct Derived {
        #[record(rename = "service")]
        name: String,
        #[sensitive]
        api_key: String,
        #[record(skip)]
        #[allow(dead_code)]
        cache: Vec<u8>,
    }

    #[test]
    fn derived_record_entries() {
        let record = Derived {
            name: "billing".to_string(),
            api_key: "sk_live_123".to_string(),
            cache: Vec::new(),
        };
        assert_eq!(Derived::SENSITIVE_FIELDS, &["api_key"]);
        assert_eq!(
            record.entries(),
            vec![
                ("service", "billing".to_string()),
                ("api_key", "sk_live_123".to_string()),
            ]
        );
        assert_eq!(
            format!("{record:?}"),
            r#"Derived { name: "billing", api_key: "[REDACTED]", .. }"#
        );
    }
}
