use thiserror::Error;

/// Errors produced while turning JSON documents into [`crate::record::Row`]s.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("invalid JSON: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },

    #[error("expected a JSON array of records, found {kind}")]
    NotAnArray { kind: &'static str },

    #[error("expected a JSON object, found {kind}")]
    NotAnObject { kind: &'static str },

    #[error("field {field:?} holds an unsupported {kind} value (only strings, numbers and bools)")]
    UnsupportedValue { field: String, kind: &'static str },
}
