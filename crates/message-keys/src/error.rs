/// Error type for schema loading and rule-kind parsing.
///
/// Flattening itself never fails: a missing field is reported as `None`
/// and key collisions are rewritten to warning keys.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlattenError {
    /// A rule-kind name outside the fixed vocabulary.
    #[error("unknown rule kind `{name}`")]
    UnknownRuleKind { name: String },

    /// Failed to deserialize a schema document.
    #[error("schema deserialization failed: {error}")]
    Deserialization { error: String },

    /// Failed to serialize a flattened map.
    #[error("serialization failed: {error}")]
    Serialization { error: String },
}

impl FlattenError {
    /// Broad error category for grouping in logs and metrics.
    #[must_use]
    pub fn category(&self) -> &str {
        match self {
            Self::UnknownRuleKind { .. } => "format",
            Self::Deserialization { .. } => "serialization",
            Self::Serialization { .. } => "serialization",
        }
    }

    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::UnknownRuleKind { .. } => "MSGKEY_UNKNOWN_RULE_KIND",
            Self::Deserialization { .. } => "MSGKEY_DESER",
            Self::Serialization { .. } => "MSGKEY_SER",
        }
    }

    /// Whether the operation might succeed if retried with the same input.
    ///
    /// Always `false`: every error here is a pure function of its input.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }
}
