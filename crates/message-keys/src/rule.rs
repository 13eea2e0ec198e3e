use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::message::{BaseMessage, MessageKey};

/// A single validation directive: which message applies, plus an optional
/// payload.
///
/// The payload is opaque. Numbers, strings, regex sources and dates are all
/// carried as JSON values and passed through flattening untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub message: MessageKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl Rule {
    /// A rule with no payload.
    pub fn new(message: impl Into<MessageKey>) -> Self {
        Self {
            message: message.into(),
            value: None,
        }
    }

    /// Attach a payload.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// A payload-less rule reporting the field-independent `default_required`
    /// message.
    #[must_use]
    pub fn default_required() -> Self {
        Self::new(BaseMessage::DefaultRequired)
    }

    /// A minimum-length rule using the stock `required_min` message.
    #[must_use]
    pub fn min(min: impl Into<Value>) -> Self {
        Self::new(BaseMessage::RequiredMin).with_value(min)
    }

    /// A maximum-length rule using the stock `required_max` message.
    #[must_use]
    pub fn max(max: impl Into<Value>) -> Self {
        Self::new(BaseMessage::RequiredMax).with_value(max)
    }

    /// A pattern rule using the stock `regex_invalid` message.
    ///
    /// Only the pattern source is stored; it is never compiled.
    #[must_use]
    pub fn regex(pattern: impl Into<String>) -> Self {
        Self::new(BaseMessage::RegexInvalid).with_value(Value::String(pattern.into()))
    }
}
