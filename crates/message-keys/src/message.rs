//! Message keys and the stock message vocabulary.
//!
//! A message key names the user-facing error a rule maps to. The
//! vocabulary is open: schema authors may use any string, and
//! [`BaseMessage`] lists the keys shipped by default.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The message key that is never namespaced under its field.
pub const DEFAULT_REQUIRED: &str = "default_required";

/// Returns `true` when `message` is exactly [`DEFAULT_REQUIRED`].
#[must_use]
pub fn is_default_required(message: &str) -> bool {
    message == DEFAULT_REQUIRED
}

/// Identifier of the user-facing message a rule maps to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageKey(String);

impl MessageKey {
    /// Wrap any string as a message key. No vocabulary check is made.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Whether this is the field-independent `default_required` key.
    #[must_use]
    pub fn is_default_required(&self) -> bool {
        is_default_required(&self.0)
    }

    /// The stock message this key names, if any.
    #[must_use]
    pub fn base(&self) -> Option<BaseMessage> {
        BaseMessage::parse(&self.0)
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MessageKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MessageKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for MessageKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<BaseMessage> for MessageKey {
    fn from(message: BaseMessage) -> Self {
        Self::new(message.as_str())
    }
}

/// The stock message vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseMessage {
    /// Target is required; keyed as `default_required` for every field.
    DefaultRequired,
    /// Target is required; keyed under its own field.
    Required,
    RequiredMin,
    RequiredMax,
    LengthInvalid,
    DomainInvalid,
    PhoneInvalid,
    DateInvalid,
    UrlInvalid,
    RegexInvalid,
    EmailInvalid,
    NonNullable,
    NonUndefined,
}

impl BaseMessage {
    pub const ALL: [BaseMessage; 13] = [
        Self::DefaultRequired,
        Self::Required,
        Self::RequiredMin,
        Self::RequiredMax,
        Self::LengthInvalid,
        Self::DomainInvalid,
        Self::PhoneInvalid,
        Self::DateInvalid,
        Self::UrlInvalid,
        Self::RegexInvalid,
        Self::EmailInvalid,
        Self::NonNullable,
        Self::NonUndefined,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DefaultRequired => DEFAULT_REQUIRED,
            Self::Required => "required",
            Self::RequiredMin => "required_min",
            Self::RequiredMax => "required_max",
            Self::LengthInvalid => "length_invalid",
            Self::DomainInvalid => "domain_invalid",
            Self::PhoneInvalid => "phone_invalid",
            Self::DateInvalid => "date_invalid",
            Self::UrlInvalid => "url_invalid",
            Self::RegexInvalid => "regex_invalid",
            Self::EmailInvalid => "email_invalid",
            Self::NonNullable => "non_nullable",
            Self::NonUndefined => "non_undefined",
        }
    }

    /// Looks up a stock message by its exact key.
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == key)
    }
}

impl fmt::Display for BaseMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
