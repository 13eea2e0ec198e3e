//! # nebula-message-keys
//!
//! Flattens a declarative validation-message schema into a flat, ordered
//! lookup table keyed by `<field>__<message>`.
//!
//! ## Quick Start
//!
//! ```
//! use nebula_message_keys::prelude::*;
//! use serde_json::json;
//!
//! let schema = Schema::new().field(
//!     "username",
//!     FieldRules::new().rule(RuleKind::Min, Rule::new("required_min").with_value(8)),
//! );
//!
//! let flat = schema.flatten(None);
//! assert_eq!(flat.get("username__required_min").unwrap().value, Some(json!(8)));
//! ```
//!
//! This crate only organizes rule metadata; rule values are never
//! interpreted and nothing is validated.

pub mod error;
pub mod flatten;
pub mod key;
pub mod kind;
pub mod message;
pub mod rule;
pub mod schema;

pub mod prelude {
    pub use crate::error::FlattenError;
    pub use crate::flatten::{FlatEntry, FlatMap, flatten_field, flatten_schema};
    pub use crate::key::{derive_key, is_duplicate_warning_key};
    pub use crate::kind::RuleKind;
    pub use crate::message::{BaseMessage, DEFAULT_REQUIRED, MessageKey, is_default_required};
    pub use crate::rule::Rule;
    pub use crate::schema::{FieldRules, Schema};
}
