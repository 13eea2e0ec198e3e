//! Flat key derivation.

use crate::message::is_default_required;

/// Separator between a field name and its message key.
pub const FIELD_SEPARATOR: &str = "__";

/// Derive the flat lookup key for one rule.
///
/// - `default_required` ignores the field: the base key is the message.
/// - Anything else becomes `<field>__<message>`.
/// - A non-empty `prefix` is prepended as `<prefix>_`.
///
/// The result is always lowercase.
///
/// ```
/// use nebula_message_keys::key::derive_key;
///
/// assert_eq!(derive_key("Username", "required_min", None), "username__required_min");
/// assert_eq!(derive_key("email", "default_required", Some("login")), "login_default_required");
/// ```
#[must_use]
pub fn derive_key(field: &str, message: &str, prefix: Option<&str>) -> String {
    let base = if is_default_required(message) {
        message.to_owned()
    } else {
        format!("{field}{FIELD_SEPARATOR}{message}")
    };
    let key = match prefix {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}_{base}"),
        _ => base,
    };
    key.to_lowercase()
}

/// Key substituted for a colliding entry: `WARNING_<key>_is_duplicated`.
///
/// Casing is left to the caller.
pub(crate) fn duplicate_warning_key(key: &str) -> String {
    format!("WARNING_{key}_is_duplicated")
}

/// Whether `key` has the shape of a duplicate-warning key, in either
/// casing the flatteners produce.
///
/// This is a textual check: an ordinary key such as
/// `warning_f__size_is_duplicated` matches too. Use
/// [`FlatMap::is_duplicate`](crate::flatten::FlatMap::is_duplicate) to ask
/// whether a key actually came from a collision.
#[must_use]
pub fn is_duplicate_warning_key(key: &str) -> bool {
    (key.starts_with("WARNING_") || key.starts_with("warning_")) && key.ends_with("_is_duplicated")
}
