//! Schema flattening.
//!
//! Two flatteners share the same output shape but not the same keying
//! rules:
//!
//! | | [`flatten_schema`] | [`flatten_field`] |
//! |---|---|---|
//! | scope | every field | one field |
//! | key | [`derive_key`], lowercased | `<field>__<message>` or `<message>`, as written |
//! | `default_required` | un-namespaced, never flagged as duplicate | no special case |
//! | collision key | `warning_<key>_is_duplicated` | `WARNING_<field>__<message>_is_duplicated` |
//!
//! Both keep the first occurrence of a key under its plain name and move
//! later ones to the warning key, so collisions stay visible in the output.
//! A collision on the warning key itself overwrites it.

use indexmap::{IndexMap, IndexSet};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::FlattenError;
use crate::key::{FIELD_SEPARATOR, derive_key, duplicate_warning_key};
use crate::kind::RuleKind;
use crate::message::is_default_required;
use crate::schema::Schema;

// ============================================================================
// FLAT ENTRY
// ============================================================================

/// A flattened rule: the rule's value re-wrapped under its kind.
///
/// Serializes as the singleton object `{ "<kind>": <value> }`, with `null`
/// for an absent value.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatEntry {
    pub kind: RuleKind,
    pub value: Option<Value>,
}

impl FlatEntry {
    #[must_use]
    pub fn new(kind: RuleKind, value: Option<Value>) -> Self {
        Self { kind, value }
    }
}

impl Serialize for FlatEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.kind.as_str(), &self.value)?;
        map.end()
    }
}

// ============================================================================
// FLAT MAP
// ============================================================================

/// The flattened lookup table, in insertion order.
///
/// Keys produced by a collision are recorded as they are inserted, so
/// [`FlatMap::duplicates`] never mistakes an ordinary key that happens to
/// look like a warning key for a collision.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatMap {
    entries: IndexMap<String, FlatEntry>,
    warnings: IndexSet<String>,
}

/// Borrowing iterator over a [`FlatMap`].
pub type Iter<'a> = std::iter::Map<
    indexmap::map::Iter<'a, String, FlatEntry>,
    fn((&'a String, &'a FlatEntry)) -> (&'a str, &'a FlatEntry),
>;

fn borrow_entry<'a>((key, entry): (&'a String, &'a FlatEntry)) -> (&'a str, &'a FlatEntry) {
    (key.as_str(), entry)
}

impl FlatMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. An overwritten key keeps its original position.
    fn insert(&mut self, key: String, entry: FlatEntry) {
        self.warnings.shift_remove(&key);
        self.entries.insert(key, entry);
    }

    /// Insert an entry displaced by a collision.
    fn insert_warning(&mut self, key: String, entry: FlatEntry) {
        self.warnings.insert(key.clone());
        self.entries.insert(key, entry);
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FlatEntry> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over `(key, entry)` pairs in insertion order.
    pub fn iter<'a>(&'a self) -> Iter<'a> {
        let borrow: fn((&'a String, &'a FlatEntry)) -> (&'a str, &'a FlatEntry) = borrow_entry;
        self.entries.iter().map(borrow)
    }

    /// Whether `key` was produced by a collision during flattening.
    #[must_use]
    pub fn is_duplicate(&self, key: &str) -> bool {
        self.warnings.contains(key)
    }

    /// Entries that were moved to a duplicate-warning key, in insertion
    /// order.
    pub fn duplicates(&self) -> impl Iterator<Item = (&str, &FlatEntry)> {
        self.iter().filter(|(key, _)| self.is_duplicate(key))
    }

    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Render as a pretty-printed JSON object, e.g. for a message resource
    /// file.
    pub fn to_json_string_pretty(&self) -> Result<String, FlattenError> {
        serde_json::to_string_pretty(self).map_err(|e| FlattenError::Serialization {
            error: e.to_string(),
        })
    }

    #[must_use]
    pub fn into_inner(self) -> IndexMap<String, FlatEntry> {
        self.entries
    }
}

impl Serialize for FlatMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

impl<'a> IntoIterator for &'a FlatMap {
    type Item = (&'a str, &'a FlatEntry);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// FLATTENERS
// ============================================================================

/// Flatten a single field of `schema`.
///
/// Returns `None` when `field` is not in the schema. Keys are
/// `<field>__<message>` when `allow_field_prefix` is set and the bare
/// message otherwise; they are not lowercased and `default_required` gets
/// no special treatment. A repeated key is stored under
/// `WARNING_<field>__<message>_is_duplicated` regardless of
/// `allow_field_prefix`.
///
/// ```
/// use nebula_message_keys::prelude::*;
///
/// let schema = Schema::new().field(
///     "email",
///     FieldRules::new().rule(RuleKind::Min, Rule::min(5)),
/// );
///
/// let flat = flatten_field(&schema, "email", false).unwrap();
/// assert!(flat.contains_key("required_min"));
/// assert!(flatten_field(&schema, "missing", true).is_none());
/// ```
#[must_use]
pub fn flatten_field(schema: &Schema, field: &str, allow_field_prefix: bool) -> Option<FlatMap> {
    let rules = schema.get(field)?;
    let mut flat = FlatMap::new();

    for (kind, rule) in rules.iter() {
        let message = rule.message.as_str();
        let namespaced = format!("{field}{FIELD_SEPARATOR}{message}");
        let key = if allow_field_prefix {
            namespaced.clone()
        } else {
            message.to_owned()
        };

        let entry = FlatEntry::new(kind, rule.value.clone());
        if flat.contains_key(&key) {
            let warning = duplicate_warning_key(&namespaced);
            tracing::warn!(field, message, key = %warning, "duplicate flat key");
            flat.insert_warning(warning, entry);
        } else {
            flat.insert(key, entry);
        }
    }

    tracing::debug!(field, allow_field_prefix, entries = flat.len(), "flattened field");
    Some(flat)
}

/// Flatten every field of `schema` into one lowercase-keyed map.
///
/// Keys come from [`derive_key`] with the schema-wide `prefix`. A repeated
/// key is stored under `warning_<key>_is_duplicated`, except for
/// `default_required`, which is never checked and silently overwrites an
/// earlier `default_required` entry in place.
///
/// ```
/// use nebula_message_keys::prelude::*;
///
/// let schema = Schema::new()
///     .field("username", FieldRules::new().rule(RuleKind::Min, Rule::min(8)))
///     .field("email", FieldRules::new().rule(RuleKind::Required, Rule::default_required()));
///
/// let flat = flatten_schema(&schema, None);
/// let keys: Vec<_> = flat.keys().collect();
/// assert_eq!(keys, ["username__required_min", "default_required"]);
/// ```
#[must_use]
pub fn flatten_schema(schema: &Schema, prefix: Option<&str>) -> FlatMap {
    let mut flat = FlatMap::new();

    for (field, rules) in schema.iter() {
        for (kind, rule) in rules.iter() {
            let message = rule.message.as_str();
            let key = derive_key(field, message, prefix);

            let entry = FlatEntry::new(kind, rule.value.clone());

            if is_default_required(message) {
                if flat.contains_key(&key) {
                    tracing::trace!(field, key = %key, "overwriting default_required entry");
                }
                flat.insert(key, entry);
            } else if flat.contains_key(&key) {
                let warning = duplicate_warning_key(&key).to_lowercase();
                tracing::warn!(field, message, key = %warning, "duplicate flat key");
                flat.insert_warning(warning, entry);
            } else {
                flat.insert(key, entry);
            }
        }
    }

    tracing::debug!(
        fields = schema.len(),
        entries = flat.len(),
        ?prefix,
        "flattened schema"
    );
    flat
}
