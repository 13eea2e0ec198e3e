use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::FlattenError;
use crate::flatten::{self, FlatMap};
use crate::kind::RuleKind;
use crate::rule::Rule;

/// The rules declared for one field, in declaration order.
///
/// Each [`RuleKind`] appears at most once; re-adding a kind replaces its
/// rule in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldRules {
    rules: IndexMap<RuleKind, Rule>,
}

impl FieldRules {
    /// Create an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rule for `kind`.
    pub fn insert(&mut self, kind: RuleKind, rule: Rule) -> &mut Self {
        self.rules.insert(kind, rule);
        self
    }

    /// Set the rule for `kind` (builder-style, consuming).
    #[must_use]
    pub fn rule(mut self, kind: RuleKind, rule: Rule) -> Self {
        self.rules.insert(kind, rule);
        self
    }

    #[must_use]
    pub fn get(&self, kind: RuleKind) -> Option<&Rule> {
        self.rules.get(&kind)
    }

    #[must_use]
    pub fn contains(&self, kind: RuleKind) -> bool {
        self.rules.contains_key(&kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over `(kind, rule)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (RuleKind, &Rule)> {
        self.rules.iter().map(|(kind, rule)| (*kind, rule))
    }
}

impl FromIterator<(RuleKind, Rule)> for FieldRules {
    fn from_iter<I: IntoIterator<Item = (RuleKind, Rule)>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

/// A validation-message schema: field name to [`FieldRules`], in
/// declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    fields: IndexMap<String, FieldRules>,
}

impl Schema {
    /// Create an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a schema from a JSON document, keeping document order.
    ///
    /// ```
    /// use nebula_message_keys::schema::Schema;
    ///
    /// let schema = Schema::from_json_str(
    ///     r#"{ "email": { "email": { "message": "email_invalid" } } }"#,
    /// ).unwrap();
    /// assert!(schema.contains("email"));
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, FlattenError> {
        serde_json::from_str(json).map_err(|e| FlattenError::Deserialization {
            error: e.to_string(),
        })
    }

    /// Build a schema from an already-parsed JSON value.
    ///
    /// Object order survives because `serde_json` is built with
    /// `preserve_order`, which backs `Value` objects with an ordered map.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, FlattenError> {
        serde_json::from_value(value).map_err(|e| FlattenError::Deserialization {
            error: e.to_string(),
        })
    }

    /// Set the rules for `name`.
    pub fn insert(&mut self, name: impl Into<String>, rules: FieldRules) -> &mut Self {
        self.fields.insert(name.into(), rules);
        self
    }

    /// Set the rules for `name` (builder-style, consuming).
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, rules: FieldRules) -> Self {
        self.fields.insert(name.into(), rules);
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldRules> {
        self.fields.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Iterate over `(name, rules)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldRules)> {
        self.fields.iter().map(|(name, rules)| (name.as_str(), rules))
    }

    /// Flatten every field. See [`flatten::flatten_schema`].
    #[must_use]
    pub fn flatten(&self, prefix: Option<&str>) -> FlatMap {
        flatten::flatten_schema(self, prefix)
    }

    /// Flatten a single field. See [`flatten::flatten_field`].
    #[must_use]
    pub fn flatten_field(&self, field: &str, allow_field_prefix: bool) -> Option<FlatMap> {
        flatten::flatten_field(self, field, allow_field_prefix)
    }
}

impl<S: Into<String>> FromIterator<(S, FieldRules)> for Schema {
    fn from_iter<I: IntoIterator<Item = (S, FieldRules)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, rules)| (name.into(), rules))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login_schema() -> Schema {
        Schema::new()
            .field(
                "username",
                FieldRules::new()
                    .rule(RuleKind::Min, Rule::min(8))
                    .rule(RuleKind::Max, Rule::max(50)),
            )
            .field(
                "email",
                FieldRules::new().rule(RuleKind::Email, Rule::new("email_invalid")),
            )
    }

    #[test]
    fn builder_keeps_declaration_order() {
        let schema = login_schema();
        let names: Vec<_> = schema.field_names().collect();
        assert_eq!(names, ["username", "email"]);

        let kinds: Vec<_> = schema
            .get("username")
            .unwrap()
            .iter()
            .map(|(kind, _)| kind)
            .collect();
        assert_eq!(kinds, [RuleKind::Min, RuleKind::Max]);
    }

    #[test]
    fn reinserting_a_kind_replaces_in_place() {
        let mut rules = FieldRules::new()
            .rule(RuleKind::Min, Rule::min(1))
            .rule(RuleKind::Max, Rule::max(2));
        rules.insert(RuleKind::Min, Rule::min(3));

        assert_eq!(rules.len(), 2);
        let first = rules.iter().next().unwrap();
        assert_eq!(first.0, RuleKind::Min);
        assert_eq!(first.1, &Rule::min(3));
    }

    #[test]
    fn lookup_and_contains() {
        let schema = login_schema();
        assert!(schema.contains("email"));
        assert!(!schema.contains("password"));
        assert!(schema.get("password").is_none());
        assert_eq!(schema.len(), 2);
        assert!(!schema.is_empty());
        assert!(Schema::new().is_empty());
        assert!(schema.get("email").unwrap().contains(RuleKind::Email));
        assert!(!schema.get("email").unwrap().contains(RuleKind::Url));
    }

    #[test]
    fn collect_from_pairs() {
        let schema: Schema = [("a", FieldRules::new()), ("b", FieldRules::new())]
            .into_iter()
            .collect();
        assert_eq!(schema.field_names().collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn from_json_keeps_document_order() {
        let schema = Schema::from_json_str(
            r#"{
                "zeta": { "max": { "message": "required_max", "value": 5 } },
                "alpha": {
                    "regex": { "message": "regex_invalid", "value": "^a" },
                    "min": { "message": "required_min", "value": 1 }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(schema.field_names().collect::<Vec<_>>(), ["zeta", "alpha"]);
        let kinds: Vec<_> = schema
            .get("alpha")
            .unwrap()
            .iter()
            .map(|(kind, _)| kind)
            .collect();
        assert_eq!(kinds, [RuleKind::Regex, RuleKind::Min]);
    }

    #[test]
    fn from_json_value_keeps_document_order() {
        let schema = Schema::from_json_value(serde_json::json!({
            "zeta": { "max": { "message": "required_max", "value": 5 } },
            "alpha": {
                "regex": { "message": "regex_invalid", "value": "^a" },
                "min": { "message": "required_min", "value": 1 }
            }
        }))
        .unwrap();

        assert_eq!(schema.field_names().collect::<Vec<_>>(), ["zeta", "alpha"]);
        let kinds: Vec<_> = schema
            .get("alpha")
            .unwrap()
            .iter()
            .map(|(kind, _)| kind)
            .collect();
        assert_eq!(kinds, [RuleKind::Regex, RuleKind::Min]);
    }

    #[test]
    fn from_json_rejects_unknown_rule_kind() {
        let err = Schema::from_json_str(r#"{ "phone": { "phone": { "message": "phone_invalid" } } }"#)
            .unwrap_err();
        assert_eq!(err.code(), "MSGKEY_DESER");
    }

    #[test]
    fn from_json_rejects_missing_message() {
        let err = Schema::from_json_value(serde_json::json!({ "a": { "min": { "value": 1 } } }))
            .unwrap_err();
        assert!(matches!(err, FlattenError::Deserialization { .. }));
    }
}
