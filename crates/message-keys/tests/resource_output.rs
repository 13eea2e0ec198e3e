//! The JSON emitted for message-resource files.

use nebula_message_keys::prelude::*;
use serde_json::json;

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
            FieldRules::new()
                .rule(RuleKind::Required, Rule::default_required())
                .rule(RuleKind::Email, Rule::new(BaseMessage::EmailInvalid)),
        )
}

#[test]
fn flattened_schema_json_snapshot() {
    let flat = flatten_schema(&login_schema(), Some("login"));
    insta::assert_json_snapshot!(flat, @r#"
    {
      "login_username__required_min": {
        "min": 8
      },
      "login_username__required_max": {
        "max": 50
      },
      "login_default_required": {
        "required": null
      },
      "login_email__email_invalid": {
        "email": null
      }
    }
    "#);
}

#[test]
fn pretty_string_preserves_insertion_order() {
    let text = flatten_schema(&login_schema(), None)
        .to_json_string_pretty()
        .unwrap();

    let min = text.find("username__required_min").unwrap();
    let max = text.find("username__required_max").unwrap();
    let default = text.find("\"default_required\"").unwrap();
    assert!(min < max && max < default);
}

#[test]
fn serialized_value_shape() {
    let flat = flatten_field(&login_schema(), "username", false).unwrap();
    assert_eq!(
        serde_json::to_value(&flat).unwrap(),
        json!({
            "required_min": { "min": 8 },
            "required_max": { "max": 50 }
        })
    );
}

#[test]
fn schema_round_trips_through_json() {
    let schema = login_schema();
    let text = serde_json::to_string(&schema).unwrap();
    let back = Schema::from_json_str(&text).unwrap();
    assert_eq!(back, schema);
    assert_eq!(back.field_names().collect::<Vec<_>>(), ["username", "email"]);
}
