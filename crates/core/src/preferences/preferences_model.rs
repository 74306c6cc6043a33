use serde::{Deserialize, Serialize};

/// Preference value union: boolean-typed tags carry a flag, categorical
/// tags carry a string. Untagged to match the `boolean|string` wire shape.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(untagged)]
pub enum TagValue {
    Bool(bool),
    Text(String),
}

/// A user preference for a single tag.
///
/// Uniqueness invariant: at most one preference entry per tag identifier.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TagPreference {
    pub tag_id: String,
    pub value: TagValue,
}

/// Wire response of the external preference API.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TagPreferenceResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<TagPreference>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_union_round_trips_both_shapes() {
        let boolean: TagPreference =
            serde_json::from_str(r#"{"tagId":"hide-archived","value":true}"#).unwrap();
        assert_eq!(boolean.value, TagValue::Bool(true));

        let text: TagPreference =
            serde_json::from_str(r#"{"tagId":"default-view","value":"calendar"}"#).unwrap();
        assert_eq!(text.value, TagValue::Text("calendar".to_string()));

        let json = serde_json::to_string(&boolean).unwrap();
        assert_eq!(json, r#"{"tagId":"hide-archived","value":true}"#);
    }

    #[test]
    fn test_response_optional_fields_default() {
        let response: TagPreferenceResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert!(!response.success);
        assert!(response.data.is_none());
        assert!(response.error.is_none());
    }
}
