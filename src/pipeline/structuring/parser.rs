use super::StructuringError;

/// Parse the model's reply into a structured record.
///
/// The reply is trimmed and, if the model wrapped it in a Markdown code
/// fence, the fence is stripped before parsing. Any valid JSON value is
/// accepted as-is — the record shape is deliberately not validated, so
/// downstream consumers must tolerate missing or extra keys.
pub fn parse_record(response: &str) -> Result<serde_json::Value, StructuringError> {
    let trimmed = response.trim();
    if trimmed.is_empty() {
        return Err(StructuringError::EmptyResponse);
    }

    let body = strip_code_fence(trimmed);
    serde_json::from_str(body).map_err(|e| StructuringError::InvalidJson(e.to_string()))
}

/// Strip one outer ```json ... ``` (or bare ```) fence, if present.
fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    match rest.rfind("```") {
        Some(end) => rest[..end].trim(),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_json_object() {
        let record = parse_record(r#"{"name": "John Doe", "email": "john@x.com"}"#).unwrap();
        assert_eq!(record["name"], "John Doe");
        assert_eq!(record["email"], "john@x.com");
    }

    #[test]
    fn parse_fenced_json_object() {
        let response = "```json\n{\"name\": \"Jane\"}\n```";
        let record = parse_record(response).unwrap();
        assert_eq!(record["name"], "Jane");
    }

    #[test]
    fn parse_bare_fenced_json() {
        let response = "```\n{\"phone\": \"555-0100\"}\n```";
        let record = parse_record(response).unwrap();
        assert_eq!(record["phone"], "555-0100");
    }

    #[test]
    fn empty_response_is_rejected() {
        assert!(matches!(parse_record("   \n "), Err(StructuringError::EmptyResponse)));
    }

    #[test]
    fn invalid_json_mentions_invalid_json() {
        let err = parse_record("this is not json").unwrap_err();
        assert!(matches!(err, StructuringError::InvalidJson(_)));
        assert!(err.to_string().contains("not valid JSON"));
    }

    #[test]
    fn fenced_invalid_json_is_still_rejected() {
        let err = parse_record("```json\n{broken\n```").unwrap_err();
        assert!(matches!(err, StructuringError::InvalidJson(_)));
    }

    #[test]
    fn unclosed_fence_parses_as_is() {
        let err = parse_record("```json {\"a\": 1}").unwrap_err();
        assert!(matches!(err, StructuringError::InvalidJson(_)));
    }

    #[test]
    fn missing_keys_are_not_validated() {
        // An object without the six expected keys is still accepted.
        let record = parse_record(r#"{"unexpected": true}"#).unwrap();
        assert_eq!(record["unexpected"], true);
    }

    #[test]
    fn non_object_json_is_accepted() {
        let record = parse_record(r#"["a", "b"]"#).unwrap();
        assert!(record.is_array());
    }
}
