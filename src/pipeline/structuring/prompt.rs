pub const STRUCTURING_SYSTEM_PROMPT: &str = "You are an AI assistant for CV parsing. \
You convert raw CV text into structured data. Extract only information that is \
explicitly present in the text and respond with JSON only, no commentary.";

/// Build the structuring prompt for one document's raw text.
pub fn build_structuring_prompt(raw_text: &str) -> String {
    format!(
        "Extract structured information from this CV:\n{raw_text}\n\n\
         Format: JSON object with keys - name, email, phone, skills, education, experience."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_contains_document_text() {
        let prompt = build_structuring_prompt("John Doe, john@x.com");
        assert!(prompt.contains("John Doe, john@x.com"));
    }

    #[test]
    fn prompt_names_all_expected_keys() {
        let prompt = build_structuring_prompt("text");
        for key in ["name", "email", "phone", "skills", "education", "experience"] {
            assert!(prompt.contains(key), "prompt missing key: {key}");
        }
    }

    #[test]
    fn system_prompt_demands_json_only() {
        assert!(STRUCTURING_SYSTEM_PROMPT.contains("CV parsing"));
        assert!(STRUCTURING_SYSTEM_PROMPT.contains("JSON only"));
    }
}
