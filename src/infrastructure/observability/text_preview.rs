const MAX_VISIBLE_CHARS: usize = 80;

/// Length-capped, redacted rendition of user text (transcripts, observation
/// content) suitable for log fields.
pub fn preview_text(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total_chars = trimmed.chars().count();
    let preview = if total_chars > MAX_VISIBLE_CHARS {
        let visible: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}... ({} chars total)", visible, total_chars)
    } else {
        trimmed.to_string()
    };

    redact_sensitive_patterns(&preview)
}

fn redact_sensitive_patterns(text: &str) -> String {
    let patterns = [
        ("Bearer ", "Bearer [REDACTED]"),
        ("api_key=", "api_key=[REDACTED]"),
        ("api-key:", "api-key:[REDACTED]"),
        ("password=", "password=[REDACTED]"),
        ("token=", "token=[REDACTED]"),
    ];

    let mut result = text.to_string();
    for (pattern, replacement) in patterns {
        if let Some(idx) = result.find(pattern) {
            let start = idx + pattern.len();
            let end = result[start..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map(|i| start + i)
                .unwrap_or(result.len());
            result = format!("{}{}{}", &result[..idx], replacement, &result[end..]);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_blank_text_when_previewing_then_marks_it_empty() {
        assert_eq!(preview_text("   \n"), "[EMPTY]");
    }

    #[test]
    fn given_long_transcript_when_previewing_then_caps_on_char_boundary() {
        let text = "é".repeat(200);
        let preview = preview_text(&text);
        assert!(preview.starts_with(&"é".repeat(MAX_VISIBLE_CHARS)));
        assert!(preview.ends_with("(200 chars total)"));
    }

    #[test]
    fn given_bearer_token_when_previewing_then_redacts_it() {
        let preview = preview_text("header was Bearer sk-abc123 ok");
        assert_eq!(preview, "header was Bearer [REDACTED] ok");
    }
}
