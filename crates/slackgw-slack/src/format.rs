//! Message composition — topic prefixing and plaintext fencing.

use slackgw_core::types::MessageFormat;

/// Compose the final message body.
///
/// A non-empty topic is prefixed as `"<topic> - <message>"`. Plaintext
/// messages are wrapped in a fenced code block with a trailing newline
/// before the closing fence; markdown passes through unchanged.
pub fn compose_message(format: MessageFormat, message: &str, topic: Option<&str>) -> String {
    let body = match topic {
        Some(t) if !t.is_empty() => format!("{t} - {message}"),
        _ => message.to_string(),
    };

    match format {
        MessageFormat::Plaintext => format!("```{body}\n```"),
        MessageFormat::Markdown => body,
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_no_topic_is_verbatim() {
        assert_eq!(
            compose_message(MessageFormat::Markdown, "deploy finished", None),
            "deploy finished"
        );
    }

    #[test]
    fn test_markdown_with_topic_prefixes() {
        assert_eq!(
            compose_message(MessageFormat::Markdown, "deploy finished", Some("ops")),
            "ops - deploy finished"
        );
    }

    #[test]
    fn test_empty_topic_treated_as_absent() {
        assert_eq!(
            compose_message(MessageFormat::Markdown, "deploy finished", Some("")),
            "deploy finished"
        );
    }

    #[test]
    fn test_plaintext_is_fenced() {
        assert_eq!(
            compose_message(MessageFormat::Plaintext, "abc", None),
            "```abc\n```"
        );
    }

    #[test]
    fn test_plaintext_with_topic() {
        assert_eq!(
            compose_message(MessageFormat::Plaintext, "abc", Some("t")),
            "```t - abc\n```"
        );
    }

    #[test]
    fn test_plaintext_empty_message() {
        assert_eq!(compose_message(MessageFormat::Plaintext, "", None), "```\n```");
    }

    #[test]
    fn test_multiline_message_preserved() {
        assert_eq!(
            compose_message(MessageFormat::Plaintext, "line1\nline2", None),
            "```line1\nline2\n```"
        );
    }
}
