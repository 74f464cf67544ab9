// Reports: renders the consultant's daily-report email and the client reminder emails.
// Rendering only — delivery goes through the external SMTP relay.

pub mod handlers;
pub mod reminder_email;
pub mod report_email;

use serde::Serialize;

/// A rendered email, ready for the mail relay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailMessage {
    pub subject: String,
    pub html: String,
}

/// Escapes text for interpolation into HTML element content or attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
    }
}
