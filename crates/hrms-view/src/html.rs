//! Markup helpers for view-models

/// A view-model that knows how to turn itself into HTML.
///
/// Implementations escape every piece of user or server supplied text;
/// only fixed markup is written raw.
pub trait Render {
    fn render_html(&self) -> String;
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markup() {
        assert_eq!(
            escape_html("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("Nguyễn & \"Lê\""), "Nguyễn &amp; &quot;Lê&quot;");
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(escape_html("Phòng Tổ chức"), "Phòng Tổ chức");
        assert_eq!(escape_html(""), "");
    }
}
