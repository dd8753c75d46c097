//! Minimal HTML writer used by the enhanced view and the visual panel.
//!
//! Text and attribute values are always escaped; only [`Markup::raw`]
//! inserts content verbatim, for already rendered fragments such as SVG.

use std::borrow::Cow;

/// Escapes `text` for use in HTML text and double-quoted attribute values.
///
/// # Examples
///
/// ```
/// # use seewrite::markup::escape;
/// assert_eq!(escape("plain"), "plain");
/// assert_eq!(escape("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
/// ```
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

/// An HTML string under construction.
#[derive(Debug, Default)]
pub struct Markup {
    buffer: String,
}

impl Markup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens `tag` with `attributes` in the given order.
    pub fn open(&mut self, tag: &str, attributes: &[(&str, &str)]) -> &mut Self {
        self.buffer.push('<');
        self.buffer.push_str(tag);
        for (name, value) in attributes {
            self.buffer.push(' ');
            self.buffer.push_str(name);
            self.buffer.push_str("=\"");
            self.buffer.push_str(&escape(value));
            self.buffer.push('"');
        }
        self.buffer.push('>');
        self
    }

    pub fn close(&mut self, tag: &str) -> &mut Self {
        self.buffer.push_str("</");
        self.buffer.push_str(tag);
        self.buffer.push('>');
        self
    }

    /// Writes `<tag ...>text</tag>`.
    pub fn element(&mut self, tag: &str, attributes: &[(&str, &str)], text: &str) -> &mut Self {
        self.open(tag, attributes).text(text).close(tag)
    }

    pub fn text(&mut self, text: &str) -> &mut Self {
        self.buffer.push_str(&escape(text));
        self
    }

    /// Appends `html` without escaping.
    pub fn raw(&mut self, html: &str) -> &mut Self {
        self.buffer.push_str(html);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn into_string(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_elements() {
        let mut markup = Markup::new();
        markup
            .open("div", &[("class", "summary-card")])
            .element("p", &[], "Tom & Jerry")
            .close("div");

        assert_eq!(
            markup.into_string(),
            "<div class=\"summary-card\"><p>Tom &amp; Jerry</p></div>"
        );
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let mut markup = Markup::new();
        markup.element("button", &[("data-question", "Why \"this\"?")], "Why?");

        assert_eq!(
            markup.into_string(),
            "<button data-question=\"Why &quot;this&quot;?\">Why?</button>"
        );
    }

    #[test]
    fn test_raw_is_verbatim() {
        let mut markup = Markup::new();
        assert!(markup.is_empty());
        markup.raw("<svg/>");
        assert_eq!(markup.into_string(), "<svg/>");
    }
}
