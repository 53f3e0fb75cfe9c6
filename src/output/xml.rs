//! Minimal indenting XML writer
//!
//! Enough for JUnit reports: elements, attributes and escaped text.

use crate::constants::XML_DECLARATION;

/// Escape text for use in element content or a quoted attribute.
///
/// Tab, newline and carriage return become character references so
/// attribute values survive parser normalisation. Characters XML 1.0
/// cannot carry are replaced with U+FFFD.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' => out.push_str("&#x9;"),
            '\n' => out.push_str("&#xA;"),
            '\r' => out.push_str("&#xD;"),
            c if is_xml_char(c) => out.push(c),
            _ => out.push(char::REPLACEMENT_CHARACTER),
        }
    }
    out
}

/// The XML 1.0 `Char` production, minus the whitespace handled above.
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

pub struct XmlWriter {
    buf: String,
    depth: usize,
}

impl XmlWriter {
    pub fn new() -> Self {
        let mut buf = String::from(XML_DECLARATION);
        buf.push('\n');
        Self { buf, depth: 0 }
    }

    pub fn open(&mut self, name: &str, attrs: &[(&str, String)]) {
        self.start_tag(name, attrs, false);
        self.depth += 1;
    }

    pub fn close(&mut self, name: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.indent();
        self.buf.push_str("</");
        self.buf.push_str(name);
        self.buf.push_str(">\n");
    }

    pub fn empty(&mut self, name: &str, attrs: &[(&str, String)]) {
        self.start_tag(name, attrs, true);
    }

    /// `<name>text</name>` on one line
    pub fn text_element(&mut self, name: &str, text: &str) {
        self.indent();
        self.buf.push('<');
        self.buf.push_str(name);
        self.buf.push('>');
        self.buf.push_str(&escape(text));
        self.buf.push_str("</");
        self.buf.push_str(name);
        self.buf.push_str(">\n");
    }

    pub fn finish(self) -> String {
        self.buf
    }

    fn start_tag(&mut self, name: &str, attrs: &[(&str, String)], self_closing: bool) {
        self.indent();
        self.buf.push('<');
        self.buf.push_str(name);
        for (key, value) in attrs {
            self.buf.push(' ');
            self.buf.push_str(key);
            self.buf.push_str("=\"");
            self.buf.push_str(&escape(value));
            self.buf.push('"');
        }
        self.buf.push_str(if self_closing { "/>\n" } else { ">\n" });
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.buf.push_str("  ");
        }
    }
}

impl Default for XmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"a<b>&"c"'d'"#), "a&lt;b&gt;&amp;&quot;c&quot;&apos;d&apos;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_escape_whitespace_as_character_references() {
        assert_eq!(escape("a\tb\nc\r\nd"), "a&#x9;b&#xA;c&#xD;&#xA;d");
    }

    #[test]
    fn test_escape_replaces_characters_xml_cannot_carry() {
        assert_eq!(escape("\x1b[31mred\x1b[0m \0"), "\u{FFFD}[31mred\u{FFFD}[0m \u{FFFD}");
        assert_eq!(escape("\u{FFFE}\u{FFFF}"), "\u{FFFD}\u{FFFD}");
        assert_eq!(escape("caf\u{e9} \u{1F600}"), "caf\u{e9} \u{1F600}");
    }

    #[test]
    fn test_nested_elements_are_indented() {
        let mut w = XmlWriter::new();
        w.open("root", &[("n", "1".to_string())]);
        w.empty("leaf", &[("k", "a&b".to_string())]);
        w.text_element("msg", "x<y");
        w.close("root");

        assert_eq!(
            w.finish(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <root n=\"1\">\n  <leaf k=\"a&amp;b\"/>\n  <msg>x&lt;y</msg>\n</root>\n"
        );
    }
}
