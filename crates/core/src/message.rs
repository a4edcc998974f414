//! WhatsApp text message builder.
//!
//! Every funnel on the site ends in a plain-text WhatsApp message. The
//! formatting conventions are shared: a bold header, `*Label:* value` field
//! lines, bold section headings followed by bullets or free text. This
//! builder keeps the templates deterministic - the same input always
//! produces byte-identical text.

/// Builds a WhatsApp-formatted plain-text message.
///
/// WhatsApp renders `*text*` as bold; no other markup is used. Values are
/// inserted verbatim - percent-encoding happens once, when the finished
/// message is embedded into the deep link.
#[derive(Debug)]
pub struct MessageBuilder {
    buf: String,
}

impl MessageBuilder {
    /// Start a message with a bold header line followed by a blank line.
    #[must_use]
    pub fn new(header: &str) -> Self {
        Self {
            buf: format!("*{header}*\n\n"),
        }
    }

    /// Append a `*Label:* value` line.
    #[must_use]
    pub fn field(mut self, label: &str, value: &str) -> Self {
        self.buf.push_str(&format!("*{label}:* {value}\n"));
        self
    }

    /// Append a `*Label:* value` line only when a value is present.
    #[must_use]
    pub fn optional_field(self, label: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.field(label, value),
            None => self,
        }
    }

    /// Append a blank line.
    #[must_use]
    pub fn blank(mut self) -> Self {
        self.buf.push('\n');
        self
    }

    /// Append a bold `*Label:*` heading on its own line.
    #[must_use]
    pub fn section(mut self, label: &str) -> Self {
        self.buf.push_str(&format!("*{label}:*\n"));
        self
    }

    /// Append a `- text` bullet line.
    #[must_use]
    pub fn bullet(mut self, text: &str) -> Self {
        self.buf.push_str(&format!("- {text}\n"));
        self
    }

    /// Append free text on its own line.
    #[must_use]
    pub fn line(mut self, text: &str) -> Self {
        self.buf.push_str(text);
        self.buf.push('\n');
        self
    }

    /// Finish the message, trimming trailing whitespace.
    #[must_use]
    pub fn finish(self) -> String {
        self.buf.trim_end().to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_and_fields() {
        let message = MessageBuilder::new("Contato - Kolibra Solutions")
            .field("Nome", "Maria")
            .field("Telefone", "35999999999")
            .finish();

        assert!(message.starts_with("*Contato - Kolibra Solutions*\n\n"));
        assert!(message.contains("*Nome:* Maria\n"));
        assert!(message.ends_with("*Telefone:* 35999999999"));
    }

    #[test]
    fn test_optional_field_skipped_when_none() {
        let message = MessageBuilder::new("X")
            .optional_field("E-mail", None)
            .finish();
        assert!(!message.contains("E-mail"));
    }

    #[test]
    fn test_section_with_bullets() {
        let message = MessageBuilder::new("X")
            .section("Produtos")
            .bullet("Logo (1 unidades)")
            .bullet("Site Básico (2 unidades)")
            .finish();

        assert!(message.contains("*Produtos:*\n- Logo (1 unidades)\n- Site Básico (2 unidades)"));
    }

    #[test]
    fn test_deterministic() {
        let build = || {
            MessageBuilder::new("X")
                .field("A", "1")
                .blank()
                .section("S")
                .line("free text")
                .finish()
        };
        assert_eq!(build(), build());
    }
}
