/// Incremental builder for the markdown-superset dialect the reference
/// documentation is written in.
#[derive(Debug, Default)]
pub struct MarkdownBuilder {
    buffer: String,
}

impl MarkdownBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an ATX heading of the given level.
    pub fn header(&mut self, level: usize, text: &str) {
        self.buffer.push_str(&"#".repeat(level));
        self.buffer.push(' ');
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    /// Appends a line of text.
    pub fn line(&mut self, text: &str) {
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    /// Appends an empty line.
    pub fn blank(&mut self) {
        self.buffer.push('\n');
    }

    /// Appends raw text without a trailing newline.
    pub fn push(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    /// Appends a fenced code block; an empty language yields a bare fence.
    pub fn code_block(&mut self, language: &str, code: &str) {
        self.buffer.push_str("```");
        self.buffer.push_str(language);
        self.buffer.push('\n');
        self.buffer.push_str(code.trim_end_matches('\n'));
        self.buffer.push_str("\n```\n");
    }

    /// Appends a three-column table with the given header labels.
    pub fn table(&mut self, head: &[&str; 3], rows: &[[String; 3]]) {
        self.buffer
            .push_str(&format!("| {} | {} | {} |\n", head[0], head[1], head[2]));
        self.buffer.push_str("| --- | --- | --- |\n");
        for row in rows {
            self.buffer
                .push_str(&format!("| {} | {} | {} |\n", row[0], row[1], row[2]));
        }
    }

    /// Consumes the builder and returns the accumulated document.
    pub fn into_string(self) -> String {
        self.buffer
    }
}
