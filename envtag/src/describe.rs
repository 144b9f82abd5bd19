//! Rendering of documentation lines

use crate::key::Field;

/// Render the line for a leaf field: `KEY - DESCRIPTION (default: DEFAULT)`.
///
/// An empty key renders nothing. An empty description drops the
/// ` - DESCRIPTION` segment, keeping a bare `KEY -` when a default follows.
/// An empty default drops the parenthetical.
pub fn line(field: &Field<'_>) -> String {
    let key = field.key();
    if key.is_empty() {
        return String::new();
    }

    let description = field.description();
    let default = field.default();
    let mut line = if description.is_empty() {
        key.to_string()
    } else {
        format!("{key} - {description}")
    };
    if default.is_empty() {
        return line;
    }
    if description.is_empty() {
        line.push_str(" -");
    }
    format!("{line} (default: {default})")
}

/// Accumulates the lines of a struct's fields in declaration order.
#[derive(Debug, Default)]
pub struct Lines {
    text: String,
}

impl Lines {
    /// Start a group, headed by the struct field's own description if any.
    pub fn new(header: &str) -> Self {
        Self {
            text: header.to_string(),
        }
    }

    /// Append a field's rendering; empty renderings are dropped.
    pub fn push(&mut self, entry: String) {
        if entry.is_empty() {
            return;
        }
        if !self.text.is_empty() {
            self.text.push('\n');
        }
        self.text.push_str(&entry);
    }

    pub fn finish(self) -> String {
        self.text
    }
}
