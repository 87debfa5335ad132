//! Line-oriented save writer.

use super::Persist;

/// Accumulates one value per line and renders the escaped save text.
#[derive(Debug, Default)]
pub struct Serializer {
    lines: Vec<String>,
}

impl Serializer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_str(&mut self, value: &str) {
        self.lines.push(value.to_string());
    }

    pub fn write_int(&mut self, value: i64) {
        self.lines.push(value.to_string());
    }

    pub fn write_bool(&mut self, value: bool) {
        self.write_str(if value { "true" } else { "false" });
    }

    pub fn write<T: Persist + ?Sized>(&mut self, value: &T) {
        value.save(self);
    }

    /// Count-prefixed sequence.
    pub fn write_list<'a, T: Persist + 'a>(&mut self, values: impl ExactSizeIterator<Item = &'a T>) {
        self.write_int(values.len() as i64);
        for value in values {
            value.save(self);
        }
    }

    /// Count-prefixed key/value pairs.
    pub fn write_map<'a, T: Persist + 'a>(
        &mut self,
        entries: impl ExactSizeIterator<Item = (&'a str, &'a T)>,
    ) {
        self.write_int(entries.len() as i64);
        for (key, value) in entries {
            self.write_str(key);
            value.save(self);
        }
    }

    /// Render the save: backslash becomes `\s`, newline becomes `\n`, and
    /// values are joined with newlines.
    #[must_use]
    pub fn finish(self) -> String {
        self.lines
            .iter()
            .map(|line| escape(line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\s").replace('\n', "\\n")
}
