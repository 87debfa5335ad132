//! Line-oriented save reader.

use std::str::Split;

use super::Persist;
use crate::error::{LoadError, LoadResult};

/// Reads values back in the order a `Serializer` wrote them.
#[derive(Debug)]
pub struct Deserializer<'a> {
    lines: Split<'a, char>,
    /// 1-based number of the last line read.
    line: usize,
}

impl<'a> Deserializer<'a> {
    /// Lines end at `\n` only; a `\r` is part of the value.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.split('\n'),
            line: 0,
        }
    }

    /// Number of the last line read, for error reporting.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn read_str(&mut self) -> LoadResult<String> {
        let raw = self.lines.next().ok_or(LoadError::UnexpectedEof)?;
        self.line += 1;
        Ok(unescape(raw))
    }

    pub fn read_int(&mut self) -> LoadResult<i64> {
        let value = self.read_str()?;
        value
            .parse()
            .map_err(|_| LoadError::InvalidNumber { line: self.line })
    }

    /// An integer that must fit `T`, reported against its own line otherwise.
    pub fn read_int_as<T: TryFrom<i64>>(&mut self) -> LoadResult<T> {
        let value = self.read_int()?;
        T::try_from(value).map_err(|_| LoadError::InvalidNumber { line: self.line })
    }

    pub fn read_bool(&mut self) -> LoadResult<bool> {
        match self.read_str()?.as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(LoadError::InvalidBoolean { line: self.line }),
        }
    }

    pub fn read<T: Persist>(&mut self) -> LoadResult<T> {
        T::load(self)
    }
}

/// Reverse the save escaping in a single left-to-right pass.
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('s') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
