use std::fmt::Write;

use crate::template::Template;

pub(crate) trait FormatWriter {
    fn format_writer<W: Write>(&self, context: &mut FormatContext<'_, W>) -> std::fmt::Result;
}

/// A substitution point recognised inside a template fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Placeholder {
    Pages,
    Page,
    Url,
}

impl Placeholder {
    const OPEN: &'static str = "{{";
    const CLOSE: &'static str = "}}";

    /// The placeholder as written in a fragment.
    pub(crate) fn literal(self) -> &'static str {
        match self {
            Self::Pages => "{{pages}}",
            Self::Page => "{{page}}",
            Self::Url => "{{url}}",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "pages" => Some(Self::Pages),
            "page" => Some(Self::Page),
            "url" => Some(Self::Url),
            _ => None,
        }
    }
}

pub(crate) struct FormatContext<'a, W: Write> {
    pub(crate) writer: &'a mut W,
    pub(crate) template: &'a Template,
}

impl<'a, W: Write> FormatContext<'a, W> {
    pub fn new(writer: &'a mut W, template: &'a Template) -> Self {
        Self { writer, template }
    }

    /// Writes `text` with the five markup-significant characters replaced by
    /// entities.
    pub(crate) fn write_escaped(&mut self, text: &str) -> std::fmt::Result {
        let mut last = 0;
        for (index, char) in text.char_indices() {
            let entity = match char {
                '&' => "&amp;",
                '<' => "&lt;",
                '>' => "&gt;",
                '"' => "&quot;",
                '\'' => "&#039;",
                _ => continue,
            };
            if index != last {
                self.writer.write_str(&text[last..index])?;
            }
            self.writer.write_str(entity)?;
            last = index + char.len_utf8();
        }

        // write trailing slice
        if last < text.len() {
            self.writer.write_str(&text[last..])?;
        }
        Ok(())
    }

    pub(crate) fn write_number(&mut self, number: i64) -> std::fmt::Result {
        write!(self.writer, "{}", number)
    }

    /// Copies `fragment` to the writer, handing every known placeholder to
    /// `substitute`. Unknown `{{...}}` sequences are copied as they are and
    /// substituted text is never scanned again.
    pub(crate) fn write_fragment<F>(&mut self, fragment: &str, mut substitute: F) -> std::fmt::Result
    where
        F: FnMut(&mut Self, Placeholder) -> std::fmt::Result,
    {
        let mut rest = fragment;
        while let Some(start) = rest.find(Placeholder::OPEN) {
            let after_open = &rest[start + Placeholder::OPEN.len()..];
            let Some(end) = after_open.find(Placeholder::CLOSE) else {
                break;
            };

            match Placeholder::from_name(&after_open[..end]) {
                Some(placeholder) => {
                    self.writer.write_str(&rest[..start])?;
                    substitute(&mut *self, placeholder)?;
                    rest = &after_open[end + Placeholder::CLOSE.len()..];
                }
                None => {
                    // not ours, keep one brace and rescan from the next
                    let literal = start + 1;
                    self.writer.write_str(&rest[..literal])?;
                    rest = &rest[literal..];
                }
            }
        }

        self.writer.write_str(rest)
    }
}
