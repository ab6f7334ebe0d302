use std::fmt::Display;

use crate::loader::Span;

/// Diagnostics collected while reading a transition table.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Logs {
    logs: Vec<LogEntry>,
    has_error: bool,
}

pub trait LogSink {
    fn emit(&mut self, entry: LogEntry) -> &mut LogEntry;

    fn emit_at(&mut self, level: LogLevel, msg: impl Into<String>, span: Option<Span>) -> &mut LogEntry {
        self.emit(LogEntry {
            message: msg.into(),
            span,
            level,
            child: None,
        })
    }

    fn emit_error(&mut self, msg: impl Into<String>, span: Span) -> &mut LogEntry {
        self.emit_at(LogLevel::Error, msg, Some(span))
    }

    fn emit_warning(&mut self, msg: impl Into<String>, span: Span) -> &mut LogEntry {
        self.emit_at(LogLevel::Warning, msg, Some(span))
    }

    fn emit_help(&mut self, msg: impl Into<String>, span: Span) -> &mut LogEntry {
        self.emit_at(LogLevel::Help, msg, Some(span))
    }
}

impl LogSink for Logs {
    fn emit(&mut self, entry: LogEntry) -> &mut LogEntry {
        self.has_error |= entry.level == LogLevel::Error;
        let index = self.logs.len();
        self.logs.push(entry);
        &mut self.logs[index]
    }
}

impl Logs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_errors(&self) -> bool {
        self.has_error
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.logs
    }

    pub fn errors(&self) -> impl Iterator<Item = &LogEntry> {
        self.logs.iter().filter(|e| e.level == LogLevel::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &LogEntry> {
        self.logs.iter().filter(|e| e.level == LogLevel::Warning)
    }

    pub fn displayable_with<'a>(
        &'a self,
        src: &'a str,
    ) -> impl Iterator<Item = LogEntryDisplay<'a>> {
        self.logs.iter().map(|entry| LogEntryDisplay { src, entry })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LogLevel {
    Warning,
    Error,
    Help,
}

/// A message, where it points in the source, and an optional follow-up note.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LogEntry {
    pub message: String,
    pub span: Option<Span>,
    pub level: LogLevel,
    pub child: Option<Box<LogEntry>>,
}

impl LogSink for LogEntry {
    fn emit(&mut self, entry: LogEntry) -> &mut LogEntry {
        self.child.insert(Box::new(entry))
    }
}

/// Renders an entry and its notes against the source, underlining spans.
pub struct LogEntryDisplay<'a> {
    src: &'a str,
    entry: &'a LogEntry,
}

const RESET: &str = "\x1b[0;22m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

impl LogEntryDisplay<'_> {
    fn excerpt(&self, f: &mut std::fmt::Formatter<'_>, Span(start, end): Span) -> std::fmt::Result {
        let src = self.src;
        let start = start.min(src.len());
        let end = end.clamp(start, src.len());

        let line_start = src[..start].rfind('\n').map_or(0, |i| i + 1);
        let line_end = src[end..].find('\n').map_or(src.len(), |i| i + end);
        let first_line = src[..line_start].matches('\n').count() + 1;
        let last_line = first_line + src[line_start..line_end].matches('\n').count();
        let width = last_line.to_string().len();

        let mut offset = line_start;
        for (i, line) in src[line_start..line_end].split('\n').enumerate() {
            write!(f, "{BOLD}{CYAN}{:>width$} | {RESET}", first_line + i)?;
            writeln!(f, "{}", line.replace('\t', " "))?;

            write!(f, "{BOLD}{CYAN}{:>width$} | ", "")?;
            for c in line.chars() {
                let marked = (start..end).contains(&offset) || (start == end && offset == start);
                write!(f, "{}", if marked { '~' } else { ' ' })?;
                offset += c.len_utf8();
            }
            if start == end && offset == start {
                write!(f, "~")?;
            }
            writeln!(f, "{RESET}")?;
            offset += '\n'.len_utf8();
        }
        Ok(())
    }
}

impl Display for LogEntryDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut next = Some(self.entry);
        while let Some(entry) = next {
            let (color, name) = match entry.level {
                LogLevel::Help => (GREEN, "help"),
                LogLevel::Warning => (YELLOW, "warning"),
                LogLevel::Error => (RED, "error"),
            };
            writeln!(f, "{BOLD}{color}{name}{RESET}{BOLD}: {}{RESET}", entry.message)?;
            if let Some(span) = entry.span {
                self.excerpt(f, span)?;
            }
            next = entry.child.as_deref();
        }
        Ok(())
    }
}
