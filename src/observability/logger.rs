//! Structured JSON logger
//!
//! One log line = one event, written synchronously with no buffering.
//! The event name always comes first, followed by the severity, followed by
//! the caller's fields in the order given.

use std::fmt;
use std::io::{self, Write};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info,
    /// Recoverable issues
    Warn,
    /// Operation failures
    Error,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A structured logger that outputs single-line JSON events
pub struct Logger;

impl Logger {
    /// Log an event with the given severity and fields
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let line = Self::format_line(severity, event, fields);
        let _ = writeln!(io::stdout(), "{}", line);
    }

    /// Log to stderr (for errors)
    pub fn log_stderr(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let line = Self::format_line(severity, event, fields);
        let _ = writeln!(io::stderr(), "{}", line);
    }

    fn format_line(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut output = String::with_capacity(128);
        output.push('{');
        push_pair(&mut output, "event", event);
        output.push(',');
        push_pair(&mut output, "severity", severity.as_str());
        for (key, value) in fields {
            output.push(',');
            push_pair(&mut output, key, value);
        }
        output.push('}');
        output
    }
}

fn push_pair(output: &mut String, key: &str, value: &str) {
    push_json_string(output, key);
    output.push(':');
    push_json_string(output, value);
}

fn push_json_string(output: &mut String, s: &str) {
    output.push('"');
    for c in s.chars() {
        match c {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                output.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => output.push(c),
        }
    }
    output.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_and_severity_come_first() {
        let line = Logger::format_line(Severity::Info, "server_start", &[("port", "4000")]);
        assert_eq!(
            line,
            r#"{"event":"server_start","severity":"INFO","port":"4000"}"#
        );
    }

    #[test]
    fn test_line_is_valid_json() {
        let line = Logger::format_line(
            Severity::Error,
            "mutation_failed",
            &[("reason", "key \"EXP1\"\nmissing")],
        );
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["severity"], "ERROR");
        assert_eq!(parsed["reason"], "key \"EXP1\"\nmissing");
    }
}
