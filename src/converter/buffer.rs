//! Output assembly for a single conversion

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Line break written for `<br>` and at the end of paragraphs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineEnding {
    /// The line break as text
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineEnding::Lf => write!(f, "lf"),
            LineEnding::CrLf => write!(f, "crlf"),
        }
    }
}

impl FromStr for LineEnding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lf" | "unix" => Ok(LineEnding::Lf),
            "crlf" | "windows" => Ok(LineEnding::CrLf),
            other => Err(format!("unknown line ending: {}", other)),
        }
    }
}

/// Statistics from a conversion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionStats {
    /// Opening tags written
    pub tags_opened: usize,
    /// Closing tags written
    pub tags_closed: usize,
    /// Line breaks written
    pub line_breaks: usize,
    /// Text runs copied
    pub text_runs: usize,
    /// Start tags of elements outside the vocabulary
    pub dropped_elements: usize,
    /// Comments, CDATA, processing instructions and declarations
    pub other_nodes: usize,
}

/// Result of a successful conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Converted BBCode text
    pub output: String,
    /// What was written
    pub stats: ConversionStats,
}

impl Conversion {
    /// Take the converted text
    pub fn into_string(self) -> String {
        self.output
    }
}

/// Append-only accumulator owned by one conversion
#[derive(Debug, Default)]
pub struct ConversionBuffer {
    out: String,
    line_ending: LineEnding,
    stats: ConversionStats,
}

impl ConversionBuffer {
    /// Create an empty buffer
    pub fn new(line_ending: LineEnding) -> Self {
        Self {
            out: String::new(),
            line_ending,
            stats: ConversionStats::default(),
        }
    }

    /// Write `[name]` or `[name=value]`
    pub fn open_tag(&mut self, name: &str, value: Option<&str>) {
        self.out.push('[');
        self.out.push_str(name);
        if let Some(value) = value {
            self.out.push('=');
            self.out.push_str(value);
        }
        self.out.push(']');
        self.stats.tags_opened += 1;
    }

    /// Write `[/name]`
    pub fn close_tag(&mut self, name: &str) {
        self.out.push_str("[/");
        self.out.push_str(name);
        self.out.push(']');
        self.stats.tags_closed += 1;
    }

    /// Write a line break
    pub fn line_break(&mut self) {
        self.out.push_str(self.line_ending.as_str());
        self.stats.line_breaks += 1;
    }

    /// Copy text verbatim
    pub fn text(&mut self, value: &str) {
        self.out.push_str(value);
        self.stats.text_runs += 1;
    }

    pub(crate) fn record_dropped(&mut self) {
        self.stats.dropped_elements += 1;
    }

    pub(crate) fn record_other(&mut self) {
        self.stats.other_nodes += 1;
    }

    /// Text written so far
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Consume the buffer
    pub fn finish(self) -> Conversion {
        Conversion {
            output: self.out,
            stats: self.stats,
        }
    }
}
