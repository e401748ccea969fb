//! XML to BBCode converter
//!
//! [`TagConverter`] folds a stream of [`ParseEvent`]s into BBCode text in a
//! single pass. It keeps no state between events beyond the output buffer and
//! does not check that tags are balanced; the event source is trusted to
//! deliver a well-formed document.
//!
//! ## Rendering rules
//!
//! | Event | Output |
//! |-------|--------|
//! | start of a vocabulary tag `t` | `[t]`, or `[t=v]` when it carries `t="v"` |
//! | start of `br` | line break |
//! | start of any other element | nothing |
//! | text | the text, verbatim |
//! | end of a vocabulary tag `t` | `[/t]` |
//! | end of `p`, `para`, `paragraph` | line break |
//! | whitespace, comments, other nodes | nothing |
//!
//! A self-closing element produces only its start event, so `<hr/>` renders
//! as `[hr]`.

use std::io::BufRead;
use std::path::Path;

use log::{debug, info, trace};

use crate::event::ParseEvent;
use crate::source::{ConvertError, XmlEventSource};
use crate::vocabulary::TagVocabulary;

pub use buffer::{Conversion, ConversionBuffer, ConversionStats, LineEnding};

mod buffer;


/// Element whose start is rendered as a line break
pub const LINE_BREAK_ELEMENT: &str = "br";

/// Elements whose end is rendered as a line break
pub const PARAGRAPH_ELEMENTS: [&str; 3] = ["p", "para", "paragraph"];

/// Attribute reported in diagnostics but not rendered
const FONT_ATTRIBUTE: &str = "font";

/// Converts parse events to BBCode
#[derive(Debug, Clone, Default)]
pub struct TagConverter {
    vocabulary: TagVocabulary,
    line_ending: LineEnding,
}

impl TagConverter {
    /// Create a converter for the given vocabulary
    pub fn new(vocabulary: TagVocabulary) -> Self {
        Self {
            vocabulary,
            line_ending: LineEnding::default(),
        }
    }

    /// Set the line break written for `br` and paragraph ends
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// The active vocabulary
    pub fn vocabulary(&self) -> &TagVocabulary {
        &self.vocabulary
    }

    /// The active line ending
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Convert an infallible event sequence
    pub fn convert<I>(&self, events: I) -> String
    where
        I: IntoIterator<Item = ParseEvent>,
    {
        let mut buf = ConversionBuffer::new(self.line_ending);
        for event in events {
            self.apply(&event, &mut buf);
        }
        buf.finish().into_string()
    }

    /// Convert a fallible event sequence
    ///
    /// The first error aborts the conversion and is returned unchanged; the
    /// partial output is discarded.
    pub fn try_convert<I, E>(&self, events: I) -> Result<Conversion, E>
    where
        I: IntoIterator<Item = Result<ParseEvent, E>>,
    {
        let mut buf = ConversionBuffer::new(self.line_ending);
        for event in events {
            self.apply(&event?, &mut buf);
        }
        Ok(buf.finish())
    }

    /// Convert an XML document read from a BufRead
    pub fn convert_reader<R: BufRead>(&self, reader: R) -> Result<Conversion, ConvertError> {
        self.try_convert(XmlEventSource::new(reader).events())
    }

    /// Convert an XML document held in memory
    pub fn convert_str(&self, xml: &str) -> Result<String, ConvertError> {
        self.try_convert(XmlEventSource::from_xml(xml).events())
            .map(Conversion::into_string)
    }

    /// Convert an XML file
    pub fn convert_file<P: AsRef<Path>>(&self, path: P) -> Result<Conversion, ConvertError> {
        let path = path.as_ref();
        info!("Converting {}", path.display());
        let conversion = self.try_convert(XmlEventSource::open(path)?.events())?;
        debug!("Conversion stats: {:?}", conversion.stats);
        Ok(conversion)
    }

    /// Apply one event to the buffer
    pub fn apply(&self, event: &ParseEvent, buf: &mut ConversionBuffer) {
        match event {
            ParseEvent::ElementStart {
                name, attributes, ..
            } => {
                if self.vocabulary.contains(name) {
                    let value = attributes
                        .get(name)
                        .map(String::as_str)
                        .filter(|v| !v.trim().is_empty());
                    buf.open_tag(name, value);

                    if let Some(font) = attributes
                        .get(FONT_ATTRIBUTE)
                        .filter(|v| !v.trim().is_empty())
                    {
                        debug!(
                            "<{}> sets font=\"{}\"; fonts are not applied to enclosed text",
                            name, font
                        );
                    }
                } else if name == LINE_BREAK_ELEMENT {
                    buf.line_break();
                } else {
                    trace!("Dropping element <{}>", name);
                    buf.record_dropped();
                }
            }
            ParseEvent::Text { value } => buf.text(value),
            ParseEvent::ElementEnd { name } => {
                if self.vocabulary.contains(name) {
                    buf.close_tag(name);
                } else if PARAGRAPH_ELEMENTS.contains(&name.as_str()) {
                    buf.line_break();
                }
            }
            ParseEvent::Whitespace => {}
            ParseEvent::Other { kind, value } => {
                debug!("Other node {} with value {}", kind, value);
                buf.record_other();
            }
        }
    }
}
