//! Streaming XML event source using quick-xml
//!
//! This module turns an XML byte stream into [`ParseEvent`]s, one at a time,
//! in document order. Only the current event is held in memory.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use quick_xml::encoding::Decoder;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::event::{OtherKind, ParseEvent};

pub use entities::EntityTable;
pub use error::ConvertError;
pub use iterators::EventIterator;

mod entities;
mod error;
mod iterators;


/// Default buffer size for file input
pub const DEFAULT_INPUT_BUFFER_SIZE: usize = 64 * 1024;

/// Pull-based event source over an XML document
pub struct XmlEventSource<R: BufRead> {
    reader: Reader<R>,
    buf: Vec<u8>,
    open_elements: Vec<String>,
    entities: EntityTable,
    finished: bool,
}

impl XmlEventSource<BufReader<File>> {
    /// Open an XML file for streaming
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ConvertError> {
        let file = File::open(path.as_ref())?;
        Ok(Self::new(BufReader::with_capacity(
            DEFAULT_INPUT_BUFFER_SIZE,
            file,
        )))
    }
}

impl<'a> XmlEventSource<&'a [u8]> {
    /// Stream events from an in-memory document
    pub fn from_xml(xml: &'a str) -> Self {
        Self::new(xml.as_bytes())
    }
}

impl<R: BufRead> XmlEventSource<R> {
    /// Create a new source from a BufRead
    pub fn new(reader: R) -> Self {
        let mut xml_reader = Reader::from_reader(reader);
        // Text is passed through verbatim; whitespace-only runs become
        // `ParseEvent::Whitespace` below.
        xml_reader.config_mut().trim_text(false);
        xml_reader.config_mut().check_end_names = true;

        Self {
            reader: xml_reader,
            buf: Vec::new(),
            open_elements: Vec::new(),
            entities: EntityTable::default(),
            finished: false,
        }
    }

    /// Nesting depth of the current position
    pub fn depth(&self) -> usize {
        self.open_elements.len()
    }

    /// Entities declared in the document's DOCTYPE so far
    pub fn entities(&self) -> &EntityTable {
        &self.entities
    }

    /// Read the next event, or `None` at the end of the document
    ///
    /// After an error or the end of the document every further call
    /// returns `Ok(None)`.
    pub fn next_event(&mut self) -> Result<Option<ParseEvent>, ConvertError> {
        if self.finished {
            return Ok(None);
        }
        let result = self.read_next();
        if !matches!(result, Ok(Some(_))) {
            self.finished = true;
        }
        result
    }

    /// Iterate over all events
    pub fn events(self) -> EventIterator<R> {
        EventIterator { source: self }
    }

    fn read_next(&mut self) -> Result<Option<ParseEvent>, ConvertError> {
        loop {
            self.buf.clear();
            let event = self
                .reader
                .read_event_into(&mut self.buf)
                .map_err(|source| ConvertError::MalformedMarkup {
                    position: self.reader.buffer_position() as u64,
                    source,
                })?;
            let decoder = self.reader.decoder();

            let parsed = match event {
                Event::Start(ref e) => {
                    let position = self.reader.buffer_position() as u64;
                    let (name, attributes) =
                        read_element(e, decoder, position, &self.entities)?;
                    self.open_elements.push(name.clone());
                    ParseEvent::ElementStart {
                        name,
                        attributes,
                        self_closing: false,
                    }
                }
                Event::Empty(ref e) => {
                    let position = self.reader.buffer_position() as u64;
                    let (name, attributes) =
                        read_element(e, decoder, position, &self.entities)?;
                    ParseEvent::ElementStart {
                        name,
                        attributes,
                        self_closing: true,
                    }
                }
                Event::End(ref e) => {
                    let name = decode(e.name().as_ref(), decoder).map_err(|source| {
                        ConvertError::MalformedMarkup {
                            position: self.reader.buffer_position() as u64,
                            source,
                        }
                    })?;
                    self.open_elements.pop();
                    ParseEvent::ElementEnd { name }
                }
                Event::Text(ref t) => {
                    if t.is_empty() {
                        continue;
                    }
                    // Only the four XML whitespace characters count, and only
                    // when written literally: `&#160;` or a raw NBSP is text.
                    if t.iter().all(|b| is_xml_whitespace(*b)) {
                        ParseEvent::Whitespace
                    } else {
                        let entities = &self.entities;
                        let value = t
                            .unescape_with(|name| entities.resolve(name))
                            .map_err(|source| ConvertError::MalformedMarkup {
                                position: self.reader.buffer_position() as u64,
                                source,
                            })?;
                        ParseEvent::Text {
                            value: value.into_owned(),
                        }
                    }
                }
                Event::CData(ref c) => other(OtherKind::CData, c),
                Event::Comment(ref c) => other(OtherKind::Comment, c),
                Event::PI(ref p) => other(OtherKind::ProcessingInstruction, p),
                Event::Decl(ref d) => other(OtherKind::Declaration, d),
                Event::DocType(ref d) => {
                    let doctype = decode(d, decoder).map_err(|source| {
                        ConvertError::MalformedMarkup {
                            position: self.reader.buffer_position() as u64,
                            source,
                        }
                    })?;
                    self.entities.extend_from_doctype(&doctype);
                    ParseEvent::Other {
                        kind: OtherKind::DocType,
                        value: doctype,
                    }
                }
                Event::Eof => {
                    return match self.open_elements.pop() {
                        Some(open) => Err(ConvertError::UnclosedElement(open)),
                        None => Ok(None),
                    };
                }
            };

            return Ok(Some(parsed));
        }
    }
}

/// Decode a name or raw value with the document encoding
fn decode(bytes: &[u8], decoder: Decoder) -> Result<String, quick_xml::Error> {
    Ok(decoder
        .decode(bytes)
        .map_err(quick_xml::Error::from)?
        .into_owned())
}

/// Read the name and attributes of a start or empty tag
fn read_element(
    e: &BytesStart,
    decoder: Decoder,
    position: u64,
    entities: &EntityTable,
) -> Result<(String, BTreeMap<String, String>), ConvertError> {
    let name = decode(e.name().as_ref(), decoder)
        .map_err(|source| ConvertError::MalformedMarkup { position, source })?;

    let mut attributes = BTreeMap::new();
    for attr in e.attributes() {
        let attr_error = |source: quick_xml::Error| ConvertError::UnsupportedAttributeEncoding {
            element: name.clone(),
            source,
        };
        let attr = attr.map_err(|e| attr_error(quick_xml::Error::from(e)))?;
        let key = decode(attr.key.as_ref(), decoder).map_err(attr_error)?;
        let value = attr
            .decode_and_unescape_value_with(decoder, |name| entities.resolve(name))
            .map_err(attr_error)?
            .into_owned();
        attributes.insert(key, value);
    }

    Ok((name, attributes))
}

/// Space, tab, carriage return and line feed
fn is_xml_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

fn other(kind: OtherKind, raw: &[u8]) -> ParseEvent {
    ParseEvent::Other {
        kind,
        value: String::from_utf8_lossy(raw).into_owned(),
    }
}
