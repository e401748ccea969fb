//! Structural parse events
//!
//! The converter is driven by these events only; it never sees the parser
//! that produced them.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Kind of a node that carries no formatting meaning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OtherKind {
    /// `<!-- ... -->`
    Comment,
    /// `<![CDATA[ ... ]]>`
    CData,
    /// `<?target ... ?>`
    ProcessingInstruction,
    /// `<?xml ... ?>`
    Declaration,
    /// `<!DOCTYPE ... >`
    DocType,
}

impl fmt::Display for OtherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OtherKind::Comment => "Comment",
            OtherKind::CData => "CDATA",
            OtherKind::ProcessingInstruction => "ProcessingInstruction",
            OtherKind::Declaration => "XmlDeclaration",
            OtherKind::DocType => "DocumentType",
        };
        f.write_str(name)
    }
}

/// One unit of source markup, in document order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ParseEvent {
    /// Opening tag, or a whole self-closing element
    ElementStart {
        /// Qualified element name
        name: String,
        /// Attribute name to value
        attributes: BTreeMap<String, String>,
        /// True for `<name/>`; no matching `ElementEnd` follows
        self_closing: bool,
    },
    /// Closing tag
    ElementEnd {
        /// Qualified element name
        name: String,
    },
    /// Character data, unescaped
    Text {
        /// Literal text
        value: String,
    },
    /// Whitespace-only text between elements
    Whitespace,
    /// Comment, CDATA, processing instruction or declaration
    Other {
        /// Node kind
        kind: OtherKind,
        /// Raw node content
        value: String,
    },
}

impl ParseEvent {
    /// An `ElementStart` without attributes
    pub fn start(name: impl Into<String>) -> Self {
        ParseEvent::ElementStart {
            name: name.into(),
            attributes: BTreeMap::new(),
            self_closing: false,
        }
    }

    /// An `ElementStart` carrying the given attributes
    pub fn start_with<I, K, V>(name: impl Into<String>, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        ParseEvent::ElementStart {
            name: name.into(),
            attributes: attributes
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            self_closing: false,
        }
    }

    /// A self-closing `ElementStart` without attributes
    pub fn empty(name: impl Into<String>) -> Self {
        ParseEvent::ElementStart {
            name: name.into(),
            attributes: BTreeMap::new(),
            self_closing: true,
        }
    }

    /// An `ElementEnd`
    pub fn end(name: impl Into<String>) -> Self {
        ParseEvent::ElementEnd { name: name.into() }
    }

    /// A `Text` event
    pub fn text(value: impl Into<String>) -> Self {
        ParseEvent::Text {
            value: value.into(),
        }
    }
}
