/// Errors that can occur while reading markup into events
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The XML parser rejected the document
    #[error("Malformed markup at byte {position}: {source}")]
    MalformedMarkup {
        /// Byte offset reached by the parser
        position: u64,
        /// Underlying parser error
        source: quick_xml::Error,
    },

    /// The document ended while an element was still open
    #[error("Malformed markup: element <{0}> is not closed")]
    UnclosedElement(String),

    /// An attribute could not be read as text
    #[error("Unsupported attribute encoding on <{element}>: {source}")]
    UnsupportedAttributeEncoding {
        /// Element carrying the attribute
        element: String,
        /// Underlying parser error
        source: quick_xml::Error,
    },

    /// I/O error while opening the input
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConvertError {
    /// True for errors caused by the document itself rather than I/O
    pub fn is_malformed(&self) -> bool {
        !matches!(self, ConvertError::IoError(_))
    }
}
