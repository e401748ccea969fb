use std::io::BufRead;

use super::{ConvertError, XmlEventSource};
use crate::event::ParseEvent;

/// Iterator over the events of an XML document
///
/// Yields at most one error, after which it is exhausted.
pub struct EventIterator<R: BufRead> {
    pub(super) source: XmlEventSource<R>,
}

impl<R: BufRead> Iterator for EventIterator<R> {
    type Item = Result<ParseEvent, ConvertError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.source.next_event() {
            Ok(Some(event)) => Some(Ok(event)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
