//! # bbconvert - XML Rich Text to BBCode
//!
//! `bbconvert` migrates documents written in a small XML rich-text dialect to
//! BBCode, the bracket-tag markup used by forums and chat clients:
//!
//! ```text
//! <p>Hello <b>world</b><br/><color color="red">!</color></p>
//! ```
//!
//! becomes
//!
//! ```text
//! Hello [b]world[/b]
//! [color=red]![/color]
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use bbconvert::TagConverter;
//!
//! let converter = TagConverter::default();
//! let bbcode = converter.convert_str("<b>hello</b>")?;
//! assert_eq!(bbcode, "[b]hello[/b]");
//! # Ok::<(), bbconvert::ConvertError>(())
//! ```
//!
//! The converter is driven by [`ParseEvent`]s and can be fed from any source:
//!
//! ```rust
//! use bbconvert::{ParseEvent, TagConverter};
//!
//! let out = TagConverter::default().convert(vec![
//!     ParseEvent::text("a"),
//!     ParseEvent::start("br"),
//!     ParseEvent::text("b"),
//! ]);
//! assert_eq!(out, "a\nb");
//! ```
//!
//! ## Architecture
//!
//! - [`vocabulary`]: the set of element names rendered as BBCode tags
//! - [`event`]: the structural event model
//! - [`source`]: streaming quick-xml adapter producing events
//! - [`converter`]: the event-to-BBCode fold

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod converter;
pub mod event;
pub mod source;
pub mod vocabulary;

pub use converter::{Conversion, ConversionStats, LineEnding, TagConverter};
pub use event::{OtherKind, ParseEvent};
pub use source::{ConvertError, EntityTable, XmlEventSource};
pub use vocabulary::TagVocabulary;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::converter::{
        Conversion, ConversionBuffer, ConversionStats, LineEnding, TagConverter,
    };
    pub use crate::event::{OtherKind, ParseEvent};
    pub use crate::source::{ConvertError, EntityTable, EventIterator, XmlEventSource};
    pub use crate::vocabulary::{TagVocabulary, DEFAULT_TAGS};
}
