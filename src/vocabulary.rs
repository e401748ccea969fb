//! # BBCode Tag Vocabulary
//!
//! The set of element names that map one-to-one onto BBCode tags. An element
//! whose name is in the vocabulary is rendered as `[name]`/`[/name]`; anything
//! else is treated as structure and dropped by the converter.
//!
//! The built-in list covers the tags understood by common forum and chat
//! BBCode dialects. A different list can be supplied at startup (see the
//! `[vocabulary]` section of the CLI config) without changing the converter.

use std::collections::HashSet;

/// Tags recognised when no other vocabulary is configured
pub const DEFAULT_TAGS: [&str; 24] = [
    "b", "i", "s", "u", "heading", "big", "small", "sub", "sup", "center", "left", "right",
    "justify", "hr", "indent", "color", "noparse", "url", "img", "quote", "collapse", "icon",
    "eicon", "user",
];

/// An immutable, case-sensitive set of recognised tag names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagVocabulary {
    tags: HashSet<String>,
}

impl TagVocabulary {
    /// Build a vocabulary from a list of tag names
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Return a new vocabulary containing these tags plus `extra`
    pub fn extended<I, S>(&self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tags = self.tags.clone();
        tags.extend(extra.into_iter().map(Into::into));
        Self { tags }
    }

    /// Check whether `name` is a recognised tag
    pub fn contains(&self, name: &str) -> bool {
        self.tags.contains(name)
    }

    /// Number of tags
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// True when no tag is recognised
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Tag names in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let mut names: Vec<&str> = self.tags.iter().map(String::as_str).collect();
        names.sort_unstable();
        names.into_iter()
    }
}

impl Default for TagVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_TAGS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocabulary() {
        let vocab = TagVocabulary::default();
        assert_eq!(vocab.len(), 24);
        for tag in DEFAULT_TAGS {
            assert!(vocab.contains(tag), "missing {}", tag);
        }
        assert!(!vocab.contains("br"));
        assert!(!vocab.contains("p"));
        assert!(!vocab.contains(""));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let vocab = TagVocabulary::default();
        assert!(vocab.contains("color"));
        assert!(!vocab.contains("Color"));
        assert!(!vocab.contains("B"));
    }

    #[test]
    fn test_extended_keeps_original() {
        let base = TagVocabulary::new(["b", "i"]);
        let extended = base.extended(["spoiler"]);

        assert!(extended.contains("spoiler"));
        assert!(extended.contains("b"));
        assert!(!base.contains("spoiler"));
        assert_eq!(extended.len(), 3);
    }

    #[test]
    fn test_iter_is_sorted() {
        let vocab = TagVocabulary::new(["u", "b", "i"]);
        let names: Vec<&str> = vocab.iter().collect();
        assert_eq!(names, vec!["b", "i", "u"]);
    }

    #[test]
    fn test_empty_vocabulary() {
        let vocab = TagVocabulary::new(Vec::<String>::new());
        assert!(vocab.is_empty());
        assert!(!vocab.contains("b"));
    }
}
