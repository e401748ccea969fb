use std::collections::HashMap;

use quick_xml::escape::{resolve_predefined_entity, unescape};
use regex::Regex;

/// `<!ENTITY name "value">` or `<!ENTITY name 'value'>`; `%` marks a parameter entity
const ENTITY_DECL: &str = r#"<!ENTITY\s+([^%\s][^\s]*)\s+(?:"([^"]*)"|'([^']*)')\s*>"#;

/// General entities declared in the internal DTD subset
///
/// Only internal entities with a literal value are collected; parameter
/// entities and external (`SYSTEM`/`PUBLIC`) entities are ignored.
#[derive(Debug, Default, Clone)]
pub struct EntityTable {
    entities: HashMap<String, String>,
}

impl EntityTable {
    /// Collect `<!ENTITY name "value">` declarations from DOCTYPE content
    pub fn from_doctype(doctype: &str) -> Self {
        let mut table = Self::default();
        table.extend_from_doctype(doctype);
        table
    }

    /// Add the declarations found in `doctype`; the first declaration wins
    pub fn extend_from_doctype(&mut self, doctype: &str) {
        let Ok(pattern) = Regex::new(ENTITY_DECL) else {
            return;
        };

        for caps in pattern.captures_iter(doctype) {
            let name = caps[1].to_string();
            let raw = caps
                .get(2)
                .or_else(|| caps.get(3))
                .map_or("", |m| m.as_str());
            // Character references inside the value are expanded now.
            let value = unescape(raw)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| raw.to_string());
            self.entities.entry(name).or_insert(value);
        }
    }

    /// Resolve a predefined or declared entity
    pub fn resolve(&self, name: &str) -> Option<&str> {
        resolve_predefined_entity(name).or_else(|| self.entities.get(name).map(String::as_str))
    }

    /// Number of declared entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// True when no entity was declared
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_declarations() {
        let table = EntityTable::from_doctype(
            r#" doc [
  <!ENTITY me "Bunny">
  <!ENTITY them 'Fox &amp; Hound'>
  <!ENTITY % param "ignored">
  <!ENTITY ext SYSTEM "ext.xml">
]"#,
        );

        assert_eq!(table.len(), 2);
        assert_eq!(table.resolve("me"), Some("Bunny"));
        assert_eq!(table.resolve("them"), Some("Fox & Hound"));
        assert_eq!(table.resolve("param"), None);
        assert_eq!(table.resolve("ext"), None);
    }

    #[test]
    fn test_predefined_entities_still_resolve() {
        let table = EntityTable::from_doctype(r#" doc [<!ENTITY lt "nope">]"#);
        assert_eq!(table.resolve("lt"), Some("<"));
        assert_eq!(table.resolve("amp"), Some("&"));
    }

    #[test]
    fn test_first_declaration_wins() {
        let table = EntityTable::from_doctype(r#" d [<!ENTITY x "one"><!ENTITY x "two">]"#);
        assert_eq!(table.resolve("x"), Some("one"));
    }

    #[test]
    fn test_doctype_without_subset() {
        let table = EntityTable::from_doctype(" story");
        assert!(table.is_empty());
    }
}
