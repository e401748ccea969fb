use anyhow::{Context, Result};
use std::path::PathBuf;

use bbconvert::{ParseEvent, XmlEventSource};

/// Print the parse events of an XML document
pub fn run(input: PathBuf, json: bool) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }

    let source = XmlEventSource::open(&input)
        .with_context(|| format!("Failed to open {}", input.display()))?;

    for event in source.events() {
        let event = event.with_context(|| format!("Failed to read {}", input.display()))?;
        if json {
            println!("{}", serde_json::to_string(&event)?);
        } else if let Some(line) = describe(&event) {
            println!("{}", line);
        }
    }

    Ok(())
}

/// One-line description of an event, `None` for whitespace
fn describe(event: &ParseEvent) -> Option<String> {
    let line = match event {
        ParseEvent::ElementStart {
            name, self_closing, ..
        } => {
            if *self_closing {
                format!("Empty Element {}", highlight(name))
            } else {
                format!("Start Element {}", highlight(name))
            }
        }
        ParseEvent::ElementEnd { name } => format!("End Element {}", highlight(name)),
        ParseEvent::Text { value } => format!("Text Node: {}", value),
        ParseEvent::Whitespace => return None,
        ParseEvent::Other { kind, value } => format!("Other node {} with value {}", kind, value),
    };
    Some(line)
}

#[cfg(feature = "colorized_output")]
fn highlight(name: &str) -> String {
    console::style(name).cyan().bold().to_string()
}

#[cfg(not(feature = "colorized_output"))]
fn highlight(name: &str) -> String {
    name.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bbconvert::OtherKind;

    #[test]
    fn test_describe_skips_whitespace() {
        assert_eq!(describe(&ParseEvent::Whitespace), None);
    }

    #[test]
    fn test_describe_text_and_other() {
        assert_eq!(
            describe(&ParseEvent::text("hi")).unwrap(),
            "Text Node: hi"
        );
        assert_eq!(
            describe(&ParseEvent::Other {
                kind: OtherKind::Comment,
                value: " c ".to_string(),
            })
            .unwrap(),
            "Other node Comment with value  c "
        );
    }

    #[test]
    fn test_describe_elements() {
        let start = describe(&ParseEvent::start("b")).unwrap();
        assert!(start.starts_with("Start Element "));
        assert!(start.contains('b'));

        let empty = describe(&ParseEvent::empty("hr")).unwrap();
        assert!(empty.starts_with("Empty Element "));
        assert!(empty.contains("hr"));
    }
}
