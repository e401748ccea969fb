use anyhow::{Context, Result};
use log::{info, warn};
use std::path::{Path, PathBuf};

use bbconvert::TagConverter;

/// Directory searched for inputs when none is configured
pub const DEFAULT_INPUT_DIR: &str = "xml";

/// Convert an XML document to BBCode
pub fn run(
    converter: &TagConverter,
    input: PathBuf,
    output: Option<PathBuf>,
    input_dir: PathBuf,
    show_stats: bool,
) -> Result<()> {
    let input = resolve_input(&input, &input_dir)?;

    info!("bbconvert - XML to BBCode");
    info!("=========================");
    info!("Input:  {}", input.display());
    match &output {
        Some(path) => info!("Output: {}", path.display()),
        None => info!("Output: <stdout>"),
    }
    info!("Line ending: {}", converter.line_ending());

    let conversion = converter
        .convert_file(&input)
        .with_context(|| format!("Conversion of {} failed", input.display()))?;

    match &output {
        Some(path) => std::fs::write(path, &conversion.output)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{}", conversion.output),
    }

    let stats = &conversion.stats;
    info!("Conversion complete!");
    info!("  Tags opened: {}", stats.tags_opened);
    info!("  Tags closed: {}", stats.tags_closed);
    info!("  Line breaks: {}", stats.line_breaks);
    info!("  Dropped elements: {}", stats.dropped_elements);

    if stats.tags_opened != stats.tags_closed {
        warn!(
            "{} opening vs {} closing tags; self-closing tags have no closing tag",
            stats.tags_opened, stats.tags_closed
        );
    }

    if show_stats {
        eprintln!("{}", serde_json::to_string_pretty(stats)?);
    }

    Ok(())
}

/// Find the input document
///
/// A path that exists is used as given. Otherwise the path is looked up
/// inside `input_dir`, which is created if it does not exist yet.
pub fn resolve_input(input: &Path, input_dir: &Path) -> Result<PathBuf> {
    if input.is_file() {
        return Ok(input.to_path_buf());
    }

    if !input_dir.is_dir() {
        warn!(
            "Directory {} does not exist. Creating it now.",
            input_dir.display()
        );
        std::fs::create_dir_all(input_dir)
            .with_context(|| format!("Failed to create {}", input_dir.display()))?;
    }

    let candidate = input_dir.join(input);
    if candidate.is_file() {
        info!("Using {}", candidate.display());
        return Ok(candidate);
    }

    anyhow::bail!(
        "Input file not found: {} (also looked in {})",
        input.display(),
        input_dir.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_existing_path() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("doc.xml");
        std::fs::write(&file, "<b>x</b>").unwrap();

        let resolved = resolve_input(&file, &dir.path().join("unused")).unwrap();
        assert_eq!(resolved, file);
        assert!(!dir.path().join("unused").exists());
    }

    #[test]
    fn test_resolve_in_input_dir() {
        let dir = tempdir().unwrap();
        let xml_dir = dir.path().join("xml");
        std::fs::create_dir(&xml_dir).unwrap();
        std::fs::write(xml_dir.join("story.xml"), "<b>x</b>").unwrap();

        let resolved = resolve_input(Path::new("story.xml"), &xml_dir).unwrap();
        assert_eq!(resolved, xml_dir.join("story.xml"));
    }

    #[test]
    fn test_missing_input_dir_is_created() {
        let dir = tempdir().unwrap();
        let xml_dir = dir.path().join("xml");

        let result = resolve_input(Path::new("missing.xml"), &xml_dir);
        assert!(result.is_err());
        assert!(xml_dir.is_dir());
    }
}
