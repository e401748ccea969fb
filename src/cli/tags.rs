use anyhow::Result;

use bbconvert::TagVocabulary;

/// List the active vocabulary, one tag per line
pub fn run(vocabulary: &TagVocabulary) -> Result<()> {
    for tag in vocabulary.iter() {
        println!("{}", tag);
    }
    Ok(())
}
