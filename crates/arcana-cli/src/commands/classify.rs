use colored::Colorize;

use arcana_core::intent::{self, MIN_CLASSIFY_CHARS};

pub fn run(question: &str) -> Result<(), String> {
    let intent = intent::detect(question).ok_or_else(|| {
        format!("question is too short to classify (at least {MIN_CLASSIFY_CHARS} characters)")
    })?;

    println!("  {} {}", intent.glyph(), intent.label().bold());
    println!("  {}", intent.hint());
    println!("  Method: {}", intent.reading_method());
    println!("  Spread: {}", intent.spread_name());

    Ok(())
}
