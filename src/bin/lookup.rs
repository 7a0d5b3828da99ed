// Query tool for a built dictionary artifact.
// Run with: cargo run --bin dict_lookup -- <word>...
// src/bin/lookup.rs
use anyhow::{bail, Context};
use crossterm::style::Stylize;
use dict_core::config::OUTPUT_PATH;
use dict_core::persistence::load_dictionary;
use dict_core::DictionaryEntry;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let words: Vec<String> = std::env::args().skip(1).collect();
    if words.is_empty() {
        bail!("usage: dict_lookup <word>...");
    }

    let dict = load_dictionary(Path::new(OUTPUT_PATH))
        .with_context(|| format!("cannot open {}; run build_dictionary first", OUTPUT_PATH))?;
    log::info!("loaded {} entries", dict.len());

    for word in &words {
        match dict.lookup(word) {
            Some(entry) => print_entry(word, entry),
            None => println!("{} not found", word.as_str().red()),
        }
    }
    Ok(())
}

fn print_entry(word: &str, entry: &DictionaryEntry) {
    if entry.phonetic.is_empty() {
        println!("{}", word.bold());
    } else {
        println!("{} [{}]", word.bold(), entry.phonetic);
    }
    if !entry.translation.is_empty() {
        println!("    {}", entry.translation);
    }
    if !entry.definition.is_empty() {
        println!("    {}", entry.definition.as_str().dark_grey());
    }
    for example in &entry.examples {
        println!("      example: {example}");
    }
}
