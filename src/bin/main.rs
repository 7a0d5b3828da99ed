// src/bin/main.rs
use anyhow::Context;
use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use dict_core::config::{FREQUENCY_DIR, OUTPUT_PATH, SOURCE_PATH};
use dict_core::{pipeline, BuildConfig, RankedListFile};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG, defaults to info
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = BuildConfig::default();
    let frequency = RankedListFile::new(FREQUENCY_DIR);
    let output = Path::new(OUTPUT_PATH);

    let report = pipeline::run(&frequency, Path::new(SOURCE_PATH), output, &config)
        .context("dictionary build failed")?;

    let styled = std::io::stdout().is_tty();
    println!("{}", summary(report.kept, output, styled));
    Ok(())
}

/// The one-line run summary. Colour only goes to a terminal.
fn summary(kept: usize, output: &Path, styled: bool) -> String {
    let prefix = if styled {
        "done:".green().bold().to_string()
    } else {
        "done:".to_string()
    };
    format!("{} kept {} / wrote -> {}", prefix, kept, output.display())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_summary_has_no_escape_codes() {
        let line = summary(42, Path::new("lib/dictionary.json"), false);
        assert_eq!(line, "done: kept 42 / wrote -> lib/dictionary.json");
    }

    #[test]
    fn styled_summary_keeps_the_same_text() {
        let line = summary(42, Path::new("lib/dictionary.json"), true);
        assert!(line.contains('\x1b'));
        assert!(line.ends_with(" kept 42 / wrote -> lib/dictionary.json"));
    }
}
