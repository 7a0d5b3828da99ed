// File: src/config.rs

/// Size of the frequency allow-list.
pub const TOP_N: usize = 20000;
/// Maximum number of example sentences kept per word.
pub const MAX_EXAMPLES: usize = 3;
pub const PRETTY: bool = true;
pub const INDENT: usize = 2;
/// Language whose frequency list gates the dictionary.
pub const LANGUAGE: &str = "en";

pub const SOURCE_PATH: &str = "lib/ecdict.csv";
pub const FREQUENCY_DIR: &str = "lib/frequency";
pub const OUTPUT_PATH: &str = "lib/dictionary.json";

/// Tunables for a single build. `Default` mirrors the constants above.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub top_n: usize,
    pub max_examples: usize,
    pub pretty: bool,
    pub indent: usize,
    pub language: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            top_n: TOP_N,
            max_examples: MAX_EXAMPLES,
            pretty: PRETTY,
            indent: INDENT,
            language: LANGUAGE.to_string(),
        }
    }
}
