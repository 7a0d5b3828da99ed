// File: src/frequency.rs
use crate::core::normalize::normalize_word;
use crate::error::BuildError;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// The set of words eligible for inclusion. Members are always normalized
/// (trimmed, lowercased) and never empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    words: HashSet<String>,
}

impl AllowList {
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for AllowList {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let words = iter
            .into_iter()
            .map(|w| normalize_word(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }
}

/// Anything that can produce the top-`n` most frequent words of a language.
pub trait FrequencySource {
    fn top_words(&self, language: &str, n: usize) -> Result<AllowList, BuildError>;
}

/// Takes the first `n` distinct normalized words of a ranked sequence.
fn take_ranked<'a, I>(ranked: I, n: usize) -> AllowList
where
    I: IntoIterator<Item = &'a str>,
{
    let mut words = HashSet::with_capacity(n);
    for word in ranked {
        if words.len() >= n {
            break;
        }
        let word = normalize_word(word);
        if !word.is_empty() {
            words.insert(word);
        }
    }
    AllowList { words }
}

/// Ranked frequency lists stored as `<dir>/<language>.txt`.
///
/// One word per line, most frequent first. Anything after the first
/// whitespace on a line (usually a count) is ignored, as are blank lines
/// and `#` comments.
#[derive(Debug, Clone)]
pub struct RankedListFile {
    dir: PathBuf,
}

impl RankedListFile {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, language: &str) -> PathBuf {
        self.dir.join(format!("{}.txt", language))
    }
}

impl FrequencySource for RankedListFile {
    fn top_words(&self, language: &str, n: usize) -> Result<AllowList, BuildError> {
        let path = self.path_for(language);
        let contents = read_list(&path)?;
        let ranked = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_whitespace().next());
        let list = take_ranked(ranked, n);
        log::info!("loaded {} frequent '{}' words from {}", list.len(), language, path.display());
        Ok(list)
    }
}

fn read_list(path: &Path) -> Result<String, BuildError> {
    fs::read_to_string(path).map_err(|source| BuildError::AllowList {
        path: path.to_path_buf(),
        source,
    })
}

/// An in-memory ranked list, most frequent first. The language is ignored.
#[derive(Debug, Clone, Default)]
pub struct StaticWordList(pub Vec<String>);

impl FrequencySource for StaticWordList {
    fn top_words(&self, _language: &str, n: usize) -> Result<AllowList, BuildError> {
        Ok(take_ranked(self.0.iter().map(String::as_str), n))
    }
}
