// File: src/core/merger.rs
use crate::config::BuildConfig;
use crate::core::normalize::{clean_list, first_non_empty, merge_examples, normalize_word};
use crate::core::types::{Dictionary, SourceRow};
use crate::frequency::AllowList;

/// Result of one merge pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub dictionary: Dictionary,
    /// Rows that passed the allow-list, counted once per row, not per word.
    pub kept: usize,
    /// Every row seen, kept or not.
    pub rows_read: usize,
}

/// Folds source rows into a dictionary.
///
/// Rows are processed in order. A row is dropped when its normalized word is
/// empty or missing from `allow_list`. Scalar fields are first-write-wins;
/// examples are a deduplicated union capped at `config.max_examples`.
/// Missing fields degrade to empty strings; this never fails.
pub fn build_dictionary<I>(rows: I, allow_list: &AllowList, config: &BuildConfig) -> BuildReport
where
    I: IntoIterator<Item = SourceRow>,
{
    let mut report = BuildReport::default();

    for row in rows {
        report.rows_read += 1;

        let term = normalize_word(row.word.as_deref().unwrap_or(""));
        if term.is_empty() {
            log::debug!("row {}: blank word, skipped", report.rows_read);
            continue;
        }
        if !allow_list.contains(&term) {
            log::debug!("row {}: '{}' not in allow-list, skipped", report.rows_read, term);
            continue;
        }

        let translation = first_non_empty([row.translation.as_deref()]);
        let definition = first_non_empty([row.definition.as_deref()]);
        let examples = clean_list(row.example.as_deref());
        let phonetic = first_non_empty([row.phonetic.as_deref()]);

        let entry = report.dictionary.entry_mut(&term);
        fill_once(&mut entry.translation, translation);
        fill_once(&mut entry.definition, definition);
        if !examples.is_empty() {
            merge_examples(&mut entry.examples, examples, config.max_examples);
        }
        fill_once(&mut entry.phonetic, phonetic);

        report.kept += 1;
    }

    log::debug!(
        "merge pass: read {} rows, kept {}, {} distinct words",
        report.rows_read,
        report.kept,
        report.dictionary.len()
    );
    report
}

fn fill_once(field: &mut String, candidate: String) {
    if field.is_empty() && !candidate.is_empty() {
        *field = candidate;
    }
}
