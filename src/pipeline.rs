// File: src/pipeline.rs
use crate::config::BuildConfig;
use crate::core::merger::{build_dictionary, BuildReport};
use crate::error::BuildError;
use crate::frequency::FrequencySource;
use crate::persistence::write_dictionary;
use crate::source::SourceTable;
use std::path::Path;

/// One full build: allow-list, source table, merge, artifact.
///
/// Stages run strictly in that order and the first failure aborts the run.
/// The artifact is only touched after every row has been read and merged.
pub fn run<F: FrequencySource + ?Sized>(
    frequency: &F,
    source_path: &Path,
    output_path: &Path,
    config: &BuildConfig,
) -> Result<BuildReport, BuildError> {
    let allow_list = frequency.top_words(&config.language, config.top_n)?;
    if allow_list.is_empty() {
        log::warn!("allow-list for '{}' is empty; the dictionary will be empty", config.language);
    }

    let rows = SourceTable::open(source_path)?.read_all()?;
    log::info!("read {} source rows", rows.len());

    let report = build_dictionary(rows, &allow_list, config);
    log::info!(
        "kept {} of {} rows, {} distinct words",
        report.kept,
        report.rows_read,
        report.dictionary.len()
    );

    write_dictionary(&report.dictionary, output_path, config)?;
    Ok(report)
}
