// File: src/source.rs
use crate::core::types::SourceRow;
use crate::error::BuildError;
use csv::{ByteRecord, ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Positions of the recognized columns in the header row.
#[derive(Debug, Clone, Copy, Default)]
struct Columns {
    word: Option<usize>,
    translation: Option<usize>,
    definition: Option<usize>,
    example: Option<usize>,
    phonetic: Option<usize>,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Self {
        let find = |name: &str| headers.iter().collect::<Vec<_>>().iter().rposition(|h| *h == name);
        Self {
            word: find("word"),
            translation: find("translation"),
            definition: find("definition"),
            example: find("example"),
            phonetic: find("phonetic"),
        }
    }

    fn row(&self, record: &StringRecord) -> SourceRow {
        let cell = |index: Option<usize>| {
            index
                .and_then(|i| record.get(i))
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        SourceRow {
            word: cell(self.word),
            translation: cell(self.translation),
            definition: cell(self.definition),
            example: cell(self.example),
            phonetic: cell(self.phonetic),
        }
    }
}

/// A delimited table with a header row, read column-by-name into `SourceRow`s.
/// Missing columns and short rows yield `None` fields; extra columns are ignored.
pub struct SourceTable<R: Read> {
    reader: csv::Reader<R>,
    headers: StringRecord,
    columns: Columns,
}

impl SourceTable<File> {
    pub fn open(path: &Path) -> Result<Self, BuildError> {
        let file = File::open(path).map_err(|e| BuildError::Source(e.into()))?;
        log::info!("reading source table {}", path.display());
        Self::from_reader(file)
    }
}

/// Decodes a raw record, falling back to lossy decoding on invalid UTF-8.
fn decode(record: ByteRecord) -> StringRecord {
    StringRecord::from_byte_record(record).unwrap_or_else(|e| {
        let record = e.into_byte_record();
        log::warn!(
            "line {}: invalid UTF-8, undecodable bytes replaced",
            record.position().map_or(0, |p| p.line())
        );
        StringRecord::from_byte_record_lossy(record)
    })
}

impl<R: Read> SourceTable<R> {
    pub fn from_reader(rdr: R) -> Result<Self, BuildError> {
        let mut reader = ReaderBuilder::new().flexible(true).from_reader(rdr);
        let headers = reader.byte_headers()?.clone();
        let headers: StringRecord = StringRecord::from_byte_record_lossy(headers)
            .iter()
            .enumerate()
            .map(|(i, h)| if i == 0 { h.trim_start_matches('\u{feff}') } else { h })
            .collect();
        let columns = Columns::locate(&headers);
        if columns.word.is_none() {
            log::warn!("source table has no 'word' column; no rows will be kept");
        }
        Ok(Self { reader, headers, columns })
    }

    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    /// Yields rows in file order. Cells are decoded lossily; only framing
    /// and I/O failures are returned as errors.
    pub fn rows(&mut self) -> impl Iterator<Item = Result<SourceRow, BuildError>> + '_ {
        let columns = self.columns;
        self.reader
            .byte_records()
            .map(move |record| -> Result<SourceRow, BuildError> {
                Ok(columns.row(&decode(record?)))
            })
    }

    /// Reads every row up front. Any read failure aborts the whole read.
    pub fn read_all(&mut self) -> Result<Vec<SourceRow>, BuildError> {
        self.rows().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(data: &str) -> Vec<SourceRow> {
        SourceTable::from_reader(data.as_bytes()).unwrap().read_all().unwrap()
    }

    #[test]
    fn reads_columns_by_name() {
        let rows = table("phonetic,word,extra,translation\nkæt,cat,x,猫\n");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].word.as_deref(), Some("cat"));
        assert_eq!(rows[0].translation.as_deref(), Some("猫"));
        assert_eq!(rows[0].phonetic.as_deref(), Some("kæt"));
        assert_eq!(rows[0].definition, None);
        assert_eq!(rows[0].example, None);
    }

    #[test]
    fn multiline_quoted_examples_survive() {
        let rows = table("word,example\ngo,\"Go home.\nLet's go.\"\n");
        assert_eq!(rows[0].example.as_deref(), Some("Go home.\nLet's go."));
    }

    #[test]
    fn short_rows_and_bom_are_tolerated() {
        let data = "\u{feff}word,translation,definition\nrun\ndog,狗\n";
        let source = SourceTable::from_reader(data.as_bytes()).unwrap();
        assert_eq!(source.headers().get(0), Some("word"));

        let rows = table(data);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].word.as_deref(), Some("run"));
        assert_eq!(rows[1].translation.as_deref(), Some("狗"));
        assert_eq!(rows[1].definition, None);
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily() {
        let mut data = b"word,translation\ncat,".to_vec();
        data.extend_from_slice(&[0xff, b'\n']);
        let rows = SourceTable::from_reader(&data[..]).unwrap().read_all().unwrap();
        assert_eq!(rows[0].word.as_deref(), Some("cat"));
        assert_eq!(rows[0].translation.as_deref(), Some("\u{fffd}"));
    }

    #[test]
    fn valid_rows_after_an_undecodable_one_are_untouched() {
        let mut data = b"word,translation\ncat,".to_vec();
        data.extend_from_slice(&[0xe7, 0x8c, b'\n']);
        data.extend_from_slice("dog,狗\n".as_bytes());
        let rows = SourceTable::from_reader(&data[..]).unwrap().read_all().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].translation.as_deref(), Some("\u{fffd}"));
        assert_eq!(rows[1].translation.as_deref(), Some("狗"));
    }

    #[test]
    fn repeated_header_uses_the_last_column() {
        let rows = table("word,translation,translation\ncat,first,last\n");
        assert_eq!(rows[0].translation.as_deref(), Some("last"));
    }

    #[test]
    fn missing_file_is_a_source_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = SourceTable::open(&dir.path().join("absent.csv"));
        assert!(matches!(result, Err(BuildError::Source(_))));
    }
}
