// File: src/persistence.rs
use crate::config::BuildConfig;
use crate::core::types::Dictionary;
use crate::error::BuildError;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Serializes the dictionary as JSON, keys ascending.
/// Pretty output is indented by `config.indent` spaces; otherwise minified.
pub fn to_writer<W: Write>(dict: &Dictionary, writer: W, config: &BuildConfig) -> Result<(), BuildError> {
    if config.pretty {
        let indent = " ".repeat(config.indent);
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut ser = Serializer::with_formatter(writer, formatter);
        dict.serialize(&mut ser).map_err(BuildError::Serialize)
    } else {
        serde_json::to_writer(writer, dict).map_err(BuildError::Serialize)
    }
}

/// Writes the artifact atomically: the data goes to a temp file next to
/// `path` and is renamed over it only once fully flushed. On any failure the
/// previous artifact, if one exists, is left untouched.
pub fn write_dictionary(dict: &Dictionary, path: &Path, config: &BuildConfig) -> Result<(), BuildError> {
    let output_err = |source: io::Error| BuildError::Output {
        path: path.to_path_buf(),
        source,
    };

    let parent_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir).map_err(output_err)?;

    let temp_file = NamedTempFile::new_in(parent_dir).map_err(output_err)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        to_writer(dict, &mut writer, config).map_err(|e| io_as_output(e, path))?;
        writer.flush().map_err(output_err)?;
    }

    temp_file.persist(path).map_err(|e| output_err(e.error))?;
    log::info!("wrote {} entries to {}", dict.len(), path.display());
    Ok(())
}

/// Serializer failures caused by the underlying writer are output failures,
/// not encoding ones.
fn io_as_output(err: BuildError, path: &Path) -> BuildError {
    match err {
        BuildError::Serialize(e) if e.is_io() => BuildError::Output {
            path: path.to_path_buf(),
            source: e.into(),
        },
        other => other,
    }
}

/// Reads a previously written artifact back into memory.
pub fn load_dictionary(path: &Path) -> Result<Dictionary, BuildError> {
    let load_err = |source: Box<dyn std::error::Error + Send + Sync>| BuildError::Load {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(|e| load_err(Box::new(e)))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| load_err(Box::new(e)))
}
