//! Reads an xsdir from disk, transforms it and writes `xsdir_serpent`.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::XsdirError;
use super::rules::OUTPUT_FILE_NAME;
use super::transform::{transform_text, TransformStats};

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessReport {
    pub output_path: PathBuf,
    pub stats: TransformStats,
}

/// Converts `input` and writes `xsdir_serpent` into the working directory,
/// replacing any existing file of that name.
pub fn process(input: impl AsRef<Path>) -> Result<ProcessReport, XsdirError> {
    convert(input.as_ref(), PathBuf::from(OUTPUT_FILE_NAME))
}

/// Same as [`process`] but writes `xsdir_serpent` into `output_dir`.
pub fn process_into(
    input: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
) -> Result<ProcessReport, XsdirError> {
    convert(input.as_ref(), output_dir.as_ref().join(OUTPUT_FILE_NAME))
}

fn convert(input: &Path, output_path: PathBuf) -> Result<ProcessReport, XsdirError> {
    if !input.exists() {
        return Err(XsdirError::NotFound(input.to_path_buf()));
    }

    let source = fs::read_to_string(input).map_err(|source| XsdirError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let output = transform_text(&source);
    let stats = output.stats();

    fs::write(&output_path, output.into_text()).map_err(|source| XsdirError::Write {
        path: output_path.clone(),
        source,
    })?;

    Ok(ProcessReport { output_path, stats })
}
