//! Variable file reading

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{Result, TfeError};

/// Read a variable file in full
///
/// Single attempt; any I/O failure is returned with the offending path.
pub fn read_var_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    debug!("Reading variable file: {}", path.display());

    fs::read_to_string(path).map_err(|source| TfeError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}
