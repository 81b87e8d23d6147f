//! Terraform variable files
//!
//! Two ways of reading `key = value` files:
//!
//! - [`split_declarations`] scans line-anchored declarations and keeps the
//!   values as raw text (used for `--env-file` and `variable parse --raw`).
//! - [`decode_var_file`] decodes full HCL into [`VarValue`]s, which
//!   [`encode_variable`] turns back into single-line `key=value` tokens
//!   (used for `--var-file` and `variable parse`).

mod encoder;
mod reader;
mod splitter;
mod value;

pub use encoder::{
    encode_value, encode_var_file, encode_variable, flatten_var_file, plain_value, FlattenedVars,
};
pub use reader::read_var_file;
pub use splitter::{split_declarations, split_declarations_to_strings, RawDeclaration};
pub use value::{decode_var_file, VarFile, VarValue};

use std::path::Path;

use crate::error::Result;

/// Read and decode an HCL variable file
pub fn parse_var_file(path: impl AsRef<Path>) -> Result<VarFile> {
    let content = read_var_file(path)?;
    decode_var_file(&content)
}

/// Read a variable file and split it into raw declarations
pub fn split_var_file(path: impl AsRef<Path>) -> Result<Vec<RawDeclaration>> {
    let content = read_var_file(path)?;
    Ok(split_declarations(&content))
}
