pub mod batch;
mod constants;
pub mod decode;
pub mod error;
mod num;
pub mod options;
mod text;
pub mod types;

use std::io::Read;

use serde::de::DeserializeOwned;

pub use crate::batch::{parse_all, parse_all_with_options};
pub use crate::error::{Error, Location};
pub use crate::options::{ParseOptions, TrailingContent, DEFAULT_MAX_DEPTH};
pub use crate::types::{Map, Value};

pub type Result<T> = std::result::Result<T, Error>;

/// Parses a complete JSON document.
///
/// ```
/// let value = descent_json::parse(r#"[true, false, null, "\u1234abc"]"#).unwrap();
/// assert_eq!(value[3], "\u{1234}abc");
/// ```
pub fn parse(input: &str) -> Result<Value> {
    parse_with_options(input, &ParseOptions::default())
}

pub fn parse_with_options(input: &str, options: &ParseOptions) -> Result<Value> {
    decode::parse_str(input, options)
}

/// Parses a document and deserializes the resulting tree into `T`.
pub fn from_str<T: DeserializeOwned>(input: &str) -> Result<T> {
    from_str_with_options(input, &ParseOptions::default())
}

pub fn from_str_with_options<T: DeserializeOwned>(
    input: &str,
    options: &ParseOptions,
) -> Result<T> {
    decode::from_str(input, options)
}

pub fn from_slice(input: &[u8]) -> Result<Value> {
    from_slice_with_options(input, &ParseOptions::default())
}

pub fn from_slice_with_options(input: &[u8], options: &ParseOptions) -> Result<Value> {
    decode::from_slice(input, options)
}

pub fn from_reader<R: Read>(reader: R) -> Result<Value> {
    from_reader_with_options(reader, &ParseOptions::default())
}

pub fn from_reader_with_options<R: Read>(reader: R, options: &ParseOptions) -> Result<Value> {
    decode::from_reader(reader, options)
}
