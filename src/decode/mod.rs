pub(crate) mod cursor;
mod parser;

use std::io::Read;

use serde::de::DeserializeOwned;

use crate::types::Value;
use crate::{Error, ParseOptions, Result};

use parser::Parser;

pub fn parse_str(input: &str, options: &ParseOptions) -> Result<Value> {
    tracing::debug!(len = input.len(), "parsing json document");
    let result = Parser::new(input, options).parse_document();
    match &result {
        Ok(value) => tracing::debug!(kind = value.type_name(), "parsed json document"),
        Err(err) => tracing::debug!(error = %err, "json document rejected"),
    }
    result
}

pub fn from_str<T: DeserializeOwned>(input: &str, options: &ParseOptions) -> Result<T> {
    let value = parse_str(input, options)?;
    serde_json::from_value(serde_json::Value::from(value))
        .map_err(|err| Error::Deserialize(err.to_string()))
}

pub fn from_slice(input: &[u8], options: &ParseOptions) -> Result<Value> {
    let text = std::str::from_utf8(input).map_err(|err| Error::InvalidUtf8 {
        position: err.valid_up_to(),
    })?;
    parse_str(text, options)
}

pub fn from_reader<R: Read>(mut reader: R, options: &ParseOptions) -> Result<Value> {
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .map_err(|err| Error::Io(err.to_string()))?;
    from_slice(&buf, options)
}
