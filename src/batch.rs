//! Parsing many independent documents at once.
//!
//! Each document gets its own parser, so documents never share state. With
//! the `parallel` feature the work is spread over rayon's thread pool.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::types::Value;
use crate::{decode, ParseOptions, Result};

/// Parses every input, returning results in input order.
pub fn parse_all<S>(inputs: &[S]) -> Vec<Result<Value>>
where
    S: AsRef<str> + Sync,
{
    parse_all_with_options(inputs, &ParseOptions::default())
}

#[cfg(feature = "parallel")]
pub fn parse_all_with_options<S>(inputs: &[S], options: &ParseOptions) -> Vec<Result<Value>>
where
    S: AsRef<str> + Sync,
{
    inputs
        .par_iter()
        .map(|input| decode::parse_str(input.as_ref(), options))
        .collect()
}

#[cfg(not(feature = "parallel"))]
pub fn parse_all_with_options<S>(inputs: &[S], options: &ParseOptions) -> Vec<Result<Value>>
where
    S: AsRef<str> + Sync,
{
    inputs
        .iter()
        .map(|input| decode::parse_str(input.as_ref(), options))
        .collect()
}
