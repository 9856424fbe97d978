//! Validation of raw user input before a generator is constructed
//!
//! Every function takes the text as typed and either returns the parsed value or
//! an [`EngineError::InvalidInput`] describing what was wrong.

use super::constants::{
    MAX_FIBONACCI_INDEX, MAX_STRING_LEN, MAX_VALUE_LEN, RANDOM_ARRAY_LEN, RANDOM_ARRAY_VALUES,
};
use super::errors::EngineError;
use rand::Rng;
use tracing::warn;

fn reject(message: String) -> EngineError {
    warn!(%message, "input rejected");
    EngineError::invalid_input(message)
}

/// String for reversal: at most 11 characters, may be empty
pub fn parse_string(raw: &str) -> Result<String, EngineError> {
    let len = raw.chars().count();
    if len > MAX_STRING_LEN {
        return Err(reject(format!(
            "string has {} characters, at most {} allowed",
            len, MAX_STRING_LEN
        )));
    }
    Ok(raw.to_string())
}

/// Fibonacci target index in `0..=19`
pub fn parse_fibonacci_index(raw: &str) -> Result<usize, EngineError> {
    let index = raw
        .trim()
        .parse::<usize>()
        .map_err(|_| reject(format!("'{}' is not a non-negative integer", raw.trim())))?;
    if index > MAX_FIBONACCI_INDEX {
        return Err(reject(format!(
            "index {} is above the maximum of {}",
            index, MAX_FIBONACCI_INDEX
        )));
    }
    Ok(index)
}

/// Stack, queue or list value: 1 to 4 characters
pub fn parse_value(raw: &str) -> Result<String, EngineError> {
    let len = raw.chars().count();
    if len == 0 {
        return Err(reject("value is empty".to_string()));
    }
    if len > MAX_VALUE_LEN {
        return Err(reject(format!(
            "value has {} characters, at most {} allowed",
            len, MAX_VALUE_LEN
        )));
    }
    Ok(raw.to_string())
}

/// List position; range checking against the list happens at construction
pub fn parse_index(raw: &str) -> Result<usize, EngineError> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| reject(format!("'{}' is not a valid index", raw.trim())))
}

/// Numbers for sorting, separated by commas and/or whitespace
pub fn parse_numbers(raw: &str) -> Result<Vec<u64>, EngineError> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<u64>()
                .map_err(|_| reject(format!("'{}' is not a non-negative integer", token)))
        })
        .collect()
}

/// Random sorting input: 3 to 17 values in `[0, 100)`
pub fn random_array<R: Rng>(rng: &mut R) -> Vec<u64> {
    let len = rng.gen_range(RANDOM_ARRAY_LEN);
    (0..len).map(|_| rng.gen_range(RANDOM_ARRAY_VALUES)).collect()
}
