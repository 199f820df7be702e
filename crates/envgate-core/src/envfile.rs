//! Turning `.env` content into entries.
//!
//! Tokenising is delegated to `dotenvy`. Lines it cannot parse (no `=`, empty
//! key, unbalanced quotes) are dropped here and never reach the validator.
//! When a key repeats, the last assignment wins.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{EnvgateError, EnvgateResult};

/// Key-value pairs of one env file, iterated in key order.
pub type Entries = BTreeMap<String, String>;

/// Parse env-file text into entries, skipping malformed lines.
pub fn parse_entries(content: &str) -> EnvgateResult<Entries> {
    let mut entries = Entries::new();
    for item in dotenvy::from_read_iter(content.as_bytes()) {
        match item {
            Ok((key, value)) => {
                entries.insert(key, value);
            }
            Err(dotenvy::Error::LineParse(line, index)) => {
                tracing::debug!(line = %line, index, "skipping malformed env line");
            }
            Err(e) => {
                return Err(EnvgateError::Parse {
                    message: e.to_string(),
                })
            }
        }
    }
    Ok(entries)
}

/// Read `path` as UTF-8 text.
pub fn read_env_file(path: &Path) -> EnvgateResult<String> {
    std::fs::read_to_string(path).map_err(|e| EnvgateError::read(path, e))
}

/// Read and parse the env file at `path`.
pub fn load_entries(path: &Path) -> EnvgateResult<Entries> {
    let content = read_env_file(path)?;
    parse_entries(&content)
}

/// Build entries from borrowed pairs, for callers that already hold a mapping.
pub fn entries_from_pairs<'a, I>(pairs: I) -> Entries
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
