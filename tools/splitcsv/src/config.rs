use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Defaults for flags that were not given on the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Split count used when neither `--splitnum` nor `--rename` is given.
    pub splitnum: usize,
    pub prefix: String,
    pub shuffle: bool,
    /// Fixed seed for `--shuffle`; random when unset.
    pub seed: Option<u64>,
    pub delimiter: char,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            splitnum: 2,
            prefix: String::new(),
            shuffle: false,
            seed: None,
            delimiter: ',',
        }
    }
}

impl CliConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {:?}", path))
    }
}

/// The delimiter as the single byte the CSV reader and writer expect.
pub fn delimiter_byte(delimiter: char) -> Result<u8> {
    if !delimiter.is_ascii() || delimiter == '"' || delimiter == '\n' || delimiter == '\r' {
        bail!("Unsupported delimiter {:?}: must be a single ASCII character other than a quote or newline", delimiter);
    }
    Ok(delimiter as u8)
}
