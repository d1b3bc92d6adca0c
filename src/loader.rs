//! Parses the three hex text input files and writes the two output files.
//!
//! None of this belongs to the core (§1, §7): the core assumes well-formed
//! inputs, and these functions are where real-world I/O errors are reported
//! as a typed [`SimError`].

use std::path::{Path, PathBuf};

use crate::cache::Cache;
use crate::config::NUM_REGS;
use crate::error::SimError;
use crate::stats::Stats;

/// Parses whitespace-separated hex byte tokens from `text`.
fn parse_hex_bytes(path: &Path, text: &str) -> Result<Vec<u8>, SimError> {
    text.split_whitespace()
        .map(|token| {
            u8::from_str_radix(token, 16).map_err(|_| SimError::MalformedHex {
                path: path.to_path_buf(),
                token: token.to_string(),
            })
        })
        .collect()
}

/// Loads an instruction image: byte pairs are packed big-endian into the
/// instruction cache's 16-bit words at increasing addresses.
///
/// # Errors
///
/// Returns [`SimError::Io`] if `path` cannot be read, or
/// [`SimError::MalformedHex`] if any token is not a valid hex byte.
pub fn load_instructions(path: &Path) -> Result<Cache, SimError> {
    let text = std::fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let bytes = parse_hex_bytes(path, &text)?;
    let mut cache = Cache::new();
    cache.load(&bytes);
    Ok(cache)
}

/// Loads a data image: each hex token is one byte, placed at increasing
/// addresses starting at 0.
///
/// # Errors
///
/// Returns [`SimError::Io`] if `path` cannot be read, or
/// [`SimError::MalformedHex`] if any token is not a valid hex byte.
pub fn load_data(path: &Path) -> Result<Cache, SimError> {
    let text = std::fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let bytes = parse_hex_bytes(path, &text)?;
    let mut cache = Cache::new();
    cache.load(&bytes);
    Ok(cache)
}

/// Loads the register image: exactly [`NUM_REGS`] hex `u16` values.
///
/// # Errors
///
/// Returns [`SimError::Io`] if `path` cannot be read,
/// [`SimError::MalformedHex`] if any token is not valid hex, or
/// [`SimError::RegisterCount`] if the file does not contain exactly
/// [`NUM_REGS`] values.
pub fn load_register_image(path: &Path) -> Result<[u16; NUM_REGS], SimError> {
    let text = std::fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let values = text
        .split_whitespace()
        .map(|token| {
            u16::from_str_radix(token, 16).map_err(|_| SimError::MalformedHex {
                path: path.to_path_buf(),
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<u16>, SimError>>()?;

    if values.len() != NUM_REGS {
        return Err(SimError::RegisterCount {
            path: path.to_path_buf(),
            found: values.len(),
            expected: NUM_REGS,
        });
    }

    let mut regs = [0u16; NUM_REGS];
    regs.copy_from_slice(&values);
    Ok(regs)
}

/// Writes the final data-cache dump: one byte per line, two hex digits
/// each, high nibble then low nibble.
///
/// # Errors
///
/// Returns [`SimError::Io`] if `path` cannot be written.
pub fn write_data_dump(path: &Path, dc: &Cache) -> Result<(), SimError> {
    let mut out = String::new();
    for byte in dc.dump() {
        out.push_str(&format!("{byte:02x}\n"));
    }
    std::fs::write(path, out).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes the ten-line statistics report.
///
/// # Errors
///
/// Returns [`SimError::Io`] if `path` cannot be written.
pub fn write_stats_report(path: &Path, stats: &Stats) -> Result<(), SimError> {
    std::fs::write(path, stats.report()).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses a TOML configuration file, if present.
///
/// # Errors
///
/// Returns [`SimError::Io`] if `path` cannot be read, or
/// [`SimError::Config`] if its contents are not valid TOML.
pub fn load_config(path: &Path) -> Result<crate::config::Config, SimError> {
    let text = std::fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    crate::config::Config::from_toml(&text).map_err(|source| SimError::Config {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolves a default path as an owned [`PathBuf`], used by the CLI layer
/// for its `--instructions`/`--data`/etc. flag defaults.
#[must_use]
pub fn default_path(default: &str) -> PathBuf {
    PathBuf::from(default)
}
