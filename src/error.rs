//! Error taxonomy for the external I/O layer.
//!
//! The pipeline core itself has no runtime error taxonomy: it assumes
//! well-formed inputs (§7). Everything that can actually fail — reading a
//! file, parsing a hex token, finding the wrong number of register values —
//! belongs to the loader, and is reported here.

use std::path::PathBuf;

/// Errors produced while loading simulator inputs or writing its outputs.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// The underlying file could not be read or written.
    #[error("failed to access {path}: {source}")]
    Io {
        /// Path of the file that could not be accessed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A whitespace-separated token in an input file was not valid hex.
    #[error("malformed hex token {token:?} in {path}")]
    MalformedHex {
        /// Path of the offending input file.
        path: PathBuf,
        /// The token that failed to parse.
        token: String,
    },

    /// The register image did not contain exactly the expected number of values.
    #[error("register image {path} has {found} values, expected {expected}")]
    RegisterCount {
        /// Path of the offending input file.
        path: PathBuf,
        /// Number of hex tokens actually found.
        found: usize,
        /// Number of registers the processor expects.
        expected: usize,
    },

    /// The runtime TOML configuration file could not be parsed.
    #[error("failed to parse config {path}: {source}")]
    Config {
        /// Path of the offending config file.
        path: PathBuf,
        /// Underlying TOML parse failure.
        #[source]
        source: toml::de::Error,
    },
}
