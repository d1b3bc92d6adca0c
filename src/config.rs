//! Machine constants and optional runtime configuration.
//!
//! The constants below are architectural (§6): they describe the machine
//! being simulated, not a particular run of it, so they are plain `const`s
//! rather than config fields. The `Config` struct instead covers the one
//! thing that legitimately varies between invocations without being a CLI
//! flag: whether per-cycle tracing is on.

use serde::Deserialize;

/// Number of general-purpose registers.
pub const NUM_REGS: usize = 16;

/// Size in bytes of each cache (instruction and data).
pub const MEM_BYTES: usize = 256;

/// Default path for the instruction image.
pub const DEFAULT_ICACHE_FILE: &str = "icache.txt";
/// Default path for the data image.
pub const DEFAULT_DCACHE_FILE: &str = "dcache.txt";
/// Default path for the register image.
pub const DEFAULT_REGISTER_FILE: &str = "regs.txt";
/// Default path for the output data-cache dump.
pub const DEFAULT_ODCACHE_FILE: &str = "dcache_out.txt";
/// Default path for the output statistics report.
pub const DEFAULT_STATS_FILE: &str = "stats_out.txt";

/// Optional TOML configuration loaded via `--config`.
///
/// Every field is optional: an absent file, or an absent key within a
/// present file, falls back to the CLI defaults above.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Enable per-cycle pipeline tracing, independent of the `--trace` flag.
    #[serde(default)]
    pub trace: bool,
}

impl Config {
    /// Parses a TOML configuration from its file contents.
    ///
    /// # Errors
    ///
    /// Returns an error if `text` is not valid TOML or does not match the
    /// shape of [`Config`].
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
