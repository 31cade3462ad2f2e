//! One-time engine initialization.
//!
//! The engine configuration is process-wide and immutable once set. [`init`] must
//! happen-before every other operation of this crate and is expected to run once during
//! single-threaded start-up. Calling it a second time fails with
//! [`Error::AlreadyInitialized`].
//!
//! If [`init`] is never called, the first operation that reads the configuration
//! installs [`Config::default`]. A later [`init`] then fails, because elements
//! produced under the default configuration already exist.
//!
//! # Example
//!
//! ```rust
//! use bls12381_algebra::engine::{self, Config};
//!
//! let config = Config {
//!     g1_dst: b"MY-APP-V01-CS01-with-BLS12381G1_XMD:SHA-256_SSWU_RO_".to_vec(),
//!     ..Config::default()
//! };
//! engine::init(config).expect("first initialization");
//! assert!(engine::init(Config::default()).is_err());
//! ```

use crate::Error;
use std::sync::OnceLock;
use tracing::info;

/// Domain separation tag for hashing a message to G1.
pub const DST_G1: &[u8] = b"BLS_SIG_BLS12381G1_XMD:SHA-256_SSWU_RO_NUL_";

/// Domain separation tag for hashing a message to G2.
pub const DST_G2: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_NUL_";

/// Maximum length of a domain separation tag (RFC 9380, Section 5.3.3).
const MAX_DST_LENGTH: usize = 255;

static ENGINE: OnceLock<Config> = OnceLock::new();

/// Configuration of the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Domain separation tag used when hashing to G1.
    pub g1_dst: Vec<u8>,

    /// Domain separation tag used when hashing to G2.
    pub g2_dst: Vec<u8>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            g1_dst: DST_G1.to_vec(),
            g2_dst: DST_G2.to_vec(),
        }
    }
}

impl Config {
    /// Checks that both domain separation tags are non-empty and at most 255 bytes.
    pub fn validate(&self) -> Result<(), Error> {
        for dst in [&self.g1_dst, &self.g2_dst] {
            if dst.is_empty() {
                return Err(Error::InvalidConfig("domain separation tag is empty"));
            }
            if dst.len() > MAX_DST_LENGTH {
                return Err(Error::InvalidConfig(
                    "domain separation tag exceeds 255 bytes",
                ));
            }
        }
        Ok(())
    }
}

/// Installs the engine configuration.
pub fn init(cfg: Config) -> Result<(), Error> {
    cfg.validate()?;
    let (g1_dst, g2_dst) = (cfg.g1_dst.len(), cfg.g2_dst.len());
    ENGINE.set(cfg).map_err(|_| Error::AlreadyInitialized)?;
    info!(g1_dst, g2_dst, "initialized engine");
    Ok(())
}

/// Returns the active configuration, installing the default if [`init`] was never called.
pub fn config() -> &'static Config {
    ENGINE.get_or_init(Config::default)
}
